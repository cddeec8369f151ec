//! `DROP DOMAIN` statement
//!
//! The statement is an immutable value. `cascade()` and `restrict()` consume it
//! and return a new value, so a `DropDomain` that has been handed to a
//! renderer never changes underneath it.

use std::fmt;

use crate::config::RenderConfig;
use crate::dialect::Capability;
use crate::error::Result;
use crate::name::QualifiedName;
use crate::sql::context::RenderContext;
use crate::sql::emulation::{DdlStatementType, IfExistsStrategy};
use crate::sql::keywords::Keyword;
use crate::sql::render::{Render, render_to_string};

/// Trailing `CASCADE` / `RESTRICT` behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CascadeMode {
    /// Neither keyword is emitted
    #[default]
    Unset,
    Cascade,
    Restrict,
}

/// `DROP DOMAIN [IF EXISTS] <name> [CASCADE | RESTRICT]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropDomain {
    target: QualifiedName,
    if_exists: bool,
    cascade: CascadeMode,
}

/// `DROP DOMAIN <name>`
///
/// # Example
/// ```
/// use runtara_sql_dialect::{drop_domain, RenderConfig};
///
/// let sql = drop_domain("age_domain")?.cascade().to_sql(&RenderConfig::default())?;
/// assert_eq!(sql, "DROP DOMAIN age_domain CASCADE");
/// # Ok::<(), runtara_sql_dialect::RenderError>(())
/// ```
pub fn drop_domain(name: &str) -> Result<DropDomain> {
    Ok(DropDomain::new(QualifiedName::parse(name)?, false))
}

/// `DROP DOMAIN IF EXISTS <name>`
pub fn drop_domain_if_exists(name: &str) -> Result<DropDomain> {
    Ok(DropDomain::new(QualifiedName::parse(name)?, true))
}

impl DropDomain {
    pub fn new(target: QualifiedName, if_exists: bool) -> Self {
        Self {
            target,
            if_exists,
            cascade: CascadeMode::Unset,
        }
    }

    /// Append `CASCADE`, replacing any earlier `restrict()`
    pub fn cascade(self) -> Self {
        Self {
            cascade: CascadeMode::Cascade,
            ..self
        }
    }

    /// Append `RESTRICT`, replacing any earlier `cascade()`
    pub fn restrict(self) -> Self {
        Self {
            cascade: CascadeMode::Restrict,
            ..self
        }
    }

    pub fn target(&self) -> &QualifiedName {
        &self.target
    }

    pub fn if_exists(&self) -> bool {
        self.if_exists
    }

    pub fn cascade_mode(&self) -> CascadeMode {
        self.cascade
    }

    /// Render this statement for the configured dialect
    pub fn to_sql(&self, config: &RenderConfig) -> Result<String> {
        render_to_string(self, config)
    }

    fn render_statement<W: fmt::Write>(
        &self,
        ctx: &mut RenderContext<'_, W>,
        if_exists: IfExistsStrategy,
    ) -> Result<()> {
        let [drop, domain] = ctx.dialect().drop_domain_keywords();
        ctx.keyword(drop)?.sql_char(' ')?.keyword(domain)?;

        if if_exists.is_native() {
            ctx.sql_char(' ')?.keyword(Keyword::IfExists)?;
        }

        ctx.sql_char(' ')?.visit(&self.target)?;

        match self.cascade {
            CascadeMode::Cascade => {
                ctx.sql_char(' ')?.keyword(Keyword::Cascade)?;
            }
            CascadeMode::Restrict => {
                ctx.sql_char(' ')?.keyword(Keyword::Restrict)?;
            }
            CascadeMode::Unset => {}
        }

        Ok(())
    }
}

impl Render for DropDomain {
    fn render<W: fmt::Write>(&self, ctx: &mut RenderContext<'_, W>) -> Result<()> {
        let if_exists =
            IfExistsStrategy::resolve(self.if_exists, ctx.dialect(), Capability::DropDomainIfExists);

        if if_exists.wraps() {
            ctx.begin_try_catch(DdlStatementType::DropDomain)?;
        }

        self.render_statement(ctx, if_exists)?;

        if if_exists.wraps() {
            ctx.end_try_catch(DdlStatementType::DropDomain)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RenderKeywordCase, RenderQuotedNames};
    use crate::dialect::SqlDialect;
    use crate::error::RenderError;

    const FIREBIRD_IF_EXISTS: &str = "EXECUTE BLOCK AS BEGIN EXECUTE STATEMENT 'DROP DOMAIN age_domain'; WHEN SQLCODE -607 DO BEGIN END END";

    fn render(statement: &DropDomain, dialect: SqlDialect) -> String {
        statement.to_sql(&RenderConfig::for_dialect(dialect)).unwrap()
    }

    fn age_domain(if_exists: bool) -> DropDomain {
        DropDomain::new(QualifiedName::new("age_domain").unwrap(), if_exists)
    }

    // ==================== Model Tests ====================

    #[test]
    fn test_new_defaults_to_unset() {
        let stmt = age_domain(true);
        assert!(stmt.if_exists());
        assert_eq!(stmt.cascade_mode(), CascadeMode::Unset);
        assert_eq!(stmt.target().name(), "age_domain");
    }

    #[test]
    fn test_cascade_then_restrict() {
        let stmt = age_domain(false).cascade().restrict();
        assert_eq!(stmt.cascade_mode(), CascadeMode::Restrict);
    }

    #[test]
    fn test_restrict_then_cascade() {
        let stmt = age_domain(false).restrict().cascade();
        assert_eq!(stmt.cascade_mode(), CascadeMode::Cascade);
    }

    #[test]
    fn test_setters_keep_original_value() {
        let base = age_domain(false);
        let cascaded = base.clone().cascade();

        assert_eq!(base.cascade_mode(), CascadeMode::Unset);
        assert_eq!(cascaded.cascade_mode(), CascadeMode::Cascade);
    }

    #[test]
    fn test_drop_domain_rejects_empty_name() {
        assert!(matches!(drop_domain(""), Err(RenderError::Validation(_))));
        assert!(matches!(drop_domain_if_exists(""), Err(RenderError::Validation(_))));
    }

    // ==================== Default Dialect Tests ====================

    #[test]
    fn test_default_if_exists() {
        assert_eq!(
            render(&age_domain(true), SqlDialect::Default),
            "DROP DOMAIN IF EXISTS age_domain"
        );
    }

    #[test]
    fn test_default_cascade() {
        assert_eq!(
            render(&age_domain(false).cascade(), SqlDialect::Default),
            "DROP DOMAIN age_domain CASCADE"
        );
    }

    #[test]
    fn test_default_restrict() {
        assert_eq!(
            render(&age_domain(false).restrict(), SqlDialect::Default),
            "DROP DOMAIN age_domain RESTRICT"
        );
    }

    #[test]
    fn test_last_setter_wins_in_output() {
        let restrict = render(&age_domain(false).cascade().restrict(), SqlDialect::Default);
        assert!(restrict.ends_with(" RESTRICT"));
        assert!(!restrict.contains("CASCADE"));

        let cascade = render(&age_domain(false).restrict().cascade(), SqlDialect::Default);
        assert!(cascade.ends_with(" CASCADE"));
        assert!(!cascade.contains("RESTRICT"));
    }

    #[test]
    fn test_unset_emits_neither() {
        for dialect in SqlDialect::ALL {
            let sql = render(&age_domain(false), dialect);
            assert!(!sql.contains("CASCADE"));
            assert!(!sql.contains("RESTRICT"));
        }
    }

    // ==================== Native IF EXISTS Tests ====================

    #[test]
    fn test_native_dialects_emit_if_exists_once() {
        for dialect in SqlDialect::ALL.into_iter().filter(|d| *d != SqlDialect::Firebird) {
            let sql = render(&age_domain(true), dialect);
            assert_eq!(sql.matches("IF EXISTS").count(), 1, "{dialect}");
            assert!(!sql.contains("EXECUTE BLOCK"), "{dialect}");
        }
    }

    #[test]
    fn test_without_if_exists_no_clause_or_scaffold() {
        for dialect in SqlDialect::ALL {
            let sql = render(&age_domain(false), dialect);
            assert_eq!(sql, "DROP DOMAIN age_domain", "{dialect}");
        }
    }

    // ==================== Emulated IF EXISTS Tests ====================

    #[test]
    fn test_firebird_if_exists_wraps_statement() {
        let sql = render(&age_domain(true), SqlDialect::Firebird);
        assert_eq!(sql, FIREBIRD_IF_EXISTS);
        assert!(!sql.contains("IF EXISTS"));
    }

    #[test]
    fn test_firebird_if_exists_with_restrict() {
        let sql = render(&age_domain(true).restrict(), SqlDialect::Firebird);
        assert!(sql.contains("'DROP DOMAIN age_domain RESTRICT';"));
    }

    #[test]
    fn test_firebird_if_exists_quoted_name() {
        let stmt = drop_domain_if_exists("Age Domain").unwrap();
        let sql = render(&stmt, SqlDialect::Firebird);
        assert!(sql.contains("EXECUTE STATEMENT 'DROP DOMAIN \"Age Domain\"';"));
    }

    #[test]
    fn test_firebird_if_exists_escapes_single_quotes() {
        let stmt = drop_domain_if_exists("it's").unwrap();
        let sql = render(&stmt, SqlDialect::Firebird);
        assert!(sql.contains("'DROP DOMAIN \"it''s\"';"));
    }

    // ==================== Configuration Tests ====================

    #[test]
    fn test_lowercase_keywords() {
        let config = RenderConfig::builder()
            .keyword_case(RenderKeywordCase::Lower)
            .build();
        let sql = age_domain(true).cascade().to_sql(&config).unwrap();
        assert_eq!(sql, "drop domain if exists age_domain cascade");
    }

    #[test]
    fn test_always_quoted_qualified_name() {
        let config = RenderConfig::builder()
            .dialect(SqlDialect::Postgres)
            .quoted_names(RenderQuotedNames::Always)
            .build();
        let sql = drop_domain("public.age_domain").unwrap().to_sql(&config).unwrap();
        assert_eq!(sql, "DROP DOMAIN \"public\".\"age_domain\"");
    }

    #[test]
    fn test_formatted_firebird() {
        let config = RenderConfig::builder()
            .dialect(SqlDialect::Firebird)
            .formatted(true)
            .build();
        let sql = age_domain(true).to_sql(&config).unwrap();
        assert_eq!(
            sql,
            "EXECUTE BLOCK AS\nBEGIN\n  EXECUTE STATEMENT 'DROP DOMAIN age_domain';\n  WHEN SQLCODE -607 DO BEGIN END\nEND"
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let stmt = age_domain(true).cascade();
        let config = RenderConfig::default();
        assert_eq!(stmt.to_sql(&config).unwrap(), stmt.to_sql(&config).unwrap());
    }

    // ==================== Sink Error Tests ====================

    struct FailingSink {
        remaining: usize,
    }

    impl fmt::Write for FailingSink {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.remaining < s.len() {
                return Err(fmt::Error);
            }
            self.remaining -= s.len();
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_propagates() {
        let config = RenderConfig::default();
        let mut ctx = RenderContext::new(FailingSink { remaining: 8 }, &config);

        let result = age_domain(true).render(&mut ctx);

        assert!(matches!(result, Err(RenderError::Write(_))));
    }

    #[test]
    fn test_renders_into_borrowed_string() {
        let config = RenderConfig::default();
        let mut out = String::from("-- ");
        let mut ctx = RenderContext::new(&mut out, &config);
        ctx.visit(&age_domain(false)).unwrap();

        assert_eq!(out, "-- DROP DOMAIN age_domain");
    }
}
