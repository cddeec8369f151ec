//! Qualified object names
//!
//! A name is an optional schema qualifier plus the object's own name. It
//! decides its own quoting according to [`RenderQuotedNames`].

use std::fmt;

use crate::config::RenderQuotedNames;
use crate::error::{RenderError, Result};
use crate::sql::context::RenderContext;
use crate::sql::render::Render;
use crate::sql::sanitize::{needs_quoting, quote_identifier, validate_name_part};

/// A possibly schema-qualified reference to a database object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    schema: Option<String>,
    name: String,
}

impl QualifiedName {
    /// An unqualified name
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name_part(&name).map_err(RenderError::validation)?;
        Ok(Self { schema: None, name })
    }

    /// A name qualified by a schema
    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let schema = schema.into();
        validate_name_part(&schema).map_err(RenderError::validation)?;
        let mut qualified = Self::new(name)?;
        qualified.schema = Some(schema);
        Ok(qualified)
    }

    /// Parse `name` or `schema.name`
    ///
    /// Splits on the first dot only; use [`qualified`](Self::qualified) for
    /// names that themselves contain dots.
    pub fn parse(text: &str) -> Result<Self> {
        match text.split_once('.') {
            Some((schema, name)) => Self::qualified(schema, name),
            None => Self::new(text),
        }
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn render_part<W: fmt::Write>(ctx: &mut RenderContext<'_, W>, part: &str) -> Result<()> {
        let quote = match ctx.config().quoted_names {
            RenderQuotedNames::Always => true,
            RenderQuotedNames::WhenNeeded => needs_quoting(part),
            RenderQuotedNames::Never => false,
        };

        if quote {
            ctx.sql(&quote_identifier(part))?;
        } else {
            ctx.sql(part)?;
        }
        Ok(())
    }
}

impl Render for QualifiedName {
    fn render<W: fmt::Write>(&self, ctx: &mut RenderContext<'_, W>) -> Result<()> {
        if let Some(schema) = &self.schema {
            Self::render_part(ctx, schema)?;
            ctx.sql_char('.')?;
        }
        Self::render_part(ctx, &self.name)
    }
}

impl TryFrom<&str> for QualifiedName {
    type Error = RenderError;

    fn try_from(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::sql::render::render_to_string;

    fn render_with(name: &QualifiedName, quoted_names: RenderQuotedNames) -> String {
        let config = RenderConfig::builder().quoted_names(quoted_names).build();
        render_to_string(name, &config).unwrap()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_rejects_empty() {
        let result = QualifiedName::new("");
        assert!(matches!(result, Err(RenderError::Validation(_))));
    }

    #[test]
    fn test_qualified_rejects_empty_schema() {
        assert!(QualifiedName::qualified("", "age_domain").is_err());
        assert!(QualifiedName::qualified("public", "").is_err());
    }

    #[test]
    fn test_parse_unqualified() {
        let name = QualifiedName::parse("age_domain").unwrap();
        assert_eq!(name.schema(), None);
        assert_eq!(name.name(), "age_domain");
    }

    #[test]
    fn test_parse_qualified() {
        let name = QualifiedName::parse("public.age_domain").unwrap();
        assert_eq!(name.schema(), Some("public"));
        assert_eq!(name.name(), "age_domain");
    }

    #[test]
    fn test_parse_trailing_dot() {
        assert!(QualifiedName::parse("public.").is_err());
    }

    // ==================== Rendering Tests ====================

    #[test]
    fn test_render_when_needed_plain() {
        let name = QualifiedName::parse("public.age_domain").unwrap();
        assert_eq!(render_with(&name, RenderQuotedNames::WhenNeeded), "public.age_domain");
    }

    #[test]
    fn test_render_when_needed_mixed_case() {
        let name = QualifiedName::qualified("Sales", "age_domain").unwrap();
        assert_eq!(
            render_with(&name, RenderQuotedNames::WhenNeeded),
            "\"Sales\".age_domain"
        );
    }

    #[test]
    fn test_render_when_needed_reserved() {
        let name = QualifiedName::new("domain").unwrap();
        assert_eq!(render_with(&name, RenderQuotedNames::WhenNeeded), "\"domain\"");
    }

    #[test]
    fn test_render_always() {
        let name = QualifiedName::parse("public.age_domain").unwrap();
        assert_eq!(
            render_with(&name, RenderQuotedNames::Always),
            "\"public\".\"age_domain\""
        );
    }

    #[test]
    fn test_render_never() {
        let name = QualifiedName::new("Age Domain").unwrap();
        assert_eq!(render_with(&name, RenderQuotedNames::Never), "Age Domain");
    }

    #[test]
    fn test_render_escapes_embedded_quotes() {
        let name = QualifiedName::new("a\"b").unwrap();
        assert_eq!(render_with(&name, RenderQuotedNames::WhenNeeded), "\"a\"\"b\"");
    }
}
