//! SQL dialects and their capabilities
//!
//! Capabilities are looked up by name. Each capability lists the dialects that
//! lack it, so adding a dialect or a capability never touches renderer code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::sql::keywords::Keyword;

/// Target database dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    /// Standard SQL, no vendor-specific syntax
    #[default]
    Default,
    Postgres,
    H2,
    Hsqldb,
    Firebird,
}

/// A feature a dialect may or may not support natively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `DROP DOMAIN IF EXISTS`
    DropDomainIfExists,
}

impl Capability {
    /// Dialects that lack this capability
    pub const fn unsupported_by(self) -> &'static [SqlDialect] {
        match self {
            Capability::DropDomainIfExists => &[SqlDialect::Firebird],
        }
    }
}

/// Dialect-specific spellings of the `DROP DOMAIN` keyword pair.
///
/// Empty for now: every supported dialect uses the canonical pair.
const DROP_DOMAIN_KEYWORD_OVERRIDES: &[(SqlDialect, [Keyword; 2])] = &[];

impl SqlDialect {
    /// All dialects, in declaration order
    pub const ALL: [SqlDialect; 5] = [
        SqlDialect::Default,
        SqlDialect::Postgres,
        SqlDialect::H2,
        SqlDialect::Hsqldb,
        SqlDialect::Firebird,
    ];

    /// Whether this dialect supports the capability natively
    pub fn supports(self, capability: Capability) -> bool {
        !capability.unsupported_by().contains(&self)
    }

    /// Keyword pair that opens a `DROP DOMAIN` statement in this dialect
    pub fn drop_domain_keywords(self) -> [Keyword; 2] {
        DROP_DOMAIN_KEYWORD_OVERRIDES
            .iter()
            .find(|(dialect, _)| *dialect == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or([Keyword::Drop, Keyword::Domain])
    }

    pub fn name(self) -> &'static str {
        match self {
            SqlDialect::Default => "default",
            SqlDialect::Postgres => "postgres",
            SqlDialect::H2 => "h2",
            SqlDialect::Hsqldb => "hsqldb",
            SqlDialect::Firebird => "firebird",
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SqlDialect {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" | "standard" => Ok(SqlDialect::Default),
            "postgres" | "postgresql" => Ok(SqlDialect::Postgres),
            "h2" => Ok(SqlDialect::H2),
            "hsqldb" => Ok(SqlDialect::Hsqldb),
            "firebird" => Ok(SqlDialect::Firebird),
            _ => Err(RenderError::invalid_dialect(s)),
        }
    }
}
