//! Configuration for SQL rendering
//!
//! Provides a builder pattern for configuring how statements are rendered.

use serde::{Deserialize, Serialize};

use crate::dialect::SqlDialect;
use crate::error::Result;

/// How identifiers are quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderQuotedNames {
    /// Quote every identifier
    Always,
    /// Quote identifiers that are not plain lowercase names or are reserved words
    #[default]
    WhenNeeded,
    /// Never quote identifiers
    Never,
}

/// Case used for SQL keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderKeywordCase {
    #[default]
    Upper,
    Lower,
    /// Capitalize each word (`Drop Domain If Exists`)
    Pascal,
}

/// Configuration for rendering statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Target dialect
    pub dialect: SqlDialect,
    /// Identifier quoting policy (default: when needed)
    pub quoted_names: RenderQuotedNames,
    /// Keyword case (default: upper)
    pub keyword_case: RenderKeywordCase,
    /// Whether to emit multi-line, indented output
    pub formatted: bool,
    /// Indentation used per level when `formatted` is set (default: two spaces)
    pub indentation: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dialect: SqlDialect::Default,
            quoted_names: RenderQuotedNames::default(),
            keyword_case: RenderKeywordCase::default(),
            formatted: false,
            indentation: "  ".to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration builder
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    /// Default configuration targeting the given dialect
    pub fn for_dialect(dialect: SqlDialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builder for RenderConfig
#[derive(Debug, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target dialect (default: `SqlDialect::Default`)
    pub fn dialect(mut self, dialect: SqlDialect) -> Self {
        self.config.dialect = dialect;
        self
    }

    /// Set the identifier quoting policy
    pub fn quoted_names(mut self, quoted_names: RenderQuotedNames) -> Self {
        self.config.quoted_names = quoted_names;
        self
    }

    /// Set the keyword case
    pub fn keyword_case(mut self, keyword_case: RenderKeywordCase) -> Self {
        self.config.keyword_case = keyword_case;
        self
    }

    /// Enable or disable formatted output (default: false)
    pub fn formatted(mut self, enabled: bool) -> Self {
        self.config.formatted = enabled;
        self
    }

    /// Set the per-level indentation for formatted output
    pub fn indentation(mut self, indentation: impl Into<String>) -> Self {
        self.config.indentation = indentation.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> RenderConfig {
        self.config
    }
}
