//! # runtara-sql-dialect
//!
//! Dialect-aware rendering of SQL DDL statements.
//!
//! Statements are described by small immutable values and rendered into SQL
//! for a chosen dialect. When a dialect lacks a clause natively, the renderer
//! emulates it with constructs the dialect does support.
//!
//! ## Quick Start
//!
//! ```rust
//! use runtara_sql_dialect::{drop_domain, drop_domain_if_exists, RenderConfig, SqlDialect};
//!
//! let config = RenderConfig::default();
//! assert_eq!(
//!     drop_domain_if_exists("age_domain")?.to_sql(&config)?,
//!     "DROP DOMAIN IF EXISTS age_domain"
//! );
//! assert_eq!(
//!     drop_domain("age_domain")?.cascade().to_sql(&config)?,
//!     "DROP DOMAIN age_domain CASCADE"
//! );
//! # Ok::<(), runtara_sql_dialect::RenderError>(())
//! ```
//!
//! ## Emulation
//!
//! Firebird has no `DROP DOMAIN IF EXISTS`. The statement is instead run
//! inside an `EXECUTE BLOCK` that ignores the "unsuccessful metadata update"
//! error raised for a missing domain:
//!
//! ```rust
//! use runtara_sql_dialect::{drop_domain_if_exists, RenderConfig, SqlDialect};
//!
//! let config = RenderConfig::for_dialect(SqlDialect::Firebird);
//! let sql = drop_domain_if_exists("age_domain")?.to_sql(&config)?;
//! assert_eq!(
//!     sql,
//!     "EXECUTE BLOCK AS BEGIN EXECUTE STATEMENT 'DROP DOMAIN age_domain'; \
//!      WHEN SQLCODE -607 DO BEGIN END END"
//! );
//! # Ok::<(), runtara_sql_dialect::RenderError>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use runtara_sql_dialect::{RenderConfig, RenderKeywordCase, RenderQuotedNames, SqlDialect};
//!
//! let config = RenderConfig::builder()
//!     .dialect(SqlDialect::Postgres)
//!     .quoted_names(RenderQuotedNames::Always)
//!     .keyword_case(RenderKeywordCase::Lower)
//!     .formatted(true)
//!     .build();
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod name;
pub mod sql;
pub mod statement;
mod trace;

// Re-export main types for convenience
pub use config::{RenderConfig, RenderConfigBuilder, RenderKeywordCase, RenderQuotedNames};
pub use dialect::{Capability, SqlDialect};
pub use error::{RenderError, Result};
pub use name::QualifiedName;
pub use sql::{Keyword, Render, RenderContext, render_to_string};
pub use statement::{CascadeMode, DropDomain, drop_domain, drop_domain_if_exists};
