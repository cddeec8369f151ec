//! SQL rendering machinery
//!
//! Provides the rendering context, keyword tokens, feature emulation, and
//! identifier sanitization.

pub mod context;
pub mod emulation;
pub mod keywords;
pub mod render;
pub mod sanitize;

pub use context::RenderContext;
pub use emulation::{DdlStatementType, IfExistsStrategy};
pub use keywords::Keyword;
pub use render::{Render, render_to_string};
pub use sanitize::{RESERVED_WORDS, needs_quoting, quote_identifier};
