//! Tracing hooks for rendered statements.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! The macro expands to nothing when the feature is disabled.

/// Emit a debug-level event with the dialect and rendered SQL text.
///
/// ```ignore
/// trace_render!(config.dialect, &sql);
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! trace_render {
    ($dialect:expr, $sql:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(dialect = %$dialect, sql = %$sql, "sql.render");
    };
}
