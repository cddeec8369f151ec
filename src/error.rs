//! Error types for SQL rendering

use thiserror::Error;

/// Errors that can occur while building or rendering a statement
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown dialect: {0}")]
    InvalidDialect(String),

    #[error("Write error: {0}")]
    Write(#[from] std::fmt::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_dialect(msg: impl Into<String>) -> Self {
        Self::InvalidDialect(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
