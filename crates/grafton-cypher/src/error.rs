//! Compiler error types.

use thiserror::Error;

/// Errors produced while compiling a statement.
#[derive(Error, Debug)]
pub enum CypherError {
    /// A descriptor is missing a required field, or a field fails the
    /// identifier grammar check.
    #[error("validation error: {0}")]
    Validation(String),

    /// A parameter binding could not be produced: reserved or duplicate
    /// role, invalid placeholder identifier, or unsupported value type.
    #[error("binding error: {0}")]
    Binding(String),
}

/// Result type for compilation.
pub type CypherResult<T> = Result<T, CypherError>;

impl CypherError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a binding error.
    pub fn binding(msg: impl Into<String>) -> Self {
        Self::Binding(msg.into())
    }
}
