//! Store error types.

use thiserror::Error;

/// Errors from the graph store boundary.
///
/// Messages carry the driver diagnostic but never raw parameter values.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("graph store configuration error: {0}")]
    Config(#[source] neo4rs::Error),

    #[error("failed to connect to the graph store: {0}")]
    Connect(#[source] neo4rs::Error),

    #[error("query execution failed: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("malformed result row: {0}")]
    Row(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
