//! Errors raised by graph mutation and lookup.

use thiserror::Error;

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// An absent value was passed where a vertex is required.
    #[error("{0}")]
    InvalidArgument(&'static str),
}

impl GraphError {
    pub(crate) fn absent_vertex() -> Self {
        GraphError::InvalidArgument("Vertex cannot be null or undefined")
    }

    pub(crate) fn absent_endpoint() -> Self {
        GraphError::InvalidArgument("Vertices cannot be null or undefined")
    }
}
