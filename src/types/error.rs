//! Error types for the algokit library.

use thiserror::Error;

/// All errors that can occur in the algokit library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    /// Vertex not found by ID.
    #[error("Vertex ID {0} not found")]
    VertexNotFound(u64),

    /// No registered vertex carries the requested value.
    #[error("No vertex registered with the requested value")]
    ValueNotFound,

    /// A vertex with this ID is already registered.
    #[error("Vertex ID {0} is already registered")]
    DuplicateVertexId(u64),

    /// No vertex ID is left past this one.
    #[error("Vertex ID space exhausted after {0}")]
    IdOverflow(u64),

    /// Malformed edge specification on the command line.
    #[error("Invalid edge specification: {0}")]
    InvalidEdgeSpec(String),

    /// Command-line vertex name that does not appear in any edge.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),
}

/// Convenience result type for algokit operations.
pub type AlgoResult<T> = Result<T, AlgoError>;
