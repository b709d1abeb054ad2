//! Error types for the adjgraph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not a vertex of the graph.
    #[error("Edge endpoint {0} is not a vertex of this graph")]
    InvalidEdgeEndpoint(NodeId),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
