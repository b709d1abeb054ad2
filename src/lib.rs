//! adjgraph — in-memory undirected graphs.
//!
//! Vertices carry arbitrary values and are identified by [`NodeId`] handles.
//! The graph supports vertex and edge mutation, depth-first and breadth-first
//! traversal, and unweighted shortest-path search.

pub mod graph;
pub mod queue;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, TraversalOrder};
pub use queue::Queue;
pub use types::{GraphError, GraphResult, Node, NodeId};
