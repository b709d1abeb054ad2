//! Core data types for the adjgraph library.

pub mod error;
pub mod node;

pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};
