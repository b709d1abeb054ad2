//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod path;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use traversal::TraversalOrder;
pub use undirected::Graph;
