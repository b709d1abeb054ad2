//! Fluent API for building Graph instances.

use crate::types::{GraphResult, NodeId};

use super::Graph;

/// Fluent builder for constructing a Graph.
pub struct GraphBuilder<T> {
    graph: Graph<T>,
    edges: Vec<(NodeId, NodeId)>,
}

impl<T> GraphBuilder<T> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            edges: Vec::new(),
        }
    }

    /// Create a builder with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            graph: Graph::with_capacity(capacity),
            edges: Vec::new(),
        }
    }

    /// Add a vertex carrying `value`.
    pub fn add_vertex(&mut self, value: T) -> NodeId {
        self.graph.insert(value)
    }

    /// Record an edge between two vertices.
    pub fn link(&mut self, v1: NodeId, v2: NodeId) -> &mut Self {
        self.edges.push((v1, v2));
        self
    }

    /// Build the final Graph, applying edges in the order they were linked.
    pub fn build(self) -> GraphResult<Graph<T>> {
        let mut graph = self.graph;
        for (v1, v2) in self.edges {
            graph.add_edge(v1, v2)?;
        }
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
