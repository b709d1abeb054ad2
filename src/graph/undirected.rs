//! Core graph structure — a node arena plus an identity-keyed vertex set.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::types::{GraphError, GraphResult, Node, NodeId};

/// Source of per-graph handle tags.
static NEXT_GRAPH_TAG: AtomicU32 = AtomicU32::new(0);

/// An undirected graph over caller-supplied values.
///
/// Nodes are allocated in an arena and addressed by [`NodeId`]. A node only
/// takes part in edges and traversals while it is a member of the vertex set;
/// nodes outside it (never added, or removed) keep their values.
///
/// Handles issued by one graph are rejected by every other graph. A clone
/// shares its original's tag, so handles carry over to the copy.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Tag stamped into every handle this graph issues.
    tag: u32,
    /// Every node ever created, indexed by handle.
    nodes: Vec<Node<T>>,
    /// Handles currently registered as vertices.
    members: HashSet<NodeId>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tag: NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
        }
    }

    /// Arena position of a handle issued by this graph.
    fn slot(&self, id: NodeId) -> Option<usize> {
        (id.graph() == self.tag && id.index() < self.nodes.len()).then(|| id.index())
    }

    /// Allocate a node that is not yet a vertex of the graph.
    pub fn create_node(&mut self, value: T) -> NodeId {
        let id = NodeId::new(self.tag, self.nodes.len());
        self.nodes.push(Node::new(value));
        id
    }

    /// Allocate a node and register it as a vertex.
    pub fn insert(&mut self, value: T) -> NodeId {
        let id = self.create_node(value);
        self.members.insert(id);
        id
    }

    /// Register a node as a vertex. Adding a member again is a no-op.
    pub fn add_vertex(&mut self, vertex: NodeId) {
        if self.slot(vertex).is_none() {
            log::debug!("Ignoring unknown node {} in add_vertex", vertex);
            return;
        }
        self.members.insert(vertex);
    }

    /// Register each node in order.
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Connect two vertices. Both must be members; nothing changes otherwise.
    pub fn add_edge(&mut self, v1: NodeId, v2: NodeId) -> GraphResult<()> {
        for endpoint in [v1, v2] {
            if !self.contains(endpoint) {
                log::debug!("Rejecting edge {} - {}: {} is not a vertex", v1, v2, endpoint);
                return Err(GraphError::InvalidEdgeEndpoint(endpoint));
            }
        }

        self.nodes[v1.index()].link(v2);
        self.nodes[v2.index()].link(v1);
        Ok(())
    }

    /// Disconnect two nodes if they are connected.
    ///
    /// Only the two adjacency sets are touched, so this works whether or not
    /// the nodes are currently vertices.
    pub fn remove_edge(&mut self, v1: NodeId, v2: NodeId) {
        if let Some(slot) = self.slot(v1) {
            self.nodes[slot].unlink(v2);
        }
        if let Some(slot) = self.slot(v2) {
            self.nodes[slot].unlink(v1);
        }
    }

    /// Remove a vertex and all of its edges. Non-members are ignored.
    pub fn remove_vertex(&mut self, vertex: NodeId) {
        if !self.contains(vertex) {
            return;
        }

        // Snapshot: remove_edge mutates the list being walked.
        let neighbors = self.nodes[vertex.index()].adjacent().to_vec();
        for neighbor in neighbors {
            self.remove_edge(vertex, neighbor);
        }
        self.members.remove(&vertex);
    }

    /// Whether the node is currently a vertex of this graph.
    pub fn contains(&self, vertex: NodeId) -> bool {
        self.members.contains(&vertex)
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.members.len()
    }

    /// Number of undirected edges among vertices. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let mut ends = 0;
        let mut loops = 0;
        for &id in &self.members {
            for &other in self.nodes[id.index()].adjacent() {
                if other == id {
                    loops += 1;
                } else {
                    ends += 1;
                }
            }
        }
        ends / 2 + loops
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Get a node record by handle, member or not.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slot(id).map(|slot| &self.nodes[slot])
    }

    /// Get a node's value by handle, member or not.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|n| &n.value)
    }

    /// Get a node's value mutably by handle, member or not.
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let slot = self.slot(id)?;
        Some(&mut self.nodes[slot].value)
    }

    /// Neighbours of a node in edge-insertion order.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::adjacent).unwrap_or(&[])
    }

    /// Number of neighbours of a node.
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// Whether an edge joins `v1` and `v2`.
    pub fn has_edge(&self, v1: NodeId, v2: NodeId) -> bool {
        self.node(v1).map(|n| n.is_adjacent(v2)).unwrap_or(false)
    }

    /// Vertices in ascending handle order.
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len())
            .map(move |index| NodeId::new(self.tag, index))
            .filter(move |id| self.members.contains(id))
    }

    /// Map handles from this graph's arena to their values.
    pub(crate) fn values_of(&self, ids: &[NodeId]) -> Vec<&T> {
        ids.iter().filter_map(|&id| self.value(id)).collect()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
