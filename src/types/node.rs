//! Vertex handles and the vertex record.

/// Stable handle naming one node in a graph's arena.
///
/// Vertex identity is the handle, not the payload: two nodes carrying equal
/// values are still distinct vertices. A handle records the graph that issued
/// it, so it never names a node of another graph. Handles are never reused
/// within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    graph: u32,
    slot: u64,
}

impl NodeId {
    pub(crate) fn new(graph: u32, index: usize) -> Self {
        Self {
            graph,
            slot: index as u64,
        }
    }

    /// Position of this node in its graph's arena.
    pub fn index(self) -> usize {
        self.slot as usize
    }

    /// Tag of the graph that issued this handle.
    pub(crate) fn graph(self) -> u32 {
        self.graph
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.slot)
    }
}

/// A vertex: an opaque caller value plus its neighbours.
///
/// Neighbours are kept in edge-insertion order in a plain list, so linking
/// checks for duplicates in O(degree).
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Caller payload, never inspected by the graph.
    pub value: T,
    /// Neighbour handles, unique, in edge-insertion order.
    adjacent: Vec<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            adjacent: Vec::new(),
        }
    }

    /// Neighbours in the order their edges were added.
    pub fn adjacent(&self) -> &[NodeId] {
        &self.adjacent
    }

    /// Whether `other` is a neighbour.
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.adjacent.contains(&other)
    }

    /// Number of neighbours.
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Insert `other` if not already present. Returns true on insertion.
    pub(crate) fn link(&mut self, other: NodeId) -> bool {
        if self.is_adjacent(other) {
            return false;
        }
        self.adjacent.push(other);
        true
    }

    /// Remove `other` if present, keeping the order of the rest.
    pub(crate) fn unlink(&mut self, other: NodeId) -> bool {
        match self.adjacent.iter().position(|&id| id == other) {
            Some(pos) => {
                self.adjacent.remove(pos);
                true
            }
            None => false,
        }
    }
}
