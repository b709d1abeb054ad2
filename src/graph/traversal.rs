//! Graph traversal algorithms (DFS and BFS).

use std::collections::HashSet;

use crate::queue::Queue;
use crate::types::NodeId;

use super::Graph;

/// Order in which a traversal expands discovered nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Expand the most recently discovered node first (stack frontier).
    DepthFirst,
    /// Expand the earliest discovered node first (queue frontier).
    BreadthFirst,
}

/// Working set of discovered but not yet visited nodes.
trait Frontier {
    fn push(&mut self, id: NodeId);
    fn pop(&mut self) -> Option<NodeId>;
}

impl Frontier for Vec<NodeId> {
    fn push(&mut self, id: NodeId) {
        Vec::push(self, id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        Vec::pop(self)
    }
}

impl Frontier for Queue<NodeId> {
    fn push(&mut self, id: NodeId) {
        self.enqueue(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.dequeue()
    }
}

impl<T> Graph<T> {
    /// Walk every vertex reachable from `start`, returning handles in visit order.
    ///
    /// Returns `None` when `start` is not a vertex, which is distinct from a
    /// start that reaches nothing but itself.
    pub fn traverse(&self, start: NodeId, order: TraversalOrder) -> Option<Vec<NodeId>> {
        if !self.contains(start) {
            log::debug!("Traversal start {} is not a vertex", start);
            return None;
        }

        let visited = match order {
            TraversalOrder::DepthFirst => self.walk(start, Vec::new()),
            TraversalOrder::BreadthFirst => self.walk(start, Queue::new()),
        };
        log::trace!("{:?} from {} visited {} nodes", order, start, visited.len());
        Some(visited)
    }

    /// Values of every vertex reachable from `start`, depth first.
    pub fn depth_first_search(&self, start: NodeId) -> Option<Vec<&T>> {
        self.traverse(start, TraversalOrder::DepthFirst)
            .map(|ids| self.values_of(&ids))
    }

    /// Values of every vertex reachable from `start`, breadth first.
    pub fn breadth_first_search(&self, start: NodeId) -> Option<Vec<&T>> {
        self.traverse(start, TraversalOrder::BreadthFirst)
            .map(|ids| self.values_of(&ids))
    }

    fn walk<F: Frontier>(&self, start: NodeId, mut frontier: F) -> Vec<NodeId> {
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut visited: Vec<NodeId> = Vec::new();

        seen.insert(start);
        frontier.push(start);

        while let Some(current) = frontier.pop() {
            visited.push(current);
            for &neighbor in self.neighbors(current) {
                if seen.insert(neighbor) {
                    frontier.push(neighbor);
                }
            }
        }

        visited
    }
}
