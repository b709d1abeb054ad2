//! Unweighted shortest paths by breadth-first path expansion.

use std::collections::HashSet;

use crate::queue::Queue;
use crate::types::NodeId;

use super::Graph;

impl<T> Graph<T> {
    /// Handles along a shortest path from `source` to `target`, both inclusive.
    ///
    /// Returns `None` if either endpoint is not a vertex or `target` is
    /// unreachable. Ties between equal-length paths follow adjacency order.
    pub fn shortest_path_ids(&self, source: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.contains(source) || !self.contains(target) {
            log::debug!("No path {} -> {}: endpoint is not a vertex", source, target);
            return None;
        }
        if source == target {
            return Some(vec![source]);
        }

        // Each entry pairs a partial path with its final node.
        let mut frontier: Queue<(NodeId, Vec<NodeId>)> = Queue::new();
        let mut visited: HashSet<NodeId> = HashSet::new();

        visited.insert(source);
        frontier.enqueue((source, vec![source]));

        while let Some((last, path)) = frontier.dequeue() {
            if last == target {
                log::trace!("Path {} -> {} found with {} hops", source, target, path.len() - 1);
                return Some(path);
            }

            for &neighbor in self.neighbors(last) {
                if visited.insert(neighbor) {
                    let mut extended = Vec::with_capacity(path.len() + 1);
                    extended.extend_from_slice(&path);
                    extended.push(neighbor);
                    frontier.enqueue((neighbor, extended));
                }
            }
        }

        log::trace!("Target {} unreachable from {}", target, source);
        None
    }

    /// Values along a shortest path from `source` to `target`.
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> Option<Vec<&T>> {
        self.shortest_path_ids(source, target)
            .map(|ids| self.values_of(&ids))
    }

    /// Edge count of a shortest path, or `None` when there is no path.
    pub fn distance(&self, source: NodeId, target: NodeId) -> Option<usize> {
        self.shortest_path_ids(source, target)
            .map(|path| path.len() - 1)
    }
}
