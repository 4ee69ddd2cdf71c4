//! Dijkstra's single-source shortest paths over [`Graph`].
//!
//! The frontier is a [`PriorityQueue`] keyed by [`Distance`]. Every
//! registered node is seeded at its initial distance (zero for the source,
//! infinite otherwise) and a node is simply enqueued again whenever a shorter
//! path to it is found; there is no decrease-key. Popped entries whose key is
//! larger than the node's recorded distance are stale and are skipped.
//!
//! Edge weights must be non-negative. Negative weights are not detected and
//! produce unspecified results.

use crate::collections::PriorityQueue;
use crate::graph::adjacency::Graph;
use crate::graph::distance::{Distance, PathWeight};
use crate::graph::error::GraphError;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Result of [`Graph::dijkstra`]: distances and predecessors for every
/// registered node.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<N: Eq + Hash, W> {
    source: N,
    distances: HashMap<N, Distance<W>>,
    predecessors: HashMap<N, Option<N>>,
}

impl<N, W> ShortestPaths<N, W>
where
    N: Eq + Hash + Clone,
    W: Copy,
{
    /// The node the search started from.
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Shortest distance from the source to `node`, or `None` if `node` was
    /// not registered when the search ran.
    pub fn distance(&self, node: &N) -> Option<Distance<W>> {
        self.distances.get(node).copied()
    }

    /// The node preceding `node` on a shortest path.
    ///
    /// `None` for the source itself, for unreachable nodes and for unknown
    /// nodes.
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node).and_then(Option::as_ref)
    }

    /// Returns `true` if `node` is reachable from the source.
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distances.get(node).is_some_and(Distance::is_finite)
    }

    /// All distances, keyed by node.
    pub fn distances(&self) -> &HashMap<N, Distance<W>> {
        &self.distances
    }

    /// All predecessors, keyed by node.
    pub fn predecessors(&self) -> &HashMap<N, Option<N>> {
        &self.predecessors
    }

    /// Reconstructs a shortest path from the source to `target`, both
    /// inclusive.
    ///
    /// Returns `None` if `target` is unknown or unreachable.
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            // A predecessor chain longer than the node count means a cycle,
            // which only negative weights can produce.
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

impl<N, W> Graph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: PathWeight,
{
    /// Computes shortest paths from `start` to every registered node.
    ///
    /// Unreachable nodes keep [`Distance::Infinite`] and no predecessor. A
    /// path whose length overflows `W` counts as infinite, so it is never
    /// taken.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingNode`] if `start` is not registered.
    pub fn dijkstra(&self, start: &N) -> Result<ShortestPaths<N, W>, GraphError> {
        if !self.contains_node(start) {
            return Err(GraphError::missing(start));
        }

        let len = self.node_count();
        let mut distances = HashMap::with_capacity(len);
        let mut predecessors = HashMap::with_capacity(len);
        let mut frontier = PriorityQueue::with_capacity(len);

        for node in self.nodes() {
            let initial = if node == start {
                Distance::Finite(W::zero())
            } else {
                Distance::Infinite
            };
            distances.insert(node.clone(), initial);
            predecessors.insert(node.clone(), None);
            frontier.enqueue(node.clone(), initial);
        }

        let mut settled = 0usize;
        let mut stale = 0usize;
        while let Some(entry) = frontier.dequeue_entry() {
            let current = distances
                .get(&entry.item)
                .copied()
                .unwrap_or(Distance::Infinite);
            if entry.priority > current {
                stale += 1;
                continue;
            }
            settled += 1;

            for edge in self.neighbors(&entry.item)? {
                let candidate = current.extend(edge.weight);
                let known = distances
                    .get(&edge.node)
                    .copied()
                    .unwrap_or(Distance::Infinite);
                if candidate < known {
                    distances.insert(edge.node.clone(), candidate);
                    predecessors.insert(edge.node.clone(), Some(entry.item.clone()));
                    frontier.enqueue(edge.node.clone(), candidate);
                }
            }
        }

        tracing::debug!(
            source = ?start,
            nodes = len,
            settled,
            stale,
            "dijkstra finished"
        );

        Ok(ShortestPaths {
            source: start.clone(),
            distances,
            predecessors,
        })
    }
}
