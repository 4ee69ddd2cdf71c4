//! Undirected weighted adjacency-list graph.
//!
//! Nodes are keyed by any hashable identifier and must be registered with
//! [`Graph::add_node`] before edges can reference them. Every edge is stored
//! twice, once in each endpoint's neighbor list, with the same weight.
//! Self-loops and parallel edges are kept as given.

use crate::graph::error::GraphError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// One entry of a node's neighbor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N, W> {
    /// The node at the other end of the edge.
    pub node: N,
    /// The edge weight.
    pub weight: W,
}

/// An undirected weighted graph stored as adjacency lists.
///
/// Node iteration follows first-registration order.
#[derive(Debug, Clone)]
pub struct Graph<N, W> {
    order: Vec<N>,
    adjacency: HashMap<N, Vec<Edge<N, W>>>,
    edge_count: usize,
}

impl<N, W> Graph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Copy,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            order: Vec::with_capacity(nodes),
            adjacency: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Registers `node` with an empty neighbor list.
    ///
    /// Registering an existing node again resets *its* neighbor list. Entries
    /// pointing at it from other nodes' lists are left in place, so the
    /// graph is no longer symmetric for those edges afterwards.
    pub fn add_node(&mut self, node: N) {
        if self.adjacency.insert(node.clone(), Vec::new()).is_some() {
            tracing::debug!(node = ?node, "re-registered node; neighbor list reset");
        } else {
            self.order.push(node);
        }
    }

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// Both endpoints must already be registered. On error the graph is left
    /// unchanged. Weights are not validated; Dijkstra requires them to be
    /// non-negative.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingNode`] naming the first unregistered
    /// endpoint.
    pub fn add_edge(&mut self, a: &N, b: &N, weight: W) -> Result<(), GraphError> {
        if !self.adjacency.contains_key(a) {
            return Err(GraphError::missing(a));
        }
        if !self.adjacency.contains_key(b) {
            return Err(GraphError::missing(b));
        }

        self.neighbors_mut(a)?.push(Edge {
            node: b.clone(),
            weight,
        });
        self.neighbors_mut(b)?.push(Edge {
            node: a.clone(),
            weight,
        });
        self.edge_count += 1;
        Ok(())
    }

    /// Returns `true` if `node` has been registered.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns the neighbor list of `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingNode`] if `node` is not registered.
    pub fn neighbors(&self, node: &N) -> Result<&[Edge<N, W>], GraphError> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::missing(node))
    }

    fn neighbors_mut(&mut self, node: &N) -> Result<&mut Vec<Edge<N, W>>, GraphError> {
        self.adjacency
            .get_mut(node)
            .ok_or_else(|| GraphError::missing(node))
    }
}

impl<N, W> Graph<N, W> {
    /// Returns the number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of edges successfully added.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if no node has been registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over registered nodes in registration order.
    pub fn nodes(&self) -> core::slice::Iter<'_, N> {
        self.order.iter()
    }
}

impl<N, W> Default for Graph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
