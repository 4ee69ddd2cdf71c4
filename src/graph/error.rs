//! Errors returned by graph operations.

use core::fmt;

/// The error type for graph operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a node that was never registered with
    /// `add_node`. Holds the node's `Debug` rendering.
    MissingNode(String),
}

impl GraphError {
    pub(crate) fn missing<N: fmt::Debug>(node: &N) -> Self {
        Self::MissingNode(format!("{node:?}"))
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNode(node) => write!(f, "missing node: {node} is not registered"),
        }
    }
}

impl std::error::Error for GraphError {}
