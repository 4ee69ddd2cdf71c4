//! Weighted graphs and shortest-path search.
//!
//! - `adjacency`: the undirected adjacency-list [`Graph`]
//! - `shortest_path`: Dijkstra over [`Graph`], returning [`ShortestPaths`]
//! - `distance`: possibly infinite path lengths
//! - `error`: [`GraphError`]

pub mod adjacency;
pub mod distance;
pub mod error;
pub mod shortest_path;

pub use adjacency::{Edge, Graph};
pub use distance::{Distance, PathWeight};
pub use error::GraphError;
pub use shortest_path::ShortestPaths;
