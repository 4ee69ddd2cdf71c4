//! # `carekit` - algorithms for a patient-portal backend
//!
//! A small toolkit of data structures and analytics used by a patient portal:
//!
//! - **Priority queue**: a binary min-heap keyed by an external priority,
//!   used for triage ordering and as the Dijkstra frontier.
//! - **Graph**: an undirected weighted adjacency-list graph with Dijkstra's
//!   single-source shortest paths and path reconstruction.
//! - **Analytics**: vitals trends, out-of-range alerts, a rule-based risk
//!   level and appointment statistics.
//!
//! Everything is single-threaded, synchronous and in-memory. Containers are
//! plain owned values with no shared state between instances.
//!
//! ## Error policy
//!
//! - Dequeuing from an empty [`PriorityQueue`] yields `None`.
//! - Referring to a node that was never added to a [`Graph`] yields
//!   [`GraphError::MissingNode`].
//! - Negative edge weights are not checked. Dijkstra assumes weights are
//!   non-negative.
//!
//! ## Example
//!
//! ```rust
//! use carekit::{Distance, Graph};
//!
//! let mut graph = Graph::new();
//! for node in ["A", "B", "C", "D"] {
//!     graph.add_node(node);
//! }
//! graph.add_edge(&"A", &"B", 1).unwrap();
//! graph.add_edge(&"B", &"C", 2).unwrap();
//! graph.add_edge(&"A", &"C", 4).unwrap();
//! graph.add_edge(&"C", &"D", 1).unwrap();
//!
//! let paths = graph.dijkstra(&"A").unwrap();
//! assert_eq!(paths.distance(&"D"), Some(Distance::Finite(4)));
//! assert_eq!(paths.path_to(&"D"), Some(vec!["A", "B", "C", "D"]));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod analytics;
pub mod collections;
pub mod graph;

pub use analytics::{AnalyticsConfig, MedicalDataAnalyzer, PatientData, RiskLevel};
pub use collections::{HeapEntry, PriorityQueue};
pub use graph::{Distance, Edge, Graph, GraphError, PathWeight, ShortestPaths};
