//! Collections.
//!
//! - `priority_queue`: binary min-heap keyed by an external priority

pub mod priority_queue;

pub use priority_queue::{HeapEntry, PriorityQueue};
