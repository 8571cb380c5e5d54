//! The decision engines and the data structures they share.
mod implication_graph;
pub mod random_walk;
pub mod scc;

pub use implication_graph::ImplicationGraph;
pub use random_walk::RandomWalkEngine;
pub use scc::SccEngine;
