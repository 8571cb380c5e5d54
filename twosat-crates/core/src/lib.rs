//! Decision procedures for 2-SAT: a conjunction of clauses which each contain exactly two
//! literals.
//!
//! Two interchangeable engines decide an [`Instance`]:
//! - the [`SccEngine`] decides exactly, by searching the implication graph for a variable whose
//!   literals share a strongly connected component;
//! - the [`RandomWalkEngine`] performs Papadimitriou's random walk, which can only prove
//!   satisfiability.
//!
//! Both return a [`Decision`], which carries the [`Verdict`] together with the [`EngineKind`]
//! that reached it, so that a caller can tell an exact answer from an inconclusive walk.
//!
//! # Example
//! ```rust
//! # use twosat_core::Instance;
//! # use twosat_core::RandomWalkEngine;
//! # use twosat_core::SccEngine;
//! # use twosat_core::Verdict;
//! let instance = Instance::from_clauses(2, [(1, 2), (-1, 2), (1, -2), (-1, -2)])
//!     .expect("all literals are within the variable range");
//!
//! let exact = SccEngine::new().decide(&instance);
//! assert_eq!(exact.verdict, Verdict::Unsatisfiable);
//!
//! let walk = RandomWalkEngine::with_seed(42).decide(&instance);
//! assert_eq!(walk.verdict, Verdict::Undetermined);
//! assert!(!walk.is_exact());
//! ```
pub(crate) mod basic_types;
pub mod asserts;
pub mod containers;
pub mod engine;
pub mod statistics;

pub use rand;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use twosat_core::decide_deterministic;`
// vs.
// `use twosat_core::api::decide_deterministic;`
mod api;

pub use api::*;

pub use crate::basic_types::Assignment;
pub use crate::basic_types::Clause;
pub use crate::basic_types::ClauseId;
pub use crate::basic_types::Decision;
pub use crate::basic_types::DecisionError;
pub use crate::basic_types::DecisionStrategy;
pub use crate::basic_types::EngineKind;
pub use crate::basic_types::Instance;
pub use crate::basic_types::InstanceBuilder;
pub use crate::basic_types::Literal;
pub use crate::basic_types::Random;
pub use crate::basic_types::Variable;
pub use crate::basic_types::Verdict;
pub use crate::engine::random_walk::PureLiteralPruning;
pub use crate::engine::random_walk::RandomWalkOptions;
pub use crate::engine::random_walk::RandomWalkStatistics;
pub use crate::engine::scc::SccStatistics;
pub use crate::engine::scc::StronglyConnectedComponents;
pub use crate::engine::ImplicationGraph;
pub use crate::engine::RandomWalkEngine;
pub use crate::engine::SccEngine;
