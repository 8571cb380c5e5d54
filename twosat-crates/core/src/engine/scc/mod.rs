//! Decides 2-SAT through the strongly connected components of the implication graph.
//!
//! An instance is unsatisfiable if and only if some variable `x` has `x` and `¬x` in the same
//! strongly connected component: every literal of a component implies every other literal of it,
//! so such a component would force `x` and `¬x` to hold simultaneously. The components are found
//! with Kosaraju's algorithm, using two depth-first passes that keep their own work stacks (so the
//! depth of a traversal is not bounded by the call stack):
//! 1. a pass over the reversed graph which computes the [`FinishingOrder`];
//! 2. a pass over the original graph in decreasing finishing rank, in which every traversal
//!    claims the vertices of exactly one component for its root, the leader.
//!
//! The check for a literal and its negation sharing a component is done when a literal joins a
//! component, so that [`SccEngine`] can stop at the first contradiction.
mod components;
mod finishing_order;

use components::ComponentAssignment;
pub use finishing_order::FinishingOrder;
use log::debug;

use crate::basic_types::Decision;
use crate::basic_types::EngineKind;
use crate::basic_types::Instance;
use crate::basic_types::Literal;
use crate::basic_types::Verdict;
use crate::create_statistics_struct;
use crate::engine::ImplicationGraph;

create_statistics_struct!(
    /// Statistics of the last decision made by an [`SccEngine`].
    SccStatistics {
        /// The number of literals in the implication graph
        num_vertices: usize,
        /// The number of implications in the implication graph
        num_edges: usize,
        /// The number of components which were (at least partially) discovered
        num_components: usize,
        /// Whether the second pass stopped at a contradiction
        stopped_early: bool,
});

/// The complete strongly connected component decomposition of an [`ImplicationGraph`].
///
/// Unlike [`SccEngine::decide`], computing the decomposition never stops early, so every vertex
/// is assigned to a component.
#[derive(Debug, Clone)]
pub struct StronglyConnectedComponents {
    finishing_order: FinishingOrder,
    assignment: ComponentAssignment,
}

impl StronglyConnectedComponents {
    pub fn compute(graph: &ImplicationGraph) -> StronglyConnectedComponents {
        let finishing_order = FinishingOrder::compute(&graph.reversed());
        let assignment = ComponentAssignment::run(graph, &finishing_order, false);

        StronglyConnectedComponents {
            finishing_order,
            assignment,
        }
    }

    /// The finishing order of the first pass, computed over the reversed graph.
    pub fn finishing_order(&self) -> &FinishingOrder {
        &self.finishing_order
    }

    /// The leader of the component containing `literal`, or [`None`] if it is not a vertex.
    pub fn leader_of(&self, literal: Literal) -> Option<Literal> {
        self.assignment.leader_of(literal)
    }

    /// The members of the component led by `leader`, in the order in which they joined.
    pub fn component(&self, leader: Literal) -> &[Literal] {
        self.assignment.members(leader)
    }

    /// All components as `(leader, members)`, in the order in which they were discovered.
    pub fn components(&self) -> impl Iterator<Item = (Literal, &[Literal])> + '_ {
        self.assignment
            .leaders()
            .iter()
            .map(|&leader| (leader, self.assignment.members(leader)))
    }

    pub fn num_components(&self) -> usize {
        self.assignment.leaders().len()
    }

    /// A literal which shares its component with its negation, if any.
    pub fn conflicting_literal(&self) -> Option<Literal> {
        self.assignment.contradiction()
    }

    /// Whether no variable has both of its literals in the same component.
    pub fn is_satisfiable(&self) -> bool {
        self.conflicting_literal().is_none()
    }
}

/// Decides instances exactly using Kosaraju's algorithm on the implication graph.
///
/// The engine only keeps the statistics of its last decision; the graph, finishing order and
/// components are created for every call and dropped when it returns.
#[derive(Debug, Default, Clone)]
pub struct SccEngine {
    statistics: SccStatistics,
}

impl SccEngine {
    pub fn new() -> SccEngine {
        SccEngine::default()
    }

    pub fn decide(&mut self, instance: &Instance) -> Decision {
        self.statistics = SccStatistics::default();

        if instance.is_empty() {
            debug!("The instance has no clauses or no variables, it is trivially satisfiable");
            return Decision::new(Verdict::Satisfiable, EngineKind::ImplicationGraph);
        }

        let graph = ImplicationGraph::from_instance(instance);
        let finishing_order = FinishingOrder::compute(&graph.reversed());
        let assignment = ComponentAssignment::run(&graph, &finishing_order, true);

        self.statistics.num_vertices = graph.num_vertices();
        self.statistics.num_edges = graph.num_edges();
        self.statistics.num_components = assignment.leaders().len();

        let verdict = match assignment.contradiction() {
            Some(literal) => {
                debug!(
                    "{literal} and {} share a strongly connected component",
                    !literal
                );
                self.statistics.stopped_early = true;
                Verdict::Unsatisfiable
            }
            None => Verdict::Satisfiable,
        };

        Decision::new(verdict, EngineKind::ImplicationGraph)
    }

    pub fn statistics(&self) -> SccStatistics {
        self.statistics
    }
}
