use std::collections::btree_set;

use log::trace;

use super::FinishingOrder;
use crate::basic_types::Literal;
use crate::containers::HashMap;
use crate::engine::ImplicationGraph;
use crate::twosat_assert_eq_moderate;

/// The second pass of Kosaraju's algorithm: every vertex is assigned the leader of its strongly
/// connected component.
///
/// The pass traverses the original graph, starting from the unvisited vertices in decreasing rank
/// of the [`FinishingOrder`] computed on the reversed graph. Every traversal claims all of the
/// unvisited vertices it reaches for its root, the leader.
#[derive(Debug, Clone, Default)]
pub(crate) struct ComponentAssignment {
    leader_of: HashMap<Literal, Literal>,
    /// The leaders in the order in which their components were discovered
    leaders: Vec<Literal>,
    members: HashMap<Literal, Vec<Literal>>,
    /// The first literal which joined a component that already contained its negation
    contradiction: Option<Literal>,
}

impl ComponentAssignment {
    /// Runs the second pass. If `stop_at_contradiction` is set, the pass ends as soon as a literal
    /// and its negation are found to share a component, leaving the assignment incomplete.
    pub(crate) fn run(
        graph: &ImplicationGraph,
        finishing_order: &FinishingOrder,
        stop_at_contradiction: bool,
    ) -> ComponentAssignment {
        let mut assignment = ComponentAssignment::default();
        let mut stack: Vec<btree_set::Iter<'_, Literal>> = Vec::new();

        for leader in finishing_order.by_decreasing_rank() {
            if assignment.leader_of.contains_key(&leader) {
                continue;
            }
            assignment.leaders.push(leader);
            if assignment.join(leader, leader) && stop_at_contradiction {
                return assignment;
            }
            stack.push(graph.successor_iter(leader));

            while let Some(successors) = stack.last_mut() {
                match successors.next() {
                    Some(&successor) => {
                        if assignment.leader_of.contains_key(&successor) {
                            continue;
                        }
                        if assignment.join(successor, leader) && stop_at_contradiction {
                            return assignment;
                        }
                        stack.push(graph.successor_iter(successor));
                    }
                    None => {
                        let _ = stack.pop();
                    }
                }
            }
        }

        twosat_assert_eq_moderate!(assignment.leader_of.len(), finishing_order.len());
        trace!(
            "Assigned {} vertices to {} components",
            assignment.leader_of.len(),
            assignment.leaders.len()
        );

        assignment
    }

    /// Adds `literal` to the component of `leader`; returns whether the negation of `literal` is
    /// already a member of that component.
    fn join(&mut self, literal: Literal, leader: Literal) -> bool {
        let _ = self.leader_of.insert(literal, leader);
        self.members.entry(leader).or_default().push(literal);

        let contradicts = self.leader_of.get(&!literal) == Some(&leader);
        if contradicts && self.contradiction.is_none() {
            self.contradiction = Some(literal);
        }
        contradicts
    }

    pub(crate) fn leader_of(&self, literal: Literal) -> Option<Literal> {
        self.leader_of.get(&literal).copied()
    }

    pub(crate) fn leaders(&self) -> &[Literal] {
        &self.leaders
    }

    pub(crate) fn members(&self, leader: Literal) -> &[Literal] {
        self.members
            .get(&leader)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn contradiction(&self) -> Option<Literal> {
        self.contradiction
    }
}
