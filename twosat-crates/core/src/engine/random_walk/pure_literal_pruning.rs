use log::debug;

use crate::basic_types::Assignment;
use crate::basic_types::ClauseId;
use crate::basic_types::Instance;
use crate::basic_types::Literal;
use crate::basic_types::Variable;
use crate::containers::KeyedVec;

/// The polarities in which a variable occurs in the clauses of an instance.
#[derive(Debug, Clone, Copy, Default)]
struct Occurrence {
    positive: bool,
    negative: bool,
}

/// The outcome of a single pass of pure literal elimination over an [`Instance`].
///
/// A literal is pure if its variable never occurs with the opposite polarity. Setting a pure
/// literal to true satisfies every clause of its variable without falsifying any other clause, so
/// those clauses can be left out of the random walk. The pass is not repeated on the clauses that
/// remain, even if removing clauses makes other literals pure.
#[derive(Debug, Clone)]
pub struct PureLiteralPruning {
    /// The pure literals in increasing order of their variables
    pure_literals: Vec<Literal>,
    /// The clauses in which no pure literal occurs
    remaining_clauses: Vec<ClauseId>,
}

impl PureLiteralPruning {
    pub fn compute(instance: &Instance) -> PureLiteralPruning {
        let mut occurrences: KeyedVec<Variable, Occurrence> =
            KeyedVec::with_len(instance.num_variables() as usize, Occurrence::default());

        for clause in instance.clauses() {
            for literal in clause.literals() {
                let occurrence = &mut occurrences[literal.variable()];
                if literal.is_positive() {
                    occurrence.positive = true;
                } else {
                    occurrence.negative = true;
                }
            }
        }

        let is_pure = |variable: Variable| {
            let occurrence = occurrences[variable];
            occurrence.positive != occurrence.negative
        };

        let pure_literals = occurrences
            .enumerate()
            .filter_map(|(variable, occurrence)| {
                is_pure(variable).then(|| Literal::new(variable, occurrence.positive))
            })
            .collect::<Vec<_>>();
        let remaining_clauses = instance
            .clause_ids()
            .filter(|&clause_id| !instance.clause(clause_id).variables().any(is_pure))
            .collect::<Vec<_>>();

        debug!(
            "Pure literal pruning fixed {} variables and removed {} of {} clauses",
            pure_literals.len(),
            instance.num_clauses() - remaining_clauses.len(),
            instance.num_clauses()
        );

        PureLiteralPruning {
            pure_literals,
            remaining_clauses,
        }
    }

    /// The pruning which fixes nothing and keeps every clause.
    pub fn disabled(instance: &Instance) -> PureLiteralPruning {
        PureLiteralPruning {
            pure_literals: Vec::new(),
            remaining_clauses: instance.clause_ids().collect(),
        }
    }

    pub fn pure_literals(&self) -> &[Literal] {
        &self.pure_literals
    }

    pub fn remaining_clauses(&self) -> &[ClauseId] {
        &self.remaining_clauses
    }

    /// Sets every pure literal of the pruning to true in `assignment`.
    pub fn impose(&self, assignment: &mut Assignment) {
        for literal in &self.pure_literals {
            assignment.set(literal.variable(), literal.is_positive());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pruning(num_variables: u32, clauses: &[(i32, i32)]) -> (Instance, PureLiteralPruning) {
        let instance = Instance::from_clauses(num_variables, clauses.iter().copied()).unwrap();
        let pruning = PureLiteralPruning::compute(&instance);
        (instance, pruning)
    }

    fn pure_codes(pruning: &PureLiteralPruning) -> Vec<i32> {
        pruning
            .pure_literals()
            .iter()
            .map(|literal| literal.code())
            .collect()
    }

    #[test]
    fn variables_in_a_single_polarity_are_pure() {
        let (_, pruning) = pruning(3, &[(1, -2), (1, 3), (-3, -2)]);

        assert_eq!(pure_codes(&pruning), vec![1, -2]);
        assert!(pruning.remaining_clauses().is_empty());
    }

    #[test]
    fn clauses_without_pure_literals_remain() {
        let (instance, pruning) = pruning(3, &[(1, 2), (-1, -2), (2, 3)]);

        assert_eq!(pure_codes(&pruning), vec![3]);
        let remaining = pruning
            .remaining_clauses()
            .iter()
            .map(|&clause_id| instance.clause(clause_id).to_string())
            .collect::<Vec<_>>();
        assert_eq!(remaining, vec!["(1 ∨ 2)", "(-2 ∨ -1)"]);
    }

    #[test]
    fn pruning_is_a_single_pass() {
        // Without (1 ∨ 2), variable 2 would only occur negatively; it is not fixed regardless.
        let (_, pruning) = pruning(3, &[(1, 2), (-2, 3), (-2, -3)]);

        assert_eq!(pure_codes(&pruning), vec![1]);
        assert_eq!(pruning.remaining_clauses().len(), 2);
    }

    #[test]
    fn tautology_does_not_make_a_variable_pure() {
        let (_, pruning) = pruning(1, &[(1, -1)]);

        assert!(pruning.pure_literals().is_empty());
        assert_eq!(pruning.remaining_clauses().len(), 1);
    }

    #[test]
    fn unused_variables_are_not_fixed() {
        let (_, pruning) = pruning(4, &[(2, 2)]);

        assert_eq!(pure_codes(&pruning), vec![2]);
    }

    #[test]
    fn imposing_sets_pure_literals_to_true() {
        let (instance, pruning) = pruning(3, &[(1, -2), (1, 3), (-3, -2)]);
        let mut assignment = Assignment::from_values([false, true, true]);

        pruning.impose(&mut assignment);

        assert_eq!(assignment, Assignment::from_values([true, false, true]));
        assert!(instance.is_satisfied_by(&assignment));
    }

    #[test]
    fn disabled_pruning_keeps_every_clause() {
        let instance = Instance::from_clauses(2, [(1, 2), (1, -2)]).unwrap();
        let pruning = PureLiteralPruning::disabled(&instance);

        assert!(pruning.pure_literals().is_empty());
        assert_eq!(pruning.remaining_clauses().len(), 2);
    }
}
