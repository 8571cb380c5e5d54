use crate::basic_types::ClauseId;
use crate::basic_types::Random;
use crate::containers::SparseSet;
use crate::containers::StorageKey;

/// The clauses which are falsified by the current assignment of a walk.
///
/// Membership is updated one clause at a time, and a member can be sampled uniformly at random
/// in constant time.
#[derive(Debug, Clone)]
pub(crate) struct UnsatisfiedClauses {
    clauses: SparseSet<ClauseId>,
}

impl UnsatisfiedClauses {
    pub(crate) fn new(num_clauses: usize) -> UnsatisfiedClauses {
        UnsatisfiedClauses {
            clauses: SparseSet::empty(num_clauses, |clause_id: &ClauseId| clause_id.index()),
        }
    }

    /// Records whether `clause_id` is satisfied by the current assignment.
    pub(crate) fn update(&mut self, clause_id: ClauseId, is_satisfied: bool) {
        if is_satisfied {
            self.clauses.remove(&clause_id);
        } else {
            self.clauses.insert(clause_id);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.clauses.len()
    }

    pub(crate) fn contains(&self, clause_id: ClauseId) -> bool {
        self.clauses.contains(&clause_id)
    }

    /// Picks one of the unsatisfied clauses uniformly at random, or [`None`] if every clause is
    /// satisfied.
    pub(crate) fn choose(&self, random: &mut dyn Random) -> Option<ClauseId> {
        if self.is_empty() {
            return None;
        }
        let index = random.generate_usize_in_range(0..self.len());
        Some(*self.clauses.get(index))
    }
}
