use crate::basic_types::ClauseId;
use crate::basic_types::Instance;
use crate::basic_types::Variable;
use crate::containers::KeyedVec;

/// The clauses a walk has to satisfy, indexed by the variables which occur in them.
///
/// A clause is listed once for every distinct variable it mentions, regardless of polarity; after
/// flipping a variable these are exactly the clauses whose truth value may have changed.
#[derive(Debug, Clone)]
pub(crate) struct ClauseOccurrences {
    clauses: Vec<ClauseId>,
    occurrences: KeyedVec<Variable, Vec<ClauseId>>,
    num_occurring_variables: usize,
}

impl ClauseOccurrences {
    pub(crate) fn new(instance: &Instance, clauses: &[ClauseId]) -> ClauseOccurrences {
        let mut occurrences: KeyedVec<Variable, Vec<ClauseId>> =
            KeyedVec::with_len(instance.num_variables() as usize, Vec::new());

        for &clause_id in clauses {
            for variable in instance.clause(clause_id).variables() {
                occurrences[variable].push(clause_id);
            }
        }

        let num_occurring_variables = occurrences
            .iter()
            .filter(|clauses| !clauses.is_empty())
            .count();

        ClauseOccurrences {
            clauses: clauses.to_vec(),
            occurrences,
            num_occurring_variables,
        }
    }

    pub(crate) fn clauses(&self) -> &[ClauseId] {
        &self.clauses
    }

    pub(crate) fn of(&self, variable: Variable) -> &[ClauseId] {
        &self.occurrences[variable]
    }

    /// The number of variables which occur in at least one of the clauses.
    pub(crate) fn num_occurring_variables(&self) -> usize {
        self.num_occurring_variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clauses_are_listed_once_per_distinct_variable() {
        let instance = Instance::from_clauses(3, [(1, -1), (1, 2), (2, 2)]).unwrap();
        let clause_ids = instance.clause_ids().collect::<Vec<_>>();
        let occurrences = ClauseOccurrences::new(&instance, &clause_ids);

        assert_eq!(occurrences.of(Variable::new(1)), &clause_ids[..2]);
        assert_eq!(occurrences.of(Variable::new(2)), &clause_ids[1..]);
        assert!(occurrences.of(Variable::new(3)).is_empty());
        assert_eq!(occurrences.num_occurring_variables(), 2);
    }

    #[test]
    fn only_the_given_clauses_are_indexed() {
        let instance = Instance::from_clauses(3, [(1, 2), (-2, 3)]).unwrap();
        let clause_ids = instance.clause_ids().skip(1).collect::<Vec<_>>();
        let occurrences = ClauseOccurrences::new(&instance, &clause_ids);

        assert!(occurrences.of(Variable::new(1)).is_empty());
        assert_eq!(occurrences.clauses(), clause_ids.as_slice());
        assert_eq!(occurrences.num_occurring_variables(), 2);
    }
}
