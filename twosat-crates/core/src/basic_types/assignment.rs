use super::Literal;
use super::Random;
use super::Variable;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// A total mapping from the variables of an instance to truth values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: KeyedVec<Variable, bool>,
}

impl Assignment {
    /// Creates the assignment which maps all `num_variables` variables to `false`.
    pub fn all_false(num_variables: u32) -> Assignment {
        Assignment {
            values: KeyedVec::with_len(num_variables as usize, false),
        }
    }

    /// Draws a value for every variable, each `true` with probability 0.5.
    pub fn random(num_variables: u32, random: &mut dyn Random) -> Assignment {
        let mut assignment = Assignment::all_false(num_variables);
        assignment
            .values
            .iter_mut()
            .for_each(|value| *value = random.generate_bool(0.5));
        assignment
    }

    /// Creates an assignment from the truth values of variables `1..=values.len()`.
    pub fn from_values(values: impl IntoIterator<Item = bool>) -> Assignment {
        let mut assignment = Assignment {
            values: KeyedVec::default(),
        };
        for value in values {
            let _ = assignment.values.push(value);
        }
        assignment
    }

    pub fn num_variables(&self) -> u32 {
        self.values.len() as u32
    }

    pub fn value(&self, variable: Variable) -> bool {
        self.values[variable]
    }

    pub fn set(&mut self, variable: Variable, value: bool) {
        self.values[variable] = value;
    }

    pub fn flip(&mut self, variable: Variable) {
        self.values[variable] = !self.values[variable];
    }

    pub fn is_literal_true(&self, literal: Literal) -> bool {
        self.value(literal.variable()) == literal.is_positive()
    }

    /// The literals which are true under this assignment, one per variable.
    pub fn true_literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.values
            .enumerate()
            .map(|(variable, value)| Literal::new(variable, *value))
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> {
        (0..self.values.len()).map(Variable::create_from_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::random::tests::TestRandom;

    #[test]
    fn literal_truth_follows_polarity() {
        let assignment = Assignment::from_values([true, false]);
        let x1 = Variable::new(1);
        let x2 = Variable::new(2);

        assert!(assignment.is_literal_true(Literal::new(x1, true)));
        assert!(!assignment.is_literal_true(Literal::new(x1, false)));
        assert!(assignment.is_literal_true(Literal::new(x2, false)));
    }

    #[test]
    fn flip_negates_a_single_variable() {
        let mut assignment = Assignment::all_false(3);
        assignment.flip(Variable::new(2));

        assert_eq!(assignment, Assignment::from_values([false, true, false]));
    }

    #[test]
    fn random_assignment_draws_one_bool_per_variable() {
        let mut random = TestRandom {
            bools: vec![true, false, true],
            ..Default::default()
        };
        let assignment = Assignment::random(3, &mut random);

        assert_eq!(assignment, Assignment::from_values([true, false, true]));
        assert!(random.bools.is_empty());
    }

    #[test]
    fn true_literals_cover_every_variable() {
        let assignment = Assignment::from_values([false, true]);
        let codes = assignment
            .true_literals()
            .map(|literal| literal.code())
            .collect::<Vec<_>>();

        assert_eq!(codes, vec![-1, 2]);
    }
}
