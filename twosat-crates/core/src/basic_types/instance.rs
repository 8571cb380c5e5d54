use super::Assignment;
use super::Clause;
use super::ClauseId;
use super::DecisionError;
use super::Literal;
use super::Variable;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// A 2-SAT instance: a number of variables and a set of [`Clause`]s over them.
///
/// Instances are created through an [`InstanceBuilder`] (or [`Instance::from_clauses`]), which
/// validates every literal and drops duplicate clauses. Afterwards the instance is immutable.
#[derive(Debug, Clone)]
pub struct Instance {
    num_variables: u32,
    clauses: KeyedVec<ClauseId, Clause>,
}

impl Instance {
    pub fn builder(num_variables: u32) -> InstanceBuilder {
        InstanceBuilder {
            num_variables,
            clauses: KeyedVec::default(),
            seen: HashSet::default(),
        }
    }

    /// Creates an instance over `num_variables` variables from clauses given as pairs of signed
    /// literal codes.
    ///
    /// # Example
    /// ```rust
    /// # use twosat_core::Instance;
    /// let instance = Instance::from_clauses(2, [(1, 2), (-1, -2), (2, 1)]).expect("valid literals");
    ///
    /// // `(2 ∨ 1)` is the same clause as `(1 ∨ 2)`
    /// assert_eq!(instance.num_clauses(), 2);
    /// ```
    pub fn from_clauses(
        num_variables: u32,
        clauses: impl IntoIterator<Item = (i32, i32)>,
    ) -> Result<Instance, DecisionError> {
        let mut builder = Instance::builder(num_variables);
        for (a, b) in clauses {
            let _ = builder.add_clause(a, b)?;
        }
        Ok(builder.build())
    }

    pub fn num_variables(&self) -> u32 {
        self.num_variables
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// An instance without variables or without clauses; it is trivially satisfiable.
    pub fn is_empty(&self) -> bool {
        self.num_variables == 0 || self.clauses.is_empty()
    }

    pub fn clause(&self, clause_id: ClauseId) -> Clause {
        self.clauses[clause_id]
    }

    pub fn clauses(&self) -> impl Iterator<Item = Clause> + '_ {
        self.clauses.iter().copied()
    }

    pub fn clause_ids(&self) -> impl Iterator<Item = ClauseId> {
        self.clauses.keys()
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> {
        (0..self.num_variables as usize).map(Variable::create_from_index)
    }

    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.is_satisfied_by(assignment))
    }
}

/// Collects the clauses of an [`Instance`], validating each literal as it is added.
#[derive(Debug)]
pub struct InstanceBuilder {
    num_variables: u32,
    clauses: KeyedVec<ClauseId, Clause>,
    seen: HashSet<Clause>,
}

impl InstanceBuilder {
    pub fn num_variables(&self) -> u32 {
        self.num_variables
    }

    /// Adds the clause `(a ∨ b)` given by signed literal codes.
    ///
    /// Returns `false` if the clause (in either literal order) was already present, in which case
    /// the instance is left unchanged. Fails with [`DecisionError::InvalidLiteral`] if either code
    /// is zero or refers to a variable beyond the number of variables.
    pub fn add_clause(&mut self, a: i32, b: i32) -> Result<bool, DecisionError> {
        let a = self.literal(a)?;
        let b = self.literal(b)?;
        let clause = Clause::new(a, b);

        if self.seen.insert(clause) {
            let _ = self.clauses.push(clause);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn build(self) -> Instance {
        Instance {
            num_variables: self.num_variables,
            clauses: self.clauses,
        }
    }

    fn literal(&self, code: i32) -> Result<Literal, DecisionError> {
        Literal::from_code(code)
            .filter(|literal| literal.variable().id() <= self.num_variables)
            .ok_or(DecisionError::InvalidLiteral {
                literal: code,
                num_variables: self.num_variables,
            })
    }
}
