use std::fmt::Display;
use std::fmt::Formatter;

use super::Assignment;
use super::Literal;
use super::Random;
use super::Variable;
use crate::containers::StorageKey;

/// A disjunction of exactly two literals.
///
/// The clause is an unordered pair: the literals are stored with the smaller signed value first,
/// so `(a ∨ b)` and `(b ∨ a)` compare and hash equal. Both literals may be the same, in which case
/// the clause forces that literal to be true.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause {
    first: Literal,
    second: Literal,
}

impl Clause {
    pub fn new(a: Literal, b: Literal) -> Clause {
        if a <= b {
            Clause {
                first: a,
                second: b,
            }
        } else {
            Clause {
                first: b,
                second: a,
            }
        }
    }

    pub fn first(&self) -> Literal {
        self.first
    }

    pub fn second(&self) -> Literal {
        self.second
    }

    pub fn literals(&self) -> [Literal; 2] {
        [self.first, self.second]
    }

    /// The distinct variables of the clause; a single variable if both literals share it.
    pub fn variables(&self) -> impl Iterator<Item = Variable> {
        let first = self.first.variable();
        let second = self.second.variable();
        std::iter::once(first).chain((first != second).then_some(second))
    }

    /// A clause of the form `(l ∨ ¬l)`, which every assignment satisfies.
    pub fn is_tautology(&self) -> bool {
        self.first == !self.second
    }

    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        assignment.is_literal_true(self.first) || assignment.is_literal_true(self.second)
    }

    /// Picks either literal with equal probability.
    pub fn random_literal(&self, random: &mut dyn Random) -> Literal {
        if random.generate_bool(0.5) {
            self.first
        } else {
            self.second
        }
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} ∨ {})", self.first, self.second)
    }
}

/// The position of a clause within an [`Instance`][crate::Instance].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClauseId {
    id: u32,
}

impl StorageKey for ClauseId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        ClauseId { id: index as u32 }
    }
}

impl Display for ClauseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}
