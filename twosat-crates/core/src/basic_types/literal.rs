use std::fmt::Display;
use std::fmt::Formatter;
use std::num::NonZeroI32;
use std::ops::Not;

use crate::containers::StorageKey;
use crate::twosat_assert_simple;

/// A propositional variable, identified by a 1-indexed id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    id: u32,
}

impl Variable {
    /// Creates the variable with the given id; ids start at 1.
    pub fn new(id: u32) -> Variable {
        twosat_assert_simple!(id > 0, "Variable ids are 1-indexed");
        Variable { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl StorageKey for Variable {
    fn index(&self) -> usize {
        self.id as usize - 1
    }

    fn create_from_index(index: usize) -> Self {
        Variable::new(index as u32 + 1)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

/// A variable with a polarity.
///
/// A literal is stored as its signed integer code: the magnitude is the id of the [`Variable`] and
/// a negative sign denotes negation. Literals are ordered by this signed value, which is the order
/// in which the implication graph is scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    code: NonZeroI32,
}

impl Literal {
    pub fn new(variable: Variable, is_positive: bool) -> Literal {
        let id = i32::try_from(variable.id())
            .expect("variable ids of literals are at most i32::MAX");
        let code = if is_positive { id } else { -id };
        Literal {
            code: NonZeroI32::new(code).expect("variable ids are non-zero"),
        }
    }

    /// Creates the literal from its signed integer code. Returns [`None`] when `code` is zero or
    /// `i32::MIN`, whose negation is not an `i32`.
    ///
    /// No check is performed against the number of variables of an instance; this happens when
    /// the literal is added to an [`Instance`][crate::Instance].
    pub fn from_code(code: i32) -> Option<Literal> {
        NonZeroI32::new(code)
            .filter(|code| code.get() != i32::MIN)
            .map(|code| Literal { code })
    }

    pub fn code(&self) -> i32 {
        self.code.get()
    }

    pub fn variable(&self) -> Variable {
        Variable::new(self.code.unsigned_abs().get())
    }

    pub fn is_positive(&self) -> bool {
        self.code.is_positive()
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal { code: -self.code }
    }
}

impl From<NonZeroI32> for Literal {
    fn from(code: NonZeroI32) -> Self {
        Literal { code }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_flips_the_sign_only() {
        let literal = Literal::from_code(7).unwrap();
        let negated = !literal;

        assert_eq!(negated.code(), -7);
        assert_eq!(negated.variable(), literal.variable());
        assert!(!negated.is_positive());
        assert_eq!(!negated, literal);
    }

    #[test]
    fn zero_is_not_a_literal() {
        assert!(Literal::from_code(0).is_none());
    }

    #[test]
    fn literal_without_negation_is_not_a_literal() {
        assert!(Literal::from_code(i32::MIN).is_none());

        let largest = Literal::from_code(i32::MAX).unwrap();
        assert_eq!((!largest).code(), -i32::MAX);
        assert_eq!(largest.variable().id(), i32::MAX as u32);
    }

    #[test]
    fn literals_are_ordered_by_signed_value() {
        let mut literals = [3, -1, 2, -3]
            .into_iter()
            .map(|code| Literal::from_code(code).unwrap())
            .collect::<Vec<_>>();
        literals.sort();

        assert_eq!(
            literals.iter().map(Literal::code).collect::<Vec<_>>(),
            vec![-3, -1, 2, 3]
        );
    }

    #[test]
    fn variables_are_stored_from_index_zero() {
        let variable = Variable::new(1);
        assert_eq!(variable.index(), 0);
        assert_eq!(Variable::create_from_index(4), Variable::new(5));
    }
}
