use thiserror::Error;

/// The errors which can occur when an instance is constructed or decided.
///
/// Note that an instance without variables or without clauses is not an error; it is trivially
/// satisfiable and decided as such.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionError {
    #[error(
        "literal {literal} is invalid for an instance over {num_variables} variables; literals should be non-zero with magnitude at most the number of variables"
    )]
    InvalidLiteral { literal: i32, num_variables: u32 },
}
