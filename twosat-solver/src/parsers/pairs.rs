//! A parser for the plain pairs format: the first non-empty line holds the number of variables,
//! and every following non-empty line holds the two signed literal codes of one clause.
//!
//! ```text
//! 3
//! 1 -2
//! -1 3
//! ```
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use thiserror::Error;
use twosat_core::DecisionError;
use twosat_core::Instance;

#[derive(Debug, Error)]
pub enum PairsParseError {
    #[error("failed to read file")]
    Io(#[from] std::io::Error),

    #[error("missing the line with the number of variables")]
    MissingHeader,

    #[error("'{0}' is not a valid number of variables")]
    InvalidHeader(String),

    #[error("line {line}: '{token}' is not a literal")]
    InvalidLiteral { line: usize, token: String },

    #[error("line {line}: expected two literals, found {count}")]
    WrongLiteralCount { line: usize, count: usize },

    #[error("line {line}: {source}")]
    InvalidClause {
        line: usize,
        #[source]
        source: DecisionError,
    },
}

/// Reads an [`Instance`] in the pairs format. Lines are numbered from one, and blank lines are
/// skipped.
pub fn parse_pairs(source: impl Read) -> Result<Instance, PairsParseError> {
    let reader = BufReader::new(source);
    let mut builder = None;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(builder) = builder.as_mut() else {
            let num_variables = line
                .parse::<u32>()
                .map_err(|_| PairsParseError::InvalidHeader(line.to_owned()))?;
            builder = Some(Instance::builder(num_variables));
            continue;
        };

        let (a, b) = parse_clause(line, line_number)?;
        let _ = builder
            .add_clause(a, b)
            .map_err(|source| PairsParseError::InvalidClause {
                line: line_number,
                source,
            })?;
    }

    builder
        .map(|builder| builder.build())
        .ok_or(PairsParseError::MissingHeader)
}

fn parse_clause(line: &str, line_number: usize) -> Result<(i32, i32), PairsParseError> {
    let literals = line
        .split_ascii_whitespace()
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| PairsParseError::InvalidLiteral {
                    line: line_number,
                    token: token.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match literals[..] {
        [a, b] => Ok((a, b)),
        _ => Err(PairsParseError::WrongLiteralCount {
            line: line_number,
            count: literals.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Instance, PairsParseError> {
        parse_pairs(source.as_bytes())
    }

    #[test]
    fn clauses_follow_the_number_of_variables() {
        let instance = parse("3\n1 -2\n-1 3\n").expect("valid instance");

        assert_eq!(instance.num_variables(), 3);
        assert_eq!(instance.num_clauses(), 2);
    }

    #[test]
    fn blank_lines_and_surrounding_whitespace_are_skipped() {
        let instance = parse("\n  2  \n\n 1   2 \n\n-1 -2").expect("valid instance");

        assert_eq!(instance.num_variables(), 2);
        assert_eq!(instance.num_clauses(), 2);
    }

    #[test]
    fn header_without_clauses_is_an_empty_instance() {
        let instance = parse("4\n").expect("valid instance");

        assert_eq!(instance.num_variables(), 4);
        assert!(instance.is_empty());
    }

    #[test]
    fn empty_source_has_no_header() {
        assert!(matches!(parse("\n\n"), Err(PairsParseError::MissingHeader)));
    }

    #[test]
    fn negative_number_of_variables_is_rejected() {
        assert!(matches!(
            parse("-2\n1 2\n"),
            Err(PairsParseError::InvalidHeader(header)) if header == "-2"
        ));
    }

    #[test]
    fn non_numeric_literal_is_reported_with_its_line() {
        assert!(matches!(
            parse("2\n1 2\n\n1 x\n"),
            Err(PairsParseError::InvalidLiteral { line: 4, token }) if token == "x"
        ));
    }

    #[test]
    fn clause_with_one_literal_is_rejected() {
        assert!(matches!(
            parse("2\n1\n"),
            Err(PairsParseError::WrongLiteralCount { line: 2, count: 1 })
        ));
    }

    #[test]
    fn clause_with_three_literals_is_rejected() {
        assert!(matches!(
            parse("3\n1 2 3\n"),
            Err(PairsParseError::WrongLiteralCount { line: 2, count: 3 })
        ));
    }

    #[test]
    fn literal_outside_the_variable_range_is_rejected() {
        assert!(matches!(
            parse("2\n1 2\n0 1\n"),
            Err(PairsParseError::InvalidClause {
                line: 3,
                source: DecisionError::InvalidLiteral {
                    literal: 0,
                    num_variables: 2
                }
            })
        ));
    }
}
