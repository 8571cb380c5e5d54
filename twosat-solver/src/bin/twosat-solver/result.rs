use std::fmt::Display;

use thiserror::Error;
use twosat_solver::parsers::dimacs::DimacsParseError;
use twosat_solver::parsers::pairs::PairsParseError;

pub(crate) type TwoSatResult<T> = Result<T, TwoSatError>;

#[derive(Error, Debug)]
pub(crate) enum TwoSatError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The file {0} is not supported.")]
    InvalidInstanceFile(String),
    #[error("The dimacs file was invalid, more details: {0}")]
    InvalidDimacs(#[from] DimacsParseError),
    #[error("The pairs file was invalid, more details: {0}")]
    InvalidPairs(#[from] PairsParseError),
}

impl TwoSatError {
    pub(crate) fn invalid_instance(path: impl Display) -> Self {
        Self::InvalidInstanceFile(format!("{path}"))
    }
}
