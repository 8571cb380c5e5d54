//! Reading 2-SAT instances from files, for the `twosat-solver` binary and for anyone who wants to
//! decide the same files programmatically.
//!
//! Two formats are supported: DIMACS CNF restricted to clauses of one or two literals (see
//! [`parsers::dimacs`]), and the plain pairs format (see [`parsers::pairs`]). Both produce a
//! [`twosat_core::Instance`], which is decided with the engines of [`twosat_core`].
pub mod parsers;

pub use twosat_core as core;
