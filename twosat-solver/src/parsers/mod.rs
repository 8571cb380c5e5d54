pub mod dimacs;
pub mod pairs;
