//! The implication graph of a 2-SAT instance.
//!
//! A clause `(a ∨ b)` is equivalent to the implications `¬a → b` and `¬b → a`: falsifying one of
//! the literals forces the other to be true. The graph has a vertex for every literal mentioned by
//! such an implication and an edge for each implication.
use std::collections::btree_set;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::basic_types::Clause;
use crate::basic_types::DecisionError;
use crate::basic_types::Instance;
use crate::basic_types::Literal;

/// A directed graph over literals, stored as an adjacency map.
///
/// Every vertex is a key of the map, including vertices which only occur as the target of an edge
/// (these have an empty set of successors). Vertices and successors are kept in ascending literal
/// order, which makes every traversal over the graph deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImplicationGraph {
    adjacency: BTreeMap<Literal, BTreeSet<Literal>>,
}

impl ImplicationGraph {
    /// Builds the implication graph of the instance; two edges are added for every clause.
    pub fn from_instance(instance: &Instance) -> ImplicationGraph {
        let mut graph = ImplicationGraph::default();
        for clause in instance.clauses() {
            graph.add_clause(clause);
        }
        graph
    }

    /// Builds the implication graph directly from clauses given as pairs of signed literal codes.
    ///
    /// Fails with [`DecisionError::InvalidLiteral`] if a code is zero or its magnitude exceeds
    /// `num_variables`.
    pub fn from_clauses(
        num_variables: u32,
        clauses: impl IntoIterator<Item = (i32, i32)>,
    ) -> Result<ImplicationGraph, DecisionError> {
        let instance = Instance::from_clauses(num_variables, clauses)?;
        Ok(ImplicationGraph::from_instance(&instance))
    }

    /// Creates the graph with every edge reversed. The vertices are kept, even the ones which do
    /// not have any edges.
    pub fn reversed(&self) -> ImplicationGraph {
        let mut reversed = ImplicationGraph {
            adjacency: self
                .adjacency
                .keys()
                .map(|&vertex| (vertex, BTreeSet::new()))
                .collect(),
        };

        for (from, to) in self.edges() {
            reversed.add_edge(to, from);
        }

        reversed
    }

    fn add_clause(&mut self, clause: Clause) {
        let [a, b] = clause.literals();
        self.add_edge(!a, b);
        self.add_edge(!b, a);
    }

    fn add_edge(&mut self, from: Literal, to: Literal) {
        let _ = self.adjacency.entry(from).or_default().insert(to);
        let _ = self.adjacency.entry(to).or_default();
    }

    /// The vertices of the graph in ascending literal order.
    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = Literal> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn contains_vertex(&self, literal: Literal) -> bool {
        self.adjacency.contains_key(&literal)
    }

    /// The successors of `literal`; empty if the literal is not a vertex of the graph.
    pub fn successors(&self, literal: Literal) -> impl Iterator<Item = Literal> + '_ {
        self.successor_iter(literal).copied()
    }

    /// The successors of `literal` as a nameable iterator, so that it can be stored in the frames
    /// of a depth-first traversal.
    pub(crate) fn successor_iter(&self, literal: Literal) -> btree_set::Iter<'_, Literal> {
        static NO_SUCCESSORS: BTreeSet<Literal> = BTreeSet::new();
        self.adjacency
            .get(&literal)
            .unwrap_or(&NO_SUCCESSORS)
            .iter()
    }

    pub fn contains_edge(&self, from: Literal, to: Literal) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|successors| successors.contains(&to))
    }

    /// All edges `(from, to)` of the graph.
    pub fn edges(&self) -> impl Iterator<Item = (Literal, Literal)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, successors)| successors.iter().map(move |&to| (from, to)))
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }
}
