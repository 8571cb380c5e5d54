use std::collections::btree_set;

use log::trace;

use crate::basic_types::Literal;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::engine::ImplicationGraph;
use crate::twosat_assert_eq_simple;

/// The post-order in which a depth-first traversal finishes the vertices of a graph.
///
/// The `i`-th finished vertex has rank `i + 1`, so the ranks of a graph with `n` vertices are
/// exactly `1..=n`.
#[derive(Debug, Clone, Default)]
pub struct FinishingOrder {
    /// The vertices in the order in which they were finished
    order: Vec<Literal>,
    /// Maps each vertex to the index at which it occurs in `order`
    positions: HashMap<Literal, usize>,
}

/// A vertex on the work stack together with the successors which are still to be explored.
#[derive(Debug)]
struct Frame<'graph> {
    vertex: Literal,
    successors: btree_set::Iter<'graph, Literal>,
}

impl<'graph> Frame<'graph> {
    fn new(graph: &'graph ImplicationGraph, vertex: Literal) -> Self {
        Frame {
            vertex,
            successors: graph.successor_iter(vertex),
        }
    }
}

impl FinishingOrder {
    /// Performs the first pass of Kosaraju's algorithm over `graph`.
    ///
    /// The outer loop scans the vertices in decreasing literal value and starts a traversal from
    /// every vertex which has not been explored yet. A vertex is finished once all of its
    /// unexplored successors have been finished.
    pub fn compute(graph: &ImplicationGraph) -> FinishingOrder {
        let mut explored: HashSet<Literal> = HashSet::default();
        let mut order = Vec::with_capacity(graph.num_vertices());
        let mut stack: Vec<Frame<'_>> = Vec::new();

        for root in graph.vertices().rev() {
            if !explored.insert(root) {
                continue;
            }
            stack.push(Frame::new(graph, root));

            while let Some(frame) = stack.last_mut() {
                match frame.successors.next() {
                    Some(&successor) => {
                        if explored.insert(successor) {
                            stack.push(Frame::new(graph, successor));
                        }
                    }
                    None => {
                        order.push(frame.vertex);
                        let _ = stack.pop();
                    }
                }
            }
        }

        twosat_assert_eq_simple!(order.len(), graph.num_vertices());
        trace!("Finished {} vertices in the first pass", order.len());

        let positions = order
            .iter()
            .enumerate()
            .map(|(position, &vertex)| (vertex, position))
            .collect();

        FinishingOrder { order, positions }
    }

    /// The rank of `literal` in `[1, len]`, or [`None`] if it was not part of the traversed
    /// graph.
    pub fn rank(&self, literal: Literal) -> Option<usize> {
        self.positions.get(&literal).map(|position| position + 1)
    }

    /// The vertex with the given rank.
    pub fn vertex_with_rank(&self, rank: usize) -> Option<Literal> {
        rank.checked_sub(1)
            .and_then(|position| self.order.get(position))
            .copied()
    }

    /// The vertices from the last finished to the first finished.
    pub fn by_decreasing_rank(&self) -> impl Iterator<Item = Literal> + '_ {
        self.order.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(code: i32) -> Literal {
        Literal::from_code(code).unwrap()
    }

    fn ranks_of(order: &FinishingOrder) -> Vec<(i32, usize)> {
        (1..=order.len())
            .map(|rank| (order.vertex_with_rank(rank).unwrap().code(), rank))
            .collect()
    }

    #[test]
    fn ranks_form_a_bijection() {
        let graph =
            ImplicationGraph::from_clauses(4, [(1, 2), (-1, 3), (-3, -4), (4, 2), (-2, 1)])
                .unwrap();
        let order = FinishingOrder::compute(&graph.reversed());

        assert_eq!(order.len(), graph.num_vertices());
        let mut ranks = graph
            .vertices()
            .map(|vertex| order.rank(vertex).expect("every vertex is ranked"))
            .collect::<Vec<_>>();
        ranks.sort();
        assert_eq!(ranks, (1..=graph.num_vertices()).collect::<Vec<_>>());
    }

    #[test]
    fn chain_is_finished_in_post_order() {
        // (-1 ∨ 2) and (-2 ∨ 3) give 1 → 2 → 3 and -3 → -2 → -1.
        let graph = ImplicationGraph::from_clauses(3, [(-1, 2), (-2, 3)]).unwrap();
        let order = FinishingOrder::compute(&graph);

        // The scan starts at 3, which has no successors. Every later root only has successors
        // which were explored before, so each vertex finishes right after it is started.
        assert_eq!(
            ranks_of(&order),
            vec![(3, 1), (2, 2), (1, 3), (-1, 4), (-2, 5), (-3, 6)]
        );
    }

    #[test]
    fn successors_finish_before_their_root() {
        let graph = ImplicationGraph::from_clauses(3, [(-3, 1), (-1, 2)]).unwrap();
        // 3 → 1 → 2, scanning starts at 3.
        let order = FinishingOrder::compute(&graph);

        assert!(order.rank(literal(2)) < order.rank(literal(1)));
        assert!(order.rank(literal(1)) < order.rank(literal(3)));
    }

    #[test]
    fn long_chain_does_not_exhaust_the_call_stack() {
        let num_variables = 200_000;
        let clauses = (1..num_variables as i32).map(|variable| (-variable, variable + 1));
        let graph = ImplicationGraph::from_clauses(num_variables, clauses).unwrap();

        let order = FinishingOrder::compute(&graph.reversed());

        assert_eq!(order.len(), 2 * num_variables as usize);
    }

    #[test]
    fn unknown_literal_has_no_rank() {
        let graph = ImplicationGraph::from_clauses(2, [(1, 1)]).unwrap();
        let order = FinishingOrder::compute(&graph);

        assert_eq!(order.rank(literal(2)), None);
        assert_eq!(order.vertex_with_rank(0), None);
    }
}
