/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Single-source shortest paths on graphs with possibly negative weights.
//!
//! The [Bellman–Ford algorithm](bellman_ford) computes, for a given source,
//! the distance and the predecessor of every node reachable from the source,
//! or fails with a [`NegativeCycle`] if a cycle of negative weight is
//! reachable from the source. On unweighted graphs every arc has weight one,
//! so distances are hop counts.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use digraph::graphs::vec_graph::VecGraph;
//! use digraph_algo::shortest_paths::*;
//!
//! let graph = VecGraph::from_weighted_arcs([((0, 1), 4), ((0, 2), 1), ((2, 1), -2), ((1, 3), 1)]);
//!
//! let sp = bellman_ford(&graph, 0, no_logging![])?;
//!
//! assert_eq!(sp.distance(1), Some(-1));
//! assert_eq!(sp.path_to(3), vec![0, 2, 1, 3]);
//! assert_eq!(sp.display_path(3), "0 2 1 3");
//! # Ok::<(), NegativeCycle>(())
//! ```

mod bellman_ford;
pub use bellman_ford::*;

use digraph::graphs::vec_graph::{GraphFlags, VecGraph};
use itertools::Itertools;
use nonmax::NonMaxUsize;
use sux::bits::BitVec;

/// The error returned when a negative-weight cycle is reachable from the
/// source of a shortest-path computation.
///
/// The arc is a witness: after `n - 1` relaxation rounds it still improves
/// the distance of its target.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("negative-weight cycle reachable from node {start}: arc ({}, {}) can still be relaxed", .arc.0, .arc.1)]
pub struct NegativeCycle {
    /// The node from which the computation started.
    pub start: usize,
    /// An arc that still admits a relaxation.
    pub arc: (usize, usize),
}

/// Shortest paths from a single source.
///
/// An instance of this structure stores, for each node, whether it is
/// [reachable](ShortestPaths::is_reached) from the [source](ShortestPaths::source),
/// its [distance](ShortestPaths::distance) and its
/// [predecessor](ShortestPaths::predecessor) on a shortest path.
///
/// Instances are returned by [`bellman_ford`] and are never modified
/// afterwards.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: usize,
    reached: BitVec,
    distances: Box<[i64]>,
    predecessors: Box<[Option<NonMaxUsize>]>,
}

impl ShortestPaths {
    pub(crate) fn new(
        source: usize,
        reached: BitVec,
        distances: Box<[i64]>,
        predecessors: Box<[Option<NonMaxUsize>]>,
    ) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        ShortestPaths {
            source,
            reached,
            distances,
            predecessors,
        }
    }

    /// Returns the source of the computation.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the number of nodes of the graph the paths were computed on.
    pub fn num_nodes(&self) -> usize {
        self.distances.len()
    }

    /// Returns whether a path from the source to `node` exists.
    pub fn is_reached(&self, node: usize) -> bool {
        self.reached[node]
    }

    /// Returns the distance from the source to `node`, or `None` if `node`
    /// is not reachable from the source.
    pub fn distance(&self, node: usize) -> Option<i64> {
        self.reached[node].then_some(self.distances[node])
    }

    /// Returns the predecessor of `node` on a shortest path from the source.
    ///
    /// The source and unreachable nodes have no predecessor.
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        self.predecessors[node].map(|pred| pred.get())
    }

    /// Returns a shortest path from the source to `node`, both included.
    ///
    /// The path of the source is `[source]`; the path of an unreachable node
    /// is empty.
    pub fn path_to(&self, node: usize) -> Vec<usize> {
        if !self.reached[node] {
            return vec![];
        }
        let mut stack = vec![node];
        let mut curr = node;
        while let Some(pred) = self.predecessor(curr) {
            stack.push(pred);
            curr = pred;
        }
        debug_assert_eq!(curr, self.source);

        let mut path = Vec::with_capacity(stack.len());
        while let Some(node) = stack.pop() {
            path.push(node);
        }
        path
    }

    /// Returns the [path](ShortestPaths::path_to) to `node` as a string of
    /// space-separated nodes.
    pub fn display_path(&self, node: usize) -> String {
        self.path_to(node).iter().join(" ")
    }

    /// Returns the shortest-paths tree, that is, the directed unweighted
    /// graph containing an arc from the predecessor of each node to the node.
    ///
    /// Use [`Dot`](digraph::dot::Dot) to render it.
    pub fn shortest_paths_tree(&self) -> VecGraph {
        let mut tree = VecGraph::new(self.num_nodes(), GraphFlags::DIRECTED);
        for node in 0..self.num_nodes() {
            if let Some(pred) = self.predecessor(node) {
                tree.add_arc(pred, node);
            }
        }
        tree
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use digraph::dot::Dot;
    use digraph::traits::RandomAccessGraph;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_tree_dot() -> anyhow::Result<()> {
        let graph = VecGraph::from_arcs([(0, 1), (1, 2), (0, 2)]);
        let sp = bellman_ford(&graph, 0, no_logging![])?;
        assert_eq!(
            Dot(sp.shortest_paths_tree()).to_string(),
            "digraph {\n    0;\n    1;\n    2;\n    0 -> 1;\n    0 -> 2;\n}\n"
        );
        Ok(())
    }

    #[test]
    fn test_unreached() -> anyhow::Result<()> {
        let graph = VecGraph::from_arcs([(1, 0), (1, 2)]);
        let sp = bellman_ford(&graph, 0, no_logging![])?;
        assert_eq!(sp.source(), 0);
        assert_eq!(sp.num_nodes(), 3);
        assert!(sp.is_reached(0));
        assert!(!sp.is_reached(1));
        assert_eq!(sp.distance(2), None);
        assert_eq!(sp.predecessor(0), None);
        assert_eq!(sp.predecessor(2), None);
        assert_eq!(sp.path_to(0), vec![0]);
        assert!(sp.path_to(1).is_empty());
        assert_eq!(sp.display_path(2), "");
        assert_eq!(sp.shortest_paths_tree().num_arcs(), 0);
        Ok(())
    }

    #[test]
    fn test_predecessors() -> anyhow::Result<()> {
        let graph = VecGraph::from_weighted_arcs([((0, 1), 4), ((0, 2), 1), ((2, 1), 2), ((1, 3), 1)]);
        let sp = bellman_ford(&graph, 0, no_logging![])?;
        assert_eq!(
            (0..4).map(|node| sp.predecessor(node)).collect::<Vec<_>>(),
            vec![None, Some(2), Some(0), Some(1)]
        );
        Ok(())
    }

    #[test]
    fn test_error_message() {
        let err = NegativeCycle {
            start: 3,
            arc: (1, 2),
        };
        assert_eq!(
            err.to_string(),
            "negative-weight cycle reachable from node 3: arc (1, 2) can still be relaxed"
        );
    }
}
