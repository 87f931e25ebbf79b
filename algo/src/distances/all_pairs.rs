/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::shortest_paths::{NegativeCycle, bellman_ford};
use digraph::traits::WeightedGraph;
use dsi_progress_logger::{ProgressLog, no_logging};
use std::collections::VecDeque;
use sux::bits::BitVec;

/// The table of distances between all pairs of nodes of a graph.
///
/// The table is computed by one breadth-first visit per node on unweighted
/// graphs, and by one run of [`bellman_ford`] per node on weighted graphs. It
/// uses quadratic space in the number of nodes.
///
/// # Examples
/// ```
/// use dsi_progress_logger::no_logging;
/// use digraph::graphs::vec_graph::VecGraph;
/// use digraph_algo::distances::all_pairs::AllPairsDistances;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (2, 3)]);
/// let apd = AllPairsDistances::run(&graph, no_logging![])?;
///
/// assert_eq!(apd.distance(0, 3), Some(3));
/// assert_eq!(apd.distance(1, 0), Some(2));
/// assert_eq!(apd.distance(3, 0), None);
/// # Ok::<(), digraph_algo::shortest_paths::NegativeCycle>(())
/// ```
#[derive(Debug, Clone)]
pub struct AllPairsDistances {
    num_nodes: usize,
    /// Whether the distance in the corresponding position is defined.
    defined: BitVec,
    /// Row-major distance table.
    distances: Box<[i64]>,
}

impl AllPairsDistances {
    /// Computes the distances between all pairs of nodes.
    ///
    /// Fails if the graph is weighted and a negative-weight cycle is
    /// reachable from some node.
    pub fn run(
        graph: impl WeightedGraph,
        pl: &mut impl ProgressLog,
    ) -> Result<Self, NegativeCycle> {
        let num_nodes = graph.num_nodes();
        let mut defined = BitVec::new(num_nodes * num_nodes);
        let mut distances = vec![0_i64; num_nodes * num_nodes].into_boxed_slice();

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));

        if graph.is_weighted() {
            pl.start("Computing all-pairs distances using Bellman-Ford...");
            for source in 0..num_nodes {
                let row = source * num_nodes;
                let sp = bellman_ford(&graph, source, no_logging![])?;
                for node in 0..num_nodes {
                    if let Some(dist) = sp.distance(node) {
                        defined.set(row + node, true);
                        distances[row + node] = dist;
                    }
                }
                pl.update();
            }
        } else {
            pl.start("Computing all-pairs distances using breadth-first visits...");
            let mut queue = VecDeque::new();
            for source in 0..num_nodes {
                let row = source * num_nodes;
                defined.set(row + source, true);
                queue.push_back(source);
                while let Some(node) = queue.pop_front() {
                    let dist = distances[row + node] + 1;
                    for succ in graph.successors(node) {
                        if !defined[row + succ] {
                            defined.set(row + succ, true);
                            distances[row + succ] = dist;
                            queue.push_back(succ);
                        }
                    }
                }
                pl.update();
            }
        }

        pl.done();

        Ok(Self {
            num_nodes,
            defined,
            distances,
        })
    }

    /// Returns the number of nodes of the graph.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the distance from `src` to `dst`, or `None` if there is no
    /// path from `src` to `dst`.
    ///
    /// # Panics
    ///
    /// If `src` or `dst` are not nodes of the graph.
    pub fn distance(&self, src: usize, dst: usize) -> Option<i64> {
        assert!(
            src < self.num_nodes && dst < self.num_nodes,
            "Pair ({src}, {dst}) out of bounds (the graph has {} nodes)",
            self.num_nodes
        );
        let pos = src * self.num_nodes + dst;
        self.defined[pos].then_some(self.distances[pos])
    }

    /// Returns an iterator over the distances from `src` to all nodes, in
    /// node order.
    pub fn distances_from(&self, src: usize) -> impl Iterator<Item = Option<i64>> + '_ {
        (0..self.num_nodes).map(move |dst| self.distance(src, dst))
    }
}
