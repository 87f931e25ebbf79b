/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Transitive closure of directed graphs.

use crate::shortest_paths::{NegativeCycle, bellman_ford};
use digraph::graphs::vec_graph::{GraphFlags, VecGraph};
use digraph::traits::{RandomAccessGraph, WeightedGraph};
use dsi_progress_logger::{ProgressLog, no_logging};

/// Computes the transitive closure of a directed graph.
///
/// The result is a directed, unweighted graph with the same nodes containing
/// an arc from `u` to `v` if and only if `u` ≠ `v` and there is a path from
/// `u` to `v`. Loops are never added, even if a node lies on a cycle.
///
/// Reachability is computed by running [`bellman_ford`] from every node; if
/// the graph is weighted and a negative-weight cycle is reachable from some
/// node the whole computation fails.
///
/// # Examples
/// ```
/// use dsi_progress_logger::no_logging;
/// use digraph::prelude::*;
/// use digraph_algo::closure::transitive_closure;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 3)]);
/// let closure = transitive_closure(&graph, no_logging![])?;
///
/// assert_eq!(closure.num_arcs(), 6);
/// assert_eq!(closure.successors(1).collect::<Vec<_>>(), vec![2, 3]);
/// # Ok::<(), digraph_algo::shortest_paths::NegativeCycle>(())
/// ```
///
/// Weighted graphs are accepted. Weights never change which nodes are
/// reachable, and the result is always unweighted. A negative-weight cycle
/// reachable from some node makes the computation fail with [`NegativeCycle`].
///
/// # Panics
///
/// If the graph is undirected.
pub fn transitive_closure(
    graph: impl WeightedGraph,
    pl: &mut impl ProgressLog,
) -> Result<VecGraph, NegativeCycle> {
    assert!(
        graph.is_directed(),
        "The transitive closure requires a directed graph"
    );
    let num_nodes = graph.num_nodes();
    let mut closure = VecGraph::new(num_nodes, GraphFlags::DIRECTED);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing the transitive closure...");

    for node in 0..num_nodes {
        let sp = bellman_ford(&graph, node, no_logging![])?;
        for reached in (0..num_nodes).filter(|&other| other != node && sp.is_reached(other)) {
            closure.add_arc(node, reached);
        }
        pl.update();
    }

    pl.done();
    log::debug!("The transitive closure has {} arcs", closure.num_arcs());

    Ok(closure)
}
