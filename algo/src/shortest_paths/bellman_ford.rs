/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{NegativeCycle, ShortestPaths};
use digraph::traits::WeightedGraph;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use sux::bits::BitVec;

/// Bellman–Ford's algorithm for single-source shortest paths.
///
/// The algorithm performs exactly `n - 1` relaxation rounds, where `n` is
/// the number of nodes, each scanning all arcs leaving reached nodes, and
/// then a further scan looking for an arc that still admits a relaxation. If
/// such an arc exists, a negative-weight cycle is reachable from `source` and
/// no result is returned.
///
/// On unweighted graphs all arcs have weight one.
///
/// Distances are `i64` values, and sums of weights are never wrapped: an arc
/// whose relaxation would overflow is ignored, so paths whose weight does not
/// fit in an `i64` are not considered. A warning is logged if this happens.
///
/// # Panics
///
/// If `source` is not a node of the graph.
pub fn bellman_ford(
    graph: impl WeightedGraph,
    source: usize,
    pl: &mut impl ProgressLog,
) -> Result<ShortestPaths, NegativeCycle> {
    let num_nodes = graph.num_nodes();
    assert!(
        source < num_nodes,
        "Source node {source} does not exist (the graph has {num_nodes} nodes)"
    );

    let mut reached = BitVec::new(num_nodes);
    let mut distances = vec![0_i64; num_nodes].into_boxed_slice();
    let mut predecessors: Box<[Option<NonMaxUsize>]> = vec![None; num_nodes].into_boxed_slice();
    reached.set(source, true);

    pl.item_name("round");
    pl.expected_updates(Some(num_nodes - 1));
    pl.start(format!(
        "Computing shortest paths from node {source} using Bellman-Ford..."
    ));

    let mut overflows = 0_usize;
    for _ in 1..num_nodes {
        for node in 0..num_nodes {
            // Unreached nodes have no meaningful distance
            if !reached[node] {
                continue;
            }
            let dist = distances[node];
            for (succ, weight) in graph.arcs(node) {
                let Some(new_dist) = dist.checked_add(weight) else {
                    overflows += 1;
                    continue;
                };
                if !reached[succ] || new_dist < distances[succ] {
                    distances[succ] = new_dist;
                    predecessors[succ] = NonMaxUsize::new(node);
                    reached.set(succ, true);
                }
            }
        }
        pl.update();
    }

    pl.done();

    if overflows > 0 {
        log::warn!(
            "Ignored {overflows} relaxations from node {source} whose distance does not fit in an i64"
        );
    }

    for node in 0..num_nodes {
        if !reached[node] {
            continue;
        }
        let dist = distances[node];
        for (succ, weight) in graph.arcs(node) {
            // Targets left unreached are only reachable through overflowing sums
            let Some(new_dist) = dist.checked_add(weight) else {
                continue;
            };
            if reached[succ] && new_dist < distances[succ] {
                log::debug!(
                    "Negative-weight cycle reachable from node {source}: arc ({node}, {succ}) can still be relaxed"
                );
                return Err(NegativeCycle {
                    start: source,
                    arc: (node, succ),
                });
            }
        }
    }

    Ok(ShortestPaths::new(
        source,
        reached,
        distances,
        predecessors,
    ))
}
