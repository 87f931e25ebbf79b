/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use digraph::graphs::random::ErdosRenyi;
use digraph::prelude::*;
use digraph_algo::distances::all_pairs::AllPairsDistances;
use digraph_algo::shortest_paths::{NegativeCycle, ShortestPaths, bellman_ford};
use dsi_progress_logger::prelude::*;

fn weight(graph: &VecGraph, src: usize, dst: usize) -> i64 {
    graph
        .arcs(src)
        .find(|&(succ, _)| succ == dst)
        .map(|(_, w)| w)
        .expect("missing arc")
}

/// Checks that no arc can be relaxed and that predecessors are consistent
/// with distances.
fn check_shortest_paths(graph: &VecGraph, sp: &ShortestPaths) {
    assert_eq!(sp.distance(sp.source()), Some(0));
    assert_eq!(sp.predecessor(sp.source()), None);
    for node in 0..graph.num_nodes() {
        let Some(dist) = sp.distance(node) else {
            assert_eq!(sp.predecessor(node), None);
            assert!(sp.path_to(node).is_empty());
            continue;
        };
        for (succ, w) in graph.arcs(node) {
            assert!(sp.is_reached(succ));
            assert!(sp.distance(succ).unwrap() <= dist + w);
        }
        if let Some(pred) = sp.predecessor(node) {
            assert!(sp.is_reached(pred));
            assert_eq!(sp.distance(pred).unwrap() + weight(graph, pred, node), dist);
        }

        let path = sp.path_to(node);
        assert_eq!(path.first(), Some(&sp.source()));
        assert_eq!(path.last(), Some(&node));
        let mut sorted = path.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), path.len(), "repeated node in {path:?}");
        let length: i64 = path.windows(2).map(|w| weight(graph, w[0], w[1])).sum();
        assert_eq!(length, dist);
    }
}

#[test]
fn test_path() -> Result<()> {
    let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 3)]);
    let sp = bellman_ford(&graph, 0, no_logging![])?;
    assert_eq!(
        (0..4).map(|node| sp.distance(node)).collect::<Vec<_>>(),
        vec![Some(0), Some(1), Some(2), Some(3)]
    );
    assert!((0..4).all(|node| sp.is_reached(node)));
    assert_eq!(sp.path_to(3), vec![0, 1, 2, 3]);
    assert_eq!(sp.display_path(3), "0 1 2 3");
    check_shortest_paths(&graph, &sp);

    let sp = bellman_ford(&graph, 2, no_logging![])?;
    assert!(!sp.is_reached(0));
    assert_eq!(sp.distance(3), Some(1));
    Ok(())
}

#[test]
fn test_negative_cycle() {
    let graph = VecGraph::from_weighted_arcs([((0, 1), -1), ((1, 2), -1), ((2, 0), -1)]);
    for source in 0..3 {
        let err = bellman_ford(&graph, source, no_logging![]).unwrap_err();
        assert_eq!(err.start, source);
        assert!(graph.has_arc(err.arc.0, err.arc.1));
    }
}

#[test]
fn test_unreachable_negative_cycle() -> Result<()> {
    // The cycle 2 -> 3 -> 2 is not reachable from 0 or 1
    let graph = VecGraph::from_weighted_arcs([((0, 1), 2), ((2, 3), -1), ((3, 2), -1), ((2, 0), 1)]);
    let sp = bellman_ford(&graph, 0, no_logging![])?;
    assert_eq!(sp.distance(1), Some(2));
    assert!(!sp.is_reached(2));
    assert!(matches!(
        bellman_ford(&graph, 3, no_logging![]),
        Err(NegativeCycle { start: 3, .. })
    ));
    Ok(())
}

#[test]
fn test_negative_weights() -> Result<()> {
    let graph = VecGraph::from_weighted_arcs([
        ((0, 1), 6),
        ((0, 2), 7),
        ((1, 2), 8),
        ((1, 3), 5),
        ((1, 4), -4),
        ((2, 3), -3),
        ((2, 4), 9),
        ((3, 1), -2),
        ((4, 0), 2),
        ((4, 3), 7),
    ]);
    let sp = bellman_ford(&graph, 0, no_logging![])?;
    assert_eq!(
        (0..5).map(|node| sp.distance(node)).collect::<Vec<_>>(),
        vec![Some(0), Some(2), Some(7), Some(4), Some(-2)]
    );
    assert_eq!(sp.path_to(4), vec![0, 2, 3, 1, 4]);
    check_shortest_paths(&graph, &sp);
    Ok(())
}

#[test]
fn test_tree() -> Result<()> {
    let graph = VecGraph::from_weighted_arcs([((0, 1), 1), ((0, 2), 5), ((1, 2), 1), ((3, 0), 1)]);
    let sp = bellman_ford(&graph, 0, no_logging![])?;
    let tree = sp.shortest_paths_tree();
    assert!(tree.is_directed());
    assert_eq!(tree.num_nodes(), 4);
    assert_eq!(tree.num_arcs(), 2);
    assert!(tree.has_arc(0, 1));
    assert!(tree.has_arc(1, 2));
    assert_eq!(
        Dot(&tree).to_string(),
        "digraph {\n    0;\n    1;\n    2;\n    3;\n    0 -> 1;\n    1 -> 2;\n}\n"
    );
    Ok(())
}

#[test]
fn test_idempotence() -> Result<()> {
    let graph = ErdosRenyi::new(30, 0.1, 7).to_weighted_graph(0..=20);
    let copy = graph.clone();
    let first = bellman_ford(&graph, 3, no_logging![])?;
    let second = bellman_ford(&graph, 3, no_logging![])?;
    assert_eq!(graph, copy);
    for node in 0..graph.num_nodes() {
        assert_eq!(first.distance(node), second.distance(node));
        assert_eq!(first.predecessor(node), second.predecessor(node));
    }
    Ok(())
}

#[test]
fn test_er_unweighted() -> Result<()> {
    for n in [1, 5, 20, 50] {
        for d in 1..5 {
            let graph = ErdosRenyi::new(n, (d as f64) / 20.0, 0).to_graph();
            let apd = AllPairsDistances::run(&graph, no_logging![])?;
            for source in 0..n {
                let sp = bellman_ford(&graph, source, no_logging![])?;
                check_shortest_paths(&graph, &sp);
                for node in 0..n {
                    assert_eq!(sp.distance(node), apd.distance(source, node));
                    if let Some(dist) = sp.distance(node) {
                        assert_eq!(sp.path_to(node).len() as i64, dist + 1);
                    }
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_er_weighted() -> Result<()> {
    for seed in 0..5 {
        let graph = ErdosRenyi::new(40, 0.08, seed).to_weighted_graph(0..=100);
        for source in [0, 13, 39] {
            let sp = bellman_ford(&graph, source, no_logging![])?;
            check_shortest_paths(&graph, &sp);
        }
    }
    Ok(())
}

#[test]
fn test_er_dag_negative() -> Result<()> {
    // Arcs going forward only: no cycles, so negative weights are fine
    let er = ErdosRenyi::new(30, 0.2, 1);
    let weighted = er.to_weighted_graph(-10..=10);
    let mut graph = VecGraph::new(30, GraphFlags::DIRECTED | GraphFlags::WEIGHTED);
    for node in 0..30 {
        for (succ, w) in weighted.arcs(node).filter(|&(succ, _)| succ > node) {
            graph.add_weighted_arc(node, succ, w);
        }
    }

    let sp = bellman_ford(&graph, 0, no_logging![])?;
    check_shortest_paths(&graph, &sp);

    // Dynamic programming in topological order
    let mut dist: Vec<Option<i64>> = vec![None; 30];
    dist[0] = Some(0);
    for node in 0..30 {
        if let Some(d) = dist[node] {
            for (succ, w) in graph.arcs(node) {
                if dist[succ].is_none_or(|old| d + w < old) {
                    dist[succ] = Some(d + w);
                }
            }
        }
    }
    assert_eq!((0..30).map(|node| sp.distance(node)).collect::<Vec<_>>(), dist);
    Ok(())
}
