/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::{GlobalArgs, GraphArgs};
use anyhow::{Context, Result, ensure};
use clap::Parser;
use digraph::prelude::*;
use digraph_algo::shortest_paths::{ShortestPaths, bellman_ford};
use dsi_progress_logger::{ProgressLog, progress_logger};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    name = "sssp",
    about = "Computes single-source shortest paths using the Bellman-Ford algorithm. For each node prints its distance from the source (\"inf\" if it is not reachable) and a shortest path.",
    long_about = None
)]
pub struct CliArgs {
    #[arg(short, long)]
    /// The source node.
    pub source: usize,

    #[arg(short, long, conflicts_with = "tree")]
    /// Print only a shortest path to this node.
    pub target: Option<usize>,

    #[arg(long)]
    /// Print the shortest-paths tree in DOT format.
    pub tree: bool,

    #[arg(long, conflicts_with = "tree")]
    /// Print the results in JSON format.
    pub json: bool,

    #[clap(flatten)]
    pub graph_args: GraphArgs,
}

#[derive(serde::Serialize, Debug, PartialEq, Eq)]
struct NodePath {
    node: usize,
    distance: Option<i64>,
    predecessor: Option<usize>,
    path: Vec<usize>,
}

impl NodePath {
    fn new(sp: &ShortestPaths, node: usize) -> Self {
        Self {
            node,
            distance: sp.distance(node),
            predecessor: sp.predecessor(node),
            path: sp.path_to(node),
        }
    }
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let graph = args.graph_args.load(&global_args)?;

    let mut pl = progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let stdout = std::io::stdout();
    sssp(&graph, &args, &mut pl, stdout.lock())
}

/// Computes the shortest paths and writes them to `out` in the format
/// selected by `args`.
pub fn sssp(
    graph: &VecGraph,
    args: &CliArgs,
    pl: &mut impl ProgressLog,
    mut out: impl Write,
) -> Result<()> {
    let num_nodes = graph.num_nodes();
    ensure!(
        args.source < num_nodes,
        "The source node {} does not exist (the graph has {} nodes)",
        args.source,
        num_nodes
    );
    if let Some(target) = args.target {
        ensure!(
            target < num_nodes,
            "The target node {} does not exist (the graph has {} nodes)",
            target,
            num_nodes
        );
    }

    let sp = bellman_ford(graph, args.source, pl)
        .with_context(|| format!("Cannot compute shortest paths from node {}", args.source))?;
    log::info!(
        "Reached {} nodes from node {}",
        (0..num_nodes).filter(|&node| sp.is_reached(node)).count(),
        args.source
    );

    if args.tree {
        write!(out, "{}", Dot(sp.shortest_paths_tree()))?;
        return Ok(());
    }

    if let Some(target) = args.target {
        if !sp.is_reached(target) {
            log::warn!("Node {} is not reachable from node {}", target, args.source);
        }
        if args.json {
            serde_json::to_writer_pretty(&mut out, &NodePath::new(&sp, target))?;
            writeln!(out)?;
        } else if sp.is_reached(target) {
            writeln!(out, "{}", sp.display_path(target))?;
        }
        return Ok(());
    }

    if args.json {
        let paths = (0..num_nodes)
            .map(|node| NodePath::new(&sp, node))
            .collect::<Vec<_>>();
        serde_json::to_writer_pretty(&mut out, &paths)?;
        writeln!(out)?;
    } else {
        for node in 0..num_nodes {
            match sp.distance(node) {
                Some(dist) => writeln!(out, "{node}\t{dist}\t{}", sp.display_path(node))?,
                None => writeln!(out, "{node}\tinf\t")?,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use dsi_progress_logger::no_logging;

    fn run(graph: &VecGraph, args: &[&str]) -> Result<String> {
        let args = CliArgs::parse_from(std::iter::once("sssp").chain(args.iter().copied()));
        let mut out = Vec::new();
        sssp(graph, &args, no_logging![], &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_table() -> Result<()> {
        let graph = VecGraph::from_arcs([(0, 1), (1, 2), (3, 2)]);
        assert_eq!(
            run(&graph, &["--source", "0"])?,
            "0\t0\t0\n1\t1\t0 1\n2\t2\t0 1 2\n3\tinf\t\n"
        );
        Ok(())
    }

    #[test]
    fn test_target() -> Result<()> {
        let graph = VecGraph::from_weighted_arcs([((0, 1), 5), ((0, 2), 1), ((2, 1), 1)]);
        assert_eq!(run(&graph, &["-s", "0", "-t", "1"])?, "0 2 1\n");
        assert_eq!(run(&graph, &["-s", "1", "-t", "0"])?, "");

        let json: serde_json::Value =
            serde_json::from_str(&run(&graph, &["-s", "0", "-t", "1", "--json"])?)?;
        assert_eq!(json["distance"], 2);
        assert_eq!(json["predecessor"], 2);
        assert_eq!(json["path"], serde_json::json!([0, 2, 1]));
        Ok(())
    }

    #[test]
    fn test_json() -> Result<()> {
        let graph = VecGraph::from_arcs([(0, 1), (2, 0)]);
        let json: serde_json::Value = serde_json::from_str(&run(&graph, &["-s", "0", "--json"])?)?;
        assert_eq!(json.as_array().map(Vec::len), Some(3));
        assert_eq!(json[1]["distance"], 1);
        assert!(json[2]["distance"].is_null());
        Ok(())
    }

    #[test]
    fn test_tree() -> Result<()> {
        let graph = VecGraph::from_arcs([(0, 1), (0, 2), (1, 2)]);
        assert_eq!(
            run(&graph, &["-s", "0", "--tree"])?,
            "digraph {\n    0;\n    1;\n    2;\n    0 -> 1;\n    0 -> 2;\n}\n"
        );
        Ok(())
    }

    #[test]
    fn test_errors() {
        let graph = VecGraph::from_weighted_arcs([((0, 1), 1), ((1, 0), -2)]);
        let err = run(&graph, &["-s", "0"]).unwrap_err();
        assert!(err.to_string().contains("Cannot compute shortest paths"));
        assert!(run(&graph, &["-s", "2"]).is_err());
        assert!(run(&graph, &["-s", "0", "-t", "2"]).is_err());
    }
}
