/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::{GlobalArgs, GraphArgs};
use anyhow::{Context, Result, ensure};
use clap::Parser;
use digraph::prelude::*;
use digraph_algo::distances::eccentricity::eccentricity_measures;
use dsi_progress_logger::{ProgressLog, progress_logger};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    name = "ecc",
    about = "Computes the eccentricities of all nodes, the radius, the diameter, and the central vertices of a graph using all-pairs distances.",
    long_about = None
)]
pub struct CliArgs {
    #[arg(long)]
    /// Print the results in JSON format.
    pub json: bool,

    #[clap(flatten)]
    pub graph_args: GraphArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let graph = args.graph_args.load(&global_args)?;

    let mut pl = progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let stdout = std::io::stdout();
    ecc(&graph, &args, &mut pl, stdout.lock())
}

/// Computes the eccentricity measures and writes them to `out`.
pub fn ecc(
    graph: &VecGraph,
    args: &CliArgs,
    pl: &mut impl ProgressLog,
    mut out: impl Write,
) -> Result<()> {
    ensure!(graph.num_nodes() > 0, "The graph has no nodes");

    let measures =
        eccentricity_measures(graph, pl).context("Cannot compute all-pairs distances")?;
    log::info!(
        "Radius: {:?} Diameter: {:?} Central vertices: {}",
        measures.radius(),
        measures.diameter(),
        measures.central_vertices().len()
    );

    if args.json {
        serde_json::to_writer_pretty(&mut out, &measures)?;
        writeln!(out)?;
    } else {
        write!(out, "{measures}")?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use dsi_progress_logger::no_logging;

    fn run(graph: &VecGraph, args: &[&str]) -> Result<String> {
        let args = CliArgs::parse_from(std::iter::once("ecc").chain(args.iter().copied()));
        let mut out = Vec::new();
        ecc(graph, &args, no_logging![], &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_report() -> Result<()> {
        let graph = VecGraph::from_arcs([(0, 1), (1, 0), (1, 2), (2, 1)]);
        assert_eq!(
            run(&graph, &[])?,
            "Graph Radius: 1\nGraph Diameter: 2\nVertex Eccentricities:\n  Vertex 0: 2\n  Vertex 1: 1\n  Vertex 2: 2\nCentral Vertices: 1\n"
        );
        Ok(())
    }

    #[test]
    fn test_json() -> Result<()> {
        let graph = VecGraph::from_arcs([(0, 1)]);
        let json: serde_json::Value = serde_json::from_str(&run(&graph, &["--json"])?)?;
        assert_eq!(json["radius"], 1);
        assert_eq!(json["eccentricities"], serde_json::json!([1, null]));
        assert_eq!(json["central_vertices"], serde_json::json!([0]));
        Ok(())
    }

    #[test]
    fn test_empty() {
        assert!(run(&VecGraph::empty(0), &[]).is_err());
    }
}
