/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::{GlobalArgs, GraphArgs};
use anyhow::{Context, Result, ensure};
use clap::Parser;
use digraph::prelude::*;
use digraph_algo::closure::transitive_closure;
use dsi_progress_logger::{ProgressLog, progress_logger};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    name = "closure",
    about = "Computes the transitive closure of a directed graph and prints it as a list of arcs (one per line, source and target separated by a TAB) or in DOT format.",
    long_about = None
)]
pub struct CliArgs {
    #[arg(long)]
    /// Print the closure in DOT format.
    pub dot: bool,

    #[clap(flatten)]
    pub graph_args: GraphArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    ensure!(
        !args.graph_args.undirected,
        "The transitive closure is computed on directed graphs only"
    );
    let graph = args.graph_args.load(&global_args)?;

    let mut pl = progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let stdout = std::io::stdout();
    closure(&graph, &args, &mut pl, stdout.lock())
}

/// Computes the transitive closure and writes it to `out`.
pub fn closure(
    graph: &VecGraph,
    args: &CliArgs,
    pl: &mut impl ProgressLog,
    mut out: impl Write,
) -> Result<()> {
    ensure!(
        graph.is_directed(),
        "The transitive closure is computed on directed graphs only"
    );
    let closure =
        transitive_closure(graph, pl).context("Cannot compute the transitive closure")?;
    log::info!("The transitive closure has {} arcs", closure.num_arcs());

    if args.dot {
        write!(out, "{}", Dot(&closure))?;
    } else {
        for node in 0..closure.num_nodes() {
            for succ in closure.successors(node) {
                writeln!(out, "{node}\t{succ}")?;
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
        let args = CliArgs::parse_from(std::iter::once("closure").chain(args.iter().copied()));
        let mut out = Vec::new();
        closure(graph, &args, no_logging![], &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_arcs() -> Result<()> {
        let graph = VecGraph::from_arcs([(0, 1), (1, 2)]);
        assert_eq!(run(&graph, &[])?, "0\t1\n0\t2\n1\t2\n");
        Ok(())
    }

    #[test]
    fn test_dot() -> Result<()> {
        let graph = VecGraph::from_arcs([(1, 0)]);
        assert_eq!(
            run(&graph, &["--dot"])?,
            "digraph {\n    0;\n    1;\n    1 -> 0;\n}\n"
        );
        Ok(())
    }

    #[test]
    fn test_errors() {
        let graph = VecGraph::new(2, GraphFlags::empty());
        assert!(run(&graph, &[]).is_err());
        let graph = VecGraph::from_weighted_arcs([((0, 1), -1), ((1, 0), -1)]);
        assert!(run(&graph, &[]).is_err());
    }
}
