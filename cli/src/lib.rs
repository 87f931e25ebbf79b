/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

use anyhow::{Context, Result, anyhow, bail, ensure};
use clap::{Args, Parser, Subcommand};
use digraph::prelude::*;
use dsi_progress_logger::{ProgressLog, progress_logger};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

#[derive(Args, Debug, Clone)]
/// Shared CLI arguments for reading files containing arcs.
pub struct ArcsArgs {
    #[arg(long, default_value_t = '#')]
    /// Ignore lines that start with this symbol.
    pub line_comment_symbol: char,

    #[arg(long, default_value_t = 0)]
    /// How many lines to skip at the start of the input.
    pub lines_to_skip: usize,

    #[arg(long, default_value_t = '\t')]
    /// The column separator.
    pub separator: char,

    #[arg(long, default_value_t = 0)]
    /// The index of the column containing the source node of an arc.
    pub source_column: usize,

    #[arg(long, default_value_t = 1)]
    /// The index of the column containing the target node of an arc.
    pub target_column: usize,

    #[arg(long)]
    /// The index of the column containing the weight of an arc; if not
    /// given, the graph is unweighted.
    pub weight_column: Option<usize>,
}

#[derive(Args, Debug, Clone)]
/// Shared CLI arguments describing the input graph.
pub struct GraphArgs {
    /// The file containing the arcs of the graph, one per line; if missing
    /// or "-", arcs are read from standard input.
    pub input: Option<PathBuf>,

    #[arg(long)]
    /// The number of nodes in the graph; if specified this will be used instead of the number inferred.
    /// This is useful if you want to add disconnected nodes at the end of the graph.
    pub num_nodes: Option<usize>,

    #[arg(long)]
    /// Build an undirected graph, in which every arc is an edge.
    pub undirected: bool,

    #[clap(flatten)]
    pub arcs_args: ArcsArgs,
}

impl GraphArgs {
    /// Loads the graph from the input file or from standard input.
    pub fn load(&self, global_args: &GlobalArgs) -> Result<VecGraph> {
        let mut pl = progress_logger![];
        if let Some(log_interval) = global_args.log_interval {
            pl.log_interval(log_interval);
        }

        match &self.input {
            Some(path) if path != Path::new("-") => {
                log::info!("Reading arcs from {}", path.display());
                let file = File::open(path)
                    .with_context(|| format!("Could not open {}", path.display()))?;
                read_arcs(BufReader::new(file), self, &mut pl)
            }
            _ => {
                log::info!("Reading arcs from standard input...");
                read_arcs(std::io::stdin().lock(), self, &mut pl)
            }
        }
    }
}

/// Parses a node identifier found in the given column of a line.
fn parse_node(value: &str, line_num: usize, column: &str) -> Result<usize> {
    value.trim().parse::<usize>().with_context(|| {
        format!("Error parsing as node identifier the {column} column value {value:?} at line {line_num}")
    })
}

/// Reads a graph from a list of arcs, one per line.
///
/// Empty lines and comment lines are skipped, and so are, with a warning,
/// lines with too few columns. Identifiers and weights that cannot be parsed
/// are errors. Duplicate arcs are ignored.
pub fn read_arcs(
    reader: impl BufRead,
    args: &GraphArgs,
    pl: &mut impl ProgressLog,
) -> Result<VecGraph> {
    let arcs_args = &args.arcs_args;
    let biggest_idx = arcs_args
        .source_column
        .max(arcs_args.target_column)
        .max(arcs_args.weight_column.unwrap_or(0));

    pl.item_name("line");
    pl.start("Reading arcs...");

    let mut arcs = Vec::new();
    let mut num_nodes = 0;
    for (line_num, line) in reader.lines().enumerate().skip(arcs_args.lines_to_skip) {
        // Line numbers start from one
        let line_num = line_num + 1;
        let line = line.with_context(|| format!("Could not read line {line_num}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(arcs_args.line_comment_symbol) {
            continue;
        }

        let vals = line.split(arcs_args.separator).collect::<Vec<_>>();
        if vals.len() <= biggest_idx {
            log::warn!(
                "Line {}: {:?} does not have enough columns: got {} columns but expected at least {} columns separated by {:?} (you can change the separator using the --separator option)",
                line_num,
                line,
                vals.len(),
                biggest_idx + 1,
                arcs_args.separator,
            );
            continue;
        }

        let src = parse_node(vals[arcs_args.source_column], line_num, "source")?;
        let dst = parse_node(vals[arcs_args.target_column], line_num, "target")?;
        let weight = match arcs_args.weight_column {
            Some(column) => {
                let value = vals[column];
                value.trim().parse::<i64>().with_context(|| {
                    format!("Error parsing as weight the column value {value:?} at line {line_num}")
                })?
            }
            None => 1,
        };

        num_nodes = num_nodes.max(src.max(dst) + 1);
        arcs.push(((src, dst), weight));
        pl.light_update();
    }
    pl.done();

    if let Some(user_num_nodes) = args.num_nodes {
        ensure!(
            user_num_nodes >= num_nodes,
            "The number of nodes specified by --num-nodes={} is smaller than the number of nodes found in the arcs: {}",
            user_num_nodes,
            num_nodes
        );
        num_nodes = user_num_nodes;
    }

    let mut flags = GraphFlags::empty();
    if !args.undirected {
        flags |= GraphFlags::DIRECTED;
    }
    if arcs_args.weight_column.is_some() {
        flags |= GraphFlags::WEIGHTED;
    }

    let mut graph = VecGraph::new(num_nodes, flags);
    let mut duplicates = 0_usize;
    for ((src, dst), weight) in arcs {
        let added = if arcs_args.weight_column.is_some() {
            graph.add_weighted_arc(src, dst, weight)
        } else {
            graph.add_arc(src, dst)
        };
        if !added {
            duplicates += 1;
        }
    }
    if duplicates > 0 {
        log::warn!("Ignored {duplicates} duplicate arcs");
    }

    log::info!("Arcs read: {} Nodes: {}", graph.num_arcs(), graph.num_nodes());
    if graph.num_arcs() == 0 {
        log::warn!(
            "No arcs read! Check that the --separator={:?} value is correct and that the --source-column={:?} and --target-column={:?} values are correct.",
            arcs_args.separator,
            arcs_args.source_column,
            arcs_args.target_column
        );
    }

    Ok(graph)
}

/// Parses a duration from a string.
///
/// If no suffix is given, the value is assumed to be in milliseconds.
/// The available suffixes are:
/// - `s` for seconds
/// - `m` for minutes
/// - `h` for hours
/// - `d` for days
///
/// Example: `1d2h3m4s567` is parsed as 1 day, 2 hours, 3 minutes, 4 seconds,
/// and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let amount = acc
                .parse::<u64>()
                .with_context(|| format!("Missing amount before suffix {c:?}"))?;
            let unit = match c {
                's' => 1,
                'm' => 60,
                'h' => 60 * 60,
                'd' => 60 * 60 * 24,
                _ => return Err(anyhow!("Invalid duration suffix: {}", c)),
            };
            duration += Duration::from_secs(amount * unit);
            acc.clear();
        }
    }
    if !acc.is_empty() {
        duration += Duration::from_millis(acc.parse::<u64>()?);
    }
    Ok(duration)
}

/// Initializes the `env_logger` logger with a custom format including
/// timestamps with elapsed time since initialization.
pub fn init_env_logger() -> Result<()> {
    use jiff::SpanRound;
    use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);
    let span_round = SpanRound::new()
        .largest(jiff::Unit::Day)
        .smallest(jiff::Unit::Millisecond)
        .days_are_24_hours();

    builder.format(move |buf, record| {
        let Ok(ts) = jiff::Timestamp::try_from(SystemTime::now()) else {
            return Err(std::io::Error::other("Failed to get timestamp"));
        };
        let style = buf.default_level_style(record.level());
        let elapsed = start.elapsed();
        let span = jiff::Span::new()
            .seconds(elapsed.as_secs() as i64)
            .milliseconds(elapsed.subsec_millis() as i64)
            .round(span_round)
            .map_err(std::io::Error::other)?;
        writeln!(
            buf,
            "{} {} {style}{}{style:#} {} - {}",
            ts.strftime("%F %T%.3f"),
            printer.span_to_string(&span),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.init();
    Ok(())
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, global=true, display_order = 1000)]
    /// How often to log progress. Default is 10s. You can use the suffixes "s"
    /// for seconds, "m" for minutes, "h" for hours, and "d" for days. If no
    /// suffix is provided it is assumed to be in milliseconds.
    /// Example: "1d2h3m4s567" is parsed as 1 day + 2 hours + 3 minutes + 4
    /// seconds + 567 milliseconds = 93784567 milliseconds.
    pub log_interval: Option<Duration>,
}

pub mod closure;
pub mod ecc;
pub mod sssp;

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    Sssp(sssp::CliArgs),
    #[clap(visible_alias = "eccentricities")]
    Ecc(ecc::CliArgs),
    Closure(closure::CliArgs),
}

#[derive(Parser, Debug)]
#[command(name = "digraph", version)]
/// Tools computing shortest paths, eccentricities and transitive closures
/// of graphs given as lists of arcs.
///
/// Noteworthy environment variables:
///
/// - RUST_LOG: configuration for env_logger
///   <https://docs.rs/env_logger/latest/env_logger/>
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
    #[clap(flatten)]
    pub args: GlobalArgs,
}

/// The entry point of the command-line interface.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    match cli.command {
        SubCommands::Sssp(args) => {
            sssp::main(cli.args, args)?;
        }
        SubCommands::Ecc(args) => {
            ecc::main(cli.args, args)?;
        }
        SubCommands::Closure(args) => {
            closure::main(cli.args, args)?;
        }
    }

    log::info!("The command took {}", pretty_print_elapsed(start.elapsed()));

    Ok(())
}

/// Pretty-prints a duration in a human-readable format.
fn pretty_print_elapsed(elapsed: Duration) -> String {
    use jiff::fmt::friendly::SpanPrinter;
    let seconds = elapsed.as_secs_f64();
    match jiff::SignedDuration::try_from(elapsed) {
        Ok(duration) => format!(
            "{} ({:.3}s)",
            SpanPrinter::new().duration_to_string(&duration),
            seconds
        ),
        Err(_) => format!("{seconds:.3}s"),
    }
}
