/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Rendering of graphs in the [DOT](https://graphviz.org/doc/info/lang.html)
//! format.

use crate::traits::WeightedGraph;
use std::fmt::{self, Display, Formatter};

/// A wrapper displaying a graph in the DOT format.
///
/// Directed graphs are rendered as a `digraph` with `->` arcs, undirected
/// graphs as a `graph` with `--` edges, each edge appearing once. Every node
/// is listed, so isolated nodes are rendered, too. On weighted graphs arcs are
/// labeled with their weight.
///
/// # Examples
///
/// ```
/// use digraph::prelude::*;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2)]);
/// assert_eq!(
///     Dot(&graph).to_string(),
///     "digraph {\n    0;\n    1;\n    2;\n    0 -> 1;\n    1 -> 2;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dot<G>(pub G);

impl<G: WeightedGraph> Display for Dot<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let graph = &self.0;
        let directed = graph.is_directed();
        let weighted = graph.is_weighted();
        let (header, connector) = if directed {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln!(f, "{header} {{")?;
        for node in 0..graph.num_nodes() {
            writeln!(f, "    {node};")?;
        }
        for node in 0..graph.num_nodes() {
            for (succ, weight) in graph.arcs(node) {
                // Undirected edges are stored twice
                if !directed && succ < node {
                    continue;
                }
                if weighted {
                    writeln!(f, "    {node} {connector} {succ} [label=\"{weight}\"];")?;
                } else {
                    writeln!(f, "    {node} {connector} {succ};")?;
                }
            }
        }
        writeln!(f, "}}")
    }
}
