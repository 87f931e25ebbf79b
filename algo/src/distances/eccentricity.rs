/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Eccentricities, radius, diameter and central vertices.
//!
//! The (forward) eccentricity of a node is the maximum distance from the node
//! to the other nodes it can reach. Nodes that reach no other node have an
//! undefined eccentricity, with the exception of the only node of a graph
//! with one node, whose eccentricity is zero. The radius and the diameter are
//! the minimum and the maximum defined eccentricity, and they are undefined if
//! no node has a defined eccentricity. The central vertices are the nodes
//! whose eccentricity is equal to the radius.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use digraph::graphs::vec_graph::VecGraph;
//! use digraph_algo::distances::eccentricity::*;
//!
//! let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
//! let measures = eccentricity_measures(&graph, no_logging![])?;
//!
//! assert_eq!(measures.eccentricities(), &[Some(2), Some(2), Some(3), None]);
//! assert_eq!(measures.radius(), Some(2));
//! assert_eq!(measures.diameter(), Some(3));
//! assert_eq!(measures.central_vertices(), &[0, 1]);
//! # Ok::<(), digraph_algo::shortest_paths::NegativeCycle>(())
//! ```

use super::all_pairs::AllPairsDistances;
use crate::shortest_paths::NegativeCycle;
use digraph::traits::WeightedGraph;
use dsi_progress_logger::ProgressLog;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Computes the [eccentricity measures](EccentricityMeasures) of a graph
/// from its [all-pairs distances](AllPairsDistances).
///
/// # Panics
///
/// If the graph has no nodes.
pub fn eccentricity_measures(
    graph: impl WeightedGraph,
    pl: &mut impl ProgressLog,
) -> Result<EccentricityMeasures, NegativeCycle> {
    assert!(
        graph.num_nodes() > 0,
        "Eccentricities are not defined for a graph with no nodes"
    );
    let distances = AllPairsDistances::run(&graph, pl)?;
    Ok(EccentricityMeasures::from_distances(&distances))
}

/// Eccentricity measures of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EccentricityMeasures {
    eccentricities: Box<[Option<i64>]>,
    radius: Option<i64>,
    diameter: Option<i64>,
    central_vertices: Box<[usize]>,
}

impl EccentricityMeasures {
    /// Computes the eccentricity measures from a distance table.
    ///
    /// # Panics
    ///
    /// If the table has no nodes.
    pub fn from_distances(distances: &AllPairsDistances) -> Self {
        let num_nodes = distances.num_nodes();
        assert!(
            num_nodes > 0,
            "Eccentricities are not defined for a graph with no nodes"
        );

        let eccentricities: Box<[Option<i64>]> = if num_nodes == 1 {
            Box::new([Some(0)])
        } else {
            (0..num_nodes)
                .map(|node| {
                    distances
                        .distances_from(node)
                        .enumerate()
                        .filter(|&(other, _)| other != node)
                        .filter_map(|(_, dist)| dist)
                        .max()
                })
                .collect()
        };

        let radius = eccentricities.iter().flatten().copied().min();
        let diameter = eccentricities.iter().flatten().copied().max();

        let central_vertices = match radius {
            Some(radius) => eccentricities
                .iter()
                .positions(|&ecc| ecc == Some(radius))
                .collect(),
            None => Box::default(),
        };

        log::debug!("Radius: {radius:?}, diameter: {diameter:?}");

        Self {
            eccentricities,
            radius,
            diameter,
            central_vertices,
        }
    }

    /// Returns the radius, or `None` if no node has a defined eccentricity.
    pub fn radius(&self) -> Option<i64> {
        self.radius
    }

    /// Returns the diameter, or `None` if no node has a defined eccentricity.
    pub fn diameter(&self) -> Option<i64> {
        self.diameter
    }

    /// Returns the eccentricity of a node.
    pub fn eccentricity(&self, node: usize) -> Option<i64> {
        self.eccentricities[node]
    }

    /// Returns the eccentricities of all nodes, in node order.
    pub fn eccentricities(&self) -> &[Option<i64>] {
        &self.eccentricities
    }

    /// Returns the nodes whose eccentricity is equal to the radius, in
    /// increasing order.
    pub fn central_vertices(&self) -> &[usize] {
        &self.central_vertices
    }
}

struct Undefined(Option<i64>);

impl Display for Undefined {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("undefined"),
        }
    }
}

impl Display for EccentricityMeasures {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph Radius: {}", Undefined(self.radius))?;
        writeln!(f, "Graph Diameter: {}", Undefined(self.diameter))?;
        writeln!(f, "Vertex Eccentricities:")?;
        for (node, &ecc) in self.eccentricities.iter().enumerate() {
            writeln!(f, "  Vertex {node}: {}", Undefined(ecc))?;
        }
        writeln!(f, "Central Vertices: {}", self.central_vertices.iter().join(" "))
    }
}
