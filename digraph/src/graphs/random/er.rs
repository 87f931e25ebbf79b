/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::vec_graph::{GraphFlags, VecGraph};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::ops::RangeInclusive;

/// Erdös-Rényi random directed graphs.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an arc between any two nodes. In this implementation, loops are never
/// included.
///
/// The same parameters and seed always generate the same graph, which makes
/// this structure suitable for reproducible tests.
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an arc between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Returns the arcs of the graph in lexicographical order.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..self.n)
            .flat_map(move |x| (0..self.n).map(move |y| (x, y)))
            .filter(move |&(x, y)| x != y && rng.random_bool(self.p))
    }

    /// Returns the graph as a directed, unweighted [`VecGraph`].
    pub fn to_graph(&self) -> VecGraph {
        let mut g = VecGraph::empty(self.n);
        for (x, y) in self.arcs() {
            g.add_arc(x, y);
        }
        g
    }

    /// Returns the graph as a directed, weighted [`VecGraph`] whose weights
    /// are drawn uniformly at random from `weights`.
    ///
    /// The arcs are the same as those of [`to_graph`](ErdosRenyi::to_graph).
    pub fn to_weighted_graph(&self, weights: RangeInclusive<i64>) -> VecGraph {
        let mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(1));
        let mut g = VecGraph::new(self.n, GraphFlags::DIRECTED | GraphFlags::WEIGHTED);
        for (x, y) in self.arcs() {
            g.add_weighted_arc(x, y, rng.random_range(weights.clone()));
        }
        g
    }
}
