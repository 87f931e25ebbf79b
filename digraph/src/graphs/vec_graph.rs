/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{RandomAccessGraph, WeightedGraph};
use bitflags::bitflags;

bitflags! {
    /// The kind of a [`VecGraph`].
    ///
    /// The empty set of flags denotes an undirected, unweighted graph.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GraphFlags: u8 {
        /// Arcs have a direction. Otherwise, each edge appears in the
        /// successor lists of both its endpoints.
        const DIRECTED = 1 << 0;
        /// Arcs carry an explicit integer weight. Otherwise, all arcs have
        /// weight one.
        const WEIGHTED = 1 << 1;
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// An arc with a weight, stored as a pair (target, weight).
pub struct WeightedArc(usize, i64);

impl WeightedArc {
    /// Returns the target of the arc.
    #[inline(always)]
    pub fn target(&self) -> usize {
        self.0
    }

    /// Returns the weight of the arc.
    #[inline(always)]
    pub fn weight(&self) -> i64 {
        self.1
    }
}

impl From<(usize, i64)> for WeightedArc {
    fn from((v, w): (usize, i64)) -> Self {
        Self(v, w)
    }
}

impl From<WeightedArc> for (usize, i64) {
    fn from(value: WeightedArc) -> (usize, i64) {
        (value.0, value.1)
    }
}

/// A mutable [`WeightedGraph`] implementation based on a vector of sorted
/// vectors.
///
/// The graph can be directed or undirected, weighted or unweighted, as
/// specified by its [`GraphFlags`]. Successor lists are kept sorted and
/// duplicate arcs are rejected, so the graph is always simple (loops are
/// allowed, though). In an undirected graph each edge is stored in the
/// successor lists of both endpoints, but it is counted once by
/// [`num_arcs`](RandomAccessGraph::num_arcs).
///
/// Arcs of an unweighted graph have weight one; to add arcs you must use
/// [`add_arc`](VecGraph::add_arc) on unweighted graphs and
/// [`add_weighted_arc`](VecGraph::add_weighted_arc) on weighted graphs.
///
/// By setting the feature `serde`, this struct can be serialized using
/// [serde](https://crates.io/crates/serde).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VecGraph {
    /// Whether the graph is directed and/or weighted.
    flags: GraphFlags,
    /// The number of arcs (or edges, if undirected) in the graph.
    num_arcs: u64,
    /// For each node, its sorted list of successors.
    succ: Vec<Vec<WeightedArc>>,
}

impl core::default::Default for VecGraph {
    fn default() -> Self {
        Self::empty(0)
    }
}

impl VecGraph {
    /// Creates a new graph with `num_nodes` nodes, no arcs, and the given
    /// kind.
    pub fn new(num_nodes: usize, flags: GraphFlags) -> Self {
        Self {
            flags,
            num_arcs: 0,
            succ: Vec::from_iter((0..num_nodes).map(|_| Vec::new())),
        }
    }

    /// Creates a new directed, unweighted graph with `n` nodes and no arcs.
    pub fn empty(n: usize) -> Self {
        Self::new(n, GraphFlags::DIRECTED)
    }

    /// Returns the kind of the graph.
    #[inline(always)]
    pub fn flags(&self) -> GraphFlags {
        self.flags
    }

    /// Adds an isolated node to the graph (and all missing nodes with
    /// smaller index) and returns true if it is a new node.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        self.succ.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Adds an arc to an unweighted graph, returning false if the arc was
    /// already present.
    ///
    /// # Panics
    ///
    /// This method will panic:
    /// - if the graph is weighted;
    /// - if one of the given nodes is greater or equal than the number of nodes
    ///   in the graph.
    pub fn add_arc(&mut self, u: usize, v: usize) -> bool {
        if self.flags.contains(GraphFlags::WEIGHTED) {
            panic!("Error adding arc ({u}, {v}): the graph is weighted, use add_weighted_arc");
        }
        self.insert(u, v, 1)
    }

    /// Adds an arc with the given weight to a weighted graph, returning false
    /// if an arc with the same endpoints was already present (in which case
    /// its weight is left untouched).
    ///
    /// # Panics
    ///
    /// This method will panic:
    /// - if the graph is unweighted;
    /// - if one of the given nodes is greater or equal than the number of nodes
    ///   in the graph.
    pub fn add_weighted_arc(&mut self, u: usize, v: usize, weight: i64) -> bool {
        if !self.flags.contains(GraphFlags::WEIGHTED) {
            panic!("Error adding arc ({u}, {v}): the graph is unweighted, use add_arc");
        }
        self.insert(u, v, weight)
    }

    fn insert(&mut self, u: usize, v: usize, weight: i64) -> bool {
        let max = u.max(v);
        if max >= self.succ.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.succ.len(),
            );
        }
        let succ = &mut self.succ[u];
        let Err(pos) = succ.binary_search_by_key(&v, WeightedArc::target) else {
            return false;
        };
        succ.insert(pos, WeightedArc(v, weight));

        if !self.flags.contains(GraphFlags::DIRECTED) && u != v {
            let pred = &mut self.succ[v];
            // Successor lists of undirected graphs are kept symmetric
            let Err(pos) = pred.binary_search_by_key(&u, WeightedArc::target) else {
                unreachable!("Arc ({v}, {u}) present without ({u}, {v})");
            };
            pred.insert(pos, WeightedArc(u, weight));
        }

        self.num_arcs += 1;
        true
    }

    /// Adds arcs from an [`IntoIterator`] to an unweighted graph, adding new
    /// nodes as needed.
    ///
    /// The items must be pairs of the form `(usize, usize)` specifying an arc.
    /// Duplicate arcs are ignored.
    pub fn add_arcs(&mut self, arcs: impl IntoIterator<Item = (usize, usize)>) {
        for (u, v) in arcs {
            self.add_node(u.max(v));
            self.add_arc(u, v);
        }
    }

    /// Creates a new directed, unweighted graph from an [`IntoIterator`].
    ///
    /// The items must be pairs of the form `(usize, usize)` specifying an arc.
    /// The number of nodes is one plus the largest node appearing in an arc.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::empty(0);
        g.add_arcs(arcs);
        g
    }

    /// Adds weighted arcs from an [`IntoIterator`] to a weighted graph, adding
    /// new nodes as needed.
    ///
    /// The items must be labeled pairs of the form `((usize, usize), i64)`
    /// specifying an arc and its weight. Duplicate arcs are ignored.
    pub fn add_weighted_arcs(&mut self, arcs: impl IntoIterator<Item = ((usize, usize), i64)>) {
        for ((u, v), w) in arcs {
            self.add_node(u.max(v));
            self.add_weighted_arc(u, v, w);
        }
    }

    /// Creates a new directed, weighted graph from an [`IntoIterator`].
    ///
    /// The items must be labeled pairs of the form `((usize, usize), i64)`
    /// specifying an arc and its weight.
    pub fn from_weighted_arcs(arcs: impl IntoIterator<Item = ((usize, usize), i64)>) -> Self {
        let mut g = Self::new(0, GraphFlags::DIRECTED | GraphFlags::WEIGHTED);
        g.add_weighted_arcs(arcs);
        g
    }

    /// Returns the weights of the arcs leaving a node, in increasing
    /// successor order.
    ///
    /// On unweighted graphs all weights are one.
    pub fn weights(&self, node: usize) -> impl Iterator<Item = i64> + '_ {
        self.succ[node].iter().map(WeightedArc::weight)
    }
}

impl RandomAccessGraph for VecGraph {
    type Successors<'succ> =
        core::iter::Map<core::slice::Iter<'succ, WeightedArc>, fn(&WeightedArc) -> usize>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        let target: fn(&WeightedArc) -> usize = WeightedArc::target;
        self.succ[node].iter().map(target)
    }

    #[inline(always)]
    fn is_directed(&self) -> bool {
        self.flags.contains(GraphFlags::DIRECTED)
    }

    fn has_arc(&self, src: usize, dst: usize) -> bool {
        self.succ[src]
            .binary_search_by_key(&dst, WeightedArc::target)
            .is_ok()
    }
}

impl WeightedGraph for VecGraph {
    type Arcs<'succ> =
        core::iter::Map<core::slice::Iter<'succ, WeightedArc>, fn(&WeightedArc) -> (usize, i64)>;

    #[inline(always)]
    fn is_weighted(&self) -> bool {
        self.flags.contains(GraphFlags::WEIGHTED)
    }

    #[inline(always)]
    fn arcs(&self, node: usize) -> Self::Arcs<'_> {
        let pair: fn(&WeightedArc) -> (usize, i64) = |arc| (arc.0, arc.1);
        self.succ[node].iter().map(pair)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sorted_insertion() {
        let mut g = VecGraph::empty(4);
        assert!(g.add_arc(0, 3));
        assert!(g.add_arc(0, 1));
        assert!(g.add_arc(0, 2));
        assert!(!g.add_arc(0, 1));
        assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(g.num_arcs(), 3);
        assert_eq!(g.outdegree(0), 3);
        assert_eq!(g.outdegree(3), 0);
    }

    #[test]
    fn test_undirected_symmetry() {
        let mut g = VecGraph::new(3, GraphFlags::WEIGHTED);
        assert!(g.add_weighted_arc(2, 0, 7));
        assert!(!g.add_weighted_arc(0, 2, 5));
        assert!(g.add_weighted_arc(1, 1, 3));
        assert_eq!(g.num_arcs(), 2);
        assert_eq!(g.arcs(0).collect::<Vec<_>>(), vec![(2, 7)]);
        assert_eq!(g.arcs(2).collect::<Vec<_>>(), vec![(0, 7)]);
        assert_eq!(g.arcs(1).collect::<Vec<_>>(), vec![(1, 3)]);
    }

    #[test]
    #[should_panic(expected = "use add_weighted_arc")]
    fn test_unweighted_insertion_on_weighted_graph() {
        let mut g = VecGraph::new(2, GraphFlags::DIRECTED | GraphFlags::WEIGHTED);
        g.add_arc(0, 1);
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn test_missing_node() {
        let mut g = VecGraph::empty(2);
        g.add_arc(0, 2);
    }
}
