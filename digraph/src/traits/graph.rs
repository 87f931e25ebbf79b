/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Basic traits to access graphs in random-access fashion.

A [random-access graph](RandomAccessGraph) exposes its number of nodes and
arcs, and for each node the list of its successors in increasing order. Nodes
are identified by the integers `0..num_nodes()`.

A [weighted graph](WeightedGraph) additionally associates an integer weight
with each arc. Unweighted graphs implement this trait, too: in that case every
arc has weight one, so that algorithms computing weighted distances compute
hop counts on unweighted graphs.

Both traits are implemented for references, mutable references and [`Rc`],
so algorithms taking an `impl RandomAccessGraph` can be called on borrowed
graphs.

*/

use impl_tools::autoimpl;
use std::rc::Rc;

/// A graph providing random access to successor lists.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S, Rc<S>)]
pub trait RandomAccessGraph {
    /// The type of the iterator over the successors of a node
    /// returned by [`successors`](RandomAccessGraph::successors).
    type Successors<'succ>: IntoIterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph.
    ///
    /// For undirected graphs, this is the number of edges, that is, each
    /// edge is counted once even if it appears in two successor lists.
    fn num_arcs(&self) -> u64;

    /// Returns the number of successors of a node.
    fn outdegree(&self, node: usize) -> usize;

    /// Returns the successors of a node in increasing order.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns whether the graph is directed.
    fn is_directed(&self) -> bool;

    /// Returns whether there is an arc going from `src` to `dst`.
    ///
    /// Note that the default implementation performs a linear scan.
    fn has_arc(&self, src: usize, dst: usize) -> bool {
        for succ in self.successors(src) {
            if succ == dst {
                return true;
            }
        }
        false
    }
}

/// A [random-access graph](RandomAccessGraph) whose arcs carry an integer
/// weight.
///
/// The iterator returned by [`arcs`](WeightedGraph::arcs) lists the same
/// successors, in the same order, as the one returned by
/// [`successors`](RandomAccessGraph::successors).
#[autoimpl(for<S: trait + ?Sized> &S, &mut S, Rc<S>)]
pub trait WeightedGraph: RandomAccessGraph {
    /// The type of the iterator over the pairs (successor, weight) of a node
    /// returned by [`arcs`](WeightedGraph::arcs).
    type Arcs<'succ>: IntoIterator<Item = (usize, i64)>
    where
        Self: 'succ;

    /// Returns whether the arcs of the graph carry explicit weights.
    ///
    /// If this method returns false, all arcs have weight one.
    fn is_weighted(&self) -> bool;

    /// Returns the pairs (successor, weight) of a node, in increasing
    /// successor order.
    fn arcs(&self, node: usize) -> Self::Arcs<'_>;
}
