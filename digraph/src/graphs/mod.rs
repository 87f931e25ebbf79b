/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Implementations of graphs.

pub mod random;
pub mod vec_graph;

pub mod prelude {
    pub use super::random::ErdosRenyi;
    pub use super::vec_graph::{GraphFlags, VecGraph, WeightedArc};
}
