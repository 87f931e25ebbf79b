/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_doc_comments)]

pub mod closure;
pub mod distances;
pub mod shortest_paths;

pub mod prelude {
    pub use crate::closure::transitive_closure;
    pub use crate::distances::all_pairs::AllPairsDistances;
    pub use crate::distances::eccentricity::{EccentricityMeasures, eccentricity_measures};
    pub use crate::shortest_paths::{NegativeCycle, ShortestPaths, bellman_ford};
}
