/*
 * SPDX-FileCopyrightText: 2025 The digraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms related to distances.
//!
//! [`AllPairsDistances`](all_pairs::AllPairsDistances) computes the full
//! distance table of a graph, and
//! [`eccentricity_measures`](eccentricity::eccentricity_measures) uses it to
//! compute eccentricities, radius, diameter and central vertices.

pub mod all_pairs;
pub mod eccentricity;
