/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]

pub mod sccs;
pub use sccs::compute_sccs;

pub mod top_sort;
pub use top_sort::{compute_topological_order, is_acyclic, top_sort};

pub mod visits;

pub mod prelude {
    pub use crate::is_acyclic;
    pub use crate::sccs::{Sccs, compute_sccs, kosaraju, tarjan};
    pub use crate::top_sort::{Cycle, TopSort, compute_topological_order, top_sort};
    pub use crate::visits::depth_first;
    pub use crate::visits::{Sequential, StoppedWhenDone};
}
