/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms used to compute and work with strongly connected components.
//!
//! There are two implementations: [Tarjan's algorithm](tarjan) and
//! [Kosaraju's algorithm](kosaraju). The former is to be preferred in almost
//! all cases: Kosaraju's algorithm is slower and requires the transpose of the
//! graph; it is mainly useful for testing and debugging.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use digraph::prelude::*;
//! use digraph_algo::sccs::*;
//!
//! let graph = AdjMatrix::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
//!
//! // Let's build the graph SCCS with Tarjan's algorithm
//! let mut scc = tarjan(&graph, no_logging![]);
//!
//! // Let's sort the SCC by size
//! let sizes = scc.sort_by_size();
//!
//! assert_eq!(sizes, vec![3, 1].into_boxed_slice());
//! assert_eq!(scc.components(), &vec![0, 0, 0, 1]);
//! assert_eq!(scc.partition(), vec![vec![0, 1, 2], vec![3]]);
//! ```

mod tarjan;
pub use tarjan::*;

mod kosaraju;
pub use kosaraju::*;

use digraph::traits::RandomAccessGraph;
use dsi_progress_logger::no_logging;

/// Strongly connected components.
///
/// An instance of this structure stores the [index of the
/// component](Sccs::components) of each node. Components are numbered from 0 to
/// [`num_components`](Sccs::num_components).
///
/// Moreover, this structure makes it possible to [sort the components by
/// size](Sccs::sort_by_size) and to extract the [canonical
/// partition](Sccs::partition) of the nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    num_components: usize,
    components: Box<[usize]>,
}

impl Sccs {
    pub fn new(num_components: usize, components: Box<[usize]>) -> Self {
        debug_assert!(components.iter().all(|&c| c < num_components));
        Sccs {
            num_components,
            components,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns whether two nodes belong to the same component, that is,
    /// whether they are mutually reachable.
    #[inline(always)]
    pub fn same_component(&self, x: usize, y: usize) -> bool {
        self.components[x] == self.components[y]
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.components() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }

    /// Renumbers the components by decreasing size and returns the sorted
    /// sizes.
    ///
    /// The sort is stable: components of the same size keep their relative
    /// order.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        let sizes = self.compute_sizes();
        // by_size[i] is the old number of the i-th largest component
        let mut by_size: Vec<usize> = (0..self.num_components).collect();
        by_size.sort_by_key(|&c| std::cmp::Reverse(sizes[c]));

        let mut renumber = vec![0; self.num_components];
        for (new, &old) in by_size.iter().enumerate() {
            renumber[old] = new;
        }
        for component in self.components.iter_mut() {
            *component = renumber[*component];
        }

        by_size.iter().map(|&c| sizes[c]).collect()
    }

    /// Returns the components as sets of nodes, in canonical form.
    ///
    /// Each component is sorted in increasing order, and components are
    /// sorted lexicographically (equivalently, by their smallest node). The
    /// result does not depend on the numbering of the components, so it can
    /// be used to compare the output of different algorithms.
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let mut partition = vec![vec![]; self.num_components];
        // Nodes are scanned in increasing order, so each component is sorted
        for (node, &component) in self.components.iter().enumerate() {
            partition[component].push(node);
        }
        // Components are disjoint and nonempty, so comparing the first
        // element suffices
        partition.sort_unstable_by_key(|component| component[0]);
        partition
    }
}

/// Returns the strongly connected components of a graph in canonical form.
///
/// This is a convenience wrapper around [`tarjan`] that does not log, and
/// returns the [canonical partition](Sccs::partition) of the nodes.
pub fn compute_sccs(graph: impl RandomAccessGraph) -> Vec<Vec<usize>> {
    tarjan(graph, no_logging![]).partition()
}
