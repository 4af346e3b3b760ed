/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2025 The digraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The basic graph trait.
//!
//! Nodes are identified by the integers in `[0..num_nodes)`. Implementations
//! must return successors in strictly increasing order: algorithms in this
//! workspace rely on that order to break ties deterministically.

use impl_tools::autoimpl;
use std::rc::Rc;

/// A directed graph providing random access to successor lists.
///
/// The trait is implemented for references and [`Rc`], so algorithms can
/// accept graphs either by value or by reference.
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
    fn num_arcs(&self) -> u64;

    /// Returns the successors of a node in increasing order.
    fn successors(&self, node_id: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    ///
    /// The default implementation enumerates the successors.
    fn outdegree(&self, node_id: usize) -> usize {
        self.successors(node_id).into_iter().count()
    }

    /// Returns whether there is an arc going from `src_node_id` to `dst_node_id`.
    ///
    /// Note that the default implementation performs a linear scan.
    fn has_arc(&self, src_node_id: usize, dst_node_id: usize) -> bool {
        for succ in self.successors(src_node_id) {
            if succ == dst_node_id {
                return true;
            }
        }
        false
    }
}

/// Returns whether two graphs have the same number of nodes and the same arcs.
pub fn eq<G0: RandomAccessGraph, G1: RandomAccessGraph>(g0: &G0, g1: &G1) -> bool {
    if g0.num_nodes() != g1.num_nodes() {
        return false;
    }
    (0..g0.num_nodes()).all(|node| {
        g0.successors(node)
            .into_iter()
            .eq(g1.successors(node).into_iter())
    })
}
