/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::visits::{Sequential, depth_first::*};
use digraph::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;
use sux::bits::BitVec;

/// Tarjan's algorithm for strongly connected components.
///
/// Nodes receive a discovery index in preorder and a low link, that is, the
/// smallest discovery index reachable from the subtree of the node using at
/// most one arc pointing to a node on the component stack. When the low link
/// of a node is equal to its discovery index at postvisit time, the node is
/// the first visited node of its component, and the component is made of the
/// node and all nodes above it on the component stack.
///
/// The visit is iterative, so there are no limitations on the size of the
/// graph due to the size of the call stack. Roots are scanned in increasing
/// order, and so are successors: components are numbered in the order in
/// which they are completed, which is a reverse topological order of the
/// condensation of the graph.
pub fn tarjan(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Sccs {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let mut visit = SeqPred::new(&graph);
    let mut index = vec![0; num_nodes].into_boxed_slice();
    let mut low_link = vec![0; num_nodes].into_boxed_slice();
    let mut components = vec![0; num_nodes].into_boxed_slice();
    let mut component_stack = Vec::with_capacity(16);
    let mut on_stack = BitVec::new(num_nodes);
    let mut next_index = 0;
    let mut number_of_components = 0;

    visit
        .visit(0..num_nodes, |event| {
            match event {
                EventPred::Previsit { node, .. } => {
                    pl.light_update();
                    index[node] = next_index;
                    low_link[node] = next_index;
                    next_index += 1;
                    component_stack.push(node);
                    on_stack.set(node, true);
                }
                EventPred::Revisit { node, pred, .. } => {
                    // Nodes already assigned to a component are ignored
                    if on_stack.get(node) {
                        low_link[pred] = low_link[pred].min(index[node]);
                    }
                }
                EventPred::Postvisit { node, parent, .. } => {
                    if low_link[node] == index[node] {
                        while let Some(comp_node) = component_stack.pop() {
                            on_stack.set(comp_node, false);
                            components[comp_node] = number_of_components;
                            if comp_node == node {
                                break;
                            }
                        }
                        number_of_components += 1;
                    }
                    // Propagate knowledge to the parent
                    if parent != node {
                        low_link[parent] = low_link[parent].min(low_link[node]);
                    }
                }
                _ => {}
            }
            Continue(())
        })
        .continue_value_no_break();

    debug_assert!(component_stack.is_empty());
    pl.done();
    Sccs::new(number_of_components, components)
}
