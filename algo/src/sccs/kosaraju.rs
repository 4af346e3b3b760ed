/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::visits::{
    Sequential,
    depth_first::{EventNoPred, EventPred, SeqNoPred, SeqPred},
};
use digraph::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Kosaraju's algorithm for strongly connected components.
///
/// A first visit of `graph` records the nodes in the order in which they are
/// finished. A second visit, of `transpose`, takes roots from the last
/// finished node backwards: every visit tree it grows is one component, and
/// components are numbered by the order of their trees.
///
/// It needs the transpose and two visits, so [`tarjan`](super::tarjan) is
/// preferable; this implementation is an independent cross-check.
///
/// # Panics
///
/// If `graph` and `transpose` have a different number of nodes.
pub fn kosaraju(
    graph: impl RandomAccessGraph,
    transpose: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Sccs {
    let num_nodes = graph.num_nodes();
    assert_eq!(
        num_nodes,
        transpose.num_nodes(),
        "The transpose has a different number of nodes"
    );

    pl.item_name("node");
    pl.expected_updates(Some(2 * num_nodes));
    pl.start("Computing strongly connected components with Kosaraju's algorithm...");

    let mut finished = Vec::with_capacity(num_nodes);
    SeqPred::new(&graph)
        .visit(0..num_nodes, |event| {
            if let EventPred::Postvisit { node, .. } = event {
                pl.light_update();
                finished.push(node);
            }
            Continue(())
        })
        .continue_value_no_break();

    let mut components = vec![0; num_nodes].into_boxed_slice();
    let mut num_components = 0;
    SeqNoPred::new(&transpose)
        .visit(finished.into_iter().rev(), |event| {
            match event {
                EventNoPred::Init { .. } => num_components += 1,
                EventNoPred::Previsit { node, .. } => {
                    pl.light_update();
                    components[node] = num_components - 1;
                }
                _ => {}
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();
    Sccs::new(num_components, components)
}
