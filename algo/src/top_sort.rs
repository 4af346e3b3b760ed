/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Topological sort.
//!
//! A [topological sort](top_sort) is computed by a depth-first visit keeping
//! track of the visit path: as soon as an arc pointing to a node on the visit
//! path is found, the visit stops and the cycle closed by the arc is returned
//! as a witness. Otherwise, the reverse of the postorder of the visit is a
//! topological order.
//!
//! # Examples
//!
//! ```
//! use digraph::prelude::*;
//! use digraph_algo::prelude::*;
//!
//! let dag = AdjMatrix::from_arcs([(0, 1), (1, 2), (0, 2)]);
//! assert_eq!(compute_topological_order(&dag).order(), Some(&[0, 1, 2][..]));
//!
//! let cyclic = AdjMatrix::from_arcs([(0, 1), (1, 2), (2, 1)]);
//! let top_sort = compute_topological_order(&cyclic);
//! assert_eq!(top_sort.cycle().map(Cycle::nodes), Some(&[1, 2][..]));
//! ```

use crate::visits::{Sequential, depth_first::*};
use digraph::traits::RandomAccessGraph;
use dsi_progress_logger::{ProgressLog, no_logging};
use std::fmt;
use std::ops::ControlFlow::{Break, Continue};

/// A cycle of a graph.
///
/// The cycle is represented by the sequence of its nodes `c₀`, `c₁`, …,
/// `cₖ`: the graph contains the arcs `c₀ → c₁`, …, `cₖ₋₁ → cₖ` and the
/// closing arc `cₖ → c₀`. Nodes are distinct, and a loop is represented by a
/// single node.
///
/// The [`Display`](fmt::Display) implementation writes the cycle as
/// `c₀ -> c₁ -> … -> cₖ -> c₀`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle(Box<[usize]>);

impl Cycle {
    /// Returns the nodes of the cycle, in order.
    pub fn nodes(&self) -> &[usize] {
        &self.0
    }

    /// Returns an iterator over the arcs of the cycle, including the closing
    /// arc.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0
            .iter()
            .copied()
            .zip(self.0.iter().copied().cycle().skip(1))
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.0.iter() {
            write!(f, "{node} -> ")?;
        }
        match self.0.first() {
            Some(first) => write!(f, "{first}"),
            None => Ok(()),
        }
    }
}

/// The result of a [topological sort](top_sort).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopSort {
    /// The graph is acyclic: the nodes in topological order, that is, for
    /// every arc `x → y`, `x` precedes `y`.
    Sorted(Box<[usize]>),
    /// The graph is not acyclic, and no topological order exists: the cycle
    /// closed by the first arc pointing to the visit path.
    Cyclic(Cycle),
}

impl TopSort {
    /// Returns whether a topological order was found.
    pub fn is_sorted(&self) -> bool {
        matches!(self, TopSort::Sorted(_))
    }

    /// Returns the topological order, if any.
    pub fn order(&self) -> Option<&[usize]> {
        match self {
            TopSort::Sorted(order) => Some(order),
            TopSort::Cyclic(_) => None,
        }
    }

    /// Returns the witness cycle, if the graph is not acyclic.
    pub fn cycle(&self) -> Option<&Cycle> {
        match self {
            TopSort::Sorted(_) => None,
            TopSort::Cyclic(cycle) => Some(cycle),
        }
    }

    /// Consumes the result, returning the topological order, if any.
    pub fn into_order(self) -> Option<Box<[usize]>> {
        match self {
            TopSort::Sorted(order) => Some(order),
            TopSort::Cyclic(_) => None,
        }
    }
}

/// Computes a topological sort of a graph, or finds a cycle.
///
/// Roots are scanned in increasing order, and so are successors, so the result
/// is deterministic. If an arc pointing to a node on the visit path is found
/// (in particular, a loop), the visit is stopped and the graph has no
/// topological order: the result contains the cycle formed by the arc and the
/// portion of the visit path starting at its target.
pub fn top_sort(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> TopSort {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing topological sort...");

    let mut visit = SeqPath::new(&graph);
    let mut postorder = Vec::with_capacity(num_nodes);

    let result = visit.visit(0..num_nodes, |event| match event {
        EventPred::Previsit { .. } => {
            pl.light_update();
            Continue(())
        }
        // Stop the visit as soon as a back arc is found
        EventPred::Revisit {
            node,
            pred,
            on_stack: true,
            ..
        } => Break((node, pred)),
        EventPred::Postvisit { node, .. } => {
            postorder.push(node);
            Continue(())
        }
        _ => Continue(()),
    });

    let top_sort = match result {
        Continue(()) => {
            postorder.reverse();
            TopSort::Sorted(postorder.into_boxed_slice())
        }
        Break((node, pred)) => {
            // node is an ancestor of pred on the visit path, so we walk
            // the path backwards from pred until we find it
            let mut cycle = vec![pred];
            if pred != node {
                for parent in visit.stack() {
                    cycle.push(parent);
                    if parent == node {
                        break;
                    }
                }
            }
            cycle.reverse();
            log::debug!("Found a cycle of length {}", cycle.len());
            TopSort::Cyclic(Cycle(cycle.into_boxed_slice()))
        }
    };

    pl.done();
    top_sort
}

/// Returns whether the graph is acyclic. Loops are cycles.
///
/// This is [`top_sort`] with the order or the cycle thrown away.
pub fn is_acyclic(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> bool {
    top_sort(graph, pl).is_sorted()
}

/// Computes a topological sort of a graph, or finds a cycle, without logging.
///
/// See [`top_sort`].
pub fn compute_topological_order(graph: impl RandomAccessGraph) -> TopSort {
    top_sort(graph, no_logging![])
}
