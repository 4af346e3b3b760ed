/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! [`SeqNoPred`] emits [`EventNoPred`]; [`SeqPred`] and [`SeqPath`] emit
//! [`EventPred`], which carries the node from which each node is reached, so
//! that every event after [`Init`](EventPred::Init) describes an arc. The
//! root is the exception: its previsit and postvisit have the root as parent.
//!
//! With the usual three colors, a node is white until its
//! [previsit](EventPred::Previsit), gray until its
//! [postvisit](EventPred::Postvisit), and black afterwards. Only [`SeqPath`]
//! tells gray and black nodes apart, through the `on_stack` field of
//! [`Revisit`](EventPred::Revisit).

mod seq;
pub use seq::*;

/// Events of depth-first visits that do not track parents.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum EventNoPred {
    /// A new visit tree is about to start from `root`.
    ///
    /// Not emitted for roots that are already known or filtered out.
    Init { root: usize },
    /// `node` is discovered at distance `depth` from `root`.
    Previsit {
        node: usize,
        root: usize,
        depth: usize,
    },
    /// `node` was already known and is reached again along an arc whose
    /// source is at distance `depth - 1` from `root`.
    Revisit {
        node: usize,
        root: usize,
        depth: usize,
    },
    /// The visit tree of `root` is complete.
    ///
    /// Not emitted if a callback stops the visit.
    Done { root: usize },
}

/// What the filter of a [`SeqNoPred`] visit sees.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FilterArgsNoPred {
    /// The discovered node.
    pub node: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The distance of [`node`](Self::node) from [`root`](Self::root).
    pub depth: usize,
}

impl super::Event for EventNoPred {
    type FilterArgs = FilterArgsNoPred;
}

/// Events of depth-first visits that track parents.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// A new visit tree is about to start from `root`.
    ///
    /// Not emitted for roots that are already known or filtered out.
    Init { root: usize },
    /// `node` is discovered through the tree arc `parent -> node`, at
    /// distance `depth` from `root`.
    Previsit {
        node: usize,
        parent: usize,
        root: usize,
        depth: usize,
    },
    /// The arc `pred -> node` leads to a node that was already known.
    ///
    /// `depth` is the distance of `pred` from `root` plus one. `on_stack`
    /// is true when `node` is on the visit path, that is, when the arc is a
    /// back arc; visits that do not keep the path always report false.
    Revisit {
        node: usize,
        pred: usize,
        root: usize,
        depth: usize,
        on_stack: bool,
    },
    /// All successors of `node` have been enumerated, and the visit retreats
    /// along `parent -> node`.
    Postvisit {
        node: usize,
        parent: usize,
        root: usize,
        depth: usize,
    },
    /// The visit tree of `root` is complete.
    ///
    /// Not emitted if a callback stops the visit.
    Done { root: usize },
}

/// What the filter of a [`SeqPred`] or [`SeqPath`] visit sees.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The discovered node.
    pub node: usize,
    /// The node from which [`node`](Self::node) was reached.
    pub pred: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The distance of [`node`](Self::node) from [`root`](Self::root).
    pub depth: usize,
}

impl super::Event for EventPred {
    type FilterArgs = FilterArgsPred;
}
