/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2025 Fontana Tommaso
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::visits::{
    Sequential,
    depth_first::{EventNoPred, EventPred, FilterArgsNoPred, FilterArgsPred},
};
use digraph::traits::RandomAccessGraph;
use sealed::sealed;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// Depth-first visit emitting [`EventNoPred`].
pub type SeqNoPred<'a, G> = SeqIter<'a, TwoStates, G, (), false>;

/// Depth-first visit emitting [`EventPred`], with `on_stack` always false.
pub type SeqPred<'a, G> = SeqIter<'a, TwoStates, G, usize, true>;

/// Depth-first visit emitting [`EventPred`] and tracking the visit path.
pub type SeqPath<'a, G> = SeqIter<'a, ThreeStates, G, usize, true>;

/// Iterative sequential depth-first visits.
///
/// The visit keeps an explicit stack with one frame per node on the visit
/// path, so deep graphs do not overflow the call stack. A frame holds the
/// pending successors of its node and, for visits tracking parents, the
/// parent of the node. Since successors come out of the graph in increasing
/// order, nodes are discovered exactly as in the recursive formulation.
///
/// Use one of the three aliases rather than this type:
///
/// | visit          | events          | per-node bits | frame                  |
/// |----------------|-----------------|---------------|------------------------|
/// | [`SeqNoPred`]  | [`EventNoPred`] | 1             | successors             |
/// | [`SeqPred`]    | [`EventPred`]   | 1             | successors and parent  |
/// | [`SeqPath`]    | [`EventPred`]   | 2             | successors and parent  |
///
/// [`SeqNoPred`] is enough for reachability; [`SeqPred`] drives [Tarjan's
/// algorithm](crate::sccs::tarjan); [`SeqPath`] recognizes back arcs, as
/// needed by [topological sort](crate::top_sort()) and
/// [acyclicity](crate::is_acyclic).
///
/// After a visit stopped by a callback, [`stack`](SeqPred::stack) returns
/// the visit path.
///
/// # Examples
///
/// Looking for a back arc:
///
/// ```
/// use digraph::prelude::*;
/// use digraph_algo::visits::*;
/// use digraph_algo::visits::depth_first::*;
/// use std::ops::ControlFlow::*;
///
/// let graph = AdjMatrix::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = depth_first::SeqPath::new(&graph);
///
/// let found = visit.visit(0..graph.num_nodes(), |event| match event {
///     EventPred::Revisit { on_stack: true, .. } => Break(StoppedWhenDone),
///     _ => Continue(()),
/// });
/// assert!(found.is_break());
/// ```
///
/// Collecting the postorder of a DAG, whose reverse is a topological order:
///
/// ```
/// use digraph::prelude::*;
/// use digraph_algo::visits::*;
/// use digraph_algo::visits::depth_first::*;
/// use std::ops::ControlFlow::Continue;
/// use no_break::NoBreak;
///
/// let graph = AdjMatrix::from_arcs([(0, 1), (1, 2), (1, 3), (0, 3)]);
/// let mut postorder = vec![];
///
/// depth_first::SeqPred::new(&graph)
///     .visit(0..graph.num_nodes(), |event| {
///         if let EventPred::Postvisit { node, .. } = event {
///             postorder.push(node);
///         }
///         Continue(())
///     })
///     .continue_value_no_break();
///
/// assert_eq!(postorder, vec![2, 3, 1, 0]);
/// ```
pub struct SeqIter<'a, S, G: RandomAccessGraph, P, const PRED: bool> {
    graph: &'a G,
    /// Pending successors of each node on the visit path, paired with its
    /// parent (the root is its own parent).
    frames: Vec<(<G::Successors<'a> as IntoIterator>::IntoIter, P)>,
    states: S,
}

/// Iterator over the visit path of an interrupted visit, returned by
/// [`stack`](SeqPred::stack).
pub struct StackIterator<'a, 'b, S, G: RandomAccessGraph> {
    visit: &'b mut SeqIter<'a, S, G, usize, true>,
}

impl<S, G: RandomAccessGraph> Iterator for StackIterator<'_, '_, S, G> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // The frame of the root stores the root as parent, and the root
        // has already been returned as parent of the second frame
        if self.visit.frames.len() <= 1 {
            return None;
        }
        self.visit.frames.pop().map(|(_, parent)| parent)
    }
}

impl<'a, S: NodeStates, G: RandomAccessGraph, P, const PRED: bool> SeqIter<'a, S, G, P, PRED> {
    /// Creates a visit of `graph` in which no node is known.
    pub fn new(graph: &'a G) -> SeqIter<'a, S, G, P, PRED> {
        Self {
            graph,
            frames: Vec::with_capacity(16),
            states: S::new(graph.num_nodes()),
        }
    }

    /// Returns whether `node` has been discovered.
    pub fn known(&self, node: usize) -> bool {
        self.states.is_known(node)
    }
}

impl<'a, S, G: RandomAccessGraph> SeqIter<'a, S, G, usize, true> {
    /// Drains the visit path, returning the parent of the last node on the
    /// path, then its parent, and so on up to the root.
    ///
    /// The last node on the path is not returned: it is the node whose
    /// event stopped the visit, and the caller knows it already. After a
    /// complete visit the path is empty.
    pub fn stack(&mut self) -> StackIterator<'a, '_, S, G> {
        StackIterator { visit: self }
    }
}

#[doc(hidden)]
#[sealed]
pub trait NodeStates {
    fn new(n: usize) -> Self;
    fn mark_known(&mut self, node: usize);
    fn is_known(&self, node: usize) -> bool;
    fn enter_path(&mut self, node: usize);
    fn leave_path(&mut self, node: usize);
    fn on_path(&self, node: usize) -> bool;
    fn clear(&mut self);
}

#[doc(hidden)]
/// Node states of visits that do not track the visit path: a node is either
/// unknown or known.
pub struct TwoStates {
    known: BitVec,
}

#[sealed]
impl NodeStates for TwoStates {
    fn new(n: usize) -> TwoStates {
        TwoStates {
            known: BitVec::new(n),
        }
    }
    #[inline(always)]
    fn mark_known(&mut self, node: usize) {
        self.known.set(node, true);
    }
    #[inline(always)]
    fn is_known(&self, node: usize) -> bool {
        self.known.get(node)
    }
    #[inline(always)]
    fn enter_path(&mut self, _node: usize) {}
    #[inline(always)]
    fn leave_path(&mut self, _node: usize) {}
    #[inline(always)]
    fn on_path(&self, _node: usize) -> bool {
        false
    }
    fn clear(&mut self) {
        self.known.reset();
    }
}

#[doc(hidden)]
/// Node states of visits that track the visit path: unknown (white), known
/// and on the path (gray), known and off the path (black).
pub struct ThreeStates {
    known: BitVec,
    on_path: BitVec,
}

#[sealed]
impl NodeStates for ThreeStates {
    fn new(n: usize) -> ThreeStates {
        ThreeStates {
            known: BitVec::new(n),
            on_path: BitVec::new(n),
        }
    }
    #[inline(always)]
    fn mark_known(&mut self, node: usize) {
        self.known.set(node, true);
    }
    #[inline(always)]
    fn is_known(&self, node: usize) -> bool {
        self.known.get(node)
    }
    #[inline(always)]
    fn enter_path(&mut self, node: usize) {
        self.on_path.set(node, true);
    }
    #[inline(always)]
    fn leave_path(&mut self, node: usize) {
        self.on_path.set(node, false);
    }
    #[inline(always)]
    fn on_path(&self, node: usize) -> bool {
        self.on_path.get(node)
    }
    fn clear(&mut self) {
        self.known.reset();
        self.on_path.reset();
    }
}

impl<S: NodeStates, G: RandomAccessGraph> Sequential<EventPred> for SeqIter<'_, S, G, usize, true> {
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, EventPred) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, FilterArgsPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut init: T,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        let graph = self.graph;
        let states = &mut self.states;
        let frames = &mut self.frames;

        for root in roots {
            if states.is_known(root) {
                continue;
            }
            let args = FilterArgsPred {
                node: root,
                pred: root,
                root,
                depth: 0,
            };
            if !filter(&mut init, args) {
                continue;
            }

            callback(&mut init, EventPred::Init { root })?;
            states.mark_known(root);
            callback(
                &mut init,
                EventPred::Previsit {
                    node: root,
                    parent: root,
                    root,
                    depth: 0,
                },
            )?;
            states.enter_path(root);
            frames.push((graph.successors(root).into_iter(), root));

            // The node owning the topmost frame
            let mut node = root;

            'frames: loop {
                let depth = frames.len();
                let Some((succs, parent)) = frames.last_mut() else {
                    break;
                };
                let parent = *parent;

                for succ in succs {
                    if states.is_known(succ) {
                        callback(
                            &mut init,
                            EventPred::Revisit {
                                node: succ,
                                pred: node,
                                root,
                                depth,
                                on_stack: states.on_path(succ),
                            },
                        )?;
                        continue;
                    }
                    let args = FilterArgsPred {
                        node: succ,
                        pred: node,
                        root,
                        depth,
                    };
                    if !filter(&mut init, args) {
                        continue;
                    }
                    states.mark_known(succ);
                    callback(
                        &mut init,
                        EventPred::Previsit {
                            node: succ,
                            parent: node,
                            root,
                            depth,
                        },
                    )?;
                    states.enter_path(succ);
                    frames.push((graph.successors(succ).into_iter(), node));
                    node = succ;
                    continue 'frames;
                }

                callback(
                    &mut init,
                    EventPred::Postvisit {
                        node,
                        parent,
                        root,
                        depth: depth - 1,
                    },
                )?;
                states.leave_path(node);
                frames.pop();
                node = parent;
            }

            callback(&mut init, EventPred::Done { root })?;
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.frames.clear();
        self.states.clear();
    }
}

impl<G: RandomAccessGraph> Sequential<EventNoPred> for SeqIter<'_, TwoStates, G, (), false> {
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, EventNoPred) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, FilterArgsNoPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut init: T,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        let graph = self.graph;
        let states = &mut self.states;
        let frames = &mut self.frames;

        for root in roots {
            if states.is_known(root) {
                continue;
            }
            let args = FilterArgsNoPred {
                node: root,
                root,
                depth: 0,
            };
            if !filter(&mut init, args) {
                continue;
            }

            callback(&mut init, EventNoPred::Init { root })?;
            states.mark_known(root);
            callback(
                &mut init,
                EventNoPred::Previsit {
                    node: root,
                    root,
                    depth: 0,
                },
            )?;
            frames.push((graph.successors(root).into_iter(), ()));

            'frames: loop {
                let depth = frames.len();
                let Some((succs, _)) = frames.last_mut() else {
                    break;
                };

                for succ in succs {
                    if states.is_known(succ) {
                        callback(
                            &mut init,
                            EventNoPred::Revisit {
                                node: succ,
                                root,
                                depth,
                            },
                        )?;
                        continue;
                    }
                    let args = FilterArgsNoPred {
                        node: succ,
                        root,
                        depth,
                    };
                    if !filter(&mut init, args) {
                        continue;
                    }
                    states.mark_known(succ);
                    callback(
                        &mut init,
                        EventNoPred::Previsit {
                            node: succ,
                            root,
                            depth,
                        },
                    )?;
                    frames.push((graph.successors(succ).into_iter(), ()));
                    continue 'frames;
                }

                frames.pop();
            }

            callback(&mut init, EventNoPred::Done { root })?;
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.frames.clear();
        self.states.clear();
    }
}
