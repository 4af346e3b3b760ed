/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Callback-driven graph visits.
//!
//! A visit reports what happens during the traversal by calling a callback
//! with an event of type `A: `[`Event`]. The callback returns a
//! [`ControlFlow`]: returning [`Break`](ControlFlow::Break) stops the visit
//! at once, and the break value becomes the result of the visit method.
//! Visits that never stop can use
//! [`Infallible`](std::convert::Infallible) as break type, and then unwrap
//! the result with
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break).
//!
//! Stopping is not necessarily a failure: a search can stop with
//! [`StoppedWhenDone`] as soon as the answer is known.
//!
//! A filter can be provided to exclude nodes: when it returns false on a
//! newly discovered node, the node is not even marked as known. Methods with
//! a `_with` suffix thread a mutable value through the callback and the
//! filter.
//!
//! [`SeqIter`](crate::visits::depth_first::SeqIter) contains some examples.

pub mod depth_first;

use std::ops::ControlFlow;
use thiserror::Error;

/// The visit was stopped because its result was already known.
#[derive(Error, Debug)]
#[error("Stopped when done")]
pub struct StoppedWhenDone;

/// A type of visit events.
///
/// Events are usually enums with one variant per kind of event (previsit,
/// postvisit, and so on). [`FilterArgs`](Event::FilterArgs) is what the
/// filter receives when a node is discovered.
pub trait Event {
    /// The argument of the filter.
    type FilterArgs;
}

/// Shorthand for the filter arguments of an event type, handy in patterns.
pub type FilterArgs<A> = <A as Event>::FilterArgs;

/// A sequential visit.
///
/// The only required method is
/// [`visit_filtered_with`](Sequential::visit_filtered_with); the other ones
/// fill in a trivial filter or a unit value. Roots are processed in the order
/// they are given, and roots that are already known are skipped.
pub trait Sequential<A: Event> {
    /// Visits the graph from `roots`, passing `init` mutably to `callback`
    /// and `filter`.
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, A) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
        filter: F,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from `roots`, skipping nodes rejected by `filter`.
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(A) -> ControlFlow<E, ()>,
        F: FnMut(A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered_with(roots, (), |(), a| callback(a), |(), a| filter(a))
    }

    /// Visits the graph from `roots`, passing `init` mutably to `callback`.
    fn visit_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, A) -> ControlFlow<E, ()>,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered_with(roots, init, callback, |_, _| true)
    }

    /// Visits the graph from `roots`.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered(roots, callback, |_| true)
    }

    /// Forgets all known nodes, so that the visit can be run again.
    fn reset(&mut self);
}
