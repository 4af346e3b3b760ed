/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use digraph::prelude::AdjMatrix;
use digraph_algo::{
    prelude::depth_first,
    visits::{Sequential, StoppedWhenDone},
};
use no_break::NoBreak;
use std::ops::ControlFlow::{Break, Continue};

#[test]
fn test_depth() {
    let graph = AdjMatrix::from_arcs([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    depth_first::SeqNoPred::new(&graph)
        .visit([0], |event| {
            if let depth_first::EventNoPred::Previsit { node, depth, .. } = event {
                assert_eq!(node, depth);
            }
            Continue(())
        })
        .continue_value_no_break();
}

#[test]
fn test_events() {
    use depth_first::EventPred::*;
    let graph = AdjMatrix::from_arcs([(0, 1), (0, 2), (1, 2), (2, 0)]);
    let mut events = vec![];
    depth_first::SeqPath::new(&graph)
        .visit(0..3, |event| {
            events.push(event);
            Continue(())
        })
        .continue_value_no_break();

    assert_eq!(
        events,
        vec![
            Init { root: 0 },
            Previsit {
                node: 0,
                parent: 0,
                root: 0,
                depth: 0
            },
            Previsit {
                node: 1,
                parent: 0,
                root: 0,
                depth: 1
            },
            Previsit {
                node: 2,
                parent: 1,
                root: 0,
                depth: 2
            },
            Revisit {
                node: 0,
                pred: 2,
                root: 0,
                depth: 3,
                on_stack: true
            },
            Postvisit {
                node: 2,
                parent: 1,
                root: 0,
                depth: 2
            },
            Postvisit {
                node: 1,
                parent: 0,
                root: 0,
                depth: 1
            },
            Revisit {
                node: 2,
                pred: 0,
                root: 0,
                depth: 1,
                on_stack: false
            },
            Postvisit {
                node: 0,
                parent: 0,
                root: 0,
                depth: 0
            },
            Done { root: 0 },
        ]
    );
}

#[test]
fn test_pred_does_not_track_path() {
    let graph = AdjMatrix::from_arcs([(0, 1), (1, 0)]);
    depth_first::SeqPred::new(&graph)
        .visit(0..2, |event| {
            if let depth_first::EventPred::Revisit { on_stack, .. } = event {
                assert!(!on_stack);
            }
            Continue(())
        })
        .continue_value_no_break();
}

#[test]
fn test_roots_in_order() {
    let graph = AdjMatrix::from_arcs_with_nodes(5, [(1, 0), (3, 4)]);
    let mut roots = vec![];
    depth_first::SeqNoPred::new(&graph)
        .visit(0..5, |event| {
            if let depth_first::EventNoPred::Init { root } = event {
                roots.push(root);
            }
            Continue(())
        })
        .continue_value_no_break();
    // 4 is discovered from 3, so it is not a root
    assert_eq!(roots, vec![0, 1, 2, 3]);
}

#[test]
fn test_stack_after_break() {
    let graph = AdjMatrix::from_arcs([(0, 1), (1, 2), (2, 3), (3, 1)]);
    let mut visit = depth_first::SeqPath::new(&graph);
    let result = visit.visit(0..4, |event| match event {
        depth_first::EventPred::Revisit { on_stack: true, .. } => Break(StoppedWhenDone),
        _ => Continue(()),
    });
    assert!(result.is_break());
    // 3 is the last node on the visit path, and it is not returned
    assert_eq!(visit.stack().collect::<Vec<_>>(), vec![2, 1, 0]);
}

#[test]
fn test_filter() {
    let graph = AdjMatrix::from_arcs([(0, 1), (1, 2), (0, 3)]);
    let mut visited = vec![];
    depth_first::SeqNoPred::new(&graph)
        .visit_filtered(
            [0],
            |event| {
                if let depth_first::EventNoPred::Previsit { node, .. } = event {
                    visited.push(node);
                }
                Continue(())
            },
            |args: depth_first::FilterArgsNoPred| args.node != 1,
        )
        .continue_value_no_break();
    assert_eq!(visited, vec![0, 3]);
}

#[test]
fn test_reset() {
    let graph = AdjMatrix::from_arcs([(0, 1), (1, 2)]);
    let mut visit = depth_first::SeqPred::new(&graph);
    let mut count = 0;
    for _ in 0..2 {
        visit
            .visit_with([0], &mut count, |count, event| {
                if let depth_first::EventPred::Previsit { .. } = event {
                    **count += 1;
                }
                Continue(())
            })
            .continue_value_no_break();
        visit.reset();
    }
    assert_eq!(count, 6);
}
