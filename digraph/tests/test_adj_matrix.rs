/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2025 The digraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use digraph::{
    graphs::random::ErdosRenyi,
    prelude::AdjMatrix,
    traits::{RandomAccessGraph, graph},
};

#[test]
fn test_random() {
    let a = ErdosRenyi::new(10, 0.1, 0).to_matrix();
    let b = AdjMatrix::from_arcs_with_nodes(a.num_nodes(), a.arcs());
    assert!(graph::eq(&a, &b));
    assert_eq!(a, b);
    assert_eq!(a.num_arcs(), a.arcs().count() as u64);
}

#[test]
fn test_from_rows() {
    let g = AdjMatrix::from_rows(&[
        [false, true, false],
        [false, false, true],
        [true, false, true],
    ]);
    assert_eq!(g.num_nodes(), 3);
    assert_eq!(g.num_arcs(), 4);
    assert_eq!(g.arcs().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 0), (2, 2)]);
    assert_eq!(g, AdjMatrix::from_arcs([(0, 1), (1, 2), (2, 0), (2, 2)]));
}

#[test]
#[should_panic]
fn test_from_rows_not_square() {
    AdjMatrix::from_rows(&[vec![false, true], vec![false]]);
}

#[test]
fn test_from_arcs_infers_nodes() {
    assert_eq!(AdjMatrix::from_arcs([(3, 1)]).num_nodes(), 4);
    assert_eq!(AdjMatrix::from_arcs([] as [(usize, usize); 0]).num_nodes(), 0);
    assert_eq!(AdjMatrix::from_arcs_with_nodes(10, [(3, 1)]).num_nodes(), 10);
}

#[test]
fn test_outdegree_and_has_arc() {
    let g = AdjMatrix::from_arcs([(0, 0), (0, 2), (2, 1)]);
    assert_eq!(g.outdegree(0), 2);
    assert_eq!(g.outdegree(1), 0);
    assert!(g.has_arc(0, 0));
    assert!(g.has_arc(2, 1));
    assert!(!g.has_arc(1, 2));
    assert!(!g.has_arc(5, 0));
}

#[test]
fn test_transpose() {
    let g = ErdosRenyi::new(20, 0.2, 3).to_matrix();
    let t = g.transpose();
    assert_eq!(g.num_arcs(), t.num_arcs());
    for (u, v) in g.arcs() {
        assert!(t.has_arc(v, u));
    }
    assert_eq!(t.transpose(), g);
}

#[test]
fn test_by_reference() {
    fn count<G: RandomAccessGraph>(graph: G) -> usize {
        (0..graph.num_nodes()).map(|x| graph.outdegree(x)).sum()
    }
    let g = AdjMatrix::from_arcs([(0, 1), (1, 2)]);
    assert_eq!(count(&g), 2);
    assert_eq!(count(std::rc::Rc::new(g)), 2);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() -> anyhow::Result<()> {
    let g = AdjMatrix::from_arcs_with_nodes(4, [(0, 1), (0, 2), (1, 2), (2, 2)]);
    let res = serde_json::to_string(&g)?;
    let p: AdjMatrix = serde_json::from_str(&res)?;
    assert_eq!(g, p);
    assert!(serde_json::from_str::<AdjMatrix>(r#"{"num_nodes":2,"arcs":[[0,2]]}"#).is_err());
    Ok(())
}
