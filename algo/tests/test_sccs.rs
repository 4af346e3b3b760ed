/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use digraph::graphs::random::{ErdosRenyi, RandomOutArcs};
use digraph::prelude::*;
use digraph_algo::sccs::{self, Sccs, compute_sccs};
use digraph_algo::visits::{Sequential, depth_first};
use dsi_progress_logger::prelude::*;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

#[test]
fn test_compute_sizes() -> Result<()> {
    let sccs = Sccs::new(3, vec![0, 0, 0, 1, 2, 2, 1, 2, 0, 0].into_boxed_slice());

    assert_eq!(sccs.compute_sizes(), vec![5, 2, 3].into_boxed_slice());

    Ok(())
}

#[test]
fn test_sort_by_size() -> Result<()> {
    let mut sccs = Sccs::new(3, vec![0, 1, 1, 1, 0, 2].into_boxed_slice());

    sccs.sort_by_size();

    assert_eq!(sccs.components().to_owned(), vec![1, 0, 0, 0, 1, 2]);

    Ok(())
}

#[test]
fn test_sort_by_size_is_stable() -> Result<()> {
    let mut sccs = Sccs::new(4, vec![3, 2, 1, 0, 1, 3].into_boxed_slice());

    let sizes = sccs.sort_by_size();

    assert_eq!(sizes, vec![2, 2, 1, 1].into_boxed_slice());
    // Components 1 and 3 have size 2, components 0 and 2 have size 1
    assert_eq!(sccs.components(), &[1, 3, 0, 2, 0, 1]);

    Ok(())
}

#[test]
fn test_partition() -> Result<()> {
    let sccs = Sccs::new(3, vec![2, 0, 2, 1, 0].into_boxed_slice());

    assert_eq!(sccs.partition(), vec![vec![0, 2], vec![1, 4], vec![3]]);
    assert!(sccs.same_component(0, 2));
    assert!(!sccs.same_component(0, 1));

    Ok(())
}

macro_rules! test_scc_algo {
    ($scc:expr, $name:ident) => {
        mod $name {
            use super::*;

            fn sccs_of(arcs: &[(usize, usize)], num_nodes: usize) -> Sccs {
                let graph = AdjMatrix::from_arcs_with_nodes(num_nodes, arcs.iter().copied());
                let transposed_graph = graph.transpose();
                $scc(&graph, &transposed_graph, no_logging![])
            }

            #[test]
            fn test_buckets() -> Result<()> {
                let arcs = [
                    (0, 0),
                    (1, 0),
                    (1, 2),
                    (2, 1),
                    (2, 3),
                    (2, 4),
                    (2, 5),
                    (3, 4),
                    (4, 3),
                    (5, 5),
                    (5, 6),
                    (5, 7),
                    (5, 8),
                    (6, 7),
                    (8, 7),
                ];

                let mut components = sccs_of(&arcs, 9);

                assert_eq!(components.components()[3], components.components()[4]);

                let sizes = components.sort_by_size();
                assert_eq!(sizes, vec![2, 2, 1, 1, 1, 1, 1].into_boxed_slice());

                Ok(())
            }

            #[test]
            fn test_buckets_2() -> Result<()> {
                let mut components = sccs_of(&[(0, 1), (1, 2), (2, 0), (1, 3)], 4);
                let sizes = components.sort_by_size();

                assert_eq!(sizes, vec![3, 1].into_boxed_slice());

                Ok(())
            }

            #[test]
            fn test_cycle() -> Result<()> {
                let components = sccs_of(&[(0, 1), (1, 2), (2, 3), (3, 0)], 4);
                let sizes = components.compute_sizes();

                assert_eq!(sizes, vec![4].into_boxed_slice());

                Ok(())
            }

            #[test]
            fn test_complete_graph() -> Result<()> {
                let mut arcs = vec![];
                for i in 0..5 {
                    for j in 0..5 {
                        if i != j {
                            arcs.push((i, j));
                        }
                    }
                }

                let mut components = sccs_of(&arcs, 5);

                let sizes = components.sort_by_size();

                for i in 0..5 {
                    assert_eq!(components.components()[i], 0);
                }
                assert_eq!(sizes, vec![5].into_boxed_slice());

                Ok(())
            }

            #[test]
            fn test_tree() -> Result<()> {
                let arcs = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)];

                let components = sccs_of(&arcs, 7);

                assert_eq!(components.num_components(), 7);

                Ok(())
            }

            #[test]
            fn test_three_cycle() -> Result<()> {
                let components = sccs_of(&[(0, 1), (1, 2), (2, 0)], 3);
                assert_eq!(components.partition(), vec![vec![0, 1, 2]]);
                Ok(())
            }

            #[test]
            fn test_chain() -> Result<()> {
                let components = sccs_of(&[(0, 1), (1, 2)], 3);
                assert_eq!(components.partition(), vec![vec![0], vec![1], vec![2]]);
                Ok(())
            }

            #[test]
            fn test_loop() -> Result<()> {
                let components = sccs_of(&[(0, 0)], 1);
                assert_eq!(components.partition(), vec![vec![0]]);
                Ok(())
            }

            #[test]
            fn test_empty() -> Result<()> {
                let components = sccs_of(&[], 0);
                assert_eq!(components.num_components(), 0);
                assert!(components.partition().is_empty());
                Ok(())
            }

            #[test]
            fn test_isolated_nodes() -> Result<()> {
                let components = sccs_of(&[(0, 1), (2, 3)], 6);
                assert_eq!(
                    components.partition(),
                    vec![vec![0], vec![1], vec![2], vec![3], vec![4], vec![5]]
                );
                Ok(())
            }

            #[test]
            fn test_two_cycles_bridged() -> Result<()> {
                let arcs = [(0, 1), (1, 0), (1, 2), (2, 3), (3, 4), (4, 2)];
                let components = sccs_of(&arcs, 5);
                assert_eq!(components.partition(), vec![vec![0, 1], vec![2, 3, 4]]);
                Ok(())
            }

            #[test]
            fn test_long_path() -> Result<()> {
                let n = 5_000;
                let arcs = (0..n - 1).map(|x| (x, x + 1)).chain([(n - 1, 0)]);
                let graph = AdjMatrix::from_arcs_with_nodes(n, arcs);
                let transposed_graph = graph.transpose();
                let components = $scc(&graph, &transposed_graph, no_logging![]);
                assert_eq!(components.num_components(), 1);
                Ok(())
            }
        }
    };
}

test_scc_algo!(|g, _, pl| sccs::tarjan(g, pl), tarjan);
test_scc_algo!(|g, t, pl| sccs::kosaraju(g, t, pl), kosaraju);

#[test]
fn test_lozenge() -> Result<()> {
    let arcs = [(0, 1), (1, 0), (0, 2), (1, 3), (2, 3)];
    let graph = AdjMatrix::from_arcs(arcs);

    let components = sccs::tarjan(&graph, no_logging![]);

    assert_eq!(components.components(), &[2, 2, 1, 0]);

    Ok(())
}

#[test]
fn test_lozenge_kosaraju() -> Result<()> {
    let arcs = [(0, 1), (1, 0), (0, 2), (1, 3), (2, 3)];
    let graph = AdjMatrix::from_arcs(arcs);

    let components = sccs::kosaraju(&graph, graph.transpose(), no_logging![]);

    // Components come out in topological order of the condensation
    assert_eq!(components.components(), &[0, 0, 1, 2]);

    Ok(())
}

#[test]
fn test_compute_sccs() -> Result<()> {
    let graph = AdjMatrix::from_arcs([(3, 4), (4, 3), (0, 1), (1, 2), (2, 0), (2, 3)]);
    assert_eq!(compute_sccs(&graph), vec![vec![0, 1, 2], vec![3, 4]]);
    Ok(())
}

#[test]
fn test_er() -> Result<()> {
    for n in (10..=100).step_by(10) {
        for d in 1..10 {
            let graph = ErdosRenyi::new(n, (d as f64) / 100.0, 0).to_matrix();
            let transpose = graph.transpose();

            let kosaraju = sccs::kosaraju(&graph, &transpose, no_logging![]);
            let tarjan = sccs::tarjan(&graph, no_logging![]);

            assert_eq!(kosaraju.num_components(), tarjan.num_components());
            assert_eq!(kosaraju.partition(), tarjan.partition());
        }
    }
    Ok(())
}

/// Returns, for each node, the nodes reachable from it.
fn reachability(graph: &AdjMatrix) -> Vec<Vec<bool>> {
    let num_nodes = graph.num_nodes();
    let mut visit = depth_first::SeqNoPred::new(graph);
    let mut reach = vec![vec![false; num_nodes]; num_nodes];
    for x in 0..num_nodes {
        visit.reset();
        visit
            .visit([x], |event| {
                if let depth_first::EventNoPred::Previsit { node, .. } = event {
                    reach[x][node] = true;
                }
                Continue(())
            })
            .continue_value_no_break();
    }
    reach
}

#[test]
fn test_mutual_reachability() -> Result<()> {
    for seed in 0..20 {
        let graph = RandomOutArcs::new(30, 1 + (seed as usize) % 3, seed).to_matrix();
        let reach = reachability(&graph);
        let components = sccs::tarjan(&graph, no_logging![]);
        let partition = components.partition();

        // The partition covers all nodes exactly once
        let mut nodes = partition.concat();
        nodes.sort();
        assert_eq!(nodes, (0..graph.num_nodes()).collect::<Vec<_>>());

        for x in 0..graph.num_nodes() {
            for y in 0..graph.num_nodes() {
                assert_eq!(
                    components.same_component(x, y),
                    reach[x][y] && reach[y][x],
                    "nodes {x} and {y} with seed {seed}"
                );
            }
        }
    }
    Ok(())
}

#[test]
fn test_determinism() -> Result<()> {
    let graph = ErdosRenyi::new(50, 0.05, 7).to_matrix();
    let first = sccs::tarjan(&graph, no_logging![]);
    let second = sccs::tarjan(&graph, no_logging![]);
    assert_eq!(first, second);
    Ok(())
}
