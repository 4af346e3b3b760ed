/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2025 The digraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Seeded random graphs.
//!
//! All generators are deterministic for a given seed, as they use a
//! [`SmallRng`] initialized with [`SeedableRng::seed_from_u64`]. Since the
//! backing representation is a dense matrix, generation time is quadratic in
//! the number of nodes for [`ErdosRenyi`] and [`RandomDag`].

use crate::graphs::adj_matrix::AdjMatrix;
use crate::traits::RandomAccessGraph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Provides an implementation of Erdös-Rényi random graphs.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an arc between any two nodes. In this implementation, loops are never
/// included.
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an edge between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Generates the graph.
    pub fn to_matrix(&self) -> AdjMatrix {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut g = AdjMatrix::empty(self.n);
        for x in 0..self.n {
            for y in 0..self.n {
                if y != x && rng.random_bool(self.p) {
                    g.add_arc(x, y);
                }
            }
        }
        g
    }
}

/// Random acyclic graphs.
///
/// Each arc `x → y` with `x < y` is included independently with probability
/// `p`, so the identity is always a topological order.
#[derive(Debug, Clone)]
pub struct RandomDag {
    n: usize,
    p: f64,
    seed: u64,
}

impl RandomDag {
    /// Creates a new random acyclic graph, given the number of nodes, the
    /// probability of an arc between a node and a node with a larger
    /// identifier, and a seed.
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Generates the graph.
    pub fn to_matrix(&self) -> AdjMatrix {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut g = AdjMatrix::empty(self.n);
        for x in 0..self.n {
            for y in x + 1..self.n {
                if rng.random_bool(self.p) {
                    g.add_arc(x, y);
                }
            }
        }
        g
    }
}

/// Random graphs with a bounded out-degree.
///
/// Each node draws `outdegree` targets uniformly at random among the other
/// nodes. Draws are independent, so repeated targets collapse into a single
/// arc and the out-degree of a node is at most `outdegree`. Loops are never
/// included.
#[derive(Debug, Clone)]
pub struct RandomOutArcs {
    n: usize,
    outdegree: usize,
    seed: u64,
}

impl RandomOutArcs {
    /// Creates a new generator, given the number of nodes, the number of
    /// targets drawn for each node, and a seed.
    ///
    /// # Panics
    ///
    /// This method will panic if `outdegree` is positive and there are less
    /// than two nodes, as no target would be available.
    pub fn new(n: usize, outdegree: usize, seed: u64) -> Self {
        assert!(
            outdegree == 0 || n >= 2,
            "At least two nodes are needed to draw loopless arcs"
        );
        Self { n, outdegree, seed }
    }

    /// Generates the graph.
    pub fn to_matrix(&self) -> AdjMatrix {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut g = AdjMatrix::empty(self.n);
        for x in 0..self.n {
            let mut drawn = 0;
            while drawn < self.outdegree {
                let y = rng.random_range(0..self.n);
                if y != x {
                    g.add_arc(x, y);
                    drawn += 1;
                }
            }
        }
        log::debug!(
            "Generated a graph with {} nodes and {} arcs",
            self.n,
            g.num_arcs()
        );
        g
    }
}
