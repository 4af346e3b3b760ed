/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2025 The digraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use std::fmt;
use sux::bits::BitVec;

/// A [`RandomAccessGraph`] implementation based on a dense adjacency matrix.
///
/// The matrix is stored row-major in a [`BitVec`] of `n²` bits, so the
/// successors of a node are enumerated in increasing order by scanning its
/// row. Self-loops are allowed.
///
/// Arcs can be added with [`add_arc`](AdjMatrix::add_arc) while building the
/// graph; algorithms only ever borrow it immutably.
///
/// By setting the feature `serde`, this struct can be serialized using
/// [serde](https://crates.io/crates/serde) as a number of nodes and a list of
/// arcs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "ArcList", try_from = "ArcList"))]
#[derive(Clone)]
pub struct AdjMatrix {
    /// The number of nodes, that is, the side of the matrix.
    num_nodes: usize,
    /// The number of arcs in the graph.
    num_arcs: u64,
    /// The matrix, row by row.
    bits: BitVec,
}

impl core::default::Default for AdjMatrix {
    fn default() -> Self {
        Self::empty(0)
    }
}

impl AdjMatrix {
    /// Creates a new graph with `n` nodes and no arcs.
    ///
    /// # Panics
    ///
    /// This method will panic if `n²` overflows a `usize`.
    pub fn empty(n: usize) -> Self {
        let len = n
            .checked_mul(n)
            .unwrap_or_else(|| panic!("An adjacency matrix with {n} nodes does not fit in memory"));
        Self {
            num_nodes: n,
            num_arcs: 0,
            bits: BitVec::new(len),
        }
    }

    /// Adds an arc to the graph and returns true if it is a new arc.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes is greater or equal
    /// than the number of nodes in the graph.
    pub fn add_arc(&mut self, u: usize, v: usize) -> bool {
        let max = u.max(v);
        if max >= self.num_nodes {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max, self.num_nodes,
            );
        }
        let pos = u * self.num_nodes + v;
        if self.bits.get(pos) {
            return false;
        }
        self.bits.set(pos, true);
        self.num_arcs += 1;
        true
    }

    /// Adds arcs from an [`IntoIterator`].
    ///
    /// # Panics
    ///
    /// See [`add_arc`](AdjMatrix::add_arc).
    pub fn add_arcs(&mut self, arcs: impl IntoIterator<Item = (usize, usize)>) {
        for (u, v) in arcs {
            self.add_arc(u, v);
        }
    }

    /// Creates a new graph from an [`IntoIterator`] of arcs.
    ///
    /// The number of nodes is one plus the largest node appearing in an arc,
    /// so isolated nodes with the largest identifiers cannot be represented;
    /// use [`from_arcs_with_nodes`](AdjMatrix::from_arcs_with_nodes) in that
    /// case.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let arcs = arcs.into_iter().collect::<Vec<_>>();
        let num_nodes = arcs
            .iter()
            .map(|&(u, v)| u.max(v) + 1)
            .max()
            .unwrap_or(0);
        Self::from_arcs_with_nodes(num_nodes, arcs)
    }

    /// Creates a new graph with `n` nodes from an [`IntoIterator`] of arcs.
    ///
    /// # Panics
    ///
    /// See [`add_arc`](AdjMatrix::add_arc).
    pub fn from_arcs_with_nodes(n: usize, arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::empty(n);
        g.add_arcs(arcs);
        g
    }

    /// Creates a new graph from the rows of a Boolean matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if the matrix is not square.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let n = rows.len();
        let mut g = Self::empty(n);
        for (u, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(
                row.len(),
                n,
                "Row {u} has {} columns, but the matrix has {n} rows",
                row.len()
            );
            for (v, _) in row.iter().enumerate().filter(|(_, arc)| **arc) {
                g.add_arc(u, v);
            }
        }
        g
    }

    /// Returns the transpose of this graph, that is, the graph with all arcs
    /// reversed.
    pub fn transpose(&self) -> Self {
        let mut t = Self::empty(self.num_nodes);
        for (u, v) in self.arcs() {
            t.add_arc(v, u);
        }
        t
    }

    /// Returns an iterator over all arcs in row-major order.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.num_nodes).flat_map(move |u| self.successors(u).map(move |v| (u, v)))
    }
}

impl RandomAccessGraph for AdjMatrix {
    type Successors<'succ> = Succ<'succ>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Succ<'_> {
        assert!(
            node < self.num_nodes,
            "Node {node} does not exist (the graph has {} nodes)",
            self.num_nodes
        );
        let start = node * self.num_nodes;
        Succ {
            bits: &self.bits,
            pos: start,
            end: start + self.num_nodes,
            start,
        }
    }

    #[inline(always)]
    fn has_arc(&self, src_node_id: usize, dst_node_id: usize) -> bool {
        src_node_id < self.num_nodes
            && dst_node_id < self.num_nodes
            && self.bits.get(src_node_id * self.num_nodes + dst_node_id)
    }
}

/// Iterator over the successors of a node of an [`AdjMatrix`], in increasing
/// order.
#[derive(Clone)]
pub struct Succ<'a> {
    bits: &'a BitVec,
    /// The first bit of the row.
    start: usize,
    /// The next bit to examine.
    pos: usize,
    /// One past the last bit of the row.
    end: usize,
}

impl Iterator for Succ<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pos < self.end {
            let pos = self.pos;
            self.pos += 1;
            if self.bits.get(pos) {
                return Some(pos - self.start);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end - self.pos))
    }
}

impl PartialEq for AdjMatrix {
    fn eq(&self, other: &Self) -> bool {
        crate::traits::eq(self, other)
    }
}

impl Eq for AdjMatrix {}

impl fmt::Debug for AdjMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjMatrix")
            .field("num_nodes", &self.num_nodes)
            .field("num_arcs", &self.num_arcs)
            .field("arcs", &self.arcs().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(feature = "serde")]
pub use arc_list::*;

#[cfg(feature = "serde")]
mod arc_list {
    use super::AdjMatrix;
    use thiserror::Error;

    /// The serialized form of an [`AdjMatrix`].
    #[derive(serde::Serialize, serde::Deserialize)]
    pub struct ArcList {
        pub num_nodes: usize,
        pub arcs: Vec<(usize, usize)>,
    }

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    #[error("Arc ({src}, {dst}) is out of range for a graph with {num_nodes} nodes")]
    /// A deserialized arc has an endpoint out of range.
    pub struct ArcOutOfRange {
        pub src: usize,
        pub dst: usize,
        pub num_nodes: usize,
    }

    impl From<AdjMatrix> for ArcList {
        fn from(g: AdjMatrix) -> Self {
            Self {
                num_nodes: g.num_nodes,
                arcs: g.arcs().collect(),
            }
        }
    }

    impl TryFrom<ArcList> for AdjMatrix {
        type Error = ArcOutOfRange;

        fn try_from(list: ArcList) -> Result<Self, Self::Error> {
            let mut g = AdjMatrix::empty(list.num_nodes);
            for (src, dst) in list.arcs {
                if src.max(dst) >= list.num_nodes {
                    return Err(ArcOutOfRange {
                        src,
                        dst,
                        num_nodes: list.num_nodes,
                    });
                }
                g.add_arc(src, dst);
            }
            Ok(g)
        }
    }
}
