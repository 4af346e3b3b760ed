/*
 * SPDX-FileCopyrightText: 2025 The digraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Rendering of analysis results.
//!
//! In text form, components are written as a set of sets, and a topological
//! sort as a sequence of nodes:
//!
//! ```text
//! Components: { {0, 1, 2}, {3} }
//! Topological sort: none (cycle: 0 -> 1 -> 2 -> 0)
//! ```
//!
//! In JSON form, the same data is written as a single object with the fields
//! `components`, `sizes` and `topological_sort`, each present only if
//! computed.

use crate::OutputFormat;
use anyhow::Result;
use digraph_algo::prelude::TopSort;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Displays a partition of the nodes as `{ {0, 1, 2}, {3} }`.
pub struct Components<'a>(pub &'a [Vec<usize>]);

impl fmt::Display for Components<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, component) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            f.write_str("{")?;
            for (j, node) in component.iter().enumerate() {
                if j != 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{node}")?;
            }
            f.write_str("}")?;
        }
        f.write_str(" }")
    }
}

/// Displays the result of a topological sort as a space-separated list of
/// nodes, or as `none` followed by the witness cycle.
pub struct Order<'a>(pub &'a TopSort);

impl fmt::Display for Order<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TopSort::Sorted(order) => {
                let mut first = true;
                for node in order.iter() {
                    if !first {
                        f.write_str(" ")?;
                    }
                    write!(f, "{node}")?;
                    first = false;
                }
                Ok(())
            }
            TopSort::Cyclic(cycle) => write!(f, "none (cycle: {cycle})"),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(tag = "result", rename_all = "snake_case")]
enum TopSortReport<'a> {
    Sorted { order: &'a [usize] },
    Cyclic { cycle: &'a [usize] },
}

impl<'a> From<&'a TopSort> for TopSortReport<'a> {
    fn from(top_sort: &'a TopSort) -> Self {
        match top_sort {
            TopSort::Sorted(order) => TopSortReport::Sorted { order },
            TopSort::Cyclic(cycle) => TopSortReport::Cyclic {
                cycle: cycle.nodes(),
            },
        }
    }
}

/// The results of an analysis, ready to be written in some [`OutputFormat`].
#[derive(Serialize, Default, Debug)]
pub struct Report<'a> {
    /// The canonical partition of the nodes into strongly connected
    /// components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<&'a [Vec<usize>]>,
    /// The sizes of the components, in decreasing order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<&'a [usize]>,
    /// The result of a topological sort.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_top_sort"
    )]
    pub topological_sort: Option<&'a TopSort>,
}

fn serialize_top_sort<S: serde::Serializer>(
    top_sort: &Option<&TopSort>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    top_sort.map(TopSortReport::from).serialize(serializer)
}

impl Report<'_> {
    /// Writes the report to `out` in the given format, followed by a newline.
    pub fn write(&self, format: OutputFormat, mut out: impl Write) -> Result<()> {
        match format {
            OutputFormat::Text => {
                if let Some(components) = self.components {
                    writeln!(out, "Components: {}", Components(components))?;
                }
                if let Some(sizes) = self.sizes {
                    write!(out, "Sizes:")?;
                    for size in sizes {
                        write!(out, " {size}")?;
                    }
                    writeln!(out)?;
                }
                if let Some(top_sort) = self.topological_sort {
                    writeln!(out, "Topological sort: {}", Order(top_sort))?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, self)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
