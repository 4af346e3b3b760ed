/*
 * SPDX-FileCopyrightText: 2025 The digraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::format::Report;
use crate::top_sort::log_top_sort;
use crate::{GlobalArgs, OutputFormat, load_graph};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CliArgs {
    /// The file containing the graph; if missing or "-", the graph is read
    /// from standard input.
    pub input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    /// The output format.
    pub format: OutputFormat,
}

/// Computes both the strongly connected components and a topological sort.
///
/// The two analyses are independent: the components are printed first.
pub fn main(global_args: GlobalArgs, args: CliArgs, out: impl Write) -> Result<()> {
    let graph = load_graph(args.input.as_deref())?;

    let mut pl = global_args.progress_logger();
    let sccs = digraph_algo::sccs::tarjan(&graph, &mut pl);
    log::info!(
        "Found {} strongly connected components",
        sccs.num_components()
    );
    let top_sort = digraph_algo::top_sort(&graph, &mut pl);
    log_top_sort(&top_sort);

    let partition = sccs.partition();
    Report {
        components: Some(&partition),
        sizes: None,
        topological_sort: Some(&top_sort),
    }
    .write(args.format, out)
}
