/*
 * SPDX-FileCopyrightText: 2025 The digraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::format::Report;
use crate::{GlobalArgs, OutputFormat, load_graph};
use anyhow::Result;
use clap::Args;
use digraph_algo::prelude::TopSort;
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

pub fn main(global_args: GlobalArgs, args: CliArgs, out: impl Write) -> Result<()> {
    let graph = load_graph(args.input.as_deref())?;

    let mut pl = global_args.progress_logger();
    let top_sort = digraph_algo::top_sort(&graph, &mut pl);
    log_top_sort(&top_sort);

    Report {
        topological_sort: Some(&top_sort),
        ..Default::default()
    }
    .write(args.format, out)
}

pub(crate) fn log_top_sort(top_sort: &TopSort) {
    match top_sort {
        TopSort::Sorted(_) => log::info!("The graph is acyclic"),
        TopSort::Cyclic(cycle) => log::info!(
            "The graph contains a cycle of length {}",
            cycle.nodes().len()
        ),
    }
}
