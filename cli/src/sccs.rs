/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::format::Report;
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

    #[arg(short, long)]
    /// Print also the sizes of the components, in decreasing order.
    pub sizes: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    /// The output format.
    pub format: OutputFormat,
}

pub fn main(global_args: GlobalArgs, args: CliArgs, out: impl Write) -> Result<()> {
    let graph = load_graph(args.input.as_deref())?;

    let mut pl = global_args.progress_logger();
    let mut sccs = digraph_algo::sccs::tarjan(&graph, &mut pl);
    log::info!(
        "Found {} strongly connected components",
        sccs.num_components()
    );

    let sizes = if args.sizes {
        log::info!("Computing the sizes of the components");
        Some(sccs.sort_by_size())
    } else {
        None
    };
    let partition = sccs.partition();

    Report {
        components: Some(&partition),
        sizes: sizes.as_deref(),
        ..Default::default()
    }
    .write(args.format, out)
}
