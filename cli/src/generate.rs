/*
 * SPDX-FileCopyrightText: 2025 The digraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::GlobalArgs;
use anyhow::{Result, ensure};
use clap::Args;
use digraph::graphs::random::RandomOutArcs;
use digraph::prelude::*;
use std::io::Write;

#[derive(Args, Debug)]
pub struct CliArgs {
    /// The number of nodes.
    pub num_nodes: usize,

    /// The number of random successors drawn for each node. Repeated draws
    /// yield a single arc, so the actual out-degree might be smaller.
    pub outdegree: usize,

    #[arg(short, long)]
    /// The seed of the pseudorandom number generator; if missing, a random
    /// seed is used.
    pub seed: Option<u64>,
}

pub fn main(_global_args: GlobalArgs, args: CliArgs, mut out: impl Write) -> Result<()> {
    ensure!(
        args.outdegree == 0 || args.num_nodes >= 2,
        "At least two nodes are needed to generate arcs without loops"
    );
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "Generating a graph with {} nodes and out-degree at most {} using seed {}",
        args.num_nodes,
        args.outdegree,
        seed
    );

    let graph = RandomOutArcs::new(args.num_nodes, args.outdegree, seed).to_matrix();
    log::info!("Generated {} arcs", graph.num_arcs());

    writeln!(out, "{graph}")?;
    out.flush()?;
    Ok(())
}
