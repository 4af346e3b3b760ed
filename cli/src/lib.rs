/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use digraph::prelude::*;
use dsi_progress_logger::{ProgressLog, ProgressLogger, progress_logger};
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

pub mod build_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));

    /// The version, git state and build environment, as shown by `--version`.
    pub fn version_string() -> String {
        let dirty = match GIT_DIRTY {
            Some(true) => " (dirty)",
            Some(false) => " (clean)",
            None => "",
        };
        format!(
            "{PKG_VERSION}\ngit: {} {}{dirty}\nbuilt on {BUILT_TIME_UTC} for {TARGET} with {RUSTC_VERSION}",
            GIT_VERSION.unwrap_or("unknown"),
            GIT_COMMIT_HASH.unwrap_or("unknown"),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
/// How to print the results of an analysis.
pub enum OutputFormat {
    /// Human-readable text, e.g., `Components: { {0, 1}, {2} }`.
    #[default]
    Text,
    /// A JSON object on a single line.
    Json,
}

/// Reads a graph in parenthesized textual form.
///
/// If `input` is `None` or `-`, the graph is read from standard input.
pub fn load_graph(input: Option<&Path>) -> Result<AdjMatrix> {
    let (text, source) = match input {
        Some(path) if path != Path::new("-") => (
            std::fs::read_to_string(path)
                .with_context(|| format!("Could not read the graph from {}", path.display()))?,
            path.display().to_string(),
        ),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Could not read the graph from standard input")?;
            (text, "standard input".to_owned())
        }
    };

    let graph = digraph::sexpr::parse(&text)
        .with_context(|| format!("Could not parse the graph from {source}"))?;
    log::info!(
        "Loaded a graph with {} nodes and {} arcs from {}",
        graph.num_nodes(),
        graph.num_arcs(),
        source
    );
    Ok(graph)
}

/// Parses a duration such as `1d2h3m4s567`.
///
/// Each number is followed by a unit among `d`, `h`, `m` and `s`; a trailing
/// number without unit counts milliseconds. Whitespace is ignored.
fn parse_duration(value: &str) -> Result<Duration> {
    let value: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if value.is_empty() {
        bail!("Empty duration (use 0 to log at every update)");
    }
    let mut duration = Duration::ZERO;
    let mut rest = value.as_str();
    while !rest.is_empty() {
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let amount: u64 = rest[..digits]
            .parse()
            .with_context(|| format!("Invalid duration {value:?}"))?;
        let Some(unit) = rest[digits..].chars().next() else {
            duration = duration
                .checked_add(Duration::from_millis(amount))
                .with_context(|| format!("Duration {value:?} is too long"))?;
            break;
        };
        let seconds = match unit {
            's' => 1,
            'm' => 60,
            'h' => 60 * 60,
            'd' => 24 * 60 * 60,
            _ => bail!("Invalid duration unit {unit:?} in {value:?}"),
        };
        let Some(secs) = amount.checked_mul(seconds) else {
            bail!("Duration {value:?} is too long");
        };
        duration = duration
            .checked_add(Duration::from_secs(secs))
            .with_context(|| format!("Duration {value:?} is too long"))?;
        rest = &rest[digits + unit.len_utf8()..];
    }
    Ok(duration)
}

/// Installs an `env_logger` logger (default level `info`) whose lines start
/// with the current time and the time elapsed since installation.
pub fn init_env_logger() -> Result<()> {
    let start = std::time::Instant::now();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{} {:.3}s {style}{}{style:#} - {}",
                jiff::Timestamp::now().strftime("%F %T%.3f"),
                start.elapsed().as_secs_f64(),
                record.level(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, global=true, display_order = 1000)]
    /// Interval between progress log lines (default 10s), written as, e.g.,
    /// "1m30s"; a number without unit is in milliseconds.
    pub log_interval: Option<Duration>,
}

impl GlobalArgs {
    /// Returns a progress logger honoring the global options.
    pub fn progress_logger(&self) -> ProgressLogger {
        let mut pl = progress_logger![];
        if let Some(log_interval) = self.log_interval {
            pl.log_interval(log_interval);
        }
        pl
    }
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    /// Prints the strongly connected components and a topological sort.
    Analyze(analyze::CliArgs),
    /// Prints the strongly connected components.
    Sccs(sccs::CliArgs),
    /// Prints a topological sort, or a cycle if there is none.
    TopSort(top_sort::CliArgs),
    /// Prints a random graph with a fixed out-degree.
    Generate(generate::CliArgs),
}

#[derive(Parser, Debug)]
#[command(name = "digraph", version=build_info::version_string())]
/// Computes strongly connected components and topological sorts of directed
/// graphs described in parenthesized textual form.
#[doc = include_str!("common_env.txt")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
    #[clap(flatten)]
    pub args: GlobalArgs,
}

pub mod format;

pub mod analyze;
pub mod generate;
pub mod sccs;
pub mod top_sort;

/// The entry point of the command-line interface.
///
/// Invalid arguments, `--help` and `--version` are handled by `clap`, which
/// exits the process.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    execute(Cli::parse_from(args), std::io::stdout().lock())
}

/// Parses the command line and runs the selected subcommand, writing its
/// results to `out`.
///
/// Invalid arguments are returned as a [`clap::Error`].
pub fn run<I, T>(args: I, out: impl Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    execute(Cli::try_parse_from(args)?, out)
}

fn execute(cli: Cli, out: impl Write) -> Result<()> {
    let start = std::time::Instant::now();
    match cli.command {
        SubCommands::Analyze(args) => {
            analyze::main(cli.args, args, out)?;
        }
        SubCommands::Sccs(args) => {
            sccs::main(cli.args, args, out)?;
        }
        SubCommands::TopSort(args) => {
            top_sort::main(cli.args, args, out)?;
        }
        SubCommands::Generate(args) => {
            generate::main(cli.args, args, out)?;
        }
    }

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Formats a number of seconds as weeks, days, hours, minutes and seconds,
/// followed by the raw number of seconds.
fn pretty_print_elapsed(elapsed: f64) -> String {
    const UNITS: [(&str, u64); 4] = [
        ("week", 7 * 24 * 60 * 60),
        ("day", 24 * 60 * 60),
        ("hour", 60 * 60),
        ("minute", 60),
    ];
    let mut left = elapsed as u64;
    let mut result = String::new();
    for (name, size) in UNITS {
        let count = left / size;
        left %= size;
        match count {
            0 => {}
            1 => result.push_str(&format!("1 {name} ")),
            _ => result.push_str(&format!("{count} {name}s ")),
        }
    }
    result + &format!("{:.3} seconds ({elapsed}s)", elapsed % 60.0)
}
