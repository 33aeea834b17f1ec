// src/cli/handlers.rs
//! The ranking run: read, parse, build, rank, render, write.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use super::args::Cli;
use crate::config::Config;
use crate::events::{EventKind, EventLogger};
use crate::exit::RankExit;
use crate::graph::rank::pagerank;
use crate::input;
use crate::output::{self, OutputOptions};
use crate::reporting;

/// Resolves config and runs one ranking job, writing ranks to stdout.
///
/// # Errors
/// Returns error if config, input, or ranking fails. Nothing is written to
/// stdout in that case.
pub fn handle_rank(cli: &Cli) -> Result<RankExit> {
    let config = resolve_config(cli)?;
    let events = EventLogger::from_config(config.events.as_deref());

    let rendered = match render_ranks(cli.input.as_deref(), &config, &events) {
        Ok(rendered) => rendered,
        Err(e) => {
            events.log(EventKind::RunFailed {
                error: e.to_string(),
            });
            return Err(e);
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write ranks to stdout")?;
    Ok(RankExit::Success)
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(&cli.overrides());
    config.validate(Path::new("<command line>"))?;
    Ok(config)
}

/// Runs the computation and returns the rendered output.
///
/// # Errors
/// Returns error on unreadable or malformed input, or an empty graph.
pub fn render_ranks(input: Option<&Path>, config: &Config, events: &EventLogger) -> Result<String> {
    let text = input::read_source(input)?;
    let job = input::parse(&text)?;
    let iterations = job.iterations;
    events.log(EventKind::RunStarted {
        edges: job.edges.len(),
        iterations,
    });

    let graph = job.into_graph();
    let passes = pagerank::passes_for(iterations);
    events.log(EventKind::GraphBuilt {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        sinks: graph.sinks().len(),
    });
    if config.verbose {
        reporting::print_graph_summary(&graph, passes);
    }

    let ranks = pagerank::compute_with(&graph, iterations, |pass, ranks| {
        let mass = ranks.mass();
        events.log(EventKind::PassCompleted { pass, mass });
        if config.verbose {
            reporting::print_pass(pass, passes, mass);
        }
    })?;
    events.log(EventKind::RunFinished {
        vertices: ranks.len(),
        passes,
    });

    let options = OutputOptions {
        format: config.format,
        precision: config.precision,
    };
    Ok(output::render(&ranks, &options)?)
}
