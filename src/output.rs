// src/output.rs
//! Renders a rank vector for stdout.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::error::Result;
use crate::graph::RankVector;

pub const DEFAULT_PRECISION: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<label> <rank>` per line
    #[default]
    Text,
    /// A JSON object keyed by label
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub precision: usize,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Renders the full output so nothing is written if rendering fails.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render(ranks: &RankVector, options: &OutputOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => Ok(render_text(ranks, options.precision)),
        OutputFormat::Json => render_json(ranks),
    }
}

/// One `<label> <rank>` line per vertex in ascending label order.
#[must_use]
pub fn render_text(ranks: &RankVector, precision: usize) -> String {
    let mut out = String::new();
    for (label, rank) in ranks.iter() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{label} {rank:.precision$}");
    }
    out
}

fn render_json(ranks: &RankVector) -> Result<String> {
    let mut out = serde_json::to_string_pretty(ranks)?;
    out.push('\n');
    Ok(out)
}
