use clap::Parser;
use std::path::PathBuf;

use crate::config::Overrides;
use crate::events::DEFAULT_EVENTS_PATH;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "simplerank",
    version,
    about = "Simplified PageRank over a directed edge stream",
    long_about = "Reads `<edges> <iterations>` followed by `<from> <to>` pairs and prints \
                  each node's rank. An iteration count of N runs N-1 propagation passes."
)]
pub struct Cli {
    /// Read the edge stream from FILE instead of stdin
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Fractional digits printed for each rank (default 2)
    #[arg(long, short)]
    pub precision: Option<usize>,
    /// Output format (default text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Config file (defaults to ./simplerank.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Append JSONL run events to FILE
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EVENTS_PATH
    )]
    pub events: Option<PathBuf>,
    /// Print progress to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            precision: self.precision,
            format: self.format,
            events: self.events.clone(),
            verbose: self.verbose,
        }
    }
}
