use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::{OutputFormat, DEFAULT_PRECISION};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            format: OutputFormat::default(),
        }
    }
}

const fn default_precision() -> usize { DEFAULT_PRECISION }

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// JSONL event log; no log is written when unset.
    #[serde(default)]
    pub events: Option<PathBuf>,
}

/// On-disk layout of `simplerank.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankToml {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub log: LogSection,
}

/// Effective settings for one run: file values with CLI overrides applied.
#[derive(Debug, Clone)]
pub struct Config {
    pub precision: usize,
    pub format: OutputFormat,
    pub events: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(RankToml::default())
    }
}

impl Config {
    #[must_use]
    pub fn from_toml(toml: RankToml) -> Self {
        Self {
            precision: toml.output.precision,
            format: toml.output.format,
            events: toml.log.events,
            verbose: false,
        }
    }
}
