// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, LogSection, OutputSection, RankToml};

use crate::error::{RankError, Result};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "simplerank.toml";
pub const MAX_PRECISION: usize = 9;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from `path`, or from `simplerank.toml` in the working
    /// directory when no path is given. A missing default file yields defaults.
    ///
    /// # Errors
    /// Returns error if an explicit path is missing, or if the file is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let toml = match path {
            Some(p) => io::load_toml_file(p)?,
            None if Path::new(CONFIG_FILE).exists() => io::load_toml_file(Path::new(CONFIG_FILE))?,
            None => RankToml::default(),
        };
        let config = Self::from_toml(toml);
        config.validate(path.unwrap_or(Path::new(CONFIG_FILE)))?;
        Ok(config)
    }

    /// Overrides file values with whatever the command line supplied.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(precision) = overrides.precision {
            self.precision = precision;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(events) = &overrides.events {
            self.events = Some(events.clone());
        }
        self.verbose |= overrides.verbose;
    }

    /// Checks value ranges.
    ///
    /// # Errors
    /// Returns [`RankError::Config`] if precision exceeds [`MAX_PRECISION`].
    pub fn validate(&self, source: &Path) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(RankError::Config {
                path: source.to_path_buf(),
                reason: format!(
                    "precision {} exceeds the maximum of {MAX_PRECISION}",
                    self.precision
                ),
            });
        }
        Ok(())
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub precision: Option<usize>,
    pub format: Option<crate::output::OutputFormat>,
    pub events: Option<PathBuf>,
    pub verbose: bool,
}
