use std::fs;
use std::path::Path;

use super::types::RankToml;
use crate::error::{RankError, Result};

/// Reads and parses a config file.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid TOML for this tool.
pub fn load_toml_file(path: &Path) -> Result<RankToml> {
    let content = fs::read_to_string(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_toml(&content, path)
}

/// Parses config text; `path` is only used for error messages.
///
/// # Errors
/// Returns [`RankError::Config`] on syntax errors or unknown keys.
pub fn parse_toml(content: &str, path: &Path) -> Result<RankToml> {
    toml::from_str(content).map_err(|e| RankError::Config {
        path: path.to_path_buf(),
        reason: e.message().to_string(),
    })
}
