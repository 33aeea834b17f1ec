// src/events.rs
//! Machine-readable event logging for ranking runs.
//!
//! Events are appended as JSON lines to the configured log path.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_EVENTS_PATH: &str = ".simplerank/events.jsonl";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    RunStarted {
        edges: usize,
        iterations: usize,
    },
    GraphBuilt {
        vertices: usize,
        edges: usize,
        sinks: usize,
    },
    PassCompleted {
        pass: usize,
        mass: f32,
    },
    RunFinished {
        vertices: usize,
        passes: usize,
    },
    RunFailed {
        error: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankEvent {
    pub timestamp: u64,
    pub kind: EventKind,
}

#[derive(Debug, Clone, Default)]
pub struct EventLogger {
    log_path: Option<PathBuf>,
}

impl EventLogger {
    #[must_use]
    pub fn new(log_path: &Path) -> Self {
        Self {
            log_path: Some(log_path.to_path_buf()),
        }
    }

    /// A logger that drops every event.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(path: Option<&Path>) -> Self {
        path.map_or_else(Self::disabled, Self::new)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.log_path.is_some()
    }

    pub fn log(&self, kind: EventKind) {
        let Some(path) = &self.log_path else {
            return;
        };
        // Logging is best-effort. We swallow errors to avoid failing the run.
        if let Ok(json) = Self::serialize_event(kind) {
            let _ = Self::append_to_file(path, &json);
        }
    }

    fn serialize_event(kind: EventKind) -> Result<String> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let event = RankEvent { timestamp, kind };
        Ok(serde_json::to_string(&event)?)
    }

    fn append_to_file(path: &Path, line: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
