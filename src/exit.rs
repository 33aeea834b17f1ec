// src/exit.rs
//! Standardized process exit codes for `simplerank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RankExit {
    /// Ranks were computed and printed.
    Success = 0,
    /// Generic error (IO, config, serialization).
    Error = 1,
    /// Input validation failed (bad counts, missing or trailing tokens).
    InvalidInput = 2,
    /// The edge stream produced no vertices.
    EmptyGraph = 3,
}

impl RankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a failed run to its exit code by looking for a [`RankError`] in the chain.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RankError>() {
            Some(RankError::MalformedInput { .. }) => Self::InvalidInput,
            Some(RankError::EmptyGraph) => Self::EmptyGraph,
            _ => Self::Error,
        }
    }
}

impl Termination for RankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
