// src/exit.rs
//! Standardized process exit codes for `patchrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PatchRankExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO while writing output).
    Error = 1,
    /// Input validation failed (schema violation, duplicate id, bad config).
    InvalidInput = 2,
    /// The patch source could not be read.
    SourceUnavailable = 3,
    /// The solver hit its iteration cap.
    ConvergenceFailure = 4,
}

impl PatchRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to an exit code, looking for a [`RankError`] cause.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RankError>() {
            Some(RankError::SourceUnavailable { .. }) => Self::SourceUnavailable,
            Some(RankError::ConvergenceFailure { .. }) => Self::ConvergenceFailure,
            Some(
                RankError::SchemaViolation { .. }
                | RankError::DuplicateIdentifier { .. }
                | RankError::InvalidConfig(_)
                | RankError::Config { .. },
            ) => Self::InvalidInput,
            Some(RankError::Export { .. }) | None => Self::Error,
        }
    }
}

impl Termination for PatchRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
