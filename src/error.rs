// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("cannot read patch source: {source} (path: {path})")]
    SourceUnavailable {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("schema violation in record {record} (id: {id}): {reason}")]
    SchemaViolation {
        record: usize,
        id: String,
        reason: String,
    },

    #[error("duplicate patch id '{id}' in record {record} (first seen in record {first_record})")]
    DuplicateIdentifier {
        id: String,
        first_record: usize,
        record: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no convergence after {iterations} iterations (residual: {residual:e})")]
    ConvergenceFailure { iterations: usize, residual: f64 },

    #[error("malformed config file: {source} (path: {path})")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("cannot write export: {source} (path: {path})")]
    Export {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl RankError {
    /// Returns true for errors caused by bad input records.
    ///
    /// Duplicate ids belong to this class: a repeated id is rejected rather
    /// than letting the later record overwrite the earlier one.
    #[must_use]
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            Self::SchemaViolation { .. } | Self::DuplicateIdentifier { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
