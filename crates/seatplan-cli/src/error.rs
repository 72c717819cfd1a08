//! CLI error type and exit codes.

use std::path::PathBuf;

use seatplan::{ConfigError, SeatPlanError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid chart file {path}: {source}")]
    Chart {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Plan(#[from] SeatPlanError),

    #[error("Cannot render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 2 for rejected input, 3 for load failures,
    /// 4 for persistence failures, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Plan(SeatPlanError::Validation(_)) => 2,
            CliError::Plan(SeatPlanError::Source(_)) => 3,
            CliError::Plan(SeatPlanError::Persistence(_)) | CliError::Store(_) => 4,
            _ => 1,
        }
    }
}
