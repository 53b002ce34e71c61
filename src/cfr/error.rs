//! Errors surfaced by the trainer.

use thiserror::Error;

use crate::cfr::config::ConfigError;

/// Errors that can occur before training starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// `train` was asked for zero iterations.
    #[error("iteration count must be positive")]
    ZeroIterations,

    /// The trainer configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
