//! Configuration options for the MCCFR+ trainer.
//!
//! This module provides the trainer configuration, its validation errors and
//! the statistics reported after training.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cfr::sampling::{SamplingPolicy, DEFAULT_BETA, DEFAULT_EPSILON};

/// Configuration for the trainer.
///
/// # Example
/// ```
/// use kuhn_mccfr::cfr::TrainerConfig;
///
/// let config = TrainerConfig::default().with_seed(42);
/// assert!(config.validate().is_ok());
/// assert!(config.reset_at_midpoint);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Smoothing mass for branch exploration probabilities.
    ///
    /// Large values keep exploration near 1 until the average strategy has
    /// accumulated comparable mass.
    pub beta: f64,

    /// Minimum probability of exploring any branch, in (0, 1].
    pub epsilon: f64,

    /// Zero all strategy sums halfway through a training run.
    ///
    /// Discards the noisy early average without touching regrets.
    pub reset_at_midpoint: bool,

    /// Iterations between progress callbacks and debug log lines.
    pub progress_interval: u64,

    /// Random seed for reproducibility.
    ///
    /// If set, two runs with the same iteration counts produce identical
    /// information sets. If `None`, an entropy seed is used.
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            beta: DEFAULT_BETA,
            epsilon: DEFAULT_EPSILON,
            reset_at_midpoint: true,
            progress_interval: 1000,
            seed: None,
        }
    }
}

impl TrainerConfig {
    /// Create a new TrainerConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set the smoothing mass.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Builder method: set the exploration floor.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder method: set whether strategy sums reset at the midpoint.
    pub fn with_midpoint_reset(mut self, enable: bool) -> Self {
        self.reset_at_midpoint = enable;
        self
    }

    /// Builder method: set the progress interval.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Exploration policy described by this configuration.
    pub fn sampling_policy(&self) -> SamplingPolicy {
        SamplingPolicy::new(self.beta, self.epsilon)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(ConfigError::InvalidBeta(self.beta));
        }

        if !(self.epsilon > 0.0 && self.epsilon <= 1.0) {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }

        if self.progress_interval == 0 {
            return Err(ConfigError::InvalidProgressInterval);
        }

        Ok(())
    }
}

/// Errors that can occur when validating trainer configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Smoothing mass is negative or not finite.
    #[error("beta {0} must be a finite, non-negative number")]
    InvalidBeta(f64),
    /// Exploration floor is out of range (0, 1].
    #[error("epsilon {0} is out of range (0, 1]")]
    InvalidEpsilon(f64),
    /// Progress interval of zero.
    #[error("progress interval must be positive")]
    InvalidProgressInterval,
    /// Malformed JSON.
    #[error("invalid config JSON: {0}")]
    Parse(String),
}

/// Statistics tracked during training.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Total number of iterations completed.
    pub iterations: u64,

    /// Number of unique information sets discovered.
    pub info_sets: usize,

    /// Total time spent training (in seconds).
    pub elapsed_seconds: f64,

    /// Iterations per second.
    pub iterations_per_second: f64,
}

impl TrainingStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update iterations per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.iterations_per_second = self.iterations as f64 / self.elapsed_seconds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainerConfig::default();
        assert_eq!(config.beta, 1000.0);
        assert_eq!(config.epsilon, 0.05);
        assert!(config.reset_at_midpoint);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            TrainerConfig::default().with_epsilon(0.0).validate(),
            Err(ConfigError::InvalidEpsilon(0.0))
        );
        assert_eq!(
            TrainerConfig::default().with_epsilon(1.5).validate(),
            Err(ConfigError::InvalidEpsilon(1.5))
        );
        assert_eq!(
            TrainerConfig::default().with_beta(-1.0).validate(),
            Err(ConfigError::InvalidBeta(-1.0))
        );
        assert!(TrainerConfig::default().with_beta(f64::NAN).validate().is_err());
        assert_eq!(
            TrainerConfig::default().with_progress_interval(0).validate(),
            Err(ConfigError::InvalidProgressInterval)
        );
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = TrainerConfig::from_json(r#"{ "seed": 7, "beta": 10.0 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.beta, 10.0);
        assert_eq!(config.epsilon, 0.05);

        assert!(matches!(
            TrainerConfig::from_json(r#"{ "epsilon": 2.0 }"#),
            Err(ConfigError::InvalidEpsilon(_))
        ));
        assert!(matches!(TrainerConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_stats_rate() {
        let mut stats = TrainingStats {
            iterations: 1000,
            elapsed_seconds: 2.0,
            ..TrainingStats::new()
        };
        stats.update_rate();
        assert_eq!(stats.iterations_per_second, 500.0);
    }
}
