//! Explore/prune decisions for the traversing player's action branches.
//!
//! Each branch is explored with a probability derived from the information
//! set's historical (average) strategy, smoothed by `beta` and floored at
//! `epsilon`:
//!
//! ```text
//! avg      = strategy_sum / reach_sum          (raw sum if reach_sum == 0)
//! p(a)     = (beta + avg[a]) / (beta + Σ avg)  if Σ avg > 0
//!          = (1 + beta) / (beta + |A|)         otherwise
//! explore  = max(p(a), epsilon)
//! ```
//!
//! Early in training `beta` dominates and nearly every branch is explored.
//! As strategy mass accumulates its influence fades. The floor keeps every
//! branch reachable.

use crate::cfr::info_set::InformationSet;
use crate::games::kuhn::{KuhnAction, NUM_ACTIONS};

/// Default smoothing mass added to the average strategy.
pub const DEFAULT_BETA: f64 = 1000.0;

/// Default minimum exploration probability.
pub const DEFAULT_EPSILON: f64 = 0.05;

/// Beta-smoothed, epsilon-floored exploration policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingPolicy {
    /// Smoothing mass.
    pub beta: f64,
    /// Exploration floor.
    pub epsilon: f64,
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self {
            beta: DEFAULT_BETA,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl SamplingPolicy {
    /// Create a policy with explicit parameters.
    pub fn new(beta: f64, epsilon: f64) -> Self {
        Self { beta, epsilon }
    }

    /// Probability of exploring `action` at `node`, in `[epsilon, 1]`.
    pub fn sampling_probability(&self, node: &InformationSet, action: KuhnAction) -> f64 {
        let avg = node.reach_normalized_strategy_sum();
        let total: f64 = avg.iter().sum();

        let p = if total > 0.0 {
            (self.beta + avg[action.index()]) / (self.beta + total)
        } else {
            (1.0 + self.beta) / (self.beta + NUM_ACTIONS as f64)
        };
        p.max(self.epsilon)
    }
}
