//! Outcome-sampling Monte Carlo CFR+ core.
//!
//! # Overview
//!
//! CFR is an iterative algorithm that converges to Nash equilibrium by:
//! 1. Computing counterfactual regret for each action at each decision point
//! 2. Updating strategies to minimize regret over time
//! 3. Averaging strategies across iterations to converge to equilibrium
//!
//! This module specialises it in three ways:
//!
//! - **CFR+**: negative regret is clipped to zero whenever the strategy is
//!   recomputed and never reintroduced
//! - **Outcome sampling**: the traversing player explores each of its branches
//!   with a beta-smoothed, epsilon-floored probability; the opponent follows a
//!   single sampled action
//! - **Midpoint reset**: strategy sums are cleared halfway through a run
//!
//! # Example
//!
//! ```
//! use kuhn_mccfr::cfr::{MCCFRTrainer, TrainerConfig};
//! use kuhn_mccfr::games::kuhn::{Card, History, InfoSetKey};
//!
//! let mut trainer = MCCFRTrainer::try_new(TrainerConfig::default().with_seed(7)).unwrap();
//! let result = trainer.train(2_000).unwrap();
//! println!("game value {:.3}", result.game_value);
//!
//! let king = trainer.average_strategy(&InfoSetKey::new(Card::KING, History::new()));
//! assert!((king[0] + king[1] - 1.0).abs() < 1e-9);
//! ```
//!
//! # Theory
//!
//! **Regret Matching**: Set strategy proportional to positive regrets.
//! ```text
//! Strategy(a) = max(0, Regret(a)) / sum(max(0, Regret(a')))
//! ```
//!
//! # References
//!
//! - Zinkevich, M., et al. "Regret Minimization in Games with Incomplete Information" (2007)
//! - Lanctot, M., et al. "Monte Carlo Sampling for Regret Minimization in Extensive Games" (2009)
//! - Tammelin, O. "Solving Large Imperfect Information Games Using CFR+" (2014)

pub mod config;
pub mod error;
pub mod exploitability;
pub mod info_set;
pub mod sampling;
pub mod solver;
pub mod storage;

// Re-export main types for convenient access
pub use config::{ConfigError, TrainerConfig, TrainingStats};
pub use error::SolverError;
pub use exploitability::{best_response_value, expected_value, exploitability};
pub use info_set::{sample_action, InformationSet};
pub use sampling::SamplingPolicy;
pub use solver::{MCCFRTrainer, TrainingResult};
pub use storage::InfoSetMap;
