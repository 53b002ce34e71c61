//! # Kuhn MCCFR
//!
//! Approximate Nash equilibrium strategies for Kuhn poker using outcome-sampling
//! Monte Carlo Counterfactual Regret Minimization with the CFR+ regret floor.
//!
//! ## Quick Start
//!
//! ```
//! use kuhn_mccfr::cfr::{MCCFRTrainer, TrainerConfig};
//! use kuhn_mccfr::games::kuhn::output::StrategyReport;
//!
//! let mut trainer = MCCFRTrainer::try_new(TrainerConfig::default().with_seed(1)).unwrap();
//! let result = trainer.train(1_000).unwrap();
//!
//! let report = StrategyReport::from_info_sets(result.game_value, trainer.info_sets());
//! println!("{}", report);
//! ```
//!
//! ## Modules
//!
//! - [`cfr`]: Information sets, sampling policy, trainer and exact evaluation
//! - [`games`]: Kuhn poker rules and the strategy report
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      MCCFRTrainer                         │
//! │  - deck shuffle per traversal  - midpoint strategy reset  │
//! │  - alternating traverser       - game value estimate      │
//! └───────────────────────────────────────────────────────────┘
//!                │ traverse(history, reach, reach, sample)
//!                ▼
//!   ┌────────────────────┐   ┌────────────────────┐
//!   │   InfoSetMap       │──▶│  SamplingPolicy    │
//!   │   InformationSet   │   │  (beta, epsilon)   │
//!   └────────────────────┘   └────────────────────┘
//!                │
//!                ▼
//!   StrategyReport / exploitability
//! ```

#![warn(missing_docs)]

/// MCCFR+ solver module.
pub mod cfr;

/// Game rules module.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use cfr::{InfoSetMap, InformationSet, MCCFRTrainer, SolverError, TrainerConfig, TrainingResult};
pub use games::kuhn::{Card, History, InfoSetKey, KuhnAction};
