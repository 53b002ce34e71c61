//! Outcome-sampling Monte Carlo CFR+ trainer.
//!
//! Each iteration runs one traversal per player. The traversing player
//! evaluates both actions (each branch explored or pruned by the
//! [`SamplingPolicy`]) and accumulates regret; the other player samples a
//! single action from its current strategy. Regrets are floored at zero
//! (CFR+) and the strategy sums are cleared halfway through a run so the
//! reported average excludes the early, high-variance strategies.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::cfr::config::{TrainerConfig, TrainingStats};
use crate::cfr::error::SolverError;
use crate::cfr::exploitability;
use crate::cfr::info_set::sample_action;
use crate::cfr::sampling::SamplingPolicy;
use crate::cfr::storage::InfoSetMap;
use crate::games::kuhn::{reward, Deck, History, InfoSetKey, KuhnAction, NUM_ACTIONS};

/// Number of decision points in Kuhn poker: 3 cards × 4 non-terminal histories.
const KUHN_INFO_SETS: usize = 12;

/// Outcome of a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Estimated expected value of the game for player 0. Player 1's is the
    /// negation.
    pub game_value: f64,

    /// Statistics at the end of the run.
    pub stats: TrainingStats,
}

/// The MCCFR+ trainer.
///
/// Owns the information set map, the deck and the single random stream used
/// for shuffles, explore/prune draws and opponent actions.
///
/// # Example
/// ```
/// use kuhn_mccfr::cfr::{MCCFRTrainer, TrainerConfig};
///
/// let mut trainer = MCCFRTrainer::try_new(TrainerConfig::default().with_seed(42)).unwrap();
/// let result = trainer.train(1_000).unwrap();
/// assert!(result.game_value.abs() < 2.0);
/// assert_eq!(trainer.num_info_sets(), 12);
/// ```
pub struct MCCFRTrainer {
    /// Configuration for the trainer.
    config: TrainerConfig,

    /// Branch exploration policy.
    policy: SamplingPolicy,

    /// Regret and strategy records.
    info_sets: InfoSetMap,

    /// Current deal.
    deck: Deck,

    /// Player accumulating regret on the current traversal.
    traverser: usize,

    /// Iterations completed across all `train` calls.
    iteration: u64,

    /// Statistics tracking.
    stats: TrainingStats,

    /// Random number generator.
    rng: StdRng,
}

impl Default for MCCFRTrainer {
    fn default() -> Self {
        Self::build(TrainerConfig::default())
    }
}

impl MCCFRTrainer {
    /// Create a trainer after validating `config`.
    pub fn try_new(config: TrainerConfig) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create a trainer with default parameters and a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(TrainerConfig::default().with_seed(seed))
    }

    fn build(config: TrainerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            policy: config.sampling_policy(),
            config,
            info_sets: InfoSetMap::with_capacity(KUHN_INFO_SETS),
            deck: Deck::new(),
            traverser: 0,
            iteration: 0,
            stats: TrainingStats::new(),
            rng,
        }
    }

    /// Run a single iteration: one traversal for each player, reshuffling
    /// before each.
    ///
    /// Returns the sum of the two sampled root values for player 0.
    pub fn run_iteration(&mut self) -> f64 {
        self.iteration += 1;

        let mut value = 0.0;
        for player in 0..2 {
            self.traverser = player;
            self.deck.shuffle(&mut self.rng);
            value += self.traverse(History::new(), 1.0, 1.0, 1.0);
        }
        value
    }

    /// Train for `iterations` iterations.
    ///
    /// The midpoint reset fires before iteration `iterations / 2` of this
    /// call, not of the cumulative count. The reported game value is the sum
    /// of the root values collected since the reset, divided by `iterations`.
    ///
    /// # Errors
    /// Returns [`SolverError::ZeroIterations`] without touching any state if
    /// `iterations` is zero.
    pub fn train(&mut self, iterations: u64) -> Result<TrainingResult, SolverError> {
        self.train_with_callback(iterations, |_| {})
    }

    /// Train with a callback for progress tracking.
    ///
    /// `callback` is called every `progress_interval` iterations.
    pub fn train_with_callback<F>(
        &mut self,
        iterations: u64,
        mut callback: F,
    ) -> Result<TrainingResult, SolverError>
    where
        F: FnMut(&TrainingStats),
    {
        if iterations == 0 {
            return Err(SolverError::ZeroIterations);
        }

        let start_time = Instant::now();
        let midpoint = iterations / 2;
        let mut value_sum = 0.0;

        log::info!(
            "training {} iterations (beta={}, epsilon={})",
            iterations,
            self.policy.beta,
            self.policy.epsilon
        );

        for i in 1..=iterations {
            if self.config.reset_at_midpoint && i == midpoint {
                self.info_sets.reset_strategy_sums();
                value_sum = 0.0;
                log::info!("iteration {}: strategy sums reset", i);
            }

            value_sum += self.run_iteration();

            if i % self.config.progress_interval == 0 {
                self.refresh_stats(start_time);
                log::debug!(
                    "iteration {} ({} info sets, {:.0} it/s)",
                    self.stats.iterations,
                    self.stats.info_sets,
                    self.stats.iterations_per_second
                );
                callback(&self.stats);
            }
        }

        self.refresh_stats(start_time);
        let game_value = value_sum / iterations as f64;

        log::info!(
            "trained {} iterations in {:.2}s, game value {:.4}",
            iterations,
            self.stats.elapsed_seconds,
            game_value
        );

        Ok(TrainingResult {
            game_value,
            stats: self.stats.clone(),
        })
    }

    fn refresh_stats(&mut self, start_time: Instant) {
        self.stats.iterations = self.iteration;
        self.stats.info_sets = self.info_sets.len();
        self.stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        self.stats.update_rate();
    }

    /// Recursive evaluator.
    ///
    /// Returns the utility of `history` for the player about to move there.
    /// `sample_prob` is the product of the exploration probabilities along
    /// the path. Terminal payoffs are returned unweighted; an importance
    /// corrected estimator would divide the terminal reward by `sample_prob`.
    fn traverse(&mut self, history: History, reach_p0: f64, reach_p1: f64, sample_prob: f64) -> f64 {
        debug_assert!(sample_prob > 0.0 && sample_prob <= 1.0);

        let player = history.player();
        let card = self.deck.card(player);

        if history.is_terminal() {
            return reward(&history, card, self.deck.card(1 - player));
        }

        let key = InfoSetKey::new(card, history);
        if player == self.traverser {
            self.traverse_player(key, reach_p0, reach_p1, sample_prob)
        } else {
            self.traverse_opponent(key, reach_p0, reach_p1, sample_prob)
        }
    }

    /// Traverser's node: evaluate both actions and update regrets.
    fn traverse_player(
        &mut self,
        key: InfoSetKey,
        reach_p0: f64,
        reach_p1: f64,
        sample_prob: f64,
    ) -> f64 {
        let player = key.player();
        let (own_reach, opponent_reach) = if player == 0 {
            (reach_p0, reach_p1)
        } else {
            (reach_p1, reach_p0)
        };

        let node = self.info_sets.get_or_create(key);
        node.record_visit(own_reach);
        let strategy = *node.strategy();
        let explore = KuhnAction::ALL.map(|action| self.policy.sampling_probability(node, action));

        let mut action_utils = [0.0; NUM_ACTIONS];
        for action in KuhnAction::ALL {
            let i = action.index();

            // Pruned branches count as zero utility this iteration
            if self.rng.gen::<f64>() > explore[i] {
                continue;
            }

            let (next_p0, next_p1) = if player == 0 {
                (reach_p0 * strategy[i], reach_p1)
            } else {
                (reach_p0, reach_p1 * strategy[i])
            };
            action_utils[i] =
                -self.traverse(key.history.with(action), next_p0, next_p1, sample_prob * explore[i]);
        }

        let util: f64 = strategy
            .iter()
            .zip(action_utils.iter())
            .map(|(&s, &u)| s * u)
            .sum();
        let regrets = action_utils.map(|u| opponent_reach * (u - util));

        let node = self.info_sets.get_or_create(key);
        node.add_regret(&regrets);
        node.commit_update();

        util
    }

    /// Non-traverser's node: follow one sampled action, no updates.
    fn traverse_opponent(
        &mut self,
        key: InfoSetKey,
        reach_p0: f64,
        reach_p1: f64,
        sample_prob: f64,
    ) -> f64 {
        let strategy = *self.info_sets.get_or_create(key).strategy();
        let action = sample_action(&strategy, &mut self.rng);
        -self.traverse(key.history.with(action), reach_p0, reach_p1, sample_prob)
    }

    /// Average strategy at an information set (uniform if never visited).
    pub fn average_strategy(&self, key: &InfoSetKey) -> [f64; NUM_ACTIONS] {
        self.info_sets.average_strategy(key)
    }

    /// Exact exploitability of the current average strategies.
    pub fn exploitability(&self) -> f64 {
        exploitability::exploitability(&self.info_sets)
    }

    /// Get the current iteration count.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Get the number of information sets discovered.
    pub fn num_info_sets(&self) -> usize {
        self.info_sets.len()
    }

    /// Get current statistics.
    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Information sets learned so far.
    pub fn info_sets(&self) -> &InfoSetMap {
        &self.info_sets
    }

    /// Consume the trainer, keeping the learned information sets.
    pub fn into_info_sets(self) -> InfoSetMap {
        self.info_sets
    }
}
