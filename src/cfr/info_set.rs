//! Per-decision-point regret and strategy state.

use rand::Rng;

use crate::games::kuhn::{InfoSetKey, KuhnAction, NUM_ACTIONS};

/// Uniform distribution over the actions.
pub(crate) const UNIFORM: [f64; NUM_ACTIONS] = [1.0 / NUM_ACTIONS as f64; NUM_ACTIONS];

/// Regret-matching state for one information set.
///
/// - **Regret sum**: cumulative counterfactual regret per action, floored at
///   zero by CFR+ whenever the current strategy is recomputed
/// - **Strategy sum**: cumulative reach-weighted strategy, the numerator of the
///   average strategy
/// - **Reach probability**: reach accumulated during the current visit, folded
///   into the sums by [`InformationSet::commit_update`]
#[derive(Debug, Clone, PartialEq)]
pub struct InformationSet {
    key: InfoSetKey,
    regret_sum: [f64; NUM_ACTIONS],
    strategy_sum: [f64; NUM_ACTIONS],
    strategy: [f64; NUM_ACTIONS],
    reach_probability: f64,
    reach_probability_sum: f64,
}

impl InformationSet {
    /// Fresh information set playing uniformly.
    pub fn new(key: InfoSetKey) -> Self {
        Self {
            key,
            regret_sum: [0.0; NUM_ACTIONS],
            strategy_sum: [0.0; NUM_ACTIONS],
            strategy: UNIFORM,
            reach_probability: 0.0,
            reach_probability_sum: 0.0,
        }
    }

    /// Key this record belongs to.
    pub fn key(&self) -> &InfoSetKey {
        &self.key
    }

    /// Strategy played on the current iteration.
    pub fn strategy(&self) -> &[f64; NUM_ACTIONS] {
        &self.strategy
    }

    /// Cumulative regret per action.
    pub fn regret_sum(&self) -> &[f64; NUM_ACTIONS] {
        &self.regret_sum
    }

    /// Cumulative reach-weighted strategy per action.
    pub fn strategy_sum(&self) -> &[f64; NUM_ACTIONS] {
        &self.strategy_sum
    }

    /// Total reach probability committed so far.
    pub fn reach_probability_sum(&self) -> f64 {
        self.reach_probability_sum
    }

    /// Regret matching with the CFR+ floor.
    ///
    /// Negative regrets are clipped to zero in place and stay discarded. The
    /// strategy is proportional to the remaining regret, or uniform if none is
    /// positive.
    pub fn current_strategy(&mut self) -> [f64; NUM_ACTIONS] {
        for regret in self.regret_sum.iter_mut() {
            if *regret < 0.0 {
                *regret = 0.0;
            }
        }

        let sum: f64 = self.regret_sum.iter().sum();
        if sum > 0.0 {
            self.regret_sum.map(|r| r / sum)
        } else {
            UNIFORM
        }
    }

    /// Add reach probability for a visit by the traversing player.
    pub fn record_visit(&mut self, reach_contribution: f64) {
        self.reach_probability += reach_contribution;
    }

    /// Accumulate counterfactual regret for each action.
    pub fn add_regret(&mut self, regrets: &[f64; NUM_ACTIONS]) {
        for (sum, regret) in self.regret_sum.iter_mut().zip(regrets) {
            *sum += regret;
        }
    }

    /// Fold the visit's reach into the sums and refresh the strategy.
    pub fn commit_update(&mut self) {
        for (sum, prob) in self.strategy_sum.iter_mut().zip(self.strategy) {
            *sum += self.reach_probability * prob;
        }
        self.reach_probability_sum += self.reach_probability;
        self.strategy = self.current_strategy();
        self.reach_probability = 0.0;
    }

    /// Drop the accumulated strategy mass, keeping regrets and strategy.
    pub fn reset_strategy_sum(&mut self) {
        self.strategy_sum = [0.0; NUM_ACTIONS];
    }

    /// Strategy sum normalised by committed reach, or the raw sum before any
    /// reach has been committed.
    pub(crate) fn reach_normalized_strategy_sum(&self) -> [f64; NUM_ACTIONS] {
        if self.reach_probability_sum != 0.0 {
            self.strategy_sum.map(|s| s / self.reach_probability_sum)
        } else {
            self.strategy_sum
        }
    }

    /// Average strategy, the equilibrium approximation.
    ///
    /// Uniform when no strategy mass has been accumulated.
    pub fn average_strategy(&self) -> [f64; NUM_ACTIONS] {
        let avg = self.reach_normalized_strategy_sum();
        let total: f64 = avg.iter().sum();
        if total > 0.0 {
            avg.map(|a| a / total)
        } else {
            UNIFORM
        }
    }

    /// Probability the average strategy assigns to `action`.
    pub fn average_probability(&self, action: KuhnAction) -> f64 {
        self.average_strategy()[action.index()]
    }
}

/// Sample an action index according to a probability distribution.
pub fn sample_action<R: Rng + ?Sized>(strategy: &[f64; NUM_ACTIONS], rng: &mut R) -> KuhnAction {
    let r: f64 = rng.gen();
    let mut cumsum = 0.0;

    for (action, &prob) in KuhnAction::ALL.iter().zip(strategy) {
        cumsum += prob;
        if r < cumsum {
            return *action;
        }
    }

    // Floating point shortfall lands on the last action
    KuhnAction::ALL[NUM_ACTIONS - 1]
}
