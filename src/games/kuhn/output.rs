//! Strategy report for a trained Kuhn poker solution.
//!
//! Player 0 rows are the information sets at even history lengths, player 1
//! rows those at odd lengths, each sorted by the `"<card> <history>"` key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cfr::InfoSetMap;
use crate::games::kuhn::KuhnAction;

/// Average strategy at one information set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyEntry {
    /// Info state key, e.g. `"2 pb"`
    pub info_key: String,
    /// Card rank (0=Jack, 1=Queen, 2=King)
    pub card: u8,
    /// Action history
    pub history: String,
    /// Probability of passing
    pub pass: f64,
    /// Probability of betting
    pub bet: f64,
}

impl fmt::Display for StrategyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6} [{:.2}, {:.2}]", self.info_key, self.pass, self.bet)
    }
}

/// Expected values and both players' strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyReport {
    /// Estimated game value for player 0
    pub expected_value: f64,
    /// Player 0 strategies
    pub first_player: Vec<StrategyEntry>,
    /// Player 1 strategies
    pub second_player: Vec<StrategyEntry>,
}

impl StrategyReport {
    /// Build the report from trained information sets.
    pub fn from_info_sets(expected_value: f64, info_sets: &InfoSetMap) -> Self {
        let mut first_player = Vec::new();
        let mut second_player = Vec::new();

        for node in info_sets.sorted() {
            let key = node.key();
            let avg = node.average_strategy();
            let entry = StrategyEntry {
                info_key: key.to_string(),
                card: key.card.rank(),
                history: key.history.to_string(),
                pass: avg[KuhnAction::Pass.index()],
                bet: avg[KuhnAction::Bet.index()],
            };

            if key.player() == 0 {
                first_player.push(entry);
            } else {
                second_player.push(entry);
            }
        }

        Self {
            expected_value,
            first_player,
            second_player,
        }
    }

    /// Look up an entry by its key.
    pub fn entry(&self, info_key: &str) -> Option<&StrategyEntry> {
        self.first_player
            .iter()
            .chain(self.second_player.iter())
            .find(|e| e.info_key == info_key)
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "player 1 expected value: {}", self.expected_value)?;
        writeln!(f, "player 2 expected value: {}", -self.expected_value)?;

        writeln!(f)?;
        writeln!(f, "player 1 strategies:")?;
        for entry in &self.first_player {
            writeln!(f, "{}", entry)?;
        }

        writeln!(f)?;
        writeln!(f, "player 2 strategies:")?;
        for entry in &self.second_player {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}
