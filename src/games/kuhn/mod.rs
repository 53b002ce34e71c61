//! Kuhn Poker rules.
//!
//! Kuhn Poker is a simplified poker game with a known, one-parameter family of
//! Nash equilibria, which makes it the standard benchmark for CFR variants.
//!
//! ## Game Rules
//!
//! - 3 cards: Jack (0), Queen (1), King (2)
//! - 2 players, each antes 1 chip
//! - Each player receives 1 card, the third card stays face down
//! - Player 1 acts first: Pass or Bet (1 chip)
//! - Player 2 responds, higher card wins at showdown
//!
//! ## Game Tree
//!
//! ```text
//! P1 (first to act)
//! ├── Pass
//! │   └── P2
//! │       ├── Pass → Showdown (±1)
//! │       └── Bet
//! │           └── P1
//! │               ├── Pass → P2 wins (+1 to the bettor)
//! │               └── Bet → Showdown (±2)
//! └── Bet
//!     └── P2
//!         ├── Pass → P1 wins (+1 to the bettor)
//!         └── Bet → Showdown (±2)
//! ```
//!
//! The rules are fixed constants: histories are at most three actions long and
//! every terminal history ends in `pp`, `bp` or `bb`.
//!
//! ## Known Nash Equilibrium
//!
//! - **Player 1 with Jack**: Bet with probability α ∈ [0, 1/3]
//! - **Player 1 with Queen**: Always Pass, call a bet with probability α + 1/3
//! - **Player 1 with King**: Bet with probability 3α
//! - **Player 2 facing Bet with Jack**: Always Fold
//! - **Player 2 facing Bet with Queen**: Call with probability 1/3
//! - **Player 2 facing Bet with King**: Always Call
//!
//! **Expected Value**: Player 1 EV = -1/18 ≈ -0.0556

pub mod output;

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Number of actions available at every decision point.
pub const NUM_ACTIONS: usize = 2;

/// Number of cards in the deck.
pub const NUM_CARDS: usize = 3;

/// Longest possible action history (`pbp` / `pbb`).
pub const MAX_HISTORY: usize = 3;

/// A card rank. Higher rank wins at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Lowest card.
    pub const JACK: Card = Card(0);
    /// Middle card.
    pub const QUEEN: Card = Card(1);
    /// Highest card.
    pub const KING: Card = Card(2);
    /// Every card in rank order.
    pub const ALL: [Card; NUM_CARDS] = [Card::JACK, Card::QUEEN, Card::KING];

    /// Numeric rank (0 = Jack, 2 = King).
    pub fn rank(self) -> u8 {
        self.0
    }

    /// Get card name for display.
    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "Jack",
            1 => "Queen",
            _ => "King",
        }
    }

    /// Whether this card wins a showdown against `other`.
    pub fn beats(self, other: Card) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Actions in Kuhn Poker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KuhnAction {
    /// Pass (check if no bet, fold if facing bet)
    #[default]
    Pass,
    /// Bet (or call if facing bet)
    Bet,
}

impl KuhnAction {
    /// Actions in strategy-vector order.
    pub const ALL: [KuhnAction; NUM_ACTIONS] = [KuhnAction::Pass, KuhnAction::Bet];

    /// Position of this action in strategy and regret vectors.
    pub fn index(self) -> usize {
        match self {
            KuhnAction::Pass => 0,
            KuhnAction::Bet => 1,
        }
    }

    /// Single-character history symbol.
    pub fn symbol(self) -> char {
        match self {
            KuhnAction::Pass => 'p',
            KuhnAction::Bet => 'b',
        }
    }

    /// Parse a history symbol.
    pub fn from_symbol(symbol: char) -> Option<KuhnAction> {
        match symbol {
            'p' => Some(KuhnAction::Pass),
            'b' => Some(KuhnAction::Bet),
            _ => None,
        }
    }
}

impl fmt::Display for KuhnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KuhnAction::Pass => write!(f, "Pass"),
            KuhnAction::Bet => write!(f, "Bet"),
        }
    }
}

/// Errors from parsing a textual history such as `"pb"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryParseError {
    /// A character other than `p` or `b`.
    #[error("invalid action symbol '{0}'")]
    InvalidSymbol(char),
    /// More actions than any legal history holds.
    #[error("history longer than {MAX_HISTORY} actions")]
    TooLong,
}

/// Public action history, stored inline.
///
/// Slots past `len` always hold `Pass` so derived equality and hashing only
/// depend on the visible actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct History {
    actions: [KuhnAction; MAX_HISTORY],
    len: u8,
}

impl History {
    /// Empty history at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions taken.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether no action has been taken yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Actions taken so far, oldest first.
    pub fn actions(&self) -> &[KuhnAction] {
        &self.actions[..self.len()]
    }

    /// Player to act (0 at even lengths, 1 at odd lengths).
    pub fn player(&self) -> usize {
        self.len() % 2
    }

    /// History with `action` appended.
    ///
    /// # Panics
    /// Panics if the history is already at maximum length, which only happens
    /// when a caller extends a terminal history.
    pub fn with(mut self, action: KuhnAction) -> Self {
        assert!(
            self.len() < MAX_HISTORY,
            "cannot extend history '{}' past a terminal state",
            self
        );
        self.actions[self.len()] = action;
        self.len += 1;
        self
    }

    /// Check if the history is terminal (game over).
    ///
    /// Terminal iff the last two actions are pass-pass, bet-bet or bet-pass.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.actions(),
            [.., KuhnAction::Pass, KuhnAction::Pass]
                | [.., KuhnAction::Bet, KuhnAction::Bet]
                | [.., KuhnAction::Bet, KuhnAction::Pass]
        )
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in self.actions() {
            write!(f, "{}", action.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for History {
    type Err = HistoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut history = History::new();
        for symbol in s.chars() {
            let action =
                KuhnAction::from_symbol(symbol).ok_or(HistoryParseError::InvalidSymbol(symbol))?;
            if history.len() == MAX_HISTORY {
                return Err(HistoryParseError::TooLong);
            }
            history = history.with(action);
        }
        Ok(history)
    }
}

/// Signed payoff at a terminal history for the player about to move there.
///
/// `mover` is the card of the player whose turn it would be (`history.player()`),
/// `opponent` the other player's card.
///
/// # Panics
/// Panics if `history` is not terminal.
pub fn reward(history: &History, mover: Card, opponent: Card) -> f64 {
    match history.actions() {
        [.., KuhnAction::Pass, KuhnAction::Pass] => {
            if mover.beats(opponent) {
                1.0
            } else {
                -1.0
            }
        }
        // The bettor is always the player to move after a fold.
        [.., KuhnAction::Bet, KuhnAction::Pass] => 1.0,
        [.., KuhnAction::Bet, KuhnAction::Bet] => {
            if mover.beats(opponent) {
                2.0
            } else {
                -2.0
            }
        }
        _ => panic!("reward requested for non-terminal history '{}'", history),
    }
}

/// Information set key: what a player knows at a decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoSetKey {
    /// Acting player's private card.
    pub card: Card,
    /// Public action history.
    pub history: History,
}

impl InfoSetKey {
    /// Create a key from a card and history.
    pub fn new(card: Card, history: History) -> Self {
        Self { card, history }
    }

    /// Player who acts at this information set.
    pub fn player(&self) -> usize {
        self.history.player()
    }
}

impl fmt::Display for InfoSetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.card, self.history)
    }
}

/// The three-card deck. Player 0 holds the first card, player 1 the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; NUM_CARDS],
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Deck in rank order.
    pub fn new() -> Self {
        Self { cards: Card::ALL }
    }

    /// Deck with a fixed deal, for replaying specific hands.
    pub fn from_cards(cards: [Card; NUM_CARDS]) -> Self {
        debug_assert!(
            cards[0] != cards[1] && cards[1] != cards[2] && cards[0] != cards[2],
            "deck must hold distinct cards"
        );
        Self { cards }
    }

    /// Reassign the cards with an unbiased permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Card held by `player` (0 or 1).
    pub fn card(&self, player: usize) -> Card {
        debug_assert!(player < 2, "Kuhn poker has two players");
        self.cards[player]
    }

    /// All six ordered (player 0, player 1) deals.
    pub fn all_deals() -> impl Iterator<Item = (Card, Card)> {
        Card::ALL.into_iter().flat_map(|c0| {
            Card::ALL
                .into_iter()
                .filter(move |&c1| c1 != c0)
                .map(move |c1| (c0, c1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn h(s: &str) -> History {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_histories() {
        assert!(h("pp").is_terminal());
        assert!(h("bb").is_terminal());
        assert!(h("bp").is_terminal());
        assert!(h("pbp").is_terminal());
        assert!(h("pbb").is_terminal());

        assert!(!h("").is_terminal());
        assert!(!h("p").is_terminal());
        assert!(!h("b").is_terminal());
        // Pass then bet: the first player may still fold or call
        assert!(!h("pb").is_terminal());
    }

    #[test]
    fn test_rewards() {
        assert_eq!(reward(&h("pp"), Card::KING, Card::JACK), 1.0);
        assert_eq!(reward(&h("pp"), Card::JACK, Card::KING), -1.0);
        assert_eq!(reward(&h("bp"), Card::KING, Card::JACK), 1.0);
        // Bettor wins a fold regardless of cards
        assert_eq!(reward(&h("bp"), Card::JACK, Card::KING), 1.0);
        assert_eq!(reward(&h("pbp"), Card::JACK, Card::KING), 1.0);
        assert_eq!(reward(&h("bb"), Card::KING, Card::JACK), 2.0);
        assert_eq!(reward(&h("bb"), Card::JACK, Card::KING), -2.0);
        assert_eq!(reward(&h("pbb"), Card::QUEEN, Card::JACK), 2.0);
    }

    #[test]
    #[should_panic(expected = "non-terminal")]
    fn test_reward_rejects_open_history() {
        reward(&h("pb"), Card::KING, Card::JACK);
    }

    #[test]
    fn test_history_player_and_display() {
        let history = History::new().with(KuhnAction::Pass).with(KuhnAction::Bet);
        assert_eq!(history.len(), 2);
        assert_eq!(history.player(), 0);
        assert_eq!(history.to_string(), "pb");
        assert_eq!(h("p").player(), 1);
        assert_eq!(history, h("pb"));
    }

    #[test]
    fn test_history_parse_errors() {
        assert_eq!("px".parse::<History>(), Err(HistoryParseError::InvalidSymbol('x')));
        assert_eq!("pbpb".parse::<History>(), Err(HistoryParseError::TooLong));
    }

    #[test]
    #[should_panic(expected = "past a terminal state")]
    fn test_history_cannot_grow_past_three() {
        h("pbb").with(KuhnAction::Pass);
    }

    #[test]
    fn test_info_set_key_format() {
        let key = InfoSetKey::new(Card::KING, h("p"));
        assert_eq!(key.to_string(), "2 p");
        assert_eq!(key.player(), 1);
        assert_eq!(InfoSetKey::new(Card::JACK, History::new()).to_string(), "0 ");
    }

    #[test]
    fn test_deck_shuffle_deals_distinct_cards() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::new();
        for _ in 0..100 {
            deck.shuffle(&mut rng);
            assert_ne!(deck.card(0), deck.card(1));
        }
        assert_eq!(Deck::all_deals().count(), 6);
    }
}
