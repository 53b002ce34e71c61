//! Exact evaluation of average-strategy profiles.
//!
//! Kuhn poker is small enough to enumerate every deal, so the best response
//! is computed exactly rather than sampled. Information sets that were never
//! visited play uniformly.

use crate::cfr::storage::InfoSetMap;
use crate::games::kuhn::{reward, Card, Deck, History, InfoSetKey, KuhnAction, NUM_CARDS};

/// Mean of both players' best-response values against the average strategy.
///
/// Zero at a Nash equilibrium, positive otherwise.
pub fn exploitability(info_sets: &InfoSetMap) -> f64 {
    (best_response_value(info_sets, 0) + best_response_value(info_sets, 1)) / 2.0
}

/// Expected value for `br_player` when it best-responds to the opponent's
/// average strategy.
pub fn best_response_value(info_sets: &InfoSetMap, br_player: usize) -> f64 {
    let mut total = 0.0;
    for br_card in Card::ALL {
        let mut opponent_reach = [0.0; NUM_CARDS];
        for opponent in Card::ALL.into_iter().filter(|&c| c != br_card) {
            opponent_reach[opponent.rank() as usize] = 1.0 / (NUM_CARDS - 1) as f64;
        }
        total += best_response(info_sets, br_player, br_card, History::new(), opponent_reach);
    }
    total / NUM_CARDS as f64
}

/// Best-response value at (`br_card`, `history`), weighted by the reach of
/// each opponent card.
fn best_response(
    info_sets: &InfoSetMap,
    br_player: usize,
    br_card: Card,
    history: History,
    opponent_reach: [f64; NUM_CARDS],
) -> f64 {
    let mover = history.player();
    let opponents = Card::ALL.into_iter().filter(move |&c| c != br_card);

    if history.is_terminal() {
        return opponents
            .map(|opponent| {
                let payoff = if mover == br_player {
                    reward(&history, br_card, opponent)
                } else {
                    -reward(&history, opponent, br_card)
                };
                opponent_reach[opponent.rank() as usize] * payoff
            })
            .sum();
    }

    if mover == br_player {
        KuhnAction::ALL
            .into_iter()
            .map(|action| {
                best_response(info_sets, br_player, br_card, history.with(action), opponent_reach)
            })
            .fold(f64::NEG_INFINITY, f64::max)
    } else {
        KuhnAction::ALL
            .into_iter()
            .map(|action| {
                let mut next_reach = opponent_reach;
                for opponent in opponents.clone() {
                    let strategy = info_sets.average_strategy(&InfoSetKey::new(opponent, history));
                    next_reach[opponent.rank() as usize] *= strategy[action.index()];
                }
                best_response(info_sets, br_player, br_card, history.with(action), next_reach)
            })
            .sum()
    }
}

/// Exact expected value for player 0 when both players follow their
/// average strategies.
pub fn expected_value(info_sets: &InfoSetMap) -> f64 {
    let deals = Deck::all_deals().count() as f64;
    Deck::all_deals()
        .map(|(c0, c1)| profile_value(info_sets, [c0, c1], History::new()))
        .sum::<f64>()
        / deals
}

fn profile_value(info_sets: &InfoSetMap, cards: [Card; 2], history: History) -> f64 {
    let mover = history.player();

    if history.is_terminal() {
        let payoff = reward(&history, cards[mover], cards[1 - mover]);
        return if mover == 0 { payoff } else { -payoff };
    }

    let strategy = info_sets.average_strategy(&InfoSetKey::new(cards[mover], history));
    KuhnAction::ALL
        .into_iter()
        .map(|action| strategy[action.index()] * profile_value(info_sets, cards, history.with(action)))
        .sum()
}
