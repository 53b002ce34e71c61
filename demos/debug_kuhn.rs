//! Watch the average strategy converge, 5 000 iterations at a time.

use kuhn_mccfr::cfr::{expected_value, MCCFRTrainer};
use kuhn_mccfr::games::kuhn::{Card, History, InfoSetKey};

fn main() {
    let mut trainer = MCCFRTrainer::with_seed(42);
    let root = History::new();
    let facing_bet: History = "b".parse().unwrap();

    for round in 1..=10 {
        // Each call resets strategy sums at its own midpoint
        if let Err(e) = trainer.train(5_000) {
            eprintln!("training failed: {}", e);
            return;
        }

        println!("After {} iterations:", round * 5_000);
        for card in Card::ALL {
            let root_strategy = trainer.average_strategy(&InfoSetKey::new(card, root));
            let vs_bet = trainer.average_strategy(&InfoSetKey::new(card, facing_bet));
            println!(
                "  {:<5}  P1 root: Pass={:.3} Bet={:.3}   P2 facing bet: Fold={:.3} Call={:.3}",
                card.name(),
                root_strategy[0],
                root_strategy[1],
                vs_bet[0],
                vs_bet[1]
            );
        }
        println!(
            "  exploitability {:.4}, exact EV {:.4}",
            trainer.exploitability(),
            expected_value(trainer.info_sets())
        );
        println!();
    }

    println!("Expected Nash Equilibrium (alpha = Jack bluff frequency):");
    println!("  P1 Jack:  Bet=alpha in [0, 1/3]");
    println!("  P1 Queen: Bet=0");
    println!("  P1 King:  Bet=3*alpha");
    println!("  P2 Jack vs bet:  Call=0");
    println!("  P2 Queen vs bet: Call=1/3");
    println!("  P2 King vs bet:  Call=1");
    println!("  P1 EV = -1/18 = {:.4}", -1.0 / 18.0);
}
