//! Large-sample convergence and reproducibility checks.

use kuhn_mccfr::cfr::{expected_value, MCCFRTrainer, TrainerConfig};
use kuhn_mccfr::games::kuhn::output::StrategyReport;
use kuhn_mccfr::games::kuhn::{Card, History, InfoSetKey, KuhnAction};

const ITERATIONS: u64 = 25_000;

fn bet_frequency(trainer: &MCCFRTrainer, card: Card, history: &str) -> f64 {
    let history: History = history.parse().unwrap();
    trainer.average_strategy(&InfoSetKey::new(card, history))[KuhnAction::Bet.index()]
}

#[test]
fn test_kuhn_convergence() {
    let mut trainer = MCCFRTrainer::with_seed(42);
    let result = trainer.train(ITERATIONS).unwrap();

    let jack = bet_frequency(&trainer, Card::JACK, "");
    let queen = bet_frequency(&trainer, Card::QUEEN, "");
    let king = bet_frequency(&trainer, Card::KING, "");
    println!("P1 root bet: Jack={:.3} Queen={:.3} King={:.3}", jack, queen, king);

    // One-parameter equilibrium family: Jack bluffs at alpha <= 1/3, Queen
    // checks, King bets at 3 * alpha
    assert!(jack < 0.5, "Jack bet frequency {} should be below 1/2", jack);
    assert!(king > queen, "King ({}) should bet more than Queen ({})", king, queen);
    assert!(king > jack, "King ({}) should bet more than Jack ({})", king, jack);
    assert!(queen < 0.1, "Queen bet frequency {} should be near 0", queen);

    // Player 2 facing a bet: fold Jack, call King
    assert!(bet_frequency(&trainer, Card::JACK, "b") < 0.05);
    assert!(bet_frequency(&trainer, Card::KING, "b") > 0.95);

    let exploitability = trainer.exploitability();
    println!("exploitability {:.4}", exploitability);
    assert!(exploitability < 0.05, "exploitability {} too high", exploitability);

    // Equilibrium value is -1/18 for player 0
    assert!(
        (result.game_value + 1.0 / 18.0).abs() < 0.04,
        "sampled game value {}",
        result.game_value
    );
    assert!((expected_value(trainer.info_sets()) + 1.0 / 18.0).abs() < 0.03);
}

#[test]
fn test_seeded_runs_are_identical() {
    let run = |seed: u64| {
        let config = TrainerConfig::default().with_seed(seed);
        let mut trainer = MCCFRTrainer::try_new(config).unwrap();
        let result = trainer.train(3_000).unwrap();
        (result.game_value, trainer.into_info_sets())
    };

    let (value_a, sets_a) = run(1234);
    let (value_b, sets_b) = run(1234);
    assert_eq!(value_a.to_bits(), value_b.to_bits());
    assert_eq!(sets_a, sets_b);
    for (key, node) in sets_a.iter() {
        let other = sets_b.get(key).unwrap();
        for (x, y) in node.strategy_sum().iter().zip(other.strategy_sum()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    let (_, sets_c) = run(4321);
    assert_ne!(sets_a, sets_c);
}

#[test]
fn test_report_covers_every_info_set() {
    let mut trainer = MCCFRTrainer::with_seed(7);
    let result = trainer.train(5_000).unwrap();
    let report = StrategyReport::from_info_sets(result.game_value, trainer.info_sets());

    let first: Vec<&str> = report.first_player.iter().map(|e| e.info_key.as_str()).collect();
    let second: Vec<&str> = report.second_player.iter().map(|e| e.info_key.as_str()).collect();
    assert_eq!(first, vec!["0 ", "0 pb", "1 ", "1 pb", "2 ", "2 pb"]);
    assert_eq!(second, vec!["0 b", "0 p", "1 b", "1 p", "2 b", "2 p"]);

    for entry in report.first_player.iter().chain(report.second_player.iter()) {
        assert!((entry.pass + entry.bet - 1.0).abs() < 1e-9);
    }
}

fn root_strategy_mass(trainer: &MCCFRTrainer) -> f64 {
    Card::ALL
        .iter()
        .filter_map(|&card| trainer.info_sets().get(&InfoSetKey::new(card, History::new())))
        .map(|node| node.strategy_sum().iter().sum::<f64>())
        .sum()
}

#[test]
fn test_midpoint_reset_clears_early_strategy_mass() {
    let mut trainer = MCCFRTrainer::with_seed(99);
    trainer.train(2_000).unwrap();

    // Sums are cleared before iteration 1000, so iterations 1000..=2000 remain
    let root_mass = root_strategy_mass(&trainer);
    assert!((root_mass - 1_001.0).abs() < 1e-6, "root mass {}", root_mass);
}

#[test]
fn test_midpoint_reset_can_be_disabled() {
    let config = TrainerConfig::default()
        .with_seed(99)
        .with_midpoint_reset(false);
    let mut trainer = MCCFRTrainer::try_new(config).unwrap();
    trainer.train(2_000).unwrap();

    // Without the reset, the root strategy mass covers every player-0 visit
    let root_mass = root_strategy_mass(&trainer);
    assert!((root_mass - 2_000.0).abs() < 1e-6, "root mass {}", root_mass);
}
