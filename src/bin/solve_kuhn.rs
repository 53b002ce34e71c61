//! Kuhn poker MCCFR+ solver binary.
//!
//! Usage:
//!   cargo run --release --bin solve_kuhn -- [ITERATIONS]
//!
//! Trains for ITERATIONS (default 25000) and prints both players' average
//! strategies, the exploitability of the result and the training time.
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::env;
use std::error::Error;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use kuhn_mccfr::cfr::{MCCFRTrainer, TrainerConfig};
use kuhn_mccfr::games::kuhn::output::StrategyReport;

const DEFAULT_ITERATIONS: u64 = 25_000;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let iterations = match env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .map_err(|e| format!("invalid iteration count '{}': {}", arg, e))?,
        None => DEFAULT_ITERATIONS,
    };

    let mut trainer = MCCFRTrainer::try_new(TrainerConfig::default())?;

    let progress = ProgressBar::new(iterations);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}] {msg}")?
            .progress_chars("=>-"),
    );

    let start = Instant::now();
    let result = trainer.train_with_callback(iterations, |stats| {
        progress.set_position(stats.iterations);
        progress.set_message(format!("{} info sets", stats.info_sets));
    })?;
    progress.finish_and_clear();
    let elapsed = start.elapsed();

    let report = StrategyReport::from_info_sets(result.game_value, trainer.info_sets());
    println!("{}", report);
    println!("exploitability: {:.5}", trainer.exploitability());
    println!("trained {} iterations in {:.3}s", iterations, elapsed.as_secs_f64());

    Ok(())
}
