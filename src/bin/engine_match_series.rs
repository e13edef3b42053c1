//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --depth1 3 --depth2 2 --games 6 --verbose`
//!
//! Set `RUST_LOG=debug` to see per-search summaries.

use plum_search::chess_errors::ChessErrors;
use plum_search::engines::engine_strategy::StrategyEngine;
use plum_search::engines::engine_trait::Engine;
use plum_search::settings::{AiSettings, DEFAULT_DEPTH};
use plum_search::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use tracing_subscriber::EnvFilter;

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_arg<T: std::str::FromStr>(
    args: &[String],
    flag: &str,
    default: T,
) -> Result<T, ChessErrors> {
    match arg_value(args, flag) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ChessErrors::InvalidOption(flag.to_owned(), raw)),
    }
}

fn main() -> Result<(), ChessErrors> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let depth1 = parse_arg(&args, "--depth1", DEFAULT_DEPTH)?;
    let depth2 = parse_arg(&args, "--depth2", DEFAULT_DEPTH - 1)?;
    let games = parse_arg(&args, "--games", 10u16)?;
    let seed = parse_arg(&args, "--seed", 1234u64)?;

    let player1 =
        || Box::new(StrategyEngine::new(AiSettings::with_depth(depth1))) as Box<dyn Engine>;
    let player2 =
        || Box::new(StrategyEngine::new(AiSettings::with_depth(depth2))) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games,
            base_seed: seed,
            per_game: MatchConfig {
                max_plies: 200,
                opening_min_plies: 2,
                opening_max_plies: 6,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("player1 depth={depth1} player2 depth={depth2}");
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
