//! Print the opponent's choice for one position.
//!
//! `cargo run --release --bin best_move -- 3 "6k1/5ppp/8/8/8/7r/5PPP/R5K1 w - - 0 1"`
//!
//! The first argument is the search depth; the FEN defaults to the start
//! position. Prints `(none)` when the side to move has no legal moves.

use plum_search::chess_errors::ChessErrors;
use plum_search::game_state::board_position::BoardPosition;
use plum_search::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_search::search::strategy::SearchStrategy;
use plum_search::settings::DEFAULT_DEPTH;
use plum_search::utils::long_algebraic::move_to_long_algebraic;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ChessErrors> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let depth = match args.first() {
        None => DEFAULT_DEPTH,
        Some(raw) => raw
            .parse::<i32>()
            .map_err(|_| ChessErrors::InvalidOption("depth".to_owned(), raw.clone()))?,
    };
    let fen = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        STARTING_POSITION_FEN.to_owned()
    };

    let mut position = BoardPosition::from_fen(&fen)?;
    let strategy = SearchStrategy::from_depth(depth);
    let chosen = plum_search::select_move(&mut position, depth);

    match chosen {
        Some(mv) => println!("{} ({})", move_to_long_algebraic(mv), strategy.name()),
        None => println!("(none)"),
    }
    Ok(())
}
