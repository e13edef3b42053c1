//! Crate root module declarations for the Plum Search opponent.
//!
//! This file exposes the subsystems of the chess opponent: the position
//! boundary and its `chess`-crate implementation, the evaluator and the four
//! search strategies, engines wrapping them, and the game-session and match
//! utilities that drive engines turn by turn.

pub mod chess_errors;
pub mod settings;

pub mod game_state {
    pub mod board_position;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
    pub mod undo_state;
}

pub mod search {
    pub mod alphabeta;
    pub mod board_scoring;
    pub mod greedy;
    pub mod minimax;
    pub mod random;
    pub mod search_types;
    pub mod strategy;
    #[cfg(test)]
    pub(crate) mod test_positions;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_strategy;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod game_session;
    pub mod long_algebraic;
}

pub use search::strategy::select_move;
