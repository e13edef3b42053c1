//! Engine abstraction used by the game session and the match harness.
//!
//! Defines common input parameters and output payloads so different
//! opponents can be selected at runtime behind a single trait interface.

use chess::ChessMove;

use crate::chess_errors::ChessErrors;
use crate::game_state::board_position::BoardPosition;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for one move.
    pub depth: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        Err(ChessErrors::InvalidOption(name.to_owned(), value.to_owned()))
    }

    /// Pick a move for the side to move. The position is borrowed for
    /// make/unmake search and must be unchanged when this returns.
    fn choose_move(
        &mut self,
        position: &mut BoardPosition,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors>;
}
