use chess::{Board, ChessMove};

/// Single undo record for `BoardPosition::push` / `BoardPosition::pop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub prev_board: Board,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
