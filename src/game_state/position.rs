//! The boundary between search and the rules engine.
//!
//! Search explores the game tree depth-first on one shared, mutable position:
//! `push` a move, recurse, `pop` it. Implementations must make every
//! `push`/`pop` pair an exact inverse and must keep `legal_moves` order stable
//! for a given position, because tie-breaks depend on it.

use std::fmt::Debug;

use crate::game_state::chess_types::{Color, ColoredPiece, Square};

pub trait Position {
    type Move: Copy + PartialEq + Debug;

    fn side_to_move(&self) -> Color;

    /// Legal moves in a deterministic order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move taken from `legal_moves`.
    fn push(&mut self, mv: Self::Move);

    /// Undo the most recent `push`, returning the move it applied.
    fn pop(&mut self) -> Option<Self::Move>;

    /// Checkmate, stalemate or any other game-over condition.
    fn is_terminal(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    fn piece_at(&self, square: Square) -> Option<ColoredPiece>;
}
