//! Canonical chess-rule constants.
//!
//! Literals for the standard start position and the automatic draw rules that
//! end a game without either side claiming them.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmoves without a capture or pawn move after which the game is drawn
/// automatically (seventy-five move rule).
pub const SEVENTY_FIVE_MOVE_HALFMOVES: u16 = 150;

/// Occurrences of the same position that end the game automatically.
pub const FIVEFOLD_REPETITION: usize = 5;

/// Bitmask of the dark squares (a1 is dark).
pub const DARK_SQUARES: u64 = 0xAA55_AA55_AA55_AA55;
