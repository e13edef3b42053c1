//! Opponent configuration.
//!
//! Depth bounds, the artificial think delay and the piece weights used by the
//! material evaluator. `AiSettings` is the runtime view of these values and
//! accepts string-keyed options so front ends can forward user choices
//! without knowing the field layout.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;

/// Shallowest depth a player can pick from a menu.
pub const MIN_DEPTH: i32 = 1;
/// Deepest configurable search. Unpruned minimax is only used at depth 2, but
/// alpha-beta still grows exponentially, so this bound is the only limit on
/// think time.
pub const MAX_DEPTH: i32 = 6;
pub const DEFAULT_DEPTH: i32 = 3;

/// Delay in milliseconds between the engine's turn starting and its move
/// being played.
pub const AI_DELAY_MS: u64 = 400;

/// Material weight of a piece kind. Kings are never captured by legal play.
#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiSettings {
    depth: i32,
    pub think_delay_ms: u64,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            think_delay_ms: AI_DELAY_MS,
        }
    }
}

impl AiSettings {
    pub fn with_depth(depth: i32) -> Self {
        Self {
            depth: clamp_depth(depth),
            ..Self::default()
        }
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: i32) {
        self.depth = clamp_depth(depth);
    }

    /// Apply a named option. Names are matched case-insensitively.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        let invalid = || ChessErrors::InvalidOption(name.to_owned(), value.to_owned());

        if name.eq_ignore_ascii_case("Depth") {
            let parsed = value.trim().parse::<i32>().map_err(|_| invalid())?;
            self.set_depth(parsed);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("ThinkDelay") {
            self.think_delay_ms = value.trim().parse::<u64>().map_err(|_| invalid())?;
            return Ok(());
        }

        Err(invalid())
    }
}

#[inline]
pub fn clamp_depth(depth: i32) -> i32 {
    depth.clamp(MIN_DEPTH, MAX_DEPTH)
}
