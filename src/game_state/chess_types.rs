//! Board-library-independent chess vocabulary.
//!
//! Search code only ever talks about colours, piece kinds and square indices
//! through these types, so the evaluator and the four strategies stay
//! independent of whichever rules library backs the concrete position.

/// Side to move. `Light` (white) moves first and is the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Whether this side tries to push the evaluation up.
    #[inline]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Color::Light)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Occupant of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredPiece {
    pub kind: PieceKind,
    pub color: Color,
}

impl ColoredPiece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Board square index (`0..=63`, a1 = 0, h8 = 63).
pub type Square = u8;

pub const BOARD_SQUARES: u8 = 64;
