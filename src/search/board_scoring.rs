//! Static position evaluation.
//!
//! Search is parameterized by a `BoardScorer` so alternate heuristics can be
//! swapped without touching the strategies. Scores are always from the light
//! (white) side's point of view: positive favors white, which is the
//! maximizing side in every strategy.

use crate::game_state::chess_types::{Color, BOARD_SQUARES};
use crate::game_state::position::Position;
use crate::settings::piece_value;

/// Bound used in place of infinity for alpha-beta windows and for the
/// initial best score of an interior node. Larger than any material total.
pub const SCORE_INFINITY: i32 = 1_000_000;

pub trait BoardScorer: Send + Sync {
    /// Score from white's perspective. Must not mutate the position.
    fn score<P: Position>(&self, position: &P) -> i32;
}

/// Plain material count using the weights in `settings`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score<P: Position>(&self, position: &P) -> i32 {
        let mut score = 0i32;
        for square in 0..BOARD_SQUARES {
            if let Some(piece) = position.piece_at(square) {
                let value = piece_value(piece.kind);
                match piece.color {
                    Color::Light => score += value,
                    Color::Dark => score -= value,
                }
            }
        }
        score
    }
}

/// Material balance of `position`, white minus black.
#[inline]
pub fn evaluate<P: Position>(position: &P) -> i32 {
    MaterialScorer.score(position)
}

#[cfg(test)]
mod tests {
    use super::{evaluate, BoardScorer, MaterialScorer};
    use crate::game_state::board_position::BoardPosition;
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;
    use crate::search::test_positions::{leaf, ScriptedPosition};

    /// Swap every piece's colour: mirror ranks, swap case, flip the side to
    /// move. Castling and en passant fields must be `-` in callers.
    fn color_swapped_fen(fen: &str) -> String {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let placement = fields[0]
            .split('/')
            .rev()
            .map(|rank| {
                rank.chars()
                    .map(|c| {
                        if c.is_ascii_uppercase() {
                            c.to_ascii_lowercase()
                        } else {
                            c.to_ascii_uppercase()
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/");
        let side = if fields[1] == "w" { "b" } else { "w" };
        format!("{placement} {side} - - 0 1")
    }

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(evaluate(&BoardPosition::start()), 0);
    }

    #[test]
    fn empty_board_scores_zero() {
        let empty = ScriptedPosition::new(Color::Light, leaf(0));
        assert!((0..64).all(|sq| empty.piece_at(sq).is_none()));
        assert_eq!(evaluate(&empty), 0);
    }

    #[test]
    fn counts_material_with_classical_weights() {
        // White: Q R B N + 3 pawns; black: R + 5 pawns.
        let position = BoardPosition::from_fen("4r1k1/ppppp3/8/8/8/8/5PPP/1NB1QRK1 w - - 0 1")
            .expect("FEN should parse");
        let white = 9 + 5 + 3 + 3 + 3;
        let black = 5 + 5;
        assert_eq!(evaluate(&position), white - black);
        assert_eq!(MaterialScorer.score(&position), white - black);
    }

    #[test]
    fn color_swap_negates_the_score() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
            "4r1k1/ppppp3/8/8/8/8/5PPP/1NB1QRK1 w - - 0 1",
            "6k1/5ppp/8/8/8/7r/5PPP/R5K1 w - - 0 1",
            "3qk3/8/8/8/8/8/8/2NBK3 b - - 0 1",
        ];

        for fen in fens {
            let original = BoardPosition::from_fen(fen).expect("FEN should parse");
            let swapped_fen = color_swapped_fen(fen);
            let swapped = BoardPosition::from_fen(&swapped_fen).expect("swapped FEN should parse");
            assert_eq!(
                evaluate(&swapped),
                -evaluate(&original),
                "{fen} vs {swapped_fen}"
            );
        }
    }

    #[test]
    fn terminal_positions_still_get_a_material_score() {
        let mate = BoardPosition::from_fen("R5k1/5ppp/8/8/8/7r/5PPP/6K1 b - - 1 1")
            .expect("FEN should parse");
        assert!(mate.is_checkmate());
        assert_eq!(evaluate(&mate), 0);
    }
}
