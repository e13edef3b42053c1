//! Exhaustive fixed-depth minimax over a shared mutable position.
//!
//! Leaves are scored with the static evaluator only. A checkmated leaf gets
//! its material score like any other leaf, so the search does not prefer
//! delivering mate over an equal-material quiet line.

use crate::game_state::position::Position;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, SCORE_INFINITY};
use crate::search::search_types::{improves, ScoredMove, SearchStats};

/// Minimax with the material evaluator.
pub fn minimax<P: Position>(position: &mut P, depth: i32, maximizing: bool) -> ScoredMove<P::Move> {
    let mut stats = SearchStats::default();
    minimax_with_scorer(position, &MaterialScorer, depth, maximizing, &mut stats)
}

/// Search `depth` plies and return the best move for the side to move.
pub fn pick_minimax<P: Position>(position: &mut P, depth: i32) -> Option<P::Move> {
    let maximizing = position.side_to_move().is_maximizing();
    minimax(position, depth, maximizing).best_move
}

pub fn minimax_with_scorer<P, S>(
    position: &mut P,
    scorer: &S,
    depth: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> ScoredMove<P::Move>
where
    P: Position,
    S: BoardScorer,
{
    stats.nodes += 1;

    if depth <= 0 || position.is_terminal() {
        stats.evaluations += 1;
        return ScoredMove::leaf(scorer.score(position));
    }

    let mut best = ScoredMove {
        score: if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        },
        best_move: None,
    };

    for mv in position.legal_moves() {
        position.push(mv);
        let child = minimax_with_scorer(position, scorer, depth - 1, !maximizing, stats);
        position.pop();

        if improves(child.score, best.score, maximizing) {
            best = ScoredMove {
                score: child.score,
                best_move: Some(mv),
            };
        }
    }

    best
}
