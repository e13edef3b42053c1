//! Minimax with alpha-beta pruning.
//!
//! Explores the same tree as [`crate::search::minimax`] and scores leaves the
//! same way, but stops looking at siblings once the window closes. The root
//! score always equals the minimax root score; the chosen move can differ
//! only among moves of equal value.

use crate::game_state::position::Position;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, SCORE_INFINITY};
use crate::search::search_types::{improves, ScoredMove, SearchStats};

/// Alpha-beta with the material evaluator.
pub fn alphabeta<P: Position>(
    position: &mut P,
    depth: i32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> ScoredMove<P::Move> {
    let mut stats = SearchStats::default();
    alphabeta_with_scorer(
        position,
        &MaterialScorer,
        depth,
        alpha,
        beta,
        maximizing,
        &mut stats,
    )
}

/// Search `depth` plies from a full window and return the best move.
pub fn pick_alphabeta<P: Position>(position: &mut P, depth: i32) -> Option<P::Move> {
    let maximizing = position.side_to_move().is_maximizing();
    alphabeta(position, depth, -SCORE_INFINITY, SCORE_INFINITY, maximizing).best_move
}

#[allow(clippy::too_many_arguments)]
pub fn alphabeta_with_scorer<P, S>(
    position: &mut P,
    scorer: &S,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
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
        let child =
            alphabeta_with_scorer(position, scorer, depth - 1, alpha, beta, !maximizing, stats);
        position.pop();

        if improves(child.score, best.score, maximizing) {
            best = ScoredMove {
                score: child.score,
                best_move: Some(mv),
            };
        }

        if maximizing {
            alpha = alpha.max(best.score);
        } else {
            beta = beta.min(best.score);
        }
        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}
