//! One-ply lookahead: play whichever move leaves the best material.

use crate::game_state::position::Position;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, SCORE_INFINITY};
use crate::search::search_types::{improves, ScoredMove, SearchStats};

pub fn pick_greedy<P: Position>(position: &mut P) -> Option<P::Move> {
    let mut stats = SearchStats::default();
    greedy_search(position, &MaterialScorer, &mut stats).best_move
}

/// Apply, score and undo every legal move. White keeps the strictly highest
/// score, black the strictly lowest; ties go to the earliest move.
pub fn greedy_search<P, S>(
    position: &mut P,
    scorer: &S,
    stats: &mut SearchStats,
) -> ScoredMove<P::Move>
where
    P: Position,
    S: BoardScorer,
{
    let maximizing = position.side_to_move().is_maximizing();
    let mut best = ScoredMove {
        score: if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        },
        best_move: None,
    };
    stats.nodes += 1;

    for mv in position.legal_moves() {
        position.push(mv);
        let score = scorer.score(position);
        position.pop();
        stats.nodes += 1;
        stats.evaluations += 1;

        if improves(score, best.score, maximizing) {
            best = ScoredMove {
                score,
                best_move: Some(mv),
            };
        }
    }

    best
}
