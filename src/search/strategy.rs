//! Difficulty ramp: map a search depth to one of four strategy families.
//!
//! | depth  | strategy                   |
//! |--------|----------------------------|
//! | `<= 0` | uniform random legal move  |
//! | `1`    | greedy one-ply material    |
//! | `2`    | exhaustive minimax         |
//! | `>= 3` | alpha-beta at that depth   |
//!
//! The mapping depends on the depth value alone, never on timing.

use rand::Rng;
use tracing::{debug, trace};

use crate::game_state::position::Position;
use crate::search::alphabeta::alphabeta_with_scorer;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, SCORE_INFINITY};
use crate::search::greedy::greedy_search;
use crate::search::minimax::minimax_with_scorer;
use crate::search::random::pick_random_with_rng;
use crate::search::search_types::SearchStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    Random,
    Greedy,
    Minimax { depth: i32 },
    AlphaBeta { depth: i32 },
}

impl SearchStrategy {
    pub fn from_depth(depth: i32) -> Self {
        match depth {
            d if d <= 0 => SearchStrategy::Random,
            1 => SearchStrategy::Greedy,
            2 => SearchStrategy::Minimax { depth: 2 },
            d => SearchStrategy::AlphaBeta { depth: d },
        }
    }

    /// Plies looked ahead. Random looks at none.
    pub const fn depth(self) -> i32 {
        match self {
            SearchStrategy::Random => 0,
            SearchStrategy::Greedy => 1,
            SearchStrategy::Minimax { depth } | SearchStrategy::AlphaBeta { depth } => depth,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SearchStrategy::Random => "random",
            SearchStrategy::Greedy => "greedy",
            SearchStrategy::Minimax { .. } => "minimax",
            SearchStrategy::AlphaBeta { .. } => "alphabeta",
        }
    }

    /// Run this strategy. The position is returned to its original state.
    pub fn search<P, S, R>(self, position: &mut P, scorer: &S, rng: &mut R) -> SearchReport<P::Move>
    where
        P: Position,
        S: BoardScorer,
        R: Rng + ?Sized,
    {
        let mut stats = SearchStats::default();
        let maximizing = position.side_to_move().is_maximizing();

        let (best_move, score) = match self {
            SearchStrategy::Random => (pick_random_with_rng(position, rng), None),
            SearchStrategy::Greedy => {
                let result = greedy_search(position, scorer, &mut stats);
                (result.best_move, Some(result.score))
            }
            SearchStrategy::Minimax { depth } => {
                let result = minimax_with_scorer(position, scorer, depth, maximizing, &mut stats);
                (result.best_move, Some(result.score))
            }
            SearchStrategy::AlphaBeta { depth } => {
                let result = alphabeta_with_scorer(
                    position,
                    scorer,
                    depth,
                    -SCORE_INFINITY,
                    SCORE_INFINITY,
                    maximizing,
                    &mut stats,
                );
                (result.best_move, Some(result.score))
            }
        };

        // A strategy that found no move has no meaningful score.
        let score = best_move.and(score);
        debug!(
            strategy = self.name(),
            depth = self.depth(),
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            score = ?score,
            found_move = best_move.is_some(),
            "search finished"
        );

        SearchReport {
            strategy: self,
            best_move,
            score,
            stats,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport<M> {
    pub strategy: SearchStrategy,
    pub best_move: Option<M>,
    /// Backed-up evaluation of the chosen move; `None` for random play.
    pub score: Option<i32>,
    pub stats: SearchStats,
}

/// Choose the opponent's move for `position` at the given depth.
///
/// Returns `None` only when the side to move has no legal moves.
pub fn select_move<P: Position>(position: &mut P, depth: i32) -> Option<P::Move> {
    let strategy = SearchStrategy::from_depth(depth);
    trace!(depth, strategy = strategy.name(), "resolved search strategy");
    strategy
        .search(position, &MaterialScorer, &mut rand::rng())
        .best_move
}
