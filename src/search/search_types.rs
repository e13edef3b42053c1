//! Result and bookkeeping types shared by the search strategies.

/// A node's value together with the move that achieves it.
///
/// `best_move` is `None` at leaves and when a position has no legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove<M> {
    pub score: i32,
    pub best_move: Option<M>,
}

impl<M> ScoredMove<M> {
    #[inline]
    pub fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Counters collected while searching, reported in engine info lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, leaves included.
    pub nodes: u64,
    /// Static evaluations performed.
    pub evaluations: u64,
    /// Sibling loops cut short by alpha-beta.
    pub cutoffs: u64,
}

/// Whether `candidate` strictly improves on `best` for the side choosing.
/// Equal scores never replace the incumbent, so the first move wins ties.
#[inline]
pub(crate) fn improves(candidate: i32, best: i32, maximizing: bool) -> bool {
    if maximizing {
        candidate > best
    } else {
        candidate < best
    }
}
