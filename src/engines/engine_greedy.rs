use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board_position::BoardPosition;
use crate::game_state::position::Position;
use crate::search::board_scoring::MaterialScorer;
use crate::search::greedy::greedy_search;
use crate::search::search_types::SearchStats;

/// One-ply material engine. Deterministic: ties go to the first legal move.
#[derive(Debug, Default)]
pub struct GreedyEngine {
    scorer: MaterialScorer,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "PlumSearch Greedy"
    }

    fn choose_move(
        &mut self,
        position: &mut BoardPosition,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            position.legal_moves().len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string greedy_engine requested_depth {depth}"));
        }

        let mut stats = SearchStats::default();
        let result = greedy_search(position, &self.scorer, &mut stats);
        if result.best_move.is_some() {
            out.info_lines.push(format!(
                "info string greedy_engine material_score {}",
                result.score
            ));
        }
        out.best_move = result.best_move;
        Ok(out)
    }
}
