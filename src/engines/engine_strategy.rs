//! The application's opponent: depth setting in, strategy family out.
//!
//! Wraps [`SearchStrategy`] behind the `Engine` trait. The configured depth
//! comes from `AiSettings` (clamped to the menu range); a `GoParams` depth
//! overrides it for a single move and is used as given, so depth 0 still
//! reaches the random strategy.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board_position::BoardPosition;
use crate::game_state::position::Position;
use crate::search::board_scoring::MaterialScorer;
use crate::search::strategy::SearchStrategy;
use crate::settings::AiSettings;

pub struct StrategyEngine {
    settings: AiSettings,
    scorer: MaterialScorer,
    rng: StdRng,
}

impl StrategyEngine {
    pub fn new(settings: AiSettings) -> Self {
        Self {
            settings,
            scorer: MaterialScorer,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_depth(depth: i32) -> Self {
        Self::new(AiSettings::with_depth(depth))
    }

    /// Deterministic random choices, for reproducible matches.
    pub fn seeded(settings: AiSettings, seed: u64) -> Self {
        Self {
            settings,
            scorer: MaterialScorer,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn settings(&self) -> &AiSettings {
        &self.settings
    }

    pub fn strategy_for(&self, params: &GoParams) -> SearchStrategy {
        SearchStrategy::from_depth(params.depth.unwrap_or(self.settings.depth()))
    }
}

impl Default for StrategyEngine {
    fn default() -> Self {
        Self::new(AiSettings::default())
    }
}

impl Engine for StrategyEngine {
    fn name(&self) -> &str {
        "PlumSearch Strategy"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        self.settings.set_option(name, value)
    }

    fn choose_move(
        &mut self,
        position: &mut BoardPosition,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let strategy = self.strategy_for(params);
        let started = Instant::now();
        let report = strategy.search(position, &self.scorer, &mut self.rng);
        let elapsed_ms = started.elapsed().as_millis();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string strategy_engine configured_depth {}",
            self.settings.depth()
        ));
        out.info_lines.push(format!(
            "info string strategy_engine strategy {} depth {}",
            strategy.name(),
            strategy.depth()
        ));
        match report.score {
            Some(score) => out.info_lines.push(format!(
                "info depth {} score material {} nodes {} cutoffs {} time {}",
                strategy.depth(),
                score,
                report.stats.nodes,
                report.stats.cutoffs,
                elapsed_ms
            )),
            None => out
                .info_lines
                .push(format!("info string strategy_engine time {elapsed_ms}")),
        }

        if report.best_move.is_none() && !position.legal_moves().is_empty() {
            warn!(
                strategy = strategy.name(),
                fen = %position.fen(),
                "search returned no move although legal moves exist"
            );
        }

        out.best_move = report.best_move;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::StrategyEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::board_position::BoardPosition;
    use crate::game_state::position::Position;
    use crate::search::strategy::SearchStrategy;
    use crate::settings::{AiSettings, DEFAULT_DEPTH, MAX_DEPTH};

    #[test]
    fn uses_configured_depth_by_default() {
        let engine = StrategyEngine::default();
        assert_eq!(engine.settings().depth(), DEFAULT_DEPTH);
        assert_eq!(
            engine.strategy_for(&GoParams::default()),
            SearchStrategy::AlphaBeta { depth: 3 }
        );
    }

    #[test]
    fn go_depth_overrides_configuration() {
        let mut position = BoardPosition::start();
        let mut engine = StrategyEngine::seeded(AiSettings::with_depth(4), 1);
        let params = GoParams { depth: Some(1) };

        let out = engine
            .choose_move(&mut position, &params)
            .expect("engine should choose a move");
        let joined = out.info_lines.join("\n");
        assert!(joined.contains("strategy greedy depth 1"), "{joined}");
        assert!(joined.contains("configured_depth 4"), "{joined}");
        assert!(position.legal_moves().contains(&out.best_move.unwrap()));

        let out = engine
            .choose_move(&mut position, &GoParams { depth: Some(0) })
            .expect("engine should choose a move");
        assert!(out.info_lines.join("\n").contains("strategy random"));
    }

    #[test]
    fn set_option_updates_depth_with_clamping() {
        let mut engine = StrategyEngine::default();
        engine.set_option("Depth", "99").expect("depth should parse");
        assert_eq!(engine.settings().depth(), MAX_DEPTH);
        assert!(engine.set_option("Depth", "x").is_err());
        assert!(engine.set_option("OwnBook", "true").is_err());
    }

    #[test]
    fn leaves_the_position_untouched() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq - 0 3";
        let mut position = BoardPosition::from_fen(fen).expect("FEN should parse");
        let before = position.clone();
        let out = StrategyEngine::with_depth(3)
            .choose_move(&mut position, &GoParams::default())
            .expect("engine should choose a move");
        assert!(out.best_move.is_some());
        assert_eq!(position, before);
        assert!(out.info_lines.iter().any(|l| l.starts_with("info depth 3")));
    }
}
