//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing and the lowest difficulty.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board_position::BoardPosition;
use crate::game_state::position::Position;
use crate::search::random::pick_random_with_rng;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumSearch Random"
    }

    fn choose_move(
        &mut self,
        position: &mut BoardPosition,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            position.legal_moves().len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        out.best_move = pick_random_with_rng(position, &mut self.rng);
        Ok(out)
    }
}
