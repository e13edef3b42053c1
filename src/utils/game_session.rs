//! Headless turn sequencer for a human-versus-engine game.
//!
//! Owns the position for the whole game and lends it to the engine only for
//! the duration of one move choice. The engine reply is scheduled after an
//! artificial think delay and played when the front end polls past the
//! deadline, so a UI can show a "thinking" state without any threads.
//! Every applied move is reported with the `MoveEvent`s a front end needs to
//! pick a sound or highlight.

use std::time::{Duration, Instant};

use chess::ChessMove;
use tracing::{debug, info};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_strategy::StrategyEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::board_position::{BoardPosition, Termination};
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::settings::AiSettings;
use crate::utils::long_algebraic::long_algebraic_to_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    Draw(Termination),
}

impl GameStatus {
    pub fn of(position: &BoardPosition) -> Self {
        match position.termination() {
            None => GameStatus::InProgress,
            Some(Termination::Checkmate) => GameStatus::Checkmate {
                winner: position.side_to_move().opposite(),
            },
            Some(Termination::Stalemate) => GameStatus::Stalemate,
            Some(other) => GameStatus::Draw(other),
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// End-of-game banner, or `None` while the game is running.
    pub fn message(self) -> Option<String> {
        let text = match self {
            GameStatus::InProgress => return None,
            GameStatus::Checkmate { winner } => format!("Checkmate! {} wins.", winner.name()),
            GameStatus::Stalemate => "Stalemate!".to_owned(),
            GameStatus::Draw(Termination::InsufficientMaterial) => {
                "Draw by insufficient material.".to_owned()
            }
            GameStatus::Draw(Termination::SeventyFiveMoves) => {
                "Draw by the seventy-five move rule.".to_owned()
            }
            GameStatus::Draw(Termination::FivefoldRepetition) => {
                "Draw by fivefold repetition.".to_owned()
            }
            GameStatus::Draw(_) => "Draw.".to_owned(),
        };
        Some(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEvent {
    Move,
    Capture,
    Check,
    GameEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: ChessMove,
    pub by: Color,
    pub events: Vec<MoveEvent>,
}

pub struct GameSession<E: Engine = StrategyEngine> {
    position: BoardPosition,
    player_color: Color,
    // The engine owns the search depth; the session only paces its replies.
    think_delay_ms: u64,
    engine: E,
    ai_due_at: Option<Instant>,
}

impl GameSession<StrategyEngine> {
    pub fn new(settings: AiSettings, player_color: Color) -> Self {
        Self::with_engine(
            BoardPosition::start(),
            player_color,
            settings.think_delay_ms,
            StrategyEngine::new(settings),
        )
    }
}

impl<E: Engine> GameSession<E> {
    pub fn with_engine(
        position: BoardPosition,
        player_color: Color,
        think_delay_ms: u64,
        engine: E,
    ) -> Self {
        Self {
            position,
            player_color,
            think_delay_ms,
            engine,
            ai_due_at: None,
        }
    }

    #[inline]
    pub fn position(&self) -> &BoardPosition {
        &self.position
    }

    #[inline]
    pub fn player_color(&self) -> Color {
        self.player_color
    }

    #[inline]
    pub fn ai_color(&self) -> Color {
        self.player_color.opposite()
    }

    /// The opponent, for reading back its configuration.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[inline]
    pub fn think_delay_ms(&self) -> u64 {
        self.think_delay_ms
    }

    /// `ThinkDelay` paces the session; every other option goes to the engine.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        if name.eq_ignore_ascii_case("ThinkDelay") {
            self.think_delay_ms = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ChessErrors::InvalidOption(name.to_owned(), value.to_owned()))?;
            return Ok(());
        }
        self.engine.set_option(name, value)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.position)
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.position.is_terminal() && self.position.side_to_move() == self.ai_color()
    }

    /// The engine's move is scheduled but not yet played.
    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.ai_due_at.is_some()
    }

    /// Apply the human's move given in long algebraic notation.
    pub fn play_player_move(&mut self, text: &str) -> Result<PlayedMove, ChessErrors> {
        if self.position.is_terminal() {
            return Err(ChessErrors::GameAlreadyOver);
        }
        if self.position.side_to_move() != self.player_color {
            return Err(ChessErrors::NotPlayersTurn);
        }

        let mv = long_algebraic_to_move(text, &self.position)?;
        Ok(self.apply(mv))
    }

    /// Advance the engine's turn. Schedules the reply on the first call of a
    /// turn and plays it once `now` reaches the think deadline.
    pub fn poll_ai(&mut self, now: Instant) -> Result<Option<PlayedMove>, ChessErrors> {
        if !self.is_ai_turn() {
            self.ai_due_at = None;
            return Ok(None);
        }

        let due = *self
            .ai_due_at
            .get_or_insert_with(|| now + Duration::from_millis(self.think_delay_ms));
        if now < due {
            return Ok(None);
        }
        self.ai_due_at = None;

        let out = self
            .engine
            .choose_move(&mut self.position, &GoParams::default())?;
        for line in &out.info_lines {
            debug!(engine = self.engine.name(), "{line}");
        }

        let Some(mv) = out.best_move else {
            return Ok(None);
        };
        if !self.position.is_legal(mv) {
            return Err(ChessErrors::EngineReturnedIllegalMove(mv.to_string()));
        }
        Ok(Some(self.apply(mv)))
    }

    /// Start over from the initial position, keeping the engine's options.
    pub fn restart(&mut self) {
        self.position = BoardPosition::start();
        self.ai_due_at = None;
        self.engine.new_game();
    }

    fn apply(&mut self, mv: ChessMove) -> PlayedMove {
        let by = self.position.side_to_move();
        let mut events = vec![if self.position.is_capture(mv) {
            MoveEvent::Capture
        } else {
            MoveEvent::Move
        }];

        self.position.push(mv);

        if self.position.is_check() {
            events.push(MoveEvent::Check);
        }
        let status = self.status();
        if status.is_over() {
            events.push(MoveEvent::GameEnd);
            if let Some(message) = status.message() {
                info!(fen = %self.position.fen(), "{message}");
            }
        }

        PlayedMove { mv, by, events }
    }
}
