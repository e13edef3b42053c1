//! Minimal head-to-head engine match harness for local testing.
//!
//! This module runs two `Engine` implementations against each other without
//! any front end, with an optional seeded random opening prefix, and can
//! aggregate a series of such games into win/draw statistics.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::board_position::{BoardPosition, Termination};
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::search::random::pick_random_with_rng;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawInsufficientMaterial,
    DrawSeventyFiveMoves,
    DrawRepetition,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn from_termination(termination: Termination, side_to_move: Color) -> Self {
        match termination {
            Termination::Checkmate => match side_to_move {
                Color::Light => MatchOutcome::BlackWinCheckmate,
                Color::Dark => MatchOutcome::WhiteWinCheckmate,
            },
            Termination::Stalemate => MatchOutcome::DrawStalemate,
            Termination::InsufficientMaterial => MatchOutcome::DrawInsufficientMaterial,
            Termination::SeventyFiveMoves => MatchOutcome::DrawSeventyFiveMoves,
            Termination::FivefoldRepetition => MatchOutcome::DrawRepetition,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::WhiteWinCheckmate => Some(Color::Light),
            MatchOutcome::BlackWinCheckmate => Some(Color::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    Draw(MatchOutcome),
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 2,
            opening_max_plies: 8,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_position: BoardPosition,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the start position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, ChessErrors> {
    play_match_internal(
        BoardPosition::start(),
        engine_white,
        engine_black,
        seed,
        config,
        true,
    )
}

/// Play a single match from a caller-provided position, without a random
/// opening. Intended for curated positions such as endgame conversions.
pub fn play_engine_match_from_position(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    start: BoardPosition,
    config: &MatchConfig,
) -> Result<MatchResult, ChessErrors> {
    play_match_internal(start, engine_white, engine_black, 0, config, false)
}

fn play_match_internal(
    mut position: BoardPosition,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
    apply_random_opening: bool,
) -> Result<MatchResult, ChessErrors> {
    engine_white.new_game();
    engine_black.new_game();

    let opening_moves_lan = if apply_random_opening {
        apply_seeded_random_opening(
            &mut position,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        )
    } else {
        Vec::new()
    };

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_position: BoardPosition::start(),
        opening_moves_lan,
        played_moves_lan: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if let Some(termination) = position.termination() {
            result.outcome = MatchOutcome::from_termination(termination, position.side_to_move());
            break;
        }

        let mover = position.side_to_move();
        let started = Instant::now();
        let out = match mover {
            Color::Light => engine_white.choose_move(&mut position, &config.go_params)?,
            Color::Dark => engine_black.choose_move(&mut position, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                result.white_move_count = result.white_move_count.saturating_add(1);
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        // Only terminal positions lack moves, and those were handled above.
        let chosen = out.best_move.ok_or_else(|| {
            ChessErrors::EngineReturnedIllegalMove(format!("no move for {}", mover.name()))
        })?;
        if !position.is_legal(chosen) {
            return Err(ChessErrors::EngineReturnedIllegalMove(chosen.to_string()));
        }

        result.played_moves_lan.push(move_to_long_algebraic(chosen));
        position.push(chosen);
    }

    if result.outcome == MatchOutcome::DrawMaxPlies {
        // The final ply may have ended the game.
        if let Some(termination) = position.termination() {
            result.outcome = MatchOutcome::from_termination(termination, position.side_to_move());
        }
    }

    debug!(
        outcome = ?result.outcome,
        plies = result.played_moves_lan.len(),
        fen = %position.fen(),
        "match finished"
    );
    result.final_position = position;
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, ChessErrors>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (white, black) = if player1_is_white {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            info!(game = i + 1, of = config.games, seed, white, black, "starting game");
        }

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome.winner() {
            Some(color) => {
                let player1_won = (color == Color::Light) == player1_is_white;
                let player = if player1_won {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate { player, color }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::Draw(result.outcome)
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            info!(
                game = i + 1,
                of = config.games,
                result = ?mapped,
                p1_wins = stats.player1_wins,
                p2_wins = stats.player2_wins,
                draws = stats.draws,
                "finished game"
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    position: &mut BoardPosition,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves_lan = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        if position.is_terminal() {
            break;
        }
        let Some(chosen) = pick_random_with_rng(position, &mut rng) else {
            break;
        };
        opening_moves_lan.push(move_to_long_algebraic(chosen));
        position.push(chosen);
    }

    opening_moves_lan
}
