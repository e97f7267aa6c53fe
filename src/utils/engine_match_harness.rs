//! Minimal head-to-head agent match harness for local testing.
//!
//! Runs two `Agent` implementations against each other through the turn
//! controller, with an optional seeded random opening prefix so a series of
//! games between deterministic agents does not replay the same game.

use std::time::Instant;

use chrono::{DateTime, Local};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::checkers_errors::CheckersError;
use crate::controller::game_controller::GameController;
use crate::engines::engine_trait::Agent;
use crate::game_state::checkers_rules::GameRules;
use crate::game_state::checkers_types::{Board, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWin,
    DarkWin,
    /// Neither side can move.
    Draw,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    Draw,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Random legal moves played before the agents take over.
    pub opening_random_plies: u8,
    pub force_capture: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_random_plies: 2,
            force_capture: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub started_at: DateTime<Local>,
    pub final_board: Board,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub light_move_count: u32,
    pub dark_move_count: u32,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub started_at: Option<DateTime<Local>>,
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
        let started = self
            .started_at
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_owned());
        format!(
            "started={} games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            started,
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

/// Play a single seeded match from the starting position.
///
/// `light` moves first.
pub fn play_agent_match(
    mut light: Box<dyn Agent>,
    mut dark: Box<dyn Agent>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, CheckersError> {
    let rules = GameRules {
        force_capture: config.force_capture,
    };
    let mut controller = GameController::with_rules(rules);
    let opening_moves = apply_seeded_random_opening(&mut controller, seed, config.opening_random_plies)?;
    play_from_controller(controller, light.as_mut(), dark.as_mut(), opening_moves, &config)
}

/// Play a single match from a caller-provided position, without a random
/// opening. Useful for curated endgame checks. The board's rules are replaced
/// by the ones in `config`.
pub fn play_agent_match_from_board(
    mut light: Box<dyn Agent>,
    mut dark: Box<dyn Agent>,
    mut start: Board,
    to_move: Color,
    config: MatchConfig,
) -> Result<MatchResult, CheckersError> {
    start.set_rules(GameRules {
        force_capture: config.force_capture,
    });
    let controller = GameController::from_board(start, to_move);
    play_from_controller(controller, light.as_mut(), dark.as_mut(), Vec::new(), &config)
}

fn play_from_controller(
    mut controller: GameController,
    light: &mut dyn Agent,
    dark: &mut dyn Agent,
    opening_moves: Vec<String>,
    config: &MatchConfig,
) -> Result<MatchResult, CheckersError> {
    let started_at = Local::now();
    light.new_game();
    dark.new_game();

    let mut played_moves = Vec::<String>::new();
    let mut light_move_count = 0u32;
    let mut dark_move_count = 0u32;
    let mut light_total_time_ns = 0u128;
    let mut dark_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if controller.is_game_over() {
            break;
        }

        let mover = controller.current_color();
        let legal_moves = controller.legal_moves();
        let started = Instant::now();
        let out = match mover {
            Color::Light => light.choose_move(controller.board(), mover, &legal_moves)?,
            Color::Dark => dark.choose_move(controller.board(), mover, &legal_moves)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                light_move_count = light_move_count.saturating_add(1);
                light_total_time_ns = light_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                dark_move_count = dark_move_count.saturating_add(1);
                dark_total_time_ns = dark_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = match out.chosen_move {
            Some(mv) => mv,
            None => legal_moves.first().cloned().ok_or_else(|| {
                CheckersError::InvalidState(format!("{mover} has no legal moves in a live game"))
            })?,
        };
        played_moves.push(chosen.to_algebraic_notation());
        controller.submit_move(&chosen)?;
    }

    let outcome = if controller.is_game_over() {
        match controller.winner() {
            Some(Color::Light) => MatchOutcome::LightWin,
            Some(Color::Dark) => MatchOutcome::DarkWin,
            None => MatchOutcome::Draw,
        }
    } else {
        MatchOutcome::DrawMaxPlies
    };

    Ok(MatchResult {
        outcome,
        started_at,
        final_board: controller.board().clone(),
        opening_moves,
        played_moves,
        light_move_count,
        dark_move_count,
        light_total_time_ns,
        dark_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_agent_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, CheckersError>
where
    F1: Fn() -> Box<dyn Agent>,
    F2: Fn() -> Box<dyn Agent>,
{
    let mut stats = MatchSeriesStats {
        started_at: Some(Local::now()),
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_light = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        debug!(
            game = i + 1,
            games = config.games,
            seed,
            player1_is_light,
            "starting game"
        );

        let result = if player1_is_light {
            play_agent_match(player1_factory(), player2_factory(), seed, config.per_game.clone())?
        } else {
            play_agent_match(player2_factory(), player1_factory(), seed, config.per_game.clone())?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_light {
            (
                result.light_move_count,
                result.dark_move_count,
                result.light_total_time_ns,
                result.dark_total_time_ns,
            )
        } else {
            (
                result.dark_move_count,
                result.light_move_count,
                result.dark_total_time_ns,
                result.light_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            MatchOutcome::LightWin | MatchOutcome::DarkWin => {
                let color = if result.outcome == MatchOutcome::LightWin {
                    Color::Light
                } else {
                    Color::Dark
                };
                let player = if (color == Color::Light) == player1_is_light {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
            MatchOutcome::Draw => {
                stats.draws += 1;
                SeriesOutcome::Draw
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        info!(
            game = i + 1,
            games = config.games,
            result = ?mapped,
            p1_wins = stats.player1_wins,
            p2_wins = stats.player2_wins,
            draws = stats.draws,
            "game finished"
        );
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
    controller: &mut GameController,
    seed: u64,
    plies: u8,
) -> Result<Vec<String>, CheckersError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::<String>::new();

    for _ in 0..plies {
        if controller.is_game_over() {
            break;
        }
        let legal_moves = controller.legal_moves();
        if legal_moves.is_empty() {
            break;
        }
        let chosen = &legal_moves[rng.random_range(0..legal_moves.len())];
        opening_moves.push(chosen.to_algebraic_notation());
        controller.submit_move(chosen)?;
    }

    Ok(opening_moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxAgent;
    use crate::engines::engine_random::RandomAgent;
    use crate::game_state::checkers_types::Piece;

    #[test]
    fn match_harness_runs_random_vs_minimax() {
        let result = play_agent_match(
            Box::new(RandomAgent::seeded(5)),
            Box::new(MinimaxAgent::new(2)),
            42,
            MatchConfig {
                max_plies: 60,
                opening_random_plies: 2,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");

        assert_eq!(result.opening_moves.len(), 2);
        assert!(result.light_move_count + result.dark_move_count > 0);
        assert_eq!(
            result.played_moves.len() as u32,
            result.light_move_count + result.dark_move_count
        );
        result.final_board.check_invariants().expect("consistent board");
    }

    #[test]
    fn same_seed_same_opening() {
        let config = MatchConfig {
            max_plies: 0,
            opening_random_plies: 6,
            force_capture: true,
        };
        let a = play_agent_match(
            Box::new(RandomAgent::seeded(1)),
            Box::new(RandomAgent::seeded(2)),
            99,
            config.clone(),
        )
        .expect("match should run");
        let b = play_agent_match(
            Box::new(RandomAgent::seeded(3)),
            Box::new(RandomAgent::seeded(4)),
            99,
            config,
        )
        .expect("match should run");

        assert_eq!(a.opening_moves, b.opening_moves);
        assert_eq!(a.outcome, MatchOutcome::DrawMaxPlies);
        assert!(a.final_board.rules().force_capture);
    }

    #[test]
    fn curated_position_is_converted() {
        let mut board = Board::empty();
        board.place(4, 3, Piece::new(Color::Light, 4, 3)).expect("on board");
        board.place(3, 4, Piece::new(Color::Dark, 3, 4)).expect("on board");

        let result = play_agent_match_from_board(
            Box::new(MinimaxAgent::new(1)),
            Box::new(RandomAgent::seeded(0)),
            board,
            Color::Light,
            MatchConfig::default(),
        )
        .expect("match should run");

        assert_eq!(result.outcome, MatchOutcome::LightWin);
        assert_eq!(result.light_move_count, 1);
        assert_eq!(result.dark_move_count, 0);
        assert!(result.opening_moves.is_empty());
    }

    #[test]
    fn curated_position_follows_the_configured_rules() {
        let mut board = Board::empty();
        board.place(5, 2, Piece::new(Color::Light, 5, 2)).expect("on board");
        board.place(7, 0, Piece::new(Color::Light, 7, 0)).expect("on board");
        board.place(4, 3, Piece::new(Color::Dark, 4, 3)).expect("on board");
        assert!(!board.rules().force_capture);

        let result = play_agent_match_from_board(
            Box::new(RandomAgent::seeded(5)),
            Box::new(RandomAgent::seeded(6)),
            board,
            Color::Light,
            MatchConfig {
                force_capture: true,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");

        assert!(result.final_board.rules().force_capture);
        assert_eq!(result.played_moves, vec!["c3-e5x1".to_string()]);
        assert_eq!(result.outcome, MatchOutcome::LightWin);
    }

    #[test]
    fn series_totals_add_up() {
        let stats = play_agent_match_series(
            || Box::new(MinimaxAgent::new(1)),
            || Box::new(RandomAgent::seeded(8)),
            MatchSeriesConfig {
                games: 3,
                base_seed: 777,
                per_game: MatchConfig {
                    max_plies: 30,
                    ..MatchConfig::default()
                },
            },
        )
        .expect("series should run");

        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 3);
        assert!(stats.player1_moves > 0 && stats.player2_moves > 0);
        assert!(stats.report().starts_with("started="));
    }
}
