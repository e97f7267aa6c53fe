//! Standalone agent-vs-agent series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`
//!
//! Agent settings come from the usual `CHECKERS_*` variables.

use tracing_subscriber::EnvFilter;

use plum_checkers::checkers_errors::CheckersError;
use plum_checkers::engines::engine_config::EngineConfig;
use plum_checkers::engines::engine_minimax::MinimaxAgent;
use plum_checkers::engines::engine_random::RandomAgent;
use plum_checkers::engines::engine_trait::Agent;
use plum_checkers::utils::engine_match_harness::{
    play_agent_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), CheckersError> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let config = EngineConfig::from_env()?;

    // Customize these two lines to experiment with different agents/scorers/depths.
    let player1 = || Box::new(MinimaxAgent::from_config(&config)) as Box<dyn Agent>;
    let player2 = || Box::new(RandomAgent::new()) as Box<dyn Agent>;

    let stats = play_agent_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 200,
                opening_random_plies: 2,
                force_capture: config.force_capture,
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
