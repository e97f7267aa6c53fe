//! Runtime configuration for agents and the rules they play under.
//!
//! Values come from `Default` or from `CHECKERS_*` environment variables, in
//! the same spirit as the benchmark suite selection via environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::checkers_errors::CheckersError;
use crate::game_state::checkers_rules::GameRules;
use crate::search::board_scoring::{BoardScorer, KingWeightedScorer, PieceCountScorer};
use crate::search::minimax::SearchConfig;

pub const MIN_SEARCH_DEPTH: u8 = 1;
pub const MAX_SEARCH_DEPTH: u8 = 8;

pub const ENV_SEARCH_DEPTH: &str = "CHECKERS_SEARCH_DEPTH";
pub const ENV_MOVE_TIMEOUT_MS: &str = "CHECKERS_MOVE_TIMEOUT_MS";
pub const ENV_FORCE_CAPTURE: &str = "CHECKERS_FORCE_CAPTURE";
pub const ENV_ALPHA_BETA: &str = "CHECKERS_ALPHA_BETA";
pub const ENV_SCORER: &str = "CHECKERS_SCORER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    PieceCount,
    KingWeighted,
}

impl ScorerKind {
    pub fn build(self) -> Box<dyn BoardScorer> {
        match self {
            ScorerKind::PieceCount => Box::new(PieceCountScorer),
            ScorerKind::KingWeighted => Box::new(KingWeightedScorer::default()),
        }
    }
}

impl FromStr for ScorerKind {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "piece_count" | "piece-count" => Ok(ScorerKind::PieceCount),
            "king_weighted" | "king-weighted" => Ok(ScorerKind::KingWeighted),
            other => Err(CheckersError::InvalidConfig(format!(
                "unknown scorer `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched by the computer agent.
    pub search_depth: u8,
    /// Time a human gets per move; 0 waits forever.
    pub move_timeout_ms: u64,
    pub force_capture: bool,
    pub alpha_beta: bool,
    pub scorer: ScorerKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            move_timeout_ms: 0,
            force_capture: false,
            alpha_beta: false,
            scorer: ScorerKind::PieceCount,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by any `CHECKERS_*` variables that are set.
    pub fn from_env() -> Result<Self, CheckersError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CheckersError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEARCH_DEPTH) {
            config.search_depth = parse_number(ENV_SEARCH_DEPTH, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MOVE_TIMEOUT_MS) {
            config.move_timeout_ms = parse_number(ENV_MOVE_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_FORCE_CAPTURE) {
            config.force_capture = parse_flag(ENV_FORCE_CAPTURE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_ALPHA_BETA) {
            config.alpha_beta = parse_flag(ENV_ALPHA_BETA, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SCORER) {
            config.scorer = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CheckersError> {
        if !(MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH).contains(&self.search_depth) {
            return Err(CheckersError::InvalidConfig(format!(
                "search depth {} outside {MIN_SEARCH_DEPTH}..={MAX_SEARCH_DEPTH}",
                self.search_depth
            )));
        }
        Ok(())
    }

    pub fn rules(&self) -> GameRules {
        GameRules {
            force_capture: self.force_capture,
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.search_depth,
            alpha_beta: self.alpha_beta,
        }
    }

    /// `None` means wait without limit.
    pub fn move_timeout(&self) -> Option<Duration> {
        (self.move_timeout_ms > 0).then(|| Duration::from_millis(self.move_timeout_ms))
    }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T, CheckersError> {
    raw.trim()
        .parse()
        .map_err(|_| CheckersError::InvalidConfig(format!("{key}: `{raw}` is not a number")))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, CheckersError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CheckersError::InvalidConfig(format!(
            "{key}: `{raw}` is not a boolean"
        ))),
    }
}
