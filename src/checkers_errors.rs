//! Errors used throughout the checkers engine.
//!
//! `CheckersError` is the single error type returned by board mutation, the
//! turn controller, agents and configuration loading. Game-flow conditions
//! that are expected during normal play (a side with no legal moves, an undo
//! request with nothing to undo) are not errors and are answered by queries
//! such as `Board::has_legal_moves` and `Board::can_undo` instead.
//!
//! Usage guidelines:
//! - Contract violations (`InvalidPosition`, `MalformedMove`) abort the
//!   operation before anything is mutated.
//! - Interaction failures (`IllegalMove`, `GameNotInProgress`) are meant to be
//!   shown to the player; the board is left exactly as it was.

use thiserror::Error;

use crate::controller::game_controller::GameStatus;

/// Unified error type for the checkers engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckersError {
    /// A mutating board operation received a coordinate outside the 8x8 grid.
    ///
    /// Never silently clamped.
    #[error("invalid position: ({row}, {col})")]
    InvalidPosition { row: i8, col: i8 },

    /// A proposed move is not among the legal moves of the side to move.
    ///
    /// Payload: compact rendering of the rejected move.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A move whose contents do not match the board it is applied to, for
    /// example an empty origin square or a captured square without an enemy.
    #[error("malformed move: {0}")]
    MalformedMove(String),

    /// A move was submitted while the game is paused or already over.
    #[error("game is not in progress (status: {0:?})")]
    GameNotInProgress(GameStatus),

    /// A configuration value could not be parsed or is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal failure such as a panicked worker thread; indicates a bug.
    #[error("invalid engine state: {0}")]
    InvalidState(String),

    /// The input channel feeding a human agent was closed before a move arrived.
    #[error("human input channel closed")]
    InputChannelClosed,
}
