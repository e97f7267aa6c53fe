//! Agent abstraction used by the turn controller.
//!
//! A human at a UI and the computer opponent fulfil the same capability: given
//! the board and the legal moves of their color, eventually produce one move.

use crate::checkers_errors::CheckersError;
use crate::game_state::checkers_types::{Board, Color};
use crate::moves::move_description::Move;

#[derive(Debug, Clone, Default)]
pub struct AgentOutput {
    pub chosen_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Agent: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose one of `legal_moves` for `color`. Returns no move only when
    /// `legal_moves` is empty.
    fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        legal_moves: &[Move],
    ) -> Result<AgentOutput, CheckersError>;
}
