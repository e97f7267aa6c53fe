use crate::game_state::checkers_types::{Board, Color};
use crate::moves::move_description::Move;

/// Producer of the legal moves of one side on a board.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<Move>;

    fn has_legal_moves(&self, board: &Board, color: Color) -> bool {
        !self.generate_legal_moves(board, color).is_empty()
    }
}
