use crate::game_state::checkers_types::{Color, Piece};
use crate::moves::move_description::Move;

/// Single undo record for `Board::apply_move` / `Board::undo_last_move`.
///
/// Holds enough to invert exactly one applied move: the move itself, copies of
/// the captured pieces with their squares, whether the mover was crowned, and
/// the aggregate counters that the move touched. The mover is taken back from
/// the destination square when undoing.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: Move,
    pub captured_pieces: Vec<Piece>,
    /// Set only when this move turned a regular piece into a king.
    pub promoted: bool,

    pub prev_live_counts: [usize; 2],
    pub prev_king_counts: [usize; 2],
    pub prev_last_moved: Option<Color>,
}
