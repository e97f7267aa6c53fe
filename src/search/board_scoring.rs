//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.

use crate::game_state::checkers_types::{Board, Color};

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `color`; larger is better for `color`.
    fn score(&self, board: &Board, color: Color) -> i32;
}

/// Live-piece differential. Kings count the same as regular pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceCountScorer;

impl BoardScorer for PieceCountScorer {
    fn score(&self, board: &Board, color: Color) -> i32 {
        board.piece_count(color) as i32 - board.piece_count(color.opposite()) as i32
    }
}

/// Material differential with kings worth more than regular pieces.
#[derive(Debug, Clone, Copy)]
pub struct KingWeightedScorer {
    pub regular_value: i32,
    pub king_value: i32,
}

impl Default for KingWeightedScorer {
    fn default() -> Self {
        Self {
            regular_value: 100,
            king_value: 150,
        }
    }
}

impl KingWeightedScorer {
    fn material(&self, board: &Board, color: Color) -> i32 {
        let kings = board.king_count(color) as i32;
        let regulars = board.piece_count(color) as i32 - kings;
        regulars * self.regular_value + kings * self.king_value
    }
}

impl BoardScorer for KingWeightedScorer {
    fn score(&self, board: &Board, color: Color) -> i32 {
        self.material(board, color) - self.material(board, color.opposite())
    }
}
