//! Core value types shared by the board, move generation and search.
//!
//! Coordinates are signed so that diagonal offsets can step off the board and
//! be rejected by a range check instead of wrapping.
use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::piece::Piece;
pub use crate::game_state::undo_state::UndoState;

use crate::game_state::checkers_rules::BOARD_SIZE;

/// Side of a piece. Light moves up the board (row decreasing), Dark moves down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a forward step for a regular piece of this color.
    #[inline]
    pub const fn forward_row_step(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Farthest row for this color; reaching it promotes a regular piece.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "Light"),
            Color::Dark => write!(f, "Dark"),
        }
    }
}

/// Piece rank. Promotion is one-way during play; demotion only happens on undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Regular,
    King,
}

/// Board coordinate. `row` 0 is the top edge (Dark's home side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        is_valid_position(self.row, self.col)
    }

    #[inline]
    pub const fn is_dark(self) -> bool {
        is_dark_square(self.row, self.col)
    }

    /// Step by `(d_row, d_col)`; `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let next = Square::new(self.row + d_row, self.col + d_col);
        next.is_on_board().then_some(next)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[inline]
pub const fn is_valid_position(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// Playable squares are those where `row + col` is odd.
#[inline]
pub const fn is_dark_square(row: i8, col: i8) -> bool {
    (row + col).rem_euclid(2) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_off_the_board_are_rejected() {
        let corner = Square::new(0, 1);
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(corner.offset(1, -1), Some(Square::new(1, 0)));
        assert_eq!(Square::new(7, 6).offset(1, 1), None);
    }

    #[test]
    fn dark_squares_have_odd_coordinate_sum() {
        assert!(is_dark_square(0, 1));
        assert!(is_dark_square(7, 0));
        assert!(!is_dark_square(0, 0));
        assert!(!is_dark_square(7, 7));
    }

    #[test]
    fn colors_move_towards_each_others_home_rows() {
        assert_eq!(Color::Light.forward_row_step(), -1);
        assert_eq!(Color::Dark.forward_row_step(), 1);
        assert_eq!(Color::Light.promotion_row(), 0);
        assert_eq!(Color::Dark.promotion_row(), 7);
        assert_eq!(Color::Light.opposite(), Color::Dark);
    }
}
