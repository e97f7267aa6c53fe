//! Canonical checkers-rule constants.
//!
//! Static literals for the standard 8x8 game plus the small rule switches the
//! engine exposes, such as whether captures are mandatory.

use std::ops::Range;

use crate::game_state::checkers_types::Color;

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// Rows occupied by a color in the starting position.
pub const fn starting_rows(color: Color) -> Range<i8> {
    match color {
        Color::Dark => 0..3,
        Color::Light => 5..BOARD_SIZE,
    }
}

/// Rule switches that change which moves are legal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameRules {
    /// When set, simple steps are dropped from the legal set whenever any
    /// capture is available to the side to move.
    pub force_capture: bool,
}

impl GameRules {
    pub const fn lenient() -> Self {
        Self {
            force_capture: false,
        }
    }

    pub const fn forced_capture() -> Self {
        Self {
            force_capture: true,
        }
    }
}
