//! Single checkers piece: identity, rank, coordinate and movement capability.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::checkers_types::{is_dark_square, Color, Rank, Square};

/// A piece as stored in a board cell.
///
/// The coordinate is stamped by the board whenever the piece is placed, so a
/// piece on the board always knows the cell it occupies.
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
    pub row: i8,
    pub col: i8,
    /// Cosmetic UI state; ignored by equality and by the rules.
    pub selected: bool,
    pub move_count: u32,
}

impl Piece {
    /// A regular piece at `(row, col)`.
    pub const fn new(color: Color, row: i8, col: i8) -> Self {
        Self {
            color,
            rank: Rank::Regular,
            row,
            col,
            selected: false,
            move_count: 0,
        }
    }

    pub const fn king(color: Color, row: i8, col: i8) -> Self {
        Self {
            color,
            rank: Rank::King,
            row,
            col,
            selected: false,
            move_count: 0,
        }
    }

    #[inline]
    pub const fn square(&self) -> Square {
        Square::new(self.row, self.col)
    }

    #[inline]
    pub fn set_position(&mut self, row: i8, col: i8) {
        self.row = row;
        self.col = col;
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    #[inline]
    pub fn is_regular(&self) -> bool {
        self.rank == Rank::Regular
    }

    #[inline]
    pub fn forward_row_step(&self) -> i8 {
        self.color.forward_row_step()
    }

    /// Kings move both ways; regular pieces only towards the opponent.
    pub fn can_move_in_direction(&self, row_step: i8) -> bool {
        if self.is_king() {
            row_step == 1 || row_step == -1
        } else {
            row_step == self.forward_row_step()
        }
    }

    /// Diagonal unit steps this piece may take, forward steps first.
    pub fn directions(&self) -> Vec<(i8, i8)> {
        let forward = self.forward_row_step();
        let mut out = vec![(forward, -1), (forward, 1)];
        if self.is_king() {
            out.push((-forward, -1));
            out.push((-forward, 1));
        }
        out
    }

    #[inline]
    pub fn is_on_promotion_row(&self) -> bool {
        self.row == self.color.promotion_row()
    }

    /// Promote a regular piece standing on its far row.
    ///
    /// Returns `true` only when the rank actually changed; calling it again on a
    /// king is a no-op.
    pub fn promote(&mut self) -> bool {
        if self.is_regular() && self.is_on_promotion_row() {
            self.rank = Rank::King;
            return true;
        }
        false
    }

    /// Revert to a regular piece. `Board::undo_last_move` calls this when the
    /// undone move crowned the piece.
    pub fn demote(&mut self) {
        self.rank = Rank::Regular;
    }

    #[inline]
    pub fn increment_move_count(&mut self) {
        self.move_count += 1;
    }

    #[inline]
    pub fn decrement_move_count(&mut self) {
        self.move_count = self.move_count.saturating_sub(1);
    }

    #[inline]
    pub fn is_on_dark_square(&self) -> bool {
        is_dark_square(self.row, self.col)
    }

    pub fn is_adjacent_to(&self, row: i8, col: i8) -> bool {
        (row - self.row).abs() == 1 && (col - self.col).abs() == 1
    }

    pub fn distance_to(&self, row: i8, col: i8) -> f64 {
        let d_row = f64::from(row - self.row);
        let d_col = f64::from(col - self.col);
        (d_row * d_row + d_col * d_col).sqrt()
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && self.rank == other.rank
            && self.row == other.row
            && self.col == other.col
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.rank.hash(state);
        self.row.hash(state);
        self.col.hash(state);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self.color {
            Color::Light => 'L',
            Color::Dark => 'D',
        };
        let rank = if self.is_king() { 'K' } else { 'R' };
        write!(f, "{color}{rank}({}, {})", self.row, self.col)
    }
}
