//! Reversible move application.
//!
//! `Board::apply_move` validates a move against the board before touching
//! anything, landing squares included, then records an `UndoState` and
//! mutates the grid, counters and captured bins. `Board::undo_last_move` pops
//! that record and restores the previous state exactly, demoting a piece the
//! move crowned.

use tracing::trace;

use crate::checkers_errors::CheckersError;
use crate::game_state::checkers_types::*;
use crate::moves::move_description::Move;

impl Board {
    /// Apply `mv` for the piece standing on `mv.from`.
    ///
    /// A move that does not fit the board is rejected with the board left
    /// unchanged.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), CheckersError> {
        let moving = self.validate_move(mv)?;

        let prev_live_counts = self.live_counts;
        let prev_king_counts = self.king_counts;
        let prev_last_moved = self.last_moved;

        let Some(mut piece) = self.remove_piece(mv.from.row, mv.from.col) else {
            return Err(CheckersError::MalformedMove(format!(
                "no piece on origin {}",
                mv.from
            )));
        };

        let mut captured_pieces = Vec::with_capacity(mv.captured.len());
        for victim in &mv.captured {
            if let Some(taken) = self.remove_piece(victim.row, victim.col) {
                self.captured[taken.color.index()].push(taken);
                captured_pieces.push(taken);
            }
        }

        piece.set_position(mv.to.row, mv.to.col);
        piece.increment_move_count();
        let promoted = piece.promote();
        self.put(piece);

        self.move_count += 1;
        self.last_moved = Some(moving.color);

        self.undo_stack.push(UndoState {
            mv: mv.clone(),
            captured_pieces,
            promoted,
            prev_live_counts,
            prev_king_counts,
            prev_last_moved,
        });

        trace!(
            mv = %mv.to_compact_string(),
            color = %moving.color,
            captures = mv.capture_count(),
            promoted,
            "applied move"
        );
        Ok(())
    }

    /// Revert the most recent `apply_move`. Returns `false`, changing nothing,
    /// when there is no move to undo.
    pub fn undo_last_move(&mut self) -> bool {
        let Some(undo) = self.undo_stack.pop() else {
            return false;
        };

        let (from, to) = (undo.mv.from, undo.mv.to);
        let Some(mut moved) = self.grid[to.row as usize][to.col as usize].take() else {
            self.undo_stack.push(undo);
            return false;
        };

        for victim in undo.captured_pieces.iter().rev() {
            self.captured[victim.color.index()].pop();
            self.grid[victim.row as usize][victim.col as usize] = Some(*victim);
        }

        if undo.promoted {
            moved.demote();
        }
        moved.decrement_move_count();
        moved.set_position(from.row, from.col);
        self.grid[from.row as usize][from.col as usize] = Some(moved);

        self.live_counts = undo.prev_live_counts;
        self.king_counts = undo.prev_king_counts;
        self.last_moved = undo.prev_last_moved;
        self.move_count = self.move_count.saturating_sub(1);

        trace!(
            mv = %undo.mv.to_compact_string(),
            demoted = undo.promoted,
            "undid move"
        );
        true
    }

    fn validate_move(&self, mv: &Move) -> Result<Piece, CheckersError> {
        for square in [mv.from, mv.to] {
            if !square.is_on_board() {
                return Err(CheckersError::InvalidPosition {
                    row: square.row,
                    col: square.col,
                });
            }
        }
        if let Some(light) = std::iter::once(&mv.to).chain(&mv.path).find(|sq| !sq.is_dark()) {
            return Err(CheckersError::MalformedMove(format!(
                "{} lands on light square {light}",
                mv.to_compact_string()
            )));
        }

        let moving = *self.piece_on(mv.from).ok_or_else(|| {
            CheckersError::MalformedMove(format!("no piece on origin {}", mv.from))
        })?;

        if mv.to != mv.from && self.piece_on(mv.to).is_some() {
            return Err(CheckersError::MalformedMove(format!(
                "destination {} is occupied",
                mv.to
            )));
        }

        for victim in &mv.captured {
            let square = victim.square();
            if !square.is_on_board() {
                return Err(CheckersError::InvalidPosition {
                    row: square.row,
                    col: square.col,
                });
            }
            if !self.has_enemy_piece(square.row, square.col, moving.color) {
                return Err(CheckersError::MalformedMove(format!(
                    "no enemy piece to capture on {square}"
                )));
            }
        }

        Ok(moving)
    }
}

/// Apply `mv` to a copy of `board`, leaving `board` untouched.
///
/// The copy starts with an empty history, so it can undo `mv` and nothing
/// older.
pub fn apply_move_to_clone(board: &Board, mv: &Move) -> Result<Board, CheckersError> {
    let mut next = board.clone();
    next.undo_stack.clear();
    next.apply_move(mv)?;
    Ok(next)
}
