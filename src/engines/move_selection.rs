//! Click-driven move selection for a human player.
//!
//! Translates a stream of square clicks into one move from a fixed legal set:
//! click a piece that can move, then click one of its destinations.

use crate::game_state::checkers_types::Square;
use crate::moves::move_description::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    PieceSelected,
    MoveReady,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// The click did not change anything.
    Ignored,
    PieceSelected { square: Square, candidates: usize },
    Deselected,
    MoveReady(Move),
}

#[derive(Debug, Clone)]
pub struct MoveSelection {
    state: SelectionState,
    legal_moves: Vec<Move>,
    selected: Option<Square>,
    pending: Option<Move>,
}

impl MoveSelection {
    pub fn new(legal_moves: Vec<Move>) -> Self {
        Self {
            state: SelectionState::Idle,
            legal_moves,
            selected: None,
            pending: None,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    /// Moves available to the selected piece, in generation order.
    pub fn candidates(&self) -> Vec<&Move> {
        match self.selected {
            Some(square) => self.legal_moves.iter().filter(|m| m.from == square).collect(),
            None => Vec::new(),
        }
    }

    /// Destinations to highlight for the selected piece.
    pub fn highlighted_squares(&self) -> Vec<Square> {
        let mut squares: Vec<Square> = Vec::new();
        for mv in self.candidates() {
            if !squares.contains(&mv.to) {
                squares.push(mv.to);
            }
        }
        squares
    }

    pub fn click(&mut self, row: i8, col: i8) -> SelectionEvent {
        if self.state == SelectionState::MoveReady {
            return SelectionEvent::Ignored;
        }
        let square = Square::new(row, col);

        if self.state == SelectionState::PieceSelected {
            // Re-clicking the selected piece always deselects, so a king loop
            // ending on its own origin cannot be picked by clicking.
            if self.selected == Some(square) {
                self.cancel();
                return SelectionEvent::Deselected;
            }
            // When several capture paths share a destination the first
            // generated one wins.
            let completed = self.candidates().into_iter().find(|m| m.to == square).cloned();
            if let Some(mv) = completed {
                self.state = SelectionState::MoveReady;
                self.pending = Some(mv.clone());
                return SelectionEvent::MoveReady(mv);
            }
        }

        let candidates = self.legal_moves.iter().filter(|m| m.from == square).count();
        if candidates == 0 {
            return SelectionEvent::Ignored;
        }
        self.selected = Some(square);
        self.state = SelectionState::PieceSelected;
        SelectionEvent::PieceSelected { square, candidates }
    }

    pub fn cancel(&mut self) {
        self.state = SelectionState::Idle;
        self.selected = None;
        self.pending = None;
    }

    /// Hand over the completed move, returning to `Idle`.
    pub fn take_move(&mut self) -> Option<Move> {
        let mv = self.pending.take()?;
        self.cancel();
        Some(mv)
    }
}
