//! Mutable checkers board.
//!
//! `Board` is the central model for the engine. It owns the 8x8 grid of
//! pieces, per-color live and king counters kept in step with the grid,
//! captured-piece bins, and the undo stack consumed by `undo_last_move`.
//! Move application and undo live in `move_generation::legal_move_apply`;
//! legal-move enumeration in `move_generation::legal_move_generator`.

use std::fmt;

use crate::checkers_errors::CheckersError;
use crate::game_state::checkers_rules::{starting_rows, GameRules, BOARD_SIZE};
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_description::Move;
use crate::utils::render_board::render_board;

const SIDE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; SIDE]; SIDE],

    // [color]
    pub(crate) live_counts: [usize; 2],
    pub(crate) king_counts: [usize; 2],
    /// Bins named for the color of the captured piece.
    pub(crate) captured: [Vec<Piece>; 2],

    pub(crate) move_count: u32,
    pub(crate) last_moved: Option<Color>,
    pub(crate) rules: GameRules,

    pub(crate) undo_stack: Vec<UndoState>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position with lenient capture rules.
    pub fn new() -> Self {
        Self::with_rules(GameRules::default())
    }

    /// Standard starting position under the given rule switches.
    pub fn with_rules(rules: GameRules) -> Self {
        let mut board = Self::empty_with_rules(rules);
        board.initialize_starting_positions();
        board
    }

    /// A board with no pieces, for composing test and analysis positions.
    pub fn empty() -> Self {
        Self::empty_with_rules(GameRules::default())
    }

    pub fn empty_with_rules(rules: GameRules) -> Self {
        Self {
            grid: [[None; SIDE]; SIDE],
            live_counts: [0; 2],
            king_counts: [0; 2],
            captured: [Vec::new(), Vec::new()],
            move_count: 0,
            last_moved: None,
            rules,
            undo_stack: Vec::new(),
        }
    }

    /// Clear everything, including history, and set up the starting position.
    pub fn reset(&mut self) {
        *self = Self::empty_with_rules(self.rules);
        self.initialize_starting_positions();
    }

    fn initialize_starting_positions(&mut self) {
        for color in [Color::Dark, Color::Light] {
            for row in starting_rows(color) {
                for col in 0..BOARD_SIZE {
                    if is_dark_square(row, col) {
                        self.put(Piece::new(color, row, col));
                    }
                }
            }
        }
    }

    #[inline]
    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn set_rules(&mut self, rules: GameRules) {
        self.rules = rules;
    }

    // --- Core cell access ---

    /// Occupant of `(row, col)`; out-of-range coordinates yield `None`.
    pub fn piece_at(&self, row: i8, col: i8) -> Option<&Piece> {
        if !is_valid_position(row, col) {
            return None;
        }
        self.grid[row as usize][col as usize].as_ref()
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.piece_at(square.row, square.col)
    }

    /// Put `piece` on `(row, col)`, replacing any occupant, and stamp its
    /// coordinate. Counters follow the change.
    ///
    /// Only dark squares hold pieces; anything else is an `InvalidPosition`.
    pub fn place(&mut self, row: i8, col: i8, mut piece: Piece) -> Result<(), CheckersError> {
        if !is_valid_position(row, col) || !is_dark_square(row, col) {
            return Err(CheckersError::InvalidPosition { row, col });
        }
        self.remove_piece(row, col);
        piece.set_position(row, col);
        self.put(piece);
        Ok(())
    }

    /// Clear `(row, col)` and return what was there.
    pub fn remove_piece(&mut self, row: i8, col: i8) -> Option<Piece> {
        if !is_valid_position(row, col) {
            return None;
        }
        let removed = self.grid[row as usize][col as usize].take()?;
        self.live_counts[removed.color.index()] -= 1;
        if removed.is_king() {
            self.king_counts[removed.color.index()] -= 1;
        }
        Some(removed)
    }

    /// Insert at the piece's own coordinate. Callers guarantee the cell is
    /// on the board and empty.
    pub(crate) fn put(&mut self, piece: Piece) {
        self.grid[piece.row as usize][piece.col as usize] = Some(piece);
        self.live_counts[piece.color.index()] += 1;
        if piece.is_king() {
            self.king_counts[piece.color.index()] += 1;
        }
    }

    // --- Square queries ---

    pub fn is_empty_square(&self, row: i8, col: i8) -> bool {
        self.piece_at(row, col).is_none()
    }

    pub fn is_occupied_square(&self, row: i8, col: i8) -> bool {
        self.piece_at(row, col).is_some()
    }

    pub fn has_enemy_piece(&self, row: i8, col: i8, color: Color) -> bool {
        self.piece_at(row, col).is_some_and(|p| p.color != color)
    }

    pub fn has_friendly_piece(&self, row: i8, col: i8, color: Color) -> bool {
        self.piece_at(row, col).is_some_and(|p| p.color == color)
    }

    // --- Aggregate queries ---

    /// Pieces of `color` in row-major order.
    pub fn pieces(&self, color: Color) -> Vec<Piece> {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .filter(|p| p.color == color)
            .copied()
            .collect()
    }

    pub fn kings(&self, color: Color) -> Vec<Piece> {
        self.pieces(color).into_iter().filter(Piece::is_king).collect()
    }

    pub fn regular_pieces(&self, color: Color) -> Vec<Piece> {
        self.pieces(color)
            .into_iter()
            .filter(Piece::is_regular)
            .collect()
    }

    #[inline]
    pub fn piece_count(&self, color: Color) -> usize {
        self.live_counts[color.index()]
    }

    #[inline]
    pub fn king_count(&self, color: Color) -> usize {
        self.king_counts[color.index()]
    }

    /// Pieces of `color` that have been captured, oldest first.
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn last_moved(&self) -> Option<Color> {
        self.last_moved
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    // --- Rules queries ---

    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        LegalMoveGenerator::new(self.rules).generate_legal_moves(self, color)
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        LegalMoveGenerator::new(self.rules).has_legal_moves(self, color)
    }

    /// True once either side has no pieces or no legal moves.
    pub fn is_terminal(&self) -> bool {
        [Color::Light, Color::Dark]
            .into_iter()
            .any(|color| !self.is_side_alive(color))
    }

    /// The side that can still play when the other cannot; `None` while the
    /// game goes on or when neither side can move.
    pub fn winner(&self) -> Option<Color> {
        match (
            self.is_side_alive(Color::Light),
            self.is_side_alive(Color::Dark),
        ) {
            (true, false) => Some(Color::Light),
            (false, true) => Some(Color::Dark),
            _ => None,
        }
    }

    fn is_side_alive(&self, color: Color) -> bool {
        self.piece_count(color) > 0 && self.has_legal_moves(color)
    }

    /// Recount the grid and compare with the incremental counters and stored
    /// coordinates.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut live = [0usize; 2];
        let mut kings = [0usize; 2];

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let Some(piece) = self.grid[row as usize][col as usize] else {
                    continue;
                };
                if piece.row != row || piece.col != col {
                    return Err(format!(
                        "piece {piece} stored in cell ({row}, {col})"
                    ));
                }
                if !is_dark_square(row, col) {
                    return Err(format!("piece {piece} on a light square"));
                }
                live[piece.color.index()] += 1;
                if piece.is_king() {
                    kings[piece.color.index()] += 1;
                }
            }
        }

        if live != self.live_counts {
            return Err(format!(
                "live counts {:?} but grid holds {:?}",
                self.live_counts, live
            ));
        }
        if kings != self.king_counts {
            return Err(format!(
                "king counts {:?} but grid holds {:?}",
                self.king_counts, kings
            ));
        }
        Ok(())
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
            && self.live_counts == other.live_counts
            && self.king_counts == other.king_counts
            && self.captured == other.captured
            && self.move_count == other.move_count
            && self.last_moved == other.last_moved
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_twelve_pieces_per_side_on_dark_squares() {
        let board = Board::new();

        for color in [Color::Light, Color::Dark] {
            assert_eq!(board.piece_count(color), 12);
            assert_eq!(board.king_count(color), 0);
            assert!(board.captured_pieces(color).is_empty());
        }

        for piece in board.pieces(Color::Dark) {
            assert!((0..3).contains(&piece.row));
            assert!(piece.is_on_dark_square());
        }
        for piece in board.pieces(Color::Light) {
            assert!((5..8).contains(&piece.row));
            assert!(piece.is_on_dark_square());
        }
        assert!(board.check_invariants().is_ok());
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.last_moved(), None);
    }

    #[test]
    fn out_of_range_lookups_yield_nothing() {
        let board = Board::new();
        assert!(board.piece_at(-1, 0).is_none());
        assert!(board.piece_at(0, 8).is_none());
        assert!(board.piece_at(8, 8).is_none());
        assert!(board.is_empty_square(42, 42));
    }

    #[test]
    fn place_out_of_range_fails_loudly() {
        let mut board = Board::empty();
        let err = board
            .place(8, 1, Piece::new(Color::Dark, 0, 0))
            .expect_err("row 8 is off the board");
        assert_eq!(err, CheckersError::InvalidPosition { row: 8, col: 1 });
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn place_on_a_light_square_is_rejected() {
        let mut board = Board::new();
        let err = board
            .place(4, 2, Piece::new(Color::Light, 0, 0))
            .expect_err("(4,2) is a light square");
        assert_eq!(err, CheckersError::InvalidPosition { row: 4, col: 2 });
        assert!(board.place(0, 0, Piece::king(Color::Dark, 0, 0)).is_err());
        assert_eq!(board, Board::new());
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn place_stamps_coordinate_and_tracks_counts() {
        let mut board = Board::empty();
        board
            .place(3, 2, Piece::new(Color::Dark, 0, 0))
            .expect("on board");
        let placed = board.piece_at(3, 2).expect("occupied");
        assert_eq!((placed.row, placed.col), (3, 2));
        assert_eq!(board.piece_count(Color::Dark), 1);

        board
            .place(3, 2, Piece::king(Color::Light, 0, 0))
            .expect("on board");
        assert_eq!(board.piece_count(Color::Dark), 0);
        assert_eq!(board.piece_count(Color::Light), 1);
        assert_eq!(board.king_count(Color::Light), 1);
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn remove_piece_decrements_counts() {
        let mut board = Board::new();
        let removed = board.remove_piece(5, 0).expect("light piece at (5,0)");
        assert_eq!(removed.color, Color::Light);
        assert_eq!(board.piece_count(Color::Light), 11);
        assert!(board.remove_piece(5, 0).is_none());
        assert!(board.remove_piece(-3, 0).is_none());
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn enemy_and_friendly_queries() {
        let board = Board::new();
        assert!(board.has_enemy_piece(0, 1, Color::Light));
        assert!(board.has_friendly_piece(0, 1, Color::Dark));
        assert!(!board.has_enemy_piece(4, 1, Color::Light));
        assert!(board.is_occupied_square(7, 0));
    }

    #[test]
    fn wiped_out_side_loses() {
        let mut board = Board::empty();
        board
            .place(3, 2, Piece::new(Color::Dark, 0, 0))
            .expect("on board");
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Color::Dark));
        assert_eq!(board.piece_count(Color::Light), 0);
    }

    #[test]
    fn blocked_side_loses() {
        let mut board = Board::empty();
        // Light piece on (7,0) is blocked by a dark piece it cannot jump.
        board.place(7, 0, Piece::new(Color::Light, 7, 0)).expect("on board");
        board.place(6, 1, Piece::new(Color::Dark, 6, 1)).expect("on board");
        board.place(5, 2, Piece::new(Color::Dark, 5, 2)).expect("on board");
        assert!(!board.has_legal_moves(Color::Light));
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Color::Dark));
    }

    #[test]
    fn game_in_progress_has_no_winner() {
        let board = Board::new();
        assert!(!board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn reset_restores_start_position_and_clears_history() {
        let mut board = Board::new();
        let mv = board.legal_moves(Color::Light)[0].clone();
        board.apply_move(&mv).expect("legal move applies");
        board.reset();
        assert_eq!(board, Board::new());
        assert!(!board.can_undo());
    }

    #[test]
    fn clones_are_independent() {
        let board = Board::new();
        let mut copy = board.clone();
        copy.remove_piece(0, 1);
        assert_eq!(board.piece_count(Color::Dark), 12);
        assert_eq!(copy.piece_count(Color::Dark), 11);
        assert_ne!(board, copy);
    }
}
