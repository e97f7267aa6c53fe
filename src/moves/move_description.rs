//! Move value describing a single ply.
//!
//! A `Move` records where a piece starts and lands, copies of every piece it
//! captures (so undo never depends on live board identity), its
//! classification and a heuristic weight. The weight only orders interior
//! nodes of a pruned minimax search; generation and legality never consult it.

use std::fmt;

use crate::game_state::checkers_types::{Color, Piece, Square};

/// Starting weight of every valid move.
pub const WEIGHT_DEFAULT: f64 = 0.0;
/// Added once per captured piece.
pub const WEIGHT_CAPTURE_BONUS: f64 = 10.0;
/// Added when the move crowns the moving piece.
pub const WEIGHT_PROMOTION_BONUS: f64 = 15.0;
/// Added on top of the capture bonus for chained captures.
pub const WEIGHT_MULTI_JUMP_BONUS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Simple,
    SingleJump,
    MultipleJump,
}

impl MoveKind {
    /// Classification of a capture-free move from its row displacement.
    pub fn from_displacement(from: Square, to: Square) -> Self {
        match (to.row - from.row).abs() {
            0 | 1 => MoveKind::Simple,
            2 => MoveKind::SingleJump,
            _ => MoveKind::MultipleJump,
        }
    }

    /// Classification of a capturing move from the number of pieces it takes.
    pub fn from_capture_count(count: usize) -> Self {
        match count {
            0 => MoveKind::Simple,
            1 => MoveKind::SingleJump,
            _ => MoveKind::MultipleJump,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Captured pieces in the order they were jumped, with their squares.
    pub captured: Vec<Piece>,
    pub kind: MoveKind,
    pub promotes: bool,
    /// Landing squares of each hop after the origin; a single entry for
    /// simple steps and single jumps.
    pub path: Vec<Square>,
    pub weight: f64,
}

impl Move {
    /// A move with no captures, classified by how far it travels.
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: Vec::new(),
            kind: MoveKind::from_displacement(from, to),
            promotes: false,
            path: vec![to],
            weight: WEIGHT_DEFAULT,
        }
    }

    /// A capturing move. `path` lists every landing square, ending at `to`.
    pub fn with_captures(from: Square, path: Vec<Square>, captured: Vec<Piece>) -> Self {
        let to = path.last().copied().unwrap_or(from);
        Self {
            from,
            to,
            kind: MoveKind::from_capture_count(captured.len()),
            captured,
            promotes: false,
            path,
            weight: WEIGHT_DEFAULT,
        }
    }

    pub fn set_promotes(mut self, promotes: bool) -> Self {
        self.promotes = promotes;
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    #[inline]
    pub fn is_jump(&self) -> bool {
        matches!(self.kind, MoveKind::SingleJump | MoveKind::MultipleJump)
    }

    #[inline]
    pub fn is_multiple_jump(&self) -> bool {
        self.kind == MoveKind::MultipleJump
    }

    #[inline]
    pub fn capture_count(&self) -> usize {
        self.captured.len()
    }

    pub fn capture_squares(&self) -> Vec<Square> {
        self.captured.iter().map(Piece::square).collect()
    }

    pub fn diagonal_distance(&self) -> i8 {
        (self.to.row - self.from.row)
            .abs()
            .max((self.to.col - self.from.col).abs())
    }

    pub fn is_forward_for(&self, color: Color) -> bool {
        match color {
            Color::Light => self.to.row < self.from.row,
            Color::Dark => self.to.row > self.from.row,
        }
    }

    /// Recompute `weight` from captures, promotion and centrality of the
    /// destination.
    pub fn calculate_weight(&mut self) {
        let mut total = WEIGHT_DEFAULT;

        if self.is_capture() {
            total += WEIGHT_CAPTURE_BONUS * self.capture_count() as f64;
        }
        if self.promotes {
            total += WEIGHT_PROMOTION_BONUS;
        }
        if self.is_multiple_jump() {
            total += WEIGHT_MULTI_JUMP_BONUS;
        }

        let centre_distance =
            (3.5 - f64::from(self.to.row)).abs() + (3.5 - f64::from(self.to.col)).abs();
        total += (7.0 - centre_distance) * 0.5;

        self.weight = total;
    }

    /// The same hop travelled backwards, with negated weight. Debugging aid;
    /// the board undoes moves from its own undo log.
    pub fn reversed(&self) -> Move {
        let mut path: Vec<Square> = self.path.iter().rev().skip(1).copied().collect();
        path.push(self.from);
        Move {
            from: self.to,
            to: self.from,
            captured: self.captured.clone(),
            kind: self.kind,
            promotes: false,
            path,
            weight: -self.weight,
        }
    }

    pub fn to_compact_string(&self) -> String {
        format!("{}->{}", self.from, self.to)
    }

    /// Chess-style rendering such as `b6-c5` or `a3-e7x2=`.
    pub fn to_algebraic_notation(&self) -> String {
        let file = |sq: Square| char::from(b'a' + sq.col as u8);
        let rank = |sq: Square| 8 - sq.row;

        let mut notation = format!(
            "{}{}-{}{}",
            file(self.from),
            rank(self.from),
            file(self.to),
            rank(self.to)
        );
        if self.is_capture() {
            notation.push_str(&format!("x{}", self.capture_count()));
        }
        if self.promotes {
            notation.push('=');
        }
        notation
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.captured == other.captured
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move[{}->{}, type={:?}, weight={:.2}",
            self.from, self.to, self.kind, self.weight
        )?;
        if self.is_capture() {
            write!(f, ", captures={}", self.capture_count())?;
        }
        if self.promotes {
            write!(f, ", promotes")?;
        }
        write!(f, "]")
    }
}
