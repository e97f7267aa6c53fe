//! Legal move generation.
//!
//! Enumerates, per piece in row-major order, the simple diagonal steps and the
//! jump chains it can make. Jumps chain into multi-jumps while a further
//! capture is available from the landing square; only complete chains are
//! emitted. Whether simple steps survive next to available captures is
//! decided by `GameRules::force_capture`.

use crate::game_state::checkers_rules::GameRules;
use crate::game_state::checkers_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_description::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator {
    rules: GameRules,
}

impl LegalMoveGenerator {
    pub const fn new(rules: GameRules) -> Self {
        Self { rules }
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(32);
        let mut any_capture = false;

        for piece in board.pieces(color) {
            generate_simple_steps(board, &piece, &mut moves);
            let before = moves.len();
            generate_jumps(board, &piece, &mut moves);
            any_capture |= moves.len() > before;
        }

        if self.rules.force_capture && any_capture {
            moves.retain(Move::is_capture);
        }
        moves
    }

    // Forcing captures only filters the set, never empties it, so existence
    // does not depend on the rules.
    fn has_legal_moves(&self, board: &Board, color: Color) -> bool {
        board.pieces(color).iter().any(|piece| {
            let from = piece.square();
            piece.directions().into_iter().any(|(dr, dc)| {
                let Some(step) = from.offset(dr, dc) else {
                    return false;
                };
                match board.piece_on(step) {
                    None => true,
                    Some(other) if other.color != piece.color => from
                        .offset(2 * dr, 2 * dc)
                        .is_some_and(|landing| board.piece_on(landing).is_none()),
                    Some(_) => false,
                }
            })
        })
    }
}

fn generate_simple_steps(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    let from = piece.square();
    for (dr, dc) in piece.directions() {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        if board.piece_on(to).is_some() {
            continue;
        }
        let crowns = piece.is_regular() && to.row == piece.color.promotion_row();
        let mut mv = Move::new(from, to).set_promotes(crowns);
        mv.calculate_weight();
        out.push(mv);
    }
}

fn generate_jumps(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    let origin = piece.square();
    let mut path = Vec::new();
    let mut captured = Vec::new();
    extend_jump_chain(board, piece, origin, origin, &mut path, &mut captured, out);
}

/// Depth-first walk over capture sequences starting at `current`.
///
/// Jumped pieces stay on the board until the move is applied, so they block
/// landings and cannot be jumped twice. The origin counts as empty because the
/// moving piece has left it.
fn extend_jump_chain(
    board: &Board,
    piece: &Piece,
    origin: Square,
    current: Square,
    path: &mut Vec<Square>,
    captured: &mut Vec<Piece>,
    out: &mut Vec<Move>,
) {
    let mut extended = false;

    for (dr, dc) in piece.directions() {
        let (Some(over), Some(landing)) = (current.offset(dr, dc), current.offset(2 * dr, 2 * dc))
        else {
            continue;
        };
        let Some(victim) = board.piece_on(over) else {
            continue;
        };
        if victim.color == piece.color || captured.iter().any(|c| c.square() == over) {
            continue;
        }
        if landing != origin && board.piece_on(landing).is_some() {
            continue;
        }

        extended = true;
        path.push(landing);
        captured.push(*victim);

        // Crowning ends the turn.
        if piece.is_regular() && landing.row == piece.color.promotion_row() {
            push_capture(origin, path, captured, true, out);
        } else {
            extend_jump_chain(board, piece, origin, landing, path, captured, out);
        }

        path.pop();
        captured.pop();
    }

    if !extended && !captured.is_empty() {
        push_capture(origin, path, captured, false, out);
    }
}

fn push_capture(
    origin: Square,
    path: &[Square],
    captured: &[Piece],
    crowns: bool,
    out: &mut Vec<Move>,
) {
    let mut mv = Move::with_captures(origin, path.to_vec(), captured.to_vec()).set_promotes(crowns);
    mv.calculate_weight();
    out.push(mv);
}
