//! Fixed-depth minimax over cloned boards.
//!
//! Every branch applies its move to a fresh deep copy of the parent board, so
//! the caller's board is never mutated and branches share no state. Leaves are
//! scored from the searching side's perspective. Alpha-beta pruning is
//! optional and selects the same move as the plain search. With pruning on,
//! interior nodes visit their moves heaviest weight first; the root always
//! keeps the caller's order so ties resolve the same way in both modes.

use tracing::debug;

use crate::checkers_errors::CheckersError;
use crate::game_state::checkers_types::{Board, Color};
use crate::move_generation::legal_move_apply::apply_move_to_clone;
use crate::moves::move_description::Move;
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            alpha_beta: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Pick the move among `legal_moves` whose subtree is best for `color`.
///
/// Ties keep the earliest move in `legal_moves`. An empty slice yields
/// `best_move: None` with the static score of `board`.
pub fn minimax_search<S: BoardScorer + ?Sized>(
    board: &Board,
    color: Color,
    legal_moves: &[Move],
    scorer: &S,
    config: SearchConfig,
) -> Result<SearchResult, CheckersError> {
    let depth = config.max_depth.max(1);
    let mut nodes = 1u64;

    if legal_moves.is_empty() {
        return Ok(SearchResult {
            best_move: None,
            best_score: scorer.score(board, color),
            nodes,
        });
    }

    let mut alpha = i32::MIN;
    let beta = i32::MAX;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for mv in legal_moves {
        let child = apply_move_to_clone(board, mv)?;
        let mut node = SearchNode {
            agent: color,
            scorer,
            alpha_beta: config.alpha_beta,
            nodes: &mut nodes,
        };
        let score = node.minimax(&child, color.opposite(), depth - 1, false, alpha, beta)?;

        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(mv.clone());
        }
        if config.alpha_beta {
            alpha = alpha.max(best_score);
        }
    }

    debug!(
        %color,
        depth,
        nodes,
        best_score,
        best_move = ?best_move.as_ref().map(Move::to_compact_string),
        "minimax search finished"
    );

    Ok(SearchResult {
        best_move,
        best_score,
        nodes,
    })
}

struct SearchNode<'a, S: BoardScorer + ?Sized> {
    agent: Color,
    scorer: &'a S,
    alpha_beta: bool,
    nodes: &'a mut u64,
}

impl<S: BoardScorer + ?Sized> SearchNode<'_, S> {
    fn minimax(
        &mut self,
        board: &Board,
        to_move: Color,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32, CheckersError> {
        *self.nodes += 1;

        if depth == 0 {
            return Ok(self.scorer.score(board, self.agent));
        }
        let mut moves = board.legal_moves(to_move);
        if moves.is_empty() {
            return Ok(self.scorer.score(board, self.agent));
        }
        // Heavier moves first so cutoffs come sooner; the sort is stable.
        if self.alpha_beta {
            moves.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in &moves {
            let child = apply_move_to_clone(board, mv)?;
            let value = self.minimax(
                &child,
                to_move.opposite(),
                depth - 1,
                !maximizing,
                alpha,
                beta,
            )?;

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if self.alpha_beta && alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}
