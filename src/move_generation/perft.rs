use std::thread;

use crate::checkers_errors::CheckersError;
use crate::game_state::checkers_types::{Board, Color};
use crate::moves::move_description::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub multi_jumps: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.multi_jumps += rhs.multi_jumps;
        self.promotions += rhs.promotions;
    }

    fn count_leaf(&mut self, mv: &Move) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_multiple_jump() {
            self.multi_jumps += 1;
        }
        if mv.promotes {
            self.promotions += 1;
        }
    }
}

/// Count leaf positions `depth` plies below `board` with `color` to move.
///
/// Walks with apply/undo on a private copy, so `board` is never touched.
pub fn perft(board: &Board, color: Color, depth: u8) -> Result<PerftCounts, CheckersError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut scratch = board.clone();
    let mut total = PerftCounts::default();
    perft_recurse(&mut scratch, color, depth, &mut total)?;
    Ok(total)
}

/// `perft` with one worker thread per root move.
pub fn perft_multi_threaded(
    board: &Board,
    color: Color,
    depth: u8,
) -> Result<PerftCounts, CheckersError> {
    if depth <= 1 {
        return perft(board, color, depth);
    }

    let handles: Vec<_> = board
        .legal_moves(color)
        .into_iter()
        .map(|mv| {
            let mut local_board = board.clone();
            thread::spawn(move || -> Result<PerftCounts, CheckersError> {
                local_board.apply_move(&mv)?;
                let mut local = PerftCounts::default();
                perft_recurse(&mut local_board, color.opposite(), depth - 1, &mut local)?;
                Ok(local)
            })
        })
        .collect();

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle.join().map_err(|_| {
            CheckersError::InvalidState("perft worker thread panicked".to_owned())
        })??;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse(
    board: &mut Board,
    color: Color,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), CheckersError> {
    let moves = board.legal_moves(color);

    if depth == 1 {
        for mv in &moves {
            counts.count_leaf(mv);
        }
        return Ok(());
    }

    for mv in &moves {
        board.apply_move(mv)?;
        let result = perft_recurse(board, color.opposite(), depth - 1, counts);
        board.undo_last_move();
        result?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_rules::GameRules;

    #[test]
    fn opening_perft_counts() {
        let board = Board::new();
        assert_eq!(perft(&board, Color::Dark, 0).expect("perft").nodes, 1);
        assert_eq!(perft(&board, Color::Dark, 1).expect("perft").nodes, 7);
        assert_eq!(perft(&board, Color::Dark, 2).expect("perft").nodes, 49);
        assert_eq!(perft(&board, Color::Dark, 3).expect("perft").nodes, 379);
        assert_eq!(perft(&board, Color::Light, 3).expect("perft").nodes, 379);
    }

    #[test]
    fn forced_capture_prunes_the_tree() {
        let board = Board::with_rules(GameRules::forced_capture());
        assert_eq!(perft(&board, Color::Dark, 3).expect("perft").nodes, 302);
        assert_eq!(perft(&board, Color::Dark, 4).expect("perft").nodes, 1469);
    }

    #[test]
    fn perft_leaves_the_board_untouched() {
        let board = Board::with_rules(GameRules::forced_capture());
        let before = board.clone();
        perft(&board, Color::Light, 4).expect("perft");
        assert_eq!(board, before);
        assert!(!board.can_undo());
    }

    #[test]
    fn threaded_perft_matches_single_threaded() {
        let board = Board::with_rules(GameRules::forced_capture());
        let single = perft(&board, Color::Dark, 4).expect("perft");
        let threaded = perft_multi_threaded(&board, Color::Dark, 4).expect("perft");
        assert_eq!(single, threaded);
    }
}
