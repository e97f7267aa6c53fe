//! Random-move agent.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! match-harness baselines and low-strength gameplay.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::checkers_errors::CheckersError;
use crate::engines::engine_trait::{Agent, AgentOutput};
use crate::game_state::checkers_types::{Board, Color};
use crate::moves::move_description::Move;

pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        _board: &Board,
        _color: Color,
        legal_moves: &[Move],
    ) -> Result<AgentOutput, CheckersError> {
        let mut out = AgentOutput::default();
        out.info_lines
            .push(format!("info string random_agent legal_moves {}", legal_moves.len()));

        out.chosen_move = legal_moves.choose(&mut self.rng).cloned();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move() {
        let board = Board::new();
        let moves = board.legal_moves(Color::Light);
        let mut agent = RandomAgent::new();
        let chosen = agent
            .choose_move(&board, Color::Light, &moves)
            .expect("agent runs")
            .chosen_move
            .expect("a move");
        assert!(moves.contains(&chosen));
    }

    #[test]
    fn seeded_agents_repeat_their_choices() {
        let board = Board::new();
        let moves = board.legal_moves(Color::Dark);
        let mut a = RandomAgent::seeded(7);
        let mut b = RandomAgent::seeded(7);
        for _ in 0..5 {
            let left = a.choose_move(&board, Color::Dark, &moves).expect("runs");
            let right = b.choose_move(&board, Color::Dark, &moves).expect("runs");
            assert_eq!(left.chosen_move, right.chosen_move);
        }
    }

    #[test]
    fn empty_move_list_yields_nothing() {
        let mut agent = RandomAgent::seeded(1);
        let out = agent
            .choose_move(&Board::new(), Color::Dark, &[])
            .expect("agent runs");
        assert!(out.chosen_move.is_none());
    }
}
