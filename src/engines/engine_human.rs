//! Human player fed through a channel.
//!
//! Whatever thread owns the UI (a window, a terminal reader) keeps the
//! `Sender<HumanInput>` and pushes clicks or complete moves into it. The agent
//! blocks the turn thread on the receiving end, optionally with a timeout
//! after which it falls back to a random legal move so the turn always
//! resolves.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::checkers_errors::CheckersError;
use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_trait::{Agent, AgentOutput};
use crate::engines::move_selection::{MoveSelection, SelectionEvent};
use crate::game_state::checkers_types::{Board, Color};
use crate::moves::move_description::Move;

#[derive(Debug, Clone, PartialEq)]
pub enum HumanInput {
    Click { row: i8, col: i8 },
    /// A complete move, for front ends that build moves themselves.
    Choose(Move),
    Cancel,
}

/// Channel pair connecting a front end to a `HumanAgent`.
pub fn human_input_channel() -> (Sender<HumanInput>, Receiver<HumanInput>) {
    mpsc::channel()
}

pub struct HumanAgent {
    name: String,
    input_rx: Receiver<HumanInput>,
    timeout: Option<Duration>,
    rng: StdRng,
}

impl HumanAgent {
    pub fn new(
        name: impl Into<String>,
        input_rx: Receiver<HumanInput>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            name: name.into(),
            input_rx,
            timeout,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn from_config(
        name: impl Into<String>,
        input_rx: Receiver<HumanInput>,
        config: &EngineConfig,
    ) -> Self {
        Self::new(name, input_rx, config.move_timeout())
    }

    /// Fix the fallback move picker for reproducible timeouts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    fn next_input(&self, deadline: Option<Instant>) -> Result<Option<HumanInput>, CheckersError> {
        match deadline {
            None => self
                .input_rx
                .recv()
                .map(Some)
                .map_err(|_| CheckersError::InputChannelClosed),
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                match self.input_rx.recv_timeout(remaining) {
                    Ok(input) => Ok(Some(input)),
                    Err(RecvTimeoutError::Timeout) => Ok(None),
                    Err(RecvTimeoutError::Disconnected) => Err(CheckersError::InputChannelClosed),
                }
            }
        }
    }
}

impl Agent for HumanAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(
        &mut self,
        _board: &Board,
        color: Color,
        legal_moves: &[Move],
    ) -> Result<AgentOutput, CheckersError> {
        let mut out = AgentOutput::default();
        if legal_moves.is_empty() {
            return Ok(out);
        }

        let deadline = self.timeout.map(|t| Instant::now() + t);
        let mut selection = MoveSelection::new(legal_moves.to_vec());

        loop {
            let Some(input) = self.next_input(deadline)? else {
                warn!(player = %self.name, %color, "move timed out, playing a random legal move");
                out.info_lines
                    .push("info string human_agent timeout fallback".to_owned());
                out.chosen_move = legal_moves.choose(&mut self.rng).cloned();
                return Ok(out);
            };

            match input {
                HumanInput::Click { row, col } => match selection.click(row, col) {
                    SelectionEvent::MoveReady(_) => {
                        out.chosen_move = selection.take_move();
                        return Ok(out);
                    }
                    event => debug!(player = %self.name, row, col, ?event, "selection click"),
                },
                HumanInput::Choose(mv) => {
                    if let Some(legal) = legal_moves.iter().find(|m| **m == mv) {
                        out.chosen_move = Some(legal.clone());
                        return Ok(out);
                    }
                    warn!(player = %self.name, mv = %mv.to_compact_string(), "ignoring illegal move");
                }
                HumanInput::Cancel => selection.cancel(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::game_state::checkers_types::Square;

    #[test]
    fn clicks_resolve_into_a_legal_move() {
        let board = Board::new();
        let moves = board.legal_moves(Color::Light);
        let (tx, rx) = human_input_channel();
        let mut agent = HumanAgent::new("Alice", rx, None);

        for (row, col) in [(7, 0), (5, 2), (4, 1)] {
            tx.send(HumanInput::Click { row, col }).expect("receiver alive");
        }

        let chosen = agent
            .choose_move(&board, Color::Light, &moves)
            .expect("agent runs")
            .chosen_move
            .expect("a move");
        assert_eq!(chosen.from, Square::new(5, 2));
        assert_eq!(chosen.to, Square::new(4, 1));
    }

    #[test]
    fn illegal_direct_choices_are_skipped() {
        let board = Board::new();
        let moves = board.legal_moves(Color::Dark);
        let (tx, rx) = human_input_channel();
        let mut agent = HumanAgent::new("Bob", rx, None);

        tx.send(HumanInput::Choose(Move::new(Square::new(2, 1), Square::new(4, 3))))
            .expect("receiver alive");
        tx.send(HumanInput::Choose(moves[3].clone())).expect("receiver alive");

        let chosen = agent
            .choose_move(&board, Color::Dark, &moves)
            .expect("agent runs")
            .chosen_move;
        assert_eq!(chosen, Some(moves[3].clone()));
    }

    #[test]
    fn input_from_another_thread_is_delivered() {
        let board = Board::new();
        let moves = board.legal_moves(Color::Light);
        let (tx, rx) = human_input_channel();
        let mut agent = HumanAgent::new("Carol", rx, Some(Duration::from_secs(5)));

        let expected = moves[1].clone();
        let sent = expected.clone();
        let ui = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            tx.send(HumanInput::Choose(sent)).expect("receiver alive");
        });

        let out = agent
            .choose_move(&board, Color::Light, &moves)
            .expect("agent runs");
        ui.join().expect("ui thread finished");
        assert_eq!(out.chosen_move, Some(expected));
    }

    #[test]
    fn timeout_falls_back_to_a_legal_move() {
        let board = Board::new();
        let moves = board.legal_moves(Color::Light);
        let (_tx, rx) = human_input_channel();
        let mut agent = HumanAgent::new("Dave", rx, Some(Duration::from_millis(10))).with_seed(3);

        let out = agent
            .choose_move(&board, Color::Light, &moves)
            .expect("timeout is not an error");
        let chosen = out.chosen_move.expect("fallback move");
        assert!(moves.contains(&chosen));
        assert!(out.info_lines.iter().any(|l| l.contains("timeout")));
    }

    #[test]
    fn closed_channel_is_an_error() {
        let board = Board::new();
        let moves = board.legal_moves(Color::Light);
        let (tx, rx) = human_input_channel();
        drop(tx);
        let mut agent = HumanAgent::new("Erin", rx, None);
        assert_eq!(
            agent.choose_move(&board, Color::Light, &moves).unwrap_err(),
            CheckersError::InputChannelClosed
        );
    }
}
