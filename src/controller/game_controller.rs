//! Turn controller.
//!
//! Owns the live board, whose turn it is and the game status. Moves come in
//! either directly (`submit_move`) or from an `Agent` (`play_agent_turn`); in
//! both cases they are checked against the legal set of the side to move
//! before the board is touched.

use tracing::{debug, info, warn};

use crate::checkers_errors::CheckersError;
use crate::engines::engine_trait::Agent;
use crate::game_state::checkers_rules::GameRules;
use crate::game_state::checkers_types::{Board, Color};
use crate::moves::move_description::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
    Paused,
}

/// One applied move and the side that played it.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord {
    pub color: Color,
    pub mv: Move,
}

#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    current: Color,
    first_to_move: Color,
    status: GameStatus,
    history: Vec<TurnRecord>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Standard game, Light to move.
    pub fn new() -> Self {
        Self::with_rules(GameRules::default())
    }

    pub fn with_rules(rules: GameRules) -> Self {
        Self::from_board(Board::with_rules(rules), Color::Light)
    }

    /// Continue from an arbitrary position with `to_move` on turn.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let status = if board.is_terminal() {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        };
        Self {
            board,
            current: to_move,
            first_to_move: to_move,
            status,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_color(&self) -> Color {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves(self.current)
    }

    /// Apply `mv` for the side to move if it is one of its legal moves.
    pub fn submit_move(&mut self, mv: &Move) -> Result<(), CheckersError> {
        if self.status != GameStatus::Playing {
            return Err(CheckersError::GameNotInProgress(self.status));
        }

        let legal_moves = self.legal_moves();
        let Some(legal) = legal_moves.iter().find(|m| *m == mv) else {
            warn!(color = %self.current, mv = %mv.to_compact_string(), "rejected illegal move");
            return Err(CheckersError::IllegalMove(mv.to_compact_string()));
        };

        self.board.apply_move(legal)?;
        self.history.push(TurnRecord {
            color: self.current,
            mv: legal.clone(),
        });
        debug!(
            color = %self.current,
            mv = %legal.to_compact_string(),
            ply = self.history.len(),
            "move applied"
        );
        self.current = self.current.opposite();

        if self.board.is_terminal() {
            self.status = GameStatus::GameOver;
            info!(winner = ?self.board.winner(), plies = self.history.len(), "game over");
        }
        Ok(())
    }

    /// Let `agent` pick a move for the side to move and submit it.
    ///
    /// Returns the applied move, or `None` when the agent had nothing to play.
    pub fn play_agent_turn(&mut self, agent: &mut dyn Agent) -> Result<Option<Move>, CheckersError> {
        if self.status != GameStatus::Playing {
            return Err(CheckersError::GameNotInProgress(self.status));
        }

        let legal_moves = self.legal_moves();
        let out = agent.choose_move(&self.board, self.current, &legal_moves)?;
        for line in &out.info_lines {
            debug!(agent = agent.name(), "{line}");
        }

        let Some(mv) = out.chosen_move else {
            return Ok(None);
        };
        self.submit_move(&mv)?;
        Ok(Some(mv))
    }

    /// Take back the last move. A finished game becomes playable again.
    pub fn undo(&mut self) -> bool {
        if !self.board.undo_last_move() {
            return false;
        }
        self.current = match self.history.pop() {
            Some(record) => record.color,
            None => self.current.opposite(),
        };
        if self.status == GameStatus::GameOver {
            self.status = GameStatus::Playing;
        }
        debug!(color = %self.current, "move undone");
        true
    }

    pub fn new_game(&mut self) {
        self.board.reset();
        self.current = self.first_to_move;
        self.status = GameStatus::Playing;
        self.history.clear();
        info!(first = %self.current, "new game");
    }

    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.status = GameStatus::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Playing;
        true
    }

    /// Winner of a finished game; `None` while playing or after a draw.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::GameOver => self.board.winner(),
            _ => None,
        }
    }

    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::Playing => format!("Current player: {}", self.current),
            GameStatus::Paused => "Game paused".to_owned(),
            GameStatus::GameOver => match self.winner() {
                Some(color) => format!("{color} wins!"),
                None => "Game ended in a draw!".to_owned(),
            },
        }
    }
}
