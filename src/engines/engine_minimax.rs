//! Computer opponent backed by fixed-depth minimax.

use tracing::{debug, instrument};

use crate::checkers_errors::CheckersError;
use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_trait::{Agent, AgentOutput};
use crate::game_state::checkers_types::{Board, Color};
use crate::moves::move_description::Move;
use crate::search::board_scoring::{BoardScorer, PieceCountScorer};
use crate::search::minimax::{minimax_search, SearchConfig};

pub struct MinimaxAgent {
    name: String,
    config: SearchConfig,
    scorer: Box<dyn BoardScorer>,
}

impl MinimaxAgent {
    /// Piece-count evaluation searched `depth` plies deep.
    pub fn new(depth: u8) -> Self {
        Self {
            name: "Minimax".to_owned(),
            config: SearchConfig {
                max_depth: depth,
                alpha_beta: false,
            },
            scorer: Box::new(PieceCountScorer),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            name: "Minimax".to_owned(),
            config: config.search_config(),
            scorer: config.scorer.build(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_scorer(mut self, scorer: Box<dyn BoardScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.config.alpha_beta = enabled;
        self
    }

    pub fn search_depth(&self) -> u8 {
        self.config.max_depth
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(SearchConfig::default().max_depth)
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip_all, fields(agent = %self.name, %color, moves = legal_moves.len()))]
    fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        legal_moves: &[Move],
    ) -> Result<AgentOutput, CheckersError> {
        let mut out = AgentOutput::default();
        if legal_moves.is_empty() {
            return Ok(out);
        }

        let result = minimax_search(board, color, legal_moves, self.scorer.as_ref(), self.config)?;
        debug!(
            depth = self.config.max_depth,
            nodes = result.nodes,
            score = result.best_score,
            "minimax agent picked a move"
        );

        out.info_lines.push(format!(
            "info depth {} score {} nodes {}",
            self.config.max_depth, result.best_score, result.nodes
        ));
        out.chosen_move = result.best_move;
        Ok(out)
    }
}
