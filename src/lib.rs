//! Crate root module declarations for the Plum Checkers engine project.
//!
//! This file exposes all top-level subsystems (board state, move generation,
//! search, agents, the turn controller and utility helpers) so binaries,
//! benches and external tooling can import stable module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod piece;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_description;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_config;
    pub mod engine_human;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod move_selection;
}

pub mod controller {
    pub mod game_controller;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod render_board;
}
