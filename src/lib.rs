//! Crate root module declarations for the Sentinel Mind search engine.
//!
//! Exposes the top-level subsystems (position model, move generation, static
//! evaluation, minimax search and the root search driver, plus notation
//! helpers) so the binary, benches, and external tooling can import stable
//! module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod threading;
}

pub mod engines {
    pub mod engine_minimax;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_position;
}

pub use chess_errors::{ChessErrors, NotationError};
pub use engines::engine_minimax::{MinimaxEngine, SearchStats};
pub use game_state::chess_types::{Color, Piece, PieceKind, Square};
pub use game_state::position::{ApplyOutcome, Position};
pub use moves::chess_move::Move;
