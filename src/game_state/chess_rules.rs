//! Canonical chess-rule constants.
//!
//! Stores static literals such as the standard starting position used to
//! initialize positions and pin move generation in tests.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Ranks and files per side of the board.
pub const BOARD_SIZE: usize = 8;
