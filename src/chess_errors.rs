//! Errors used throughout the engine.
//!
//! `ChessErrors` is the single error type returned by position construction
//! and move application. Notation problems carry a `NotationError` with the
//! offending token so callers can report exactly what failed to parse.
//!
//! Usage guidelines:
//! - `Notation` errors are fatal to the decode call and always surface to the
//!   caller; nothing partially decoded is returned.
//! - `IllegalState` is returned by `Position::apply_move` when the source
//!   square is empty. Inside the search this is absorbed as a skipped branch
//!   (see `Position::after_move`), but direct callers always see it.

use thiserror::Error;

/// Failure modes while decoding FEN-like notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// The notation string had no placement field at all.
    #[error("missing board layout in notation")]
    MissingPlacement,

    /// More than eight slash-separated ranks were supplied.
    #[error("board layout has {0} ranks, at most 8 allowed")]
    TooManyRanks(usize),

    /// A rank described more than eight files.
    ///
    /// Payload: the offending rank text.
    #[error("board rank '{0}' has more than 8 files")]
    RankOverflow(String),

    /// An empty-square run digit outside `1..=8`.
    #[error("invalid empty-square count '{0}'")]
    InvalidEmptyCount(char),

    /// A placement character that is neither a digit nor a known piece letter.
    #[error("invalid piece character '{0}' in board layout")]
    InvalidPieceChar(char),

    /// En-passant field that is neither `-` nor a square such as `e3`.
    #[error("invalid en-passant square: {0}")]
    InvalidEnPassant(String),
}

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    #[error("invalid notation: {0}")]
    Notation(#[from] NotationError),

    /// Tried to move a piece from an empty square.
    ///
    /// Payload: the source square in algebraic form.
    #[error("illegal state: no piece on source square {square}")]
    IllegalState { square: String },
}

#[cfg(test)]
mod tests {
    use super::{ChessErrors, NotationError};

    #[test]
    fn notation_errors_convert_and_render() {
        let err: ChessErrors = NotationError::InvalidPieceChar('x').into();
        assert_eq!(err, ChessErrors::Notation(NotationError::InvalidPieceChar('x')));
        assert_eq!(
            err.to_string(),
            "invalid notation: invalid piece character 'x' in board layout"
        );
    }

    #[test]
    fn illegal_state_names_square() {
        let err = ChessErrors::IllegalState {
            square: "e4".to_owned(),
        };
        assert!(err.to_string().contains("e4"));
    }
}
