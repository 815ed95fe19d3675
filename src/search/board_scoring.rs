//! Pluggable static evaluation.
//!
//! Search stays independent of the scoring heuristic by delegating leaf
//! scores to this trait.

use crate::game_state::{chess_types::*, position::Position};

pub trait BoardScorer: Send + Sync {
    /// Absolute score: positive favors White, negative favors Black.
    fn score(&self, position: &Position) -> i32;
}

/// Pure material count with a king large enough to dominate everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100_000_000,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        position
            .pieces()
            .map(|(_, piece)| {
                let value = Self::piece_value(piece.kind);
                match piece.color {
                    Color::White => value,
                    Color::Black => -value,
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer};
    use crate::game_state::position::Position;

    #[test]
    fn lone_rook_against_king_scores_five() {
        let position = Position::from_fen("8/8/8/8/8/8/8/R6k w - - 0 1").expect("FEN should parse");
        // Black king -100_000_000 plus white rook 5.
        assert_eq!(MaterialScorer.score(&position), 5 - 100_000_000);
    }

    #[test]
    fn balanced_material_scores_zero() {
        assert_eq!(MaterialScorer.score(&Position::new_game()), 0);
        assert_eq!(MaterialScorer.score(&Position::new_empty()), 0);
    }

    #[test]
    fn scores_are_signed_by_color() {
        let white_up = Position::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let black_up = Position::from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&white_up), 9);
        assert_eq!(MaterialScorer.score(&black_up), -9);
    }
}
