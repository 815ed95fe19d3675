//! A move between two squares, with an optional promotion piece.

use std::fmt;

use crate::game_state::chess_types::{Piece, Square};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from_file: u8,
    pub from_rank: u8,
    pub to_file: u8,
    pub to_rank: u8,
    /// Piece placed on the destination instead of the mover. Never produced
    /// by the generator; honored when a move is applied.
    pub promotion: Option<Piece>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from_file: from.file,
            from_rank: from.rank,
            to_file: to.file,
            to_rank: to.rank,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(mut self, piece: Piece) -> Self {
        self.promotion = Some(piece);
        self
    }

    #[inline]
    pub const fn from_square(&self) -> Square {
        Square {
            rank: self.from_rank,
            file: self.from_file,
        }
    }

    #[inline]
    pub const fn to_square(&self) -> Square {
        Square {
            rank: self.to_rank,
            file: self.to_file,
        }
    }

    /// Coordinate notation such as `e2e4` or `a7a8q`.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = format!(
            "{}{}",
            square_to_algebraic(self.from_square()),
            square_to_algebraic(self.to_square())
        );
        if let Some(piece) = self.promotion {
            out.push(piece.kind.letter());
        }
        out
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            square_to_algebraic(self.from_square()),
            square_to_algebraic(self.to_square())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(rank: i8, file: i8) -> Square {
        Square::new(rank, file).expect("on board")
    }

    #[test]
    fn display_uses_arrow_notation() {
        let mv = Move::new(sq(1, 4), sq(3, 4));
        assert_eq!(mv.to_string(), "e2 -> e4");
        assert_eq!(mv.to_long_algebraic(), "e2e4");
    }

    #[test]
    fn squares_round_trip_through_the_move() {
        let mv = Move::new(sq(6, 0), sq(7, 7));
        assert_eq!(mv.from_square(), sq(6, 0));
        assert_eq!(mv.to_square(), sq(7, 7));
        assert_eq!(mv.promotion, None);
    }

    #[test]
    fn promotion_appends_lowercase_letter() {
        let mv = Move::new(sq(6, 0), sq(7, 0)).with_promotion(Piece::new(PieceKind::Queen, Color::White));
        assert_eq!(mv.to_long_algebraic(), "a7a8q");
        assert_eq!(mv.to_string(), "a7 -> a8");
    }
}
