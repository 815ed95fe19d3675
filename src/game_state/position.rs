//! Mailbox board state.
//!
//! `Position` is an 8x8 grid of optional pieces plus castling rights, the
//! en-passant target and the side to move. It is a plain value: `clone()` is a
//! full O(64) copy that shares nothing with the source, which is what lets
//! every search branch mutate its own copy without coordination.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{BOARD_SIZE, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveGenerator, RankParallelMoveGenerator};
use crate::moves::chess_move::Move;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_position::render_position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    // [rank][file], rank 0 is the first rank.
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],

    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub side_to_move: Color,
}

/// Result of trying a move on a copy of a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied(Position),
    /// The move could not be applied; the search skips this child.
    Rejected(ChessErrors),
}

impl Default for Position {
    fn default() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
            castling_rights: 0,
            en_passant_square: None,
            side_to_move: Color::White,
        }
    }
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).unwrap_or_default()
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece on `(rank, file)`; off-board coordinates read as empty.
    #[inline]
    pub fn piece_at(&self, rank: i8, file: i8) -> Option<Piece> {
        Square::new(rank, file).and_then(|sq| self.piece_on(sq))
    }

    /// Place or clear a piece; off-board coordinates are ignored.
    #[inline]
    pub fn set_piece_at(&mut self, rank: i8, file: i8, piece: Option<Piece>) {
        if let Some(sq) = Square::new(rank, file) {
            self.set_piece_on(sq, piece);
        }
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank as usize][square.file as usize]
    }

    #[inline]
    pub fn set_piece_on(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank as usize][square.file as usize] = piece;
    }

    /// True when `square` holds a piece of `color`.
    #[inline]
    pub fn is_color_on(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_on(square), Some(p) if p.color == color)
    }

    #[inline]
    pub fn has_castling_right(&self, flag: CastlingRights) -> bool {
        (self.castling_rights & flag) != 0
    }

    /// Occupied squares with their pieces, rank-major then file-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, slot)| {
                slot.map(|piece| {
                    (
                        Square {
                            rank: rank as u8,
                            file: file as u8,
                        },
                        piece,
                    )
                })
            })
        })
    }

    /// Occupied squares on one rank, file-major.
    pub fn pieces_on_rank(&self, rank: u8) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let row = self.squares.get(rank as usize);
        row.into_iter().flat_map(move |row| {
            row.iter().enumerate().filter_map(move |(file, slot)| {
                slot.map(|piece| {
                    (
                        Square {
                            rank,
                            file: file as u8,
                        },
                        piece,
                    )
                })
            })
        })
    }

    /// Relocate the moving piece, overwriting whatever stands on the destination.
    ///
    /// Captures are an implicit overwrite. A promotion piece, when present,
    /// replaces the moving piece on the destination. Castling rights, the
    /// en-passant target and the side to move are left untouched.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), ChessErrors> {
        let from_rank = mv.from_rank as i8;
        let from_file = mv.from_file as i8;
        let moving = self
            .piece_at(from_rank, from_file)
            .ok_or_else(|| ChessErrors::IllegalState {
                square: describe_square(mv.from_rank, mv.from_file),
            })?;

        let placed = mv.promotion.unwrap_or(moving);
        self.set_piece_at(from_rank, from_file, None);
        self.set_piece_at(mv.to_rank as i8, mv.to_file as i8, Some(placed));
        Ok(())
    }

    /// Apply `mv` to a private copy, reporting rejection instead of failing.
    pub fn after_move(&self, mv: &Move) -> ApplyOutcome {
        let mut next = self.clone();
        match next.apply_move(mv) {
            Ok(()) => ApplyOutcome::Applied(next),
            Err(reason) => ApplyOutcome::Rejected(reason),
        }
    }

    /// Pseudo-legal moves for `color`, generated in parallel by rank.
    pub fn generate_legal_moves(&self, color: Color) -> Vec<Move> {
        RankParallelMoveGenerator.generate_legal_moves(self, color)
    }
}

fn describe_square(rank: u8, file: u8) -> String {
    match Square::new(rank as i8, file as i8) {
        Some(sq) => square_to_algebraic(sq),
        None => format!("({rank},{file})"),
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_position(self))
    }
}
