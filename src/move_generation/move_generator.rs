//! Pseudo-legal move generation for one side.
//!
//! Moves are produced per piece, piece by piece in rank-major order (rank 0
//! first, files left to right). Check, castling, en passant and promotion
//! are not considered.

use std::sync::Mutex;

use rayon::prelude::*;

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, position: &Position, color: Color) -> Vec<Move>;
}

/// Walks the ranks in order, so the output order is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialMoveGenerator;

impl MoveGenerator for SequentialMoveGenerator {
    fn generate_legal_moves(&self, position: &Position, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for rank in 0..BOARD_SIZE as u8 {
            generate_rank_moves(position, color, rank, &mut moves);
        }
        moves
    }
}

/// One rayon task per rank, merged into a shared list. The set of moves
/// matches the sequential generator; their order does not.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankParallelMoveGenerator;

impl MoveGenerator for RankParallelMoveGenerator {
    fn generate_legal_moves(&self, position: &Position, color: Color) -> Vec<Move> {
        let merged = Mutex::new(Vec::with_capacity(48));

        (0..BOARD_SIZE as u8).into_par_iter().for_each(|rank| {
            let mut local = Vec::new();
            generate_rank_moves(position, color, rank, &mut local);
            if local.is_empty() {
                return;
            }
            if let Ok(mut guard) = merged.lock() {
                guard.extend(local);
            }
        });

        merged.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Moves of every `color` piece standing on `rank`, file by file.
pub fn generate_rank_moves(position: &Position, color: Color, rank: u8, out: &mut Vec<Move>) {
    for (from, piece) in position.pieces_on_rank(rank) {
        if piece.color == color {
            generate_piece_moves(position, from, piece, out);
        }
    }
}

#[inline]
pub fn generate_piece_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(position, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(position, from, piece.color, out),
        PieceKind::Rook => generate_rook_moves(position, from, piece.color, out),
        PieceKind::Queen => generate_queen_moves(position, from, piece.color, out),
        PieceKind::King => generate_king_moves(position, from, piece.color, out),
    }
}
