//! Pawn pushes and diagonal captures.
//!
//! No en passant and no promotion: a pawn reaching the last rank moves there
//! as a plain pawn.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::{pawn_start_rank, PAWN_CAPTURE_FILES};

pub fn generate_pawn_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0) {
        if position.piece_on(one).is_none() {
            out.push(Move::new(from, one));

            if from.rank == pawn_start_rank(color) {
                if let Some(two) = one.offset(forward, 0) {
                    if position.piece_on(two).is_none() {
                        out.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for d_file in PAWN_CAPTURE_FILES {
        if let Some(target) = from.offset(forward, d_file) {
            if position.is_color_on(target, color.opposite()) {
                out.push(Move::new(from, target));
            }
        }
    }
}
