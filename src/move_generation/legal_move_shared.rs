//! Helpers shared by the per-piece generators.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::moves::move_descriptions::{ray_squares, step_targets, Offset};

/// One move per offset whose target is on the board and not held by `color`.
#[inline]
pub fn push_step_moves(position: &Position, from: Square, color: Color, offsets: &[Offset], out: &mut Vec<Move>) {
    for to in step_targets(from, offsets) {
        if !position.is_color_on(to, color) {
            out.push(Move::new(from, to));
        }
    }
}

/// Slide along each direction until the edge or a blocker. An enemy blocker
/// is a capture target; an own blocker is not.
#[inline]
pub fn push_ray_moves(position: &Position, from: Square, color: Color, directions: &[Offset], out: &mut Vec<Move>) {
    for &direction in directions {
        for to in ray_squares(from, direction) {
            match position.piece_on(to) {
                None => out.push(Move::new(from, to)),
                Some(blocker) => {
                    if blocker.color != color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
        }
    }
}
