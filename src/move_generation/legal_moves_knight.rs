use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::chess_move::Move;
use crate::moves::knight_moves::KNIGHT_OFFSETS;

pub fn generate_knight_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    push_step_moves(position, from, color, &KNIGHT_OFFSETS, out);
}
