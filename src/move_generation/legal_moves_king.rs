use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::KING_OFFSETS;

/// One-square king steps. Castling is never generated and attacked squares
/// are not filtered.
pub fn generate_king_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    push_step_moves(position, from, color, &KING_OFFSETS, out);
}
