use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::chess_move::Move;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    push_ray_moves(position, from, color, &QUEEN_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::position::Position;

    #[test]
    fn lone_queen_in_the_centre() {
        let game = Position::from_fen("8/8/8/8/3Q4/8/8/8 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_queen_moves(&game, Square::new(3, 3).expect("d4"), Color::White, &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn opening_queen_is_boxed_in() {
        let game = Position::new_game();
        let mut out = Vec::new();
        generate_queen_moves(&game, Square::new(0, 3).expect("d1"), Color::White, &mut out);
        assert!(out.is_empty());
    }
}
