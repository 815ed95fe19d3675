use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    push_ray_moves(position, from, color, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::position::Position;

    #[test]
    fn rook_reaches_enemy_king_on_its_rank() {
        let game = Position::from_fen("8/8/8/8/8/8/8/R6k w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&game, Square::new(0, 0).expect("a1"), Color::White, &mut out);
        let names: Vec<String> = out.iter().map(|mv| mv.to_long_algebraic()).collect();
        assert_eq!(out.len(), 14);
        assert!(names.contains(&"a1a8".to_owned()));
        assert!(names.contains(&"a1h1".to_owned()));
    }

    #[test]
    fn boxed_in_rook_has_no_moves() {
        let game = Position::new_game();
        let mut out = Vec::new();
        generate_rook_moves(&game, Square::new(0, 0).expect("a1"), Color::White, &mut out);
        assert!(out.is_empty());
    }
}
