use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    push_ray_moves(position, from, color, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::position::Position;

    #[test]
    fn bishop_slides_until_blocked() {
        let game = Position::from_fen("8/8/8/8/8/8/3P4/2B5 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_bishop_moves(&game, Square::new(0, 2).expect("c1"), Color::White, &mut out);
        let names: Vec<String> = out.iter().map(|mv| mv.to_long_algebraic()).collect();
        assert_eq!(names, vec!["c1b2", "c1a3"]);
    }

    #[test]
    fn bishop_stops_on_enemy_blocker() {
        let game = Position::from_fen("8/8/8/8/8/4p3/8/2B5 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_bishop_moves(&game, Square::new(0, 2).expect("c1"), Color::White, &mut out);
        let names: Vec<String> = out.iter().map(|mv| mv.to_long_algebraic()).collect();
        assert_eq!(names, vec!["c1d2", "c1e3", "c1b2", "c1a3"]);
    }
}
