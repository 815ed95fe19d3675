use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = generate_queen_directions();

const fn generate_queen_directions() -> [(i8, i8); 8] {
    let mut table = [(0i8, 0i8); 8];
    let mut i = 0usize;

    while i < 4 {
        table[i] = ROOK_DIRECTIONS[i];
        table[i + 4] = BISHOP_DIRECTIONS[i];
        i += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::QUEEN_DIRECTIONS;
    use crate::game_state::chess_types::Square;
    use crate::moves::move_descriptions::ray_squares;

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        let d4 = Square::new(3, 3).expect("d4");
        let total: usize = QUEEN_DIRECTIONS
            .iter()
            .map(|&dir| ray_squares(d4, dir).count())
            .sum();
        assert_eq!(total, 27);
    }
}
