pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

#[cfg(test)]
mod tests {
    use super::KING_OFFSETS;
    use crate::game_state::chess_types::Square;
    use crate::moves::move_descriptions::step_targets;

    #[test]
    fn king_targets_by_square() {
        let e4 = Square::new(3, 4).expect("e4");
        let h1 = Square::new(0, 7).expect("h1");
        assert_eq!(step_targets(e4, &KING_OFFSETS).count(), 8);
        assert_eq!(step_targets(h1, &KING_OFFSETS).count(), 3);
    }
}
