use crate::game_state::chess_types::Color;

/// File deltas of the two diagonal capture targets.
pub const PAWN_CAPTURE_FILES: [i8; 2] = [-1, 1];

/// Rank a pawn of `color` starts on and may double-step from.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_start_rank;
    use crate::game_state::chess_types::Color;

    #[test]
    fn start_ranks_mirror() {
        assert_eq!(pawn_start_rank(Color::White), 1);
        assert_eq!(pawn_start_rank(Color::Black), 6);
        assert_eq!(pawn_start_rank(Color::White) + pawn_start_rank(Color::Black), 7);
    }
}
