//! Movement primitives shared by the piece geometry tables.
//!
//! An offset is a `(d_rank, d_file)` step. Leapers use each offset once;
//! sliders repeat one offset as a ray until the board edge.

use crate::game_state::chess_types::Square;

pub type Offset = (i8, i8);

/// On-board squares reached by a single step of each offset, in offset order.
#[inline]
pub fn step_targets(from: Square, offsets: &[Offset]) -> impl Iterator<Item = Square> + '_ {
    offsets
        .iter()
        .filter_map(move |&(d_rank, d_file)| from.offset(d_rank, d_file))
}

/// Squares along one direction from `from` (exclusive) to the board edge.
#[inline]
pub fn ray_squares(from: Square, direction: Offset) -> impl Iterator<Item = Square> {
    let (d_rank, d_file) = direction;
    std::iter::successors(from.offset(d_rank, d_file), move |sq| sq.offset(d_rank, d_file))
}

#[cfg(test)]
mod tests {
    use super::{ray_squares, step_targets};
    use crate::game_state::chess_types::Square;

    #[test]
    fn ray_runs_to_the_edge() {
        let a1 = Square::new(0, 0).expect("a1");
        assert_eq!(ray_squares(a1, (1, 0)).count(), 7);
        assert_eq!(ray_squares(a1, (-1, 0)).count(), 0);
        assert_eq!(ray_squares(a1, (1, 1)).last(), Square::new(7, 7));
    }

    #[test]
    fn step_targets_drop_off_board_squares() {
        let h8 = Square::new(7, 7).expect("h8");
        let targets: Vec<Square> = step_targets(h8, &[(1, 0), (0, -1), (-1, -1)]).collect();
        assert_eq!(targets, vec![Square::new(7, 6).expect("g8"), Square::new(6, 6).expect("g7")]);
    }
}
