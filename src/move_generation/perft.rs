//! Move-tree node counts for validating the generator.
//!
//! The generator is pseudo-legal, so the counts only match standard perft
//! tables while no side can capture a king or make a special move.

use rayon::prelude::*;

use crate::game_state::chess_types::Color;
use crate::game_state::position::{ApplyOutcome, Position};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, position: &Position, color: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(position, color) {
        let is_capture = position.piece_on(mv.to_square()).is_some();
        if let ApplyOutcome::Applied(child) = position.after_move(&mv) {
            if depth == 1 {
                total.nodes += 1;
                total.captures += u64::from(is_capture);
            } else {
                total.merge(perft(generator, &child, color.opposite(), depth - 1));
            }
        }
    }
    total
}

/// Same counts as [`perft`], with each root move searched as its own rayon task.
pub fn perft_root_parallel<G: MoveGenerator>(generator: &G, position: &Position, color: Color, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft(generator, position, color, depth);
    }

    generator
        .generate_legal_moves(position, color)
        .par_iter()
        .map(|mv| match position.after_move(mv) {
            ApplyOutcome::Applied(child) => perft(generator, &child, color.opposite(), depth - 1),
            ApplyOutcome::Rejected(_) => PerftCounts::default(),
        })
        .reduce(PerftCounts::default, |mut acc, counts| {
            acc.merge(counts);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_root_parallel, PerftCounts};
    use crate::game_state::chess_types::Color;
    use crate::game_state::position::Position;
    use crate::move_generation::move_generator::SequentialMoveGenerator;

    #[test]
    fn opening_perft_counts() {
        let game = Position::new_game();
        let nodes: Vec<u64> = (0..=3)
            .map(|depth| perft(&SequentialMoveGenerator, &game, Color::White, depth).nodes)
            .collect();
        assert_eq!(nodes, vec![1, 20, 400, 8902]);
        assert_eq!(perft(&SequentialMoveGenerator, &game, Color::White, 3).captures, 34);
    }

    #[test]
    fn root_parallel_matches_single_thread() {
        let game = Position::from_fen("3B1k2/b1K1p3/8/1b4p1/pr2P1R1/2P3P1/2P5/4N1R1 w - - 0 1")
            .expect("FEN should parse");
        for depth in 1..=3 {
            assert_eq!(
                perft_root_parallel(&SequentialMoveGenerator, &game, Color::White, depth),
                perft(&SequentialMoveGenerator, &game, Color::White, depth)
            );
        }
    }

    #[test]
    fn empty_board_has_no_leaves() {
        let game = Position::new_empty();
        assert_eq!(perft(&SequentialMoveGenerator, &game, Color::White, 2), PerftCounts::default());
    }
}
