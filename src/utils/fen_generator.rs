//! Position-to-FEN encoder.
//!
//! Inverse of `parse_fen` for placement, side to move, castling rights and
//! en-passant target. Move counters are not modeled and are written as `0 1`.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::{chess_types::*, position::Position};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights);
    let en_passant = position
        .en_passant_square
        .map(square_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    format!("{board} {side_to_move} {castling} {en_passant} 0 1")
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..BOARD_SIZE as i8).rev() {
        let mut empty_count = 0u8;

        for file in 0..BOARD_SIZE as i8 {
            if let Some(piece) = position.piece_at(rank, file) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    for (flag, ch) in [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ] {
        if (rights & flag) != 0 {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, STARTING_POSITION_FEN);
        assert_eq!(parse_fen(&generated).expect("generated FEN should parse"), parsed);
    }

    #[test]
    fn counters_are_defaulted() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        assert_eq!(
            generate_fen(&parsed),
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 0 1"
        );
    }

    #[test]
    fn en_passant_target_round_trips() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let parsed = parse_fen(fen).expect("FEN should parse");
        assert_eq!(parsed.en_passant_square, Square::new(5, 3));
        assert_eq!(generate_fen(&parsed), "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    }

    #[test]
    fn random_positions_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for _ in 0..200 {
            let mut position = Position::new_empty();
            for rank in 0..8 {
                for file in 0..8 {
                    if rng.random_bool(0.3) {
                        let kind = PieceKind::ALL[rng.random_range(0..6)];
                        let color = if rng.random_bool(0.5) { Color::White } else { Color::Black };
                        position.set_piece_at(rank, file, Some(Piece::new(kind, color)));
                    }
                }
            }
            position.castling_rights = rng.random_range(0..16);
            position.side_to_move = if rng.random_bool(0.5) { Color::White } else { Color::Black };
            position.en_passant_square = if rng.random_bool(0.5) {
                Square::new(rng.random_range(0..8), rng.random_range(0..8))
            } else {
                None
            };

            let reparsed = parse_fen(&generate_fen(&position)).expect("generated FEN should parse");
            assert_eq!(reparsed, position);
        }
    }
}
