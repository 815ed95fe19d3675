//! FEN-to-Position parser.
//!
//! Decodes piece placement, side to move, castling rights and the en-passant
//! target. Move counters are accepted but not retained. Missing trailing
//! fields fall back to defaults, and ranks or files absent from the placement
//! are left empty. Any side-to-move token other than `b` reads as White.

use crate::chess_errors::{ChessErrors, NotationError};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::{chess_types::*, position::Position};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(NotationError::MissingPlacement)?;
    let side_part = parts.next();
    let castling_part = parts.next();
    let en_passant_part = parts.next();

    let mut position = Position::new_empty();

    parse_board(board_part, &mut position)?;
    if let Some(side) = side_part {
        position.side_to_move = parse_side_to_move(side);
    }
    if let Some(castling) = castling_part {
        position.castling_rights = parse_castling_rights(castling);
    }
    if let Some(en_passant) = en_passant_part {
        position.en_passant_square = parse_en_passant_square(en_passant)?;
    }

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), NotationError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() > BOARD_SIZE {
        return Err(NotationError::TooManyRanks(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = (BOARD_SIZE - 1 - fen_rank_idx) as i8;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(NotationError::InvalidEmptyCount(ch));
                }
                file += empty_count as usize;
                if file > BOARD_SIZE {
                    return Err(NotationError::RankOverflow((*rank_str).to_owned()));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(NotationError::InvalidPieceChar(ch))?;

            if file >= BOARD_SIZE {
                return Err(NotationError::RankOverflow((*rank_str).to_owned()));
            }

            position.set_piece_at(board_rank, file as i8, Some(piece));
            file += 1;
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Color {
    match side_part {
        "b" => Color::Black,
        _ => Color::White,
    }
}

/// Any of `KQkq` sets the matching right; other characters are ignored.
fn parse_castling_rights(castling_part: &str) -> CastlingRights {
    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => {}
        }
    }

    rights
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, NotationError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}
