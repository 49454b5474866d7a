//! FEN-to-Position parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string:
//! piece bitboards, rights, en-passant square and clocks, then the derived
//! occupancy sets, hash and repetition history.

use log::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::bitboard::{rank_of, square_at, square_bit};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// Parse a FEN record.
///
/// The board, side, castling and en-passant fields are required; the
/// halfmove clock and fullmove number default to `0` and `1`.
pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ChessError::fen(format!(
            "expected at least 4 fields, found {}",
            fields.len()
        )));
    }
    if fields.len() > 6 {
        return Err(ChessError::fen("FEN has extra trailing fields"));
    }

    let mut position = Position::new_empty();

    parse_board(fields[0], &mut position)?;
    position.refresh_occupancy();
    position.side_to_move = parse_side_to_move(fields[1])?;
    position.castling_rights = parse_castling_rights(fields[2])?;
    position.en_passant_square = parse_en_passant_square(fields[3], &position)?;

    if let Some(halfmove_part) = fields.get(4) {
        position.halfmove_clock = halfmove_part
            .parse::<u16>()
            .map_err(|_| ChessError::fen(format!("invalid halfmove clock: {halfmove_part}")))?;
    }
    if let Some(fullmove_part) = fields.get(5) {
        let fullmove = fullmove_part
            .parse::<u16>()
            .map_err(|_| ChessError::fen(format!("invalid fullmove number: {fullmove_part}")))?;
        position.fullmove_number = fullmove.max(1);
    }

    position.reset_history();

    debug!("loaded position from FEN '{fen}'");
    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::fen("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = (7 - fen_rank_idx) as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::fen(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(ChessError::fen("board rank has too many files"));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                ChessError::fen(format!("invalid piece character '{ch}' in board layout"))
            })?;

            if file >= 8 {
                return Err(ChessError::fen("board rank has too many files"));
            }

            let sq = square_at(file, board_rank);
            position.pieces[piece.color.index()][piece.kind.index()] |= square_bit(sq);
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::fen("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::fen(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(ChessError::fen(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// The target must sit on the sixth rank of the side to move, be empty, and
/// have the enemy pawn that just double-pushed directly behind it.
fn parse_en_passant_square(en_passant_part: &str, position: &Position) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| ChessError::fen(format!("invalid en-passant square: {en_passant_part}")))?;

    let side = position.side_to_move;
    let (target_rank, pushed_pawn_square) = match side {
        Color::White => (5, square.wrapping_sub(8)),
        Color::Black => (2, square + 8),
    };
    if rank_of(square) != target_rank {
        return Err(ChessError::fen(format!(
            "en-passant square {en_passant_part} is on the wrong rank for {}",
            side.name()
        )));
    }
    if position.occupancy_all & square_bit(square) != 0 {
        return Err(ChessError::fen(format!("en-passant square {en_passant_part} is occupied")));
    }
    if position.pieces_of(side.opposite(), PieceKind::Pawn) & square_bit(pushed_pawn_square) == 0 {
        return Err(ChessError::fen(format!(
            "no pawn stands behind en-passant square {en_passant_part}"
        )));
    }

    Ok(Some(square))
}
