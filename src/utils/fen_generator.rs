use crate::game_state::bitboard::square_at;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

/// Serialize `position` as a canonical six-field FEN record.
pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights);
    let en_passant = generate_en_passant_field(position.en_passant_square);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        position.halfmove_clock,
        position.fullmove_number
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match position.piece_on(square_at(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
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

/// Castling field text (`KQkq` subset, or `-`).
pub fn generate_castling_field(castling_rights: CastlingRights) -> String {
    let field: String = [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ]
    .into_iter()
    .filter(|(right, _)| castling_rights & right != 0)
    .map(|(_, ch)| ch)
    .collect();

    if field.is_empty() {
        "-".to_owned()
    } else {
        field
    }
}

/// En-passant field text (a square, or `-`).
pub fn generate_en_passant_field(en_passant_square: Option<Square>) -> String {
    en_passant_square
        .and_then(|sq| square_to_algebraic(sq).ok())
        .unwrap_or_else(|| "-".to_owned())
}
