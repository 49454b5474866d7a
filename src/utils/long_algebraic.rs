//! Long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Text is resolved against the legal moves of a position, so the flags of
//! the returned [`Move`] (capture, en passant, double push) always come from
//! the generator rather than from the text.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::utils::algebraic::algebraic_to_square;

/// Source, destination and optional promotion kind parsed from move text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

#[inline]
pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}

/// Parse `<from><to>[n|b|r|q]` without consulting a position.
pub fn parse_long_algebraic(text: &str) -> ChessResult<MoveText> {
    let invalid = || ChessError::InvalidMove {
        text: text.to_owned(),
    };

    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_letter(ch) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(invalid()),
        },
    };

    Ok(MoveText {
        from,
        to,
        promotion,
    })
}

/// Resolve move text to one of the legal moves of `position`.
///
/// A promotion written without a piece letter promotes to a queen.
pub fn find_legal_move(position: &mut Position, text: &str) -> ChessResult<Move> {
    let parsed = parse_long_algebraic(text.trim())?;
    let wanted = parsed.promotion.or(Some(PieceKind::Queen));

    generate_legal_moves(position)
        .into_iter()
        .filter(|mv| mv.from() == parsed.from && mv.to() == parsed.to)
        .find(|mv| !mv.is_promotion() || mv.promotion() == wanted)
        .ok_or_else(|| ChessError::IllegalMove {
            text: text.trim().to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn resolves_flags_from_the_position() {
        let mut position = Position::new_game();
        let mv = find_legal_move(&mut position, "e2e4").expect("e2e4 should be legal");
        assert!(mv.is_double_pawn_push());
        assert_eq!(move_to_long_algebraic(mv), "e2e4");

        let mut position = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let mv = find_legal_move(&mut position, "e5d6").expect("en passant should be legal");
        assert!(mv.is_en_passant());
        assert!(mv.is_capture());
    }

    #[test]
    fn promotion_letter_selects_piece_and_defaults_to_queen() {
        let mut position = parse_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let knight = find_legal_move(&mut position, "a7a8n").expect("under-promotion should be legal");
        assert_eq!(knight.promotion(), Some(PieceKind::Knight));
        assert_eq!(move_to_long_algebraic(knight), "a7a8n");

        let queen = find_legal_move(&mut position, "a7a8").expect("bare promotion should be legal");
        assert_eq!(queen.promotion(), Some(PieceKind::Queen));
    }

    #[test]
    fn malformed_text_is_invalid_and_impossible_moves_are_illegal() {
        let mut position = Position::new_game();
        for text in ["", "e2", "e2e9", "e2e4k", "e2e4qq", "é2e4"] {
            assert_eq!(
                find_legal_move(&mut position, text),
                Err(ChessError::InvalidMove {
                    text: text.to_owned()
                }),
                "{text:?}"
            );
        }
        assert_eq!(
            find_legal_move(&mut position, "e2e5"),
            Err(ChessError::IllegalMove {
                text: "e2e5".to_owned()
            })
        );
        assert_eq!(
            find_legal_move(&mut position, "e7e5"),
            Err(ChessError::IllegalMove {
                text: "e7e5".to_owned()
            })
        );
    }
}
