//! In-place make/undo.
//!
//! `make_move` is the only mutation path used after a position is loaded.
//! It updates the Zobrist key incrementally and records everything needed to
//! restore the previous state; `undo_move` reverses the most recent record.

use crate::game_state::chess_rules::{castling_lane_for_king_move, castling_right_for_rook_square};
use crate::game_state::chess_types::*;
use crate::game_state::zobrist::{
    castling_key, compute_zobrist_key, en_passant_file_key, piece_square_key, side_to_move_key,
};

/// Apply `mv` to `position`.
///
/// The move is trusted: legality is the move generator's job and nothing is
/// rejected here.
///
/// # Panics
///
/// Panics if the source square is empty.
pub fn make_move(position: &mut Position, mv: Move) {
    let from = mv.from();
    let to = mv.to();
    let mover = position.side_to_move;

    let Some(moved_piece) = position.piece_on(from) else {
        panic!("make_move: no piece on source square {from} for {mv}");
    };

    let mut record = UndoState {
        mv,
        moved_piece,
        captured: None,
        prev_castling_rights: position.castling_rights,
        prev_en_passant_square: position.en_passant_square,
        prev_halfmove_clock: position.halfmove_clock,
        prev_fullmove_number: position.fullmove_number,
    };

    let mut key = position.zobrist_key;

    if let Some(ep_square) = position.en_passant_square.take() {
        key ^= en_passant_file_key(ep_square % 8);
    }

    position.remove_piece(from);
    key ^= piece_square_key(moved_piece, from);

    if let Some(capture_square) = mv.captured_square() {
        if let Some(captured) = position.remove_piece(capture_square) {
            key ^= piece_square_key(captured, capture_square);
            record.captured = Some((captured, capture_square));
        }
    }

    let placed = match mv.promotion() {
        Some(kind) => Piece::new(mover, kind),
        None => moved_piece,
    };
    position.add_piece(to, placed);
    key ^= piece_square_key(placed, to);

    if moved_piece.kind == PieceKind::King {
        if let Some(lane) = castling_lane_for_king_move(mover, from, to) {
            let rook = Piece::new(mover, PieceKind::Rook);
            position.remove_piece(lane.rook_from);
            position.add_piece(lane.rook_to, rook);
            key ^= piece_square_key(rook, lane.rook_from) ^ piece_square_key(rook, lane.rook_to);
        }
    }

    update_castling_rights(position, moved_piece, from, record.captured);

    if mv.is_double_pawn_push() {
        position.en_passant_square = Some((from + to) / 2);
    }

    if moved_piece.kind == PieceKind::Pawn || record.captured.is_some() || mv.is_promotion() {
        position.halfmove_clock = 0;
    } else {
        position.halfmove_clock = position.halfmove_clock.saturating_add(1);
    }

    key ^= castling_key(record.prev_castling_rights ^ position.castling_rights);
    if let Some(ep_square) = position.en_passant_square {
        key ^= en_passant_file_key(ep_square % 8);
    }
    position.side_to_move = mover.opposite();
    key ^= side_to_move_key();

    position.zobrist_key = key;
    position.repetition.push(key);

    if mover == Color::Black {
        position.fullmove_number = position.fullmove_number.saturating_add(1);
    }
    position.undo_stack.push(record);
}

/// Revoke rights lost by moving a king, moving a rook off its corner, or
/// having a rook captured on its corner.
fn update_castling_rights(
    position: &mut Position,
    moved_piece: Piece,
    from: Square,
    captured: Option<(Piece, Square)>,
) {
    let mut revoked: CastlingRights = 0;

    match moved_piece.kind {
        PieceKind::King => {
            revoked |= match moved_piece.color {
                Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
                Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
            };
        }
        PieceKind::Rook => revoked |= castling_right_for_rook_square(moved_piece.color, from),
        _ => {}
    }

    if let Some((captured_piece, square)) = captured {
        if captured_piece.kind == PieceKind::Rook {
            revoked |= castling_right_for_rook_square(captured_piece.color, square);
        }
    }

    position.castling_rights &= !revoked;
}

/// Take back the most recent move.
///
/// The key is recomputed from scratch rather than unwound.
///
/// # Panics
///
/// Panics when there is no move to undo.
pub fn undo_move(position: &mut Position) {
    let Some(record) = position.undo_stack.pop() else {
        panic!("undo_move: history is empty");
    };

    let mv = record.mv;
    let from = mv.from();
    let to = mv.to();
    let mover = record.moved_piece.color;

    if record.is_castling() {
        if let Some(lane) = castling_lane_for_king_move(mover, from, to) {
            position.remove_piece(lane.rook_to);
            position.add_piece(lane.rook_from, Piece::new(mover, PieceKind::Rook));
        }
    }

    position.remove_piece(to);
    position.add_piece(from, record.moved_piece);

    if let Some((captured, square)) = record.captured {
        position.add_piece(square, captured);
    }

    position.castling_rights = record.prev_castling_rights;
    position.en_passant_square = record.prev_en_passant_square;
    position.halfmove_clock = record.prev_halfmove_clock;
    position.fullmove_number = record.prev_fullmove_number;
    position.side_to_move = mover;

    position.zobrist_key = compute_zobrist_key(position);
    position.repetition.pop();
}
