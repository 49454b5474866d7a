use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

/// King square for `color`, or `None` on a king-less board.
#[inline]
pub fn try_king_square(position: &Position, color: Color) -> Option<Square> {
    let kings = position.pieces[color.index()][PieceKind::King.index()];
    if kings == 0 {
        None
    } else {
        Some(kings.trailing_zeros() as Square)
    }
}

/// King square for `color`.
///
/// # Panics
///
/// Panics if `color` has no king on the board.
#[inline]
pub fn king_square(position: &Position, color: Color) -> Square {
    match try_king_square(position, color) {
        Some(square) => square,
        None => panic!("king_square: no {} king on the board", color.name()),
    }
}

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = try_king_square(position, color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

/// True when any piece of `attacker_color` attacks `square`.
///
/// Attacks are looked up from the target outward: a pawn of the attacker
/// reaches `square` exactly when a defending pawn on `square` would capture
/// onto it, and likewise for the symmetric piece classes.
pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    let attackers = &position.pieces[attacker_color.index()];

    let pawns = attackers[PieceKind::Pawn.index()];
    if pawn_attacks(attacker_color.opposite(), square) & pawns != 0 {
        return true;
    }

    if knight_attacks(square) & attackers[PieceKind::Knight.index()] != 0 {
        return true;
    }

    if king_attacks(square) & attackers[PieceKind::King.index()] != 0 {
        return true;
    }

    let queens = attackers[PieceKind::Queen.index()];

    let bishops_queens = attackers[PieceKind::Bishop.index()] | queens;
    if bishops_queens != 0 && bishop_attacks(square, position.occupancy_all) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = attackers[PieceKind::Rook.index()] | queens;
    if rooks_queens != 0 && rook_attacks(square, position.occupancy_all) & rooks_queens != 0 {
        return true;
    }

    false
}
