//! Set-wise pawn move generation.
//!
//! All pawns of the side to move are advanced at once by shifting the pawn
//! set; each destination bit is mapped back to its source square with a
//! fixed offset per direction.

use crate::game_state::bitboard::*;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT};
use crate::moves::pawn_moves::pawn_attacks;

/// Direction-dependent masks and offsets for one color.
struct PawnGeometry {
    push: fn(u64) -> u64,
    capture_west: fn(u64) -> u64,
    capture_east: fn(u64) -> u64,
    push_offset: i8,
    west_offset: i8,
    east_offset: i8,
    double_push_rank: u64,
    promotion_rank: u64,
}

const WHITE_GEOMETRY: PawnGeometry = PawnGeometry {
    push: shift_north,
    capture_west: shift_north_west,
    capture_east: shift_north_east,
    push_offset: 8,
    west_offset: 7,
    east_offset: 9,
    double_push_rank: RANK_3,
    promotion_rank: RANK_8,
};

const BLACK_GEOMETRY: PawnGeometry = PawnGeometry {
    push: shift_south,
    capture_west: shift_south_west,
    capture_east: shift_south_east,
    push_offset: -8,
    west_offset: -9,
    east_offset: -7,
    double_push_rank: RANK_6,
    promotion_rank: RANK_1,
};

#[inline]
fn source_of(to: Square, offset: i8) -> Square {
    (to as i8 - offset) as Square
}

/// Emit one move per destination bit, expanding promotion-rank targets into
/// the four promotion choices.
fn push_pawn_targets(targets: u64, offset: i8, flags: u32, promotion_rank: u64, out: &mut Vec<Move>) {
    let mut normal = targets & !promotion_rank;
    while normal != 0 {
        let to = normal.trailing_zeros() as Square;
        out.push(Move::new(source_of(to, offset), to, flags, None));
        normal &= normal - 1;
    }

    let mut promotions = targets & promotion_rank;
    while promotions != 0 {
        let to = promotions.trailing_zeros() as Square;
        let from = source_of(to, offset);
        for kind in PieceKind::PROMOTIONS {
            out.push(Move::new(from, to, flags, Some(kind)));
        }
        promotions &= promotions - 1;
    }
}

pub fn generate_pawn_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move;
    let geometry = match side {
        Color::White => &WHITE_GEOMETRY,
        Color::Black => &BLACK_GEOMETRY,
    };

    let pawns = position.pieces[side.index()][PieceKind::Pawn.index()];
    if pawns == 0 {
        return;
    }
    let enemy_occ = position.occupancy_by_color[side.opposite().index()];
    let empty = !position.occupancy_all;

    // pushes
    let single = (geometry.push)(pawns) & empty;
    push_pawn_targets(single, geometry.push_offset, 0, geometry.promotion_rank, out);

    let mut double = (geometry.push)(single & geometry.double_push_rank) & empty;
    while double != 0 {
        let to = double.trailing_zeros() as Square;
        out.push(Move::new(
            source_of(to, 2 * geometry.push_offset),
            to,
            FLAG_DOUBLE_PAWN_PUSH,
            None,
        ));
        double &= double - 1;
    }

    // captures
    let west = (geometry.capture_west)(pawns) & enemy_occ;
    push_pawn_targets(west, geometry.west_offset, FLAG_CAPTURE, geometry.promotion_rank, out);

    let east = (geometry.capture_east)(pawns) & enemy_occ;
    push_pawn_targets(east, geometry.east_offset, FLAG_CAPTURE, geometry.promotion_rank, out);

    // en passant
    if let Some(ep_square) = position.en_passant_square {
        let mut capturers = pawn_attacks(side.opposite(), ep_square) & pawns;
        while capturers != 0 {
            let from = capturers.trailing_zeros() as Square;
            out.push(Move::new(from, ep_square, FLAG_CAPTURE | FLAG_EN_PASSANT, None));
            capturers &= capturers - 1;
        }
    }
}
