//! Pawn capture tables.
//!
//! `pawn_attacks(color, sq)` is the set of squares a pawn of `color` on `sq`
//! attacks. Looked up with the opposite color it answers the reverse question:
//! which squares hold pawns that would attack `sq`.

use crate::game_state::chess_types::{Color, Square};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_white_pawn_attacks();
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_black_pawn_attacks();

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_white_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank < 7 {
            if file > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank > 0 {
            if file > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
