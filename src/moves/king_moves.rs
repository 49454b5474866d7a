//! King attack table.
//!
//! Built at compile time over all 64 squares and never mutated, so it can be
//! shared freely between game instances and threads.

use crate::game_state::chess_types::Square;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_on_board(file - 1, rank - 1);
        attacks |= set_if_on_board(file, rank - 1);
        attacks |= set_if_on_board(file + 1, rank - 1);
        attacks |= set_if_on_board(file - 1, rank);
        attacks |= set_if_on_board(file + 1, rank);
        attacks |= set_if_on_board(file - 1, rank + 1);
        attacks |= set_if_on_board(file, rank + 1);
        attacks |= set_if_on_board(file + 1, rank + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

/// Single-bit mask for `(file, rank)`, or 0 when off the board.
pub(crate) const fn set_if_on_board(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    1u64 << ((rank as usize) * 8 + (file as usize))
}
