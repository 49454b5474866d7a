//! Bishop attacks by ray casting.
//!
//! Computed on demand against the current blocker mask: each diagonal is
//! walked one shift at a time and stops on the first occupied square, which
//! is included as a potential capture.

use crate::game_state::bitboard::{
    shift_north_east, shift_north_west, shift_south_east, shift_south_west, square_bit,
};
use crate::game_state::chess_types::Square;

const DIAGONAL_STEPS: [fn(u64) -> u64; 4] = [
    shift_north_east,
    shift_north_west,
    shift_south_east,
    shift_south_west,
];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    let origin = square_bit(square);
    DIAGONAL_STEPS
        .iter()
        .fold(0u64, |acc, step| acc | cast_ray(origin, occupancy, *step))
}

/// Walk from `origin` with `step` until the ray leaves the board or hits a
/// blocker. The blocker square is part of the result.
#[inline]
pub(crate) fn cast_ray(origin: u64, occupancy: u64, step: fn(u64) -> u64) -> u64 {
    let mut attacks = 0u64;
    let mut cursor = step(origin);

    while cursor != 0 {
        attacks |= cursor;
        if cursor & occupancy != 0 {
            break;
        }
        cursor = step(cursor);
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::bitboard::FILE_A;

    #[test]
    fn empty_board_d4_sees_thirteen_squares() {
        assert_eq!(bishop_attacks(27, 0).count_ones(), 13);
    }

    #[test]
    fn blocker_is_included_and_stops_the_ray() {
        let c1 = 2u8;
        let blocker_on_e3 = 1u64 << 20;
        let attacks = bishop_attacks(c1, blocker_on_e3);

        assert_ne!(attacks & (1u64 << 20), 0);
        assert_eq!(attacks & (1u64 << 29), 0);
        // The other diagonal (b2, a3) is unaffected.
        assert_ne!(attacks & (1u64 << 16), 0);
    }

    #[test]
    fn h_file_bishop_does_not_wrap_to_a_file() {
        let h4 = 31u8;
        let attacks = bishop_attacks(h4, 0);
        assert_eq!(attacks & FILE_A, 0);
        assert_eq!(attacks.count_ones(), 7);
    }
}
