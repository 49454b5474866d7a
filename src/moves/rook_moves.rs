use crate::game_state::bitboard::{shift_east, shift_north, shift_south, shift_west, square_bit};
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::cast_ray;

const ORTHOGONAL_STEPS: [fn(u64) -> u64; 4] = [shift_north, shift_south, shift_east, shift_west];

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    let origin = square_bit(square);
    ORTHOGONAL_STEPS
        .iter()
        .fold(0u64, |acc, step| acc | cast_ray(origin, occupancy, *step))
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;

    #[test]
    fn empty_board_d4_sees_fourteen_squares() {
        assert_eq!(rook_attacks(27, 0).count_ones(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = 0u8;
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(a1, blocker_on_a4);

        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);
        assert_eq!(attacks & 0xFF, 0xFE);
    }

    #[test]
    fn h_file_rook_does_not_wrap_to_next_rank() {
        let h1 = 7u8;
        let attacks = rook_attacks(h1, 0);
        assert_eq!(attacks & (1u64 << 8), 0);
        assert_eq!(attacks.count_ones(), 14);
    }
}
