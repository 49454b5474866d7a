//! Bitboard primitives.
//!
//! A bitboard is a `u64` with one bit per square (`a1` is bit 0, `h8` is bit
//! 63). Shifts that move across files mask the edge file first so a set never
//! wraps from the h-file onto the a-file or back.

use crate::game_state::chess_types::Square;

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_H: u64 = 0x8080_8080_8080_8080;

pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
pub const RANK_2: u64 = 0x0000_0000_0000_FF00;
pub const RANK_3: u64 = 0x0000_0000_00FF_0000;
pub const RANK_6: u64 = 0x0000_FF00_0000_0000;
pub const RANK_7: u64 = 0x00FF_0000_0000_0000;
pub const RANK_8: u64 = 0xFF00_0000_0000_0000;

#[inline]
pub const fn square_bit(square: Square) -> u64 {
    1u64 << square
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

#[inline]
pub const fn shift_north(bitboard: u64) -> u64 {
    bitboard << 8
}

#[inline]
pub const fn shift_south(bitboard: u64) -> u64 {
    bitboard >> 8
}

#[inline]
pub const fn shift_east(bitboard: u64) -> u64 {
    (bitboard & !FILE_H) << 1
}

#[inline]
pub const fn shift_west(bitboard: u64) -> u64 {
    (bitboard & !FILE_A) >> 1
}

#[inline]
pub const fn shift_north_east(bitboard: u64) -> u64 {
    shift_north(shift_east(bitboard))
}

#[inline]
pub const fn shift_north_west(bitboard: u64) -> u64 {
    shift_north(shift_west(bitboard))
}

#[inline]
pub const fn shift_south_east(bitboard: u64) -> u64 {
    shift_south(shift_east(bitboard))
}

#[inline]
pub const fn shift_south_west(bitboard: u64) -> u64 {
    shift_south(shift_west(bitboard))
}
