//! Packed move representation.
//!
//! A [`Move`] is a `u32` value object: source and destination squares, a flag
//! set, and an optional promotion kind. Moves carry no reference to the
//! position they were generated from.

use std::fmt;

use crate::game_state::bitboard::{file_of, rank_of, square_at};
use crate::game_state::chess_types::{PieceKind, Square};

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const PROMOTION_PIECE_SHIFT: u32 = 12;

const SQUARE_MASK: u32 = 0x3F;
const PIECE_MASK: u32 = 0x7;
const NO_PIECE_CODE: u32 = 0x7;

pub const FLAG_CAPTURE: u32 = 1 << 15;
pub const FLAG_DOUBLE_PAWN_PUSH: u32 = 1 << 16;
pub const FLAG_EN_PASSANT: u32 = 1 << 17;
pub const FLAG_PROMOTION: u32 = 1 << 18;

const FLAGS_MASK: u32 = FLAG_CAPTURE | FLAG_DOUBLE_PAWN_PUSH | FLAG_EN_PASSANT | FLAG_PROMOTION;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u32);

impl Move {
    /// Build a move. `FLAG_PROMOTION` is added automatically when a promotion
    /// kind is given.
    #[inline]
    pub fn new(from: Square, to: Square, flags: u32, promotion: Option<PieceKind>) -> Self {
        let mut packed = 0u32;
        packed |= (from as u32 & SQUARE_MASK) << FROM_SHIFT;
        packed |= (to as u32 & SQUARE_MASK) << TO_SHIFT;
        packed |= promotion
            .map_or(NO_PIECE_CODE, |kind| kind.index() as u32)
            << PROMOTION_PIECE_SHIFT;
        packed |= flags & FLAGS_MASK;
        if promotion.is_some() {
            packed |= FLAG_PROMOTION;
        }
        Move(packed)
    }

    #[inline]
    pub fn quiet(from: Square, to: Square) -> Self {
        Move::new(from, to, 0, None)
    }

    #[inline]
    pub const fn from(self) -> Square {
        ((self.0 >> FROM_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub const fn to(self) -> Square {
        ((self.0 >> TO_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub const fn flags(self) -> u32 {
        self.0 & FLAGS_MASK
    }

    #[inline]
    pub const fn has_flag(self, flag: u32) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.has_flag(FLAG_CAPTURE | FLAG_EN_PASSANT)
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.has_flag(FLAG_EN_PASSANT)
    }

    #[inline]
    pub const fn is_double_pawn_push(self) -> bool {
        self.has_flag(FLAG_DOUBLE_PAWN_PUSH)
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.has_flag(FLAG_PROMOTION)
    }

    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        PieceKind::from_index(((self.0 >> PROMOTION_PIECE_SHIFT) & PIECE_MASK) as usize)
    }

    /// Square of the piece this move removes. Differs from `to()` only for en
    /// passant, where the captured pawn sits beside the moving pawn.
    #[inline]
    pub const fn captured_square(self) -> Option<Square> {
        if self.is_en_passant() {
            Some(square_at(file_of(self.to()), rank_of(self.from())))
        } else if self.has_flag(FLAG_CAPTURE) {
            Some(self.to())
        } else {
            None
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} flags={:#x})", self.flags() >> 15)
    }
}

/// Long algebraic text, e.g. `e2e4` or `g7g8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in [self.from(), self.to()] {
            let file = char::from(b'a' + file_of(square));
            let rank = char::from(b'1' + rank_of(square));
            write!(f, "{file}{rank}")?;
        }
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
