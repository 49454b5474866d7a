use crate::game_state::chess_types::*;

/// Single history record pushed by `make_move` and consumed by `undo_move`.
///
/// Holds exactly what the move destroys: the mover's original kind (so a
/// promotion can be reversed), the captured piece with its square, and the
/// pre-move rights, en-passant square and clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: Piece,
    pub captured: Option<(Piece, Square)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}

impl UndoState {
    /// True when the record describes a two-file king move.
    #[inline]
    pub fn is_castling(&self) -> bool {
        self.moved_piece.kind == PieceKind::King && self.mv.from().abs_diff(self.mv.to()) == 2
    }
}
