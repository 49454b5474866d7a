use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::FLAG_CAPTURE;

/// Push one move per bit of `targets`, flagging those that land on
/// `enemy_occ` as captures.
#[inline]
pub fn push_target_moves(from: Square, targets: u64, enemy_occ: u64, out: &mut Vec<Move>) {
    let mut captures = targets & enemy_occ;
    while captures != 0 {
        let to = captures.trailing_zeros() as Square;
        out.push(Move::new(from, to, FLAG_CAPTURE, None));
        captures &= captures - 1;
    }

    let mut quiets = targets & !enemy_occ;
    while quiets != 0 {
        let to = quiets.trailing_zeros() as Square;
        out.push(Move::new(from, to, 0, None));
        quiets &= quiets - 1;
    }
}

/// Generate table/ray moves for every `kind` piece of the side to move.
///
/// `reach` maps a source square and the full occupancy to its attack set.
#[inline]
pub fn generate_piece_moves(
    position: &Position,
    kind: PieceKind,
    reach: fn(Square, u64) -> u64,
    out: &mut Vec<Move>,
) {
    let side = position.side_to_move;
    let own_occ = position.occupancy_by_color[side.index()];
    let enemy_occ = position.occupancy_by_color[side.opposite().index()];

    let mut pieces = position.pieces[side.index()][kind.index()];
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        let targets = reach(from, position.occupancy_all) & !own_occ;
        push_target_moves(from, targets, enemy_occ, out);
        pieces &= pieces - 1;
    }
}
