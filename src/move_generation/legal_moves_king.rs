use crate::game_state::bitboard::square_bit;
use crate::game_state::chess_rules::{castling_lanes_for, CastlingLane};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move;
    let own_occ = position.occupancy_by_color[side.index()];
    let enemy_occ = position.occupancy_by_color[side.opposite().index()];
    let king_bb = position.pieces[side.index()][PieceKind::King.index()];
    if king_bb == 0 {
        return;
    }

    let from = king_bb.trailing_zeros() as Square;
    push_target_moves(from, king_attacks(from) & !own_occ, enemy_occ, out);

    generate_castling_moves(position, out, from);
}

fn generate_castling_moves(position: &Position, out: &mut Vec<Move>, king_from: Square) {
    let side = position.side_to_move;
    let enemy = side.opposite();

    for lane in castling_lanes_for(side) {
        if can_castle(position, &lane, king_from, enemy) {
            out.push(Move::quiet(lane.king_from, lane.king_to));
        }
    }
}

fn can_castle(position: &Position, lane: &CastlingLane, king_from: Square, enemy: Color) -> bool {
    if position.castling_rights & lane.right == 0 || king_from != lane.king_from {
        return false;
    }

    let own_rooks = position.pieces[lane.color.index()][PieceKind::Rook.index()];
    if own_rooks & square_bit(lane.rook_from) == 0 {
        return false;
    }

    if position.occupancy_all & lane.empty_mask != 0 {
        return false;
    }

    // Start, passing and destination squares must all be safe.
    [lane.king_from, lane.king_passes, lane.king_to]
        .into_iter()
        .all(|square| !is_square_attacked(position, square, enemy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    fn castles(fen: &str) -> Vec<String> {
        let position = parse_fen(fen).expect("FEN should parse");
        let mut moves = Vec::new();
        generate_king_moves(&position, &mut moves);
        let mut text: Vec<String> = moves
            .iter()
            .filter(|mv| mv.from().abs_diff(mv.to()) == 2)
            .map(|mv| mv.to_string())
            .collect();
        text.sort();
        text
    }

    #[test]
    fn both_sides_castle_when_lanes_are_clear() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), ["e1c1", "e1g1"]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), ["e8c8", "e8g8"]);
    }

    #[test]
    fn no_castling_out_of_or_through_check() {
        // Rook on e8 gives check.
        assert!(castles("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
        // Rook on f8 covers f1; queenside stays available.
        assert_eq!(castles("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1"), ["e1c1"]);
    }

    #[test]
    fn queenside_b_file_may_be_attacked_but_not_occupied() {
        // Rook on b8 attacks b1 only; castling long is fine.
        assert_eq!(castles("1r5k/8/8/8/8/8/8/R3K3 w Q - 0 1"), ["e1c1"]);
        // Knight on b1 blocks it.
        assert!(castles("7k/8/8/8/8/8/8/RN2K3 w Q - 0 1").is_empty());
    }

    #[test]
    fn missing_rook_disables_castling_even_with_rights() {
        assert!(castles("4k3/8/8/8/8/8/8/4K2R w Q - 0 1").is_empty());
    }
}
