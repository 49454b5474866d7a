use crate::game_state::chess_types::Square;
use crate::moves::king_moves::set_if_on_board;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_on_board(file + 1, rank + 2);
        attacks |= set_if_on_board(file + 2, rank + 1);
        attacks |= set_if_on_board(file + 2, rank - 1);
        attacks |= set_if_on_board(file + 1, rank - 2);
        attacks |= set_if_on_board(file - 1, rank - 2);
        attacks |= set_if_on_board(file - 2, rank - 1);
        attacks |= set_if_on_board(file - 2, rank + 1);
        attacks |= set_if_on_board(file - 1, rank + 2);

        table[sq] = attacks;
        sq += 1;
    }

    table
}
