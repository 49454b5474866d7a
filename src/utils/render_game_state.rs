//! Plain ASCII board renderer.
//!
//! Creates a human-readable board view from the piece bitboards for the
//! terminal front end, tests and diagnostics.

use crate::game_state::bitboard::square_at;
use crate::game_state::chess_types::*;

/// One rendered rank per line, rank 8 first, followed by the file labels.
pub fn render_board_rows(position: &Position) -> Vec<String> {
    let mut rows = Vec::with_capacity(9);

    for rank in (0..8u8).rev() {
        let mut row = String::with_capacity(18);
        row.push(char::from(b'1' + rank));
        for file in 0..8u8 {
            row.push(' ');
            row.push(
                position
                    .piece_on(square_at(file, rank))
                    .map_or('.', |piece| piece.fen_char()),
            );
        }
        rows.push(row);
    }

    rows.push("  a b c d e f g h".to_owned());
    rows
}

/// Render the board to a string for terminal output.
///
/// White pieces are `PNBRQK`, black pieces `pnbrqk`, empty squares `.`.
pub fn render_game_state(position: &Position) -> String {
    render_board_rows(position).join("\n")
}
