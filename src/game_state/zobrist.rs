//! Zobrist hashing support for position identity and repetition tracking.
//!
//! Keys are drawn once from a fixed-seed `StdRng` and live in a process-wide
//! `OnceLock`, so every game instance on every thread reads the same
//! immutable tables and hashes are deterministic within a run.

use std::sync::OnceLock;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::*;

const ZOBRIST_SEED: u64 = 0xC0FF_EE00_FEED_BEEF;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    castling: [u64; 4],
    en_passant_file: [u64; 8],
    side_to_move: u64,
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for sq in piece {
                *sq = rng.random();
            }
        }
    }

    let mut castling = [0u64; 4];
    for key in &mut castling {
        *key = rng.random();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.random();
    }

    let side_to_move = rng.random();

    debug!("zobrist tables initialised from seed {ZOBRIST_SEED:#x}");

    ZobristTables {
        piece_square,
        castling,
        en_passant_file,
        side_to_move,
    }
}

/// Force table construction up front (otherwise done on first use).
pub fn init() {
    let _ = tables();
}

/// Key for a piece standing on a square.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[piece.color.index()][piece.kind.index()][square as usize]
}

/// Combined key of every castling-right bit set in `castling_rights`.
#[inline]
pub fn castling_key(castling_rights: CastlingRights) -> u64 {
    let keys = &tables().castling;
    (0..4usize)
        .filter(|&bit| castling_rights & (1u8 << bit) != 0)
        .fold(0u64, |acc, bit| acc ^ keys[bit])
}

/// Key for an en-passant target on `file` (`0..8`).
#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[file as usize]
}

/// Side-to-move toggle key (folded in when black is to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Compute the full position key from scratch.
pub fn compute_zobrist_key(position: &Position) -> u64 {
    let mut key = 0u64;

    for color in Color::ALL {
        for kind in PieceKind::ALL {
            let piece = Piece::new(color, kind);
            let mut bb = position.pieces[color.index()][kind.index()];
            while bb != 0 {
                let sq = bb.trailing_zeros() as Square;
                key ^= piece_square_key(piece, sq);
                bb &= bb - 1;
            }
        }
    }

    key ^= castling_key(position.castling_rights);

    if let Some(ep_square) = position.en_passant_square {
        key ^= en_passant_file_key(ep_square % 8);
    }

    if position.side_to_move == Color::Black {
        key ^= side_to_move_key();
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_position_hash_is_deterministic() {
        let a = Position::new_game();
        let b = Position::new_game();
        assert_eq!(a.zobrist_key, b.zobrist_key);
        assert_eq!(a.zobrist_key, compute_zobrist_key(&a));
    }

    #[test]
    fn side_to_move_changes_hash() {
        let w = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let b = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert_eq!(w.zobrist_key ^ b.zobrist_key, side_to_move_key());
    }

    #[test]
    fn castling_rights_change_hash() {
        let with_rights = parse_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let without_rights = parse_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert_eq!(
            with_rights.zobrist_key ^ without_rights.zobrist_key,
            castling_key(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE)
        );
    }

    #[test]
    fn castling_key_is_per_bit() {
        let k = castling_key(CASTLE_WHITE_KINGSIDE);
        let q = castling_key(CASTLE_WHITE_QUEENSIDE);
        assert_eq!(castling_key(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE), k ^ q);
        assert_eq!(castling_key(0), 0);
    }

    #[test]
    fn en_passant_file_changes_hash() {
        let no_ep = parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let ep = parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        assert_eq!(no_ep.zobrist_key ^ ep.zobrist_key, en_passant_file_key(4));
    }

    #[test]
    fn identical_features_hash_identically_regardless_of_clocks() {
        let a = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let b = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 37 60").expect("FEN should parse");
        assert_eq!(a.zobrist_key, b.zobrist_key);
    }
}
