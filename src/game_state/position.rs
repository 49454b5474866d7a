//! Core incremental board state representation.
//!
//! `Position` is the central model of the rules core. It stores piece
//! bitboards, occupancy caches, turn/state flags, clocks, the incremental
//! Zobrist key, and the per-game history and repetition stacks consumed by
//! make/undo.

use log::debug;

use crate::errors::ChessResult;
use crate::game_state::bitboard::{square_bit, RANK_2, RANK_7};
use crate::game_state::chess_types::*;
use crate::game_state::repetition::RepetitionStack;
use crate::game_state::zobrist::compute_zobrist_key;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Mutable game state. One live instance per game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    // --- Bitboard representation ---
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches, kept in step by every mutator.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // --- Incremental hashing ---
    pub zobrist_key: u64,

    // --- Make/undo and repetition history ---
    pub undo_stack: Vec<UndoState>,
    pub repetition: RepetitionStack,
}

impl Default for Position {
    fn default() -> Self {
        let mut position = Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            zobrist_key: 0,

            undo_stack: Vec::new(),
            repetition: RepetitionStack::default(),
        };
        position.reset_history();
        position
    }
}

impl Position {
    /// Empty board, white to move, no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial position.
    pub fn new_game() -> Self {
        let mut position = Self::default();
        position.start_position();
        position
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Reset to an empty board and drop all history.
    pub fn clear(&mut self) {
        self.pieces = [[0; 6]; 2];
        self.occupancy_by_color = [0; 2];
        self.occupancy_all = 0;
        self.side_to_move = Color::White;
        self.castling_rights = 0;
        self.en_passant_square = None;
        self.halfmove_clock = 0;
        self.fullmove_number = 1;
        self.reset_history();
    }

    /// Reset to the standard initial position and drop all history.
    pub fn start_position(&mut self) {
        self.clear();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            let file = file as Square;
            self.pieces[Color::White.index()][kind.index()] |= square_bit(file);
            self.pieces[Color::Black.index()][kind.index()] |= square_bit(56 + file);
        }
        self.pieces[Color::White.index()][PieceKind::Pawn.index()] = RANK_2;
        self.pieces[Color::Black.index()][PieceKind::Pawn.index()] = RANK_7;

        self.castling_rights = CASTLE_ALL;
        self.refresh_occupancy();
        self.reset_history();
        debug!("position reset to the initial setup");
    }

    /// Piece standing on `square`, if any.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        let mask = square_bit(square);
        if self.occupancy_all & mask == 0 {
            return None;
        }
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(color, kind));
                }
            }
        }
        None
    }

    /// Clear `square` and return what stood there.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_on(square)?;
        let mask = square_bit(square);
        self.pieces[piece.color.index()][piece.kind.index()] &= !mask;
        self.occupancy_by_color[piece.color.index()] &= !mask;
        self.occupancy_all &= !mask;
        Some(piece)
    }

    /// Put `piece` on an empty `square`.
    ///
    /// # Panics
    ///
    /// Panics if the square is occupied; that means a caller bypassed the
    /// move generator.
    pub fn add_piece(&mut self, square: Square, piece: Piece) {
        let mask = square_bit(square);
        assert!(
            self.occupancy_all & mask == 0,
            "add_piece: square {square} is already occupied"
        );
        self.pieces[piece.color.index()][piece.kind.index()] |= mask;
        self.occupancy_by_color[piece.color.index()] |= mask;
        self.occupancy_all |= mask;
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    /// Recompute the aggregate occupancy sets from the twelve piece sets.
    pub fn refresh_occupancy(&mut self) {
        for color in Color::ALL {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::White.index()]
            | self.occupancy_by_color[Color::Black.index()];
    }

    /// Recompute the Zobrist key from scratch.
    #[inline]
    pub fn refresh_hash(&mut self) {
        self.zobrist_key = compute_zobrist_key(self);
    }

    /// Recompute the hash, drop the undo stack and reseed repetition tracking
    /// with the current position. Called after loading a position from
    /// scratch.
    pub fn reset_history(&mut self) {
        self.refresh_hash();
        self.undo_stack.clear();
        self.reset_repetition();
    }

    /// Reseed repetition tracking with the current key only.
    #[inline]
    pub fn reset_repetition(&mut self) {
        self.repetition.reset(self.zobrist_key);
    }
}
