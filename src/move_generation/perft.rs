//! Perft: exhaustive move-tree counting.
//!
//! Node counts at fixed depths are compared against published values to
//! validate generation, make and undo together.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;

/// Leaf statistics of a perft run. Every field except `nodes` classifies the
/// move that reached the leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf nodes `depth` plies below `position`.
pub fn perft(position: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        make_move(position, mv);
        nodes += perft(position, depth - 1);
        undo_move(position);
    }
    nodes
}

/// Leaf count below each root move, in generation order.
pub fn perft_divide(position: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = generate_legal_moves(position);
    let mut divided = Vec::with_capacity(moves.len());
    for mv in moves {
        make_move(position, mv);
        divided.push((mv, perft(position, depth - 1)));
        undo_move(position);
    }
    divided
}

/// Perft with per-leaf move classification.
pub fn perft_counts(position: &mut Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(position) {
        make_move(position, mv);
        if depth == 1 {
            total.merge(classify_leaf(position, mv));
        } else {
            total.merge(perft_counts(position, depth - 1));
        }
        undo_move(position);
    }
    total
}

/// Classify `mv`, which has just been made on `position`.
fn classify_leaf(position: &mut Position, mv: Move) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if mv.is_capture() {
        counts.captures = 1;
    }
    if mv.is_en_passant() {
        counts.en_passant = 1;
    }
    if position.undo_stack.last().is_some_and(UndoState::is_castling) {
        counts.castles = 1;
    }
    if mv.is_promotion() {
        counts.promotions = 1;
    }
    if is_king_in_check(position, position.side_to_move) {
        counts.checks = 1;
        if generate_legal_moves(position).is_empty() {
            counts.checkmates = 1;
        }
    }

    counts
}
