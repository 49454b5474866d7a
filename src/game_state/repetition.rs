//! Position repetition tracking.
//!
//! Every `Position` owns one [`RepetitionStack`]: a hash per position reached
//! in the current game, seeded with the initial position. `make_move` pushes
//! one key and `undo_move` pops one, so the depth is always one more than the
//! number of moves on the undo stack.

use crate::game_state::chess_rules::REPETITION_LIMIT;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionStack {
    keys: Vec<u64>,
}

impl RepetitionStack {
    pub fn new(initial_key: u64) -> Self {
        Self {
            keys: vec![initial_key],
        }
    }

    /// Drop all history and start again from `initial_key`.
    pub fn reset(&mut self, initial_key: u64) {
        self.keys.clear();
        self.keys.push(initial_key);
    }

    #[inline]
    pub fn push(&mut self, key: u64) {
        self.keys.push(key);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<u64> {
        self.keys.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<u64> {
        self.keys.last().copied()
    }

    /// Count entries equal to `key` among the top entry and up to `window`
    /// entries below it.
    pub fn count(&self, key: u64, window: usize) -> usize {
        let len = self.keys.len();
        let start = len.saturating_sub(window.saturating_add(1));
        self.keys[start..].iter().filter(|&&k| k == key).count()
    }
}

/// Occurrences of the current position within the last `window` plies,
/// current position included.
pub fn count_occurrences(position: &Position, window: usize) -> usize {
    position.repetition.count(position.zobrist_key, window)
}

/// Threefold repetition, looking back no further than the last pawn move,
/// capture or promotion.
pub fn is_threefold(position: &Position) -> bool {
    let window = usize::from(position.halfmove_clock);
    count_occurrences(position, window) >= REPETITION_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::{make_move, undo_move};
    use crate::utils::long_algebraic::find_legal_move;

    fn play(position: &mut Position, moves: &[&str]) {
        for text in moves {
            let mv = find_legal_move(position, text).expect("test move should be legal");
            make_move(position, mv);
        }
    }

    #[test]
    fn count_is_clamped_to_stack_bounds() {
        let mut stack = RepetitionStack::new(7);
        stack.push(9);
        stack.push(7);
        assert_eq!(stack.count(7, 0), 1);
        assert_eq!(stack.count(7, 1), 1);
        assert_eq!(stack.count(7, 2), 2);
        assert_eq!(stack.count(7, 500), 2);
        assert_eq!(stack.count(8, 500), 0);
    }

    #[test]
    fn knight_shuffle_reaches_threefold() {
        let mut position = Position::new_game();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

        play(&mut position, &shuffle);
        assert_eq!(count_occurrences(&position, 4), 2);
        assert!(!is_threefold(&position));

        play(&mut position, &shuffle);
        assert_eq!(position.halfmove_clock, 8);
        assert_eq!(count_occurrences(&position, 8), 3);
        assert!(is_threefold(&position));
    }

    #[test]
    fn repetition_window_stops_at_irreversible_move() {
        let mut position = Position::new_game();
        play(&mut position, &["g1f3", "g8f6", "f3g1", "f6g8"]);
        play(&mut position, &["e2e4"]);
        assert_eq!(position.halfmove_clock, 0);
        assert_eq!(count_occurrences(&position, 0), 1);
        assert!(!is_threefold(&position));
    }

    #[test]
    fn undo_pops_exactly_one_entry() {
        let mut position = Position::new_game();
        assert_eq!(position.repetition.len(), 1);

        play(&mut position, &["e2e4", "e7e5"]);
        assert_eq!(position.repetition.len(), 3);
        assert_eq!(position.repetition.len(), position.undo_stack.len() + 1);

        undo_move(&mut position);
        assert_eq!(position.repetition.len(), 2);
        assert_eq!(position.repetition.last(), Some(position.zobrist_key));
    }
}
