use crate::game_state::chess_types::{Move, Position};

/// Source of the moves available to the side to move.
///
/// `generate_legal_moves` takes the position mutably because legality is
/// checked by playing each candidate and taking it back; the position is
/// unchanged when the call returns.
pub trait MoveGenerator: Send + Sync {
    fn generate_pseudo_legal_moves(&self, position: &Position) -> Vec<Move>;

    fn generate_legal_moves(&self, position: &mut Position) -> Vec<Move>;
}
