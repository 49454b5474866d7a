//! Game status assessment.
//!
//! A game is either `Playing` or `GameOver`; `GameOver` is terminal. The
//! assessor checks end conditions in a fixed priority order so that a
//! position which is both a repetition and a checkmate, say, always reports
//! the repetition.

use log::debug;

use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVES;
use crate::game_state::chess_types::*;
use crate::game_state::repetition::is_threefold;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    None,
    WhiteWins,
    BlackWins,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    None,
    Stalemate,
    InsufficientMaterial,
    FiftyMove,
    Threefold,
    /// Set by a front end; never produced by [`assess_status`].
    Agreement,
}

impl DrawReason {
    pub const fn description(self) -> &'static str {
        match self {
            DrawReason::None => "none",
            DrawReason::Stalemate => "stalemate",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::FiftyMove => "50-move rule",
            DrawReason::Threefold => "threefold repetition",
            DrawReason::Agreement => "by agreement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub phase: Phase,
    pub outcome: Outcome,
    pub draw_reason: DrawReason,
    pub in_check: bool,
    pub side_to_move: Color,
}

impl GameStatus {
    pub const fn playing(side_to_move: Color, in_check: bool) -> Self {
        Self {
            phase: Phase::Playing,
            outcome: Outcome::None,
            draw_reason: DrawReason::None,
            in_check,
            side_to_move,
        }
    }

    pub const fn draw(side_to_move: Color, in_check: bool, reason: DrawReason) -> Self {
        Self {
            phase: Phase::GameOver,
            outcome: Outcome::Draw,
            draw_reason: reason,
            in_check,
            side_to_move,
        }
    }

    /// Status for a draw both players agreed to.
    pub const fn draw_by_agreement(side_to_move: Color, in_check: bool) -> Self {
        Self::draw(side_to_move, in_check, DrawReason::Agreement)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Human-readable result line, or `None` while the game is running.
    pub fn result_message(&self) -> Option<String> {
        match self.outcome {
            Outcome::None => None,
            Outcome::WhiteWins => Some("Checkmate! White wins.".to_owned()),
            Outcome::BlackWins => Some("Checkmate! Black wins.".to_owned()),
            Outcome::Draw => Some(format!("Draw: {}.", self.draw_reason.description())),
        }
    }
}

/// Assess the position for the side to move.
///
/// Needs `&mut` only for the legality filter; the position is unchanged on
/// return.
pub fn assess_status(position: &mut Position) -> GameStatus {
    let side = position.side_to_move;
    let has_legal_move = !generate_legal_moves(position).is_empty();
    let in_check = is_king_in_check(position, side);

    let status = if is_threefold(position) {
        GameStatus::draw(side, in_check, DrawReason::Threefold)
    } else if position.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
        GameStatus::draw(side, in_check, DrawReason::FiftyMove)
    } else if is_insufficient_material(position) {
        GameStatus::draw(side, in_check, DrawReason::InsufficientMaterial)
    } else if !has_legal_move && in_check {
        GameStatus {
            phase: Phase::GameOver,
            outcome: match side {
                Color::White => Outcome::BlackWins,
                Color::Black => Outcome::WhiteWins,
            },
            draw_reason: DrawReason::None,
            in_check,
            side_to_move: side,
        }
    } else if !has_legal_move {
        GameStatus::draw(side, in_check, DrawReason::Stalemate)
    } else {
        GameStatus::playing(side, in_check)
    };

    if status.is_game_over() {
        debug!(
            "game over at fullmove {}: {:?} ({:?})",
            position.fullmove_number, status.outcome, status.draw_reason
        );
    }
    status
}

/// Material on which neither side can force mate.
///
/// Requires no pawns, rooks or queens, then accepts: bare kings, a single
/// minor piece against a bare king, two knights against a bare king, knight
/// against knight, bishop against bishop, or knight against bishop.
pub fn is_insufficient_material(position: &Position) -> bool {
    let count = |color: Color, kind: PieceKind| position.pieces_of(color, kind).count_ones();

    let heavy_or_pawn = Color::ALL.into_iter().any(|color| {
        count(color, PieceKind::Pawn) + count(color, PieceKind::Rook) + count(color, PieceKind::Queen) > 0
    });
    if heavy_or_pawn {
        return false;
    }

    let white_knights = count(Color::White, PieceKind::Knight);
    let black_knights = count(Color::Black, PieceKind::Knight);
    let white_bishops = count(Color::White, PieceKind::Bishop);
    let black_bishops = count(Color::Black, PieceKind::Bishop);
    let total = position.occupancy_all.count_ones();

    match total {
        2 => true,
        3 => white_bishops == 1 || black_bishops == 1 || white_knights == 1 || black_knights == 1,
        4 => {
            white_knights == 2
                || black_knights == 2
                || (white_knights == 1 && black_knights == 1)
                || (white_bishops == 1 && black_bishops == 1)
                || (white_knights == 1 && black_bishops == 1)
                || (black_knights == 1 && white_bishops == 1)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::make_move;
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::long_algebraic::find_legal_move;

    fn status_of(fen: &str) -> GameStatus {
        let mut position = parse_fen(fen).expect("FEN should parse");
        assess_status(&mut position)
    }

    #[test]
    fn start_position_is_playing() {
        let status = assess_status(&mut Position::new_game());
        assert_eq!(status, GameStatus::playing(Color::White, false));
        assert_eq!(status.result_message(), None);
    }

    #[test]
    fn fools_mate_is_a_black_win() {
        let status = status_of("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3");
        assert_eq!(status.phase, Phase::GameOver);
        assert_eq!(status.outcome, Outcome::BlackWins);
        assert_eq!(status.draw_reason, DrawReason::None);
        assert!(status.in_check);
        assert_eq!(status.result_message().as_deref(), Some("Checkmate! Black wins."));
    }

    #[test]
    fn bare_kings_are_insufficient_material() {
        let status = status_of("8/8/8/8/8/8/8/4K2k w - - 0 1");
        assert_eq!(status.phase, Phase::GameOver);
        assert_eq!(status.outcome, Outcome::Draw);
        assert_eq!(status.draw_reason, DrawReason::InsufficientMaterial);
    }

    #[test]
    fn minor_piece_patterns() {
        for fen in [
            "8/8/8/8/8/8/8/4KB1k w - - 0 1",
            "8/8/8/8/8/8/8/4KN1k w - - 0 1",
            "8/8/8/8/8/8/8/3NKN1k w - - 0 1",
            "8/8/8/8/8/8/n7/4KN1k w - - 0 1",
            "8/8/8/8/8/8/b7/4KB1k w - - 0 1",
            "8/8/8/8/8/8/b7/4KN1k w - - 0 1",
        ] {
            assert_eq!(
                status_of(fen).draw_reason,
                DrawReason::InsufficientMaterial,
                "{fen}"
            );
        }
        for fen in [
            "8/8/8/8/8/8/8/3BKB1k w - - 0 1",
            "8/8/8/8/8/8/8/3RK2k w - - 0 1",
            "8/8/8/8/8/8/P7/4K2k w - - 0 1",
        ] {
            assert_eq!(status_of(fen).phase, Phase::Playing, "{fen}");
        }
    }

    #[test]
    fn fifty_move_rule_outranks_material_and_mate() {
        let mut position = Position::new_game();
        position.halfmove_clock = 100;
        let status = assess_status(&mut position);
        assert_eq!(status.phase, Phase::GameOver);
        assert_eq!(status.outcome, Outcome::Draw);
        assert_eq!(status.draw_reason, DrawReason::FiftyMove);
    }

    #[test]
    fn stalemate_is_a_draw() {
        let status = status_of("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(status.draw_reason, DrawReason::Stalemate);
        assert!(!status.in_check);
    }

    #[test]
    fn repeated_knight_shuffle_ends_in_threefold() {
        let mut position = Position::new_game();
        for _ in 0..2 {
            for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                let mv = find_legal_move(&mut position, text).expect("test move should be legal");
                make_move(&mut position, mv);
            }
        }
        let status = assess_status(&mut position);
        assert_eq!(status.draw_reason, DrawReason::Threefold);
        assert_eq!(status.result_message().as_deref(), Some("Draw: threefold repetition."));
    }

    #[test]
    fn agreement_is_only_built_explicitly() {
        let status = GameStatus::draw_by_agreement(Color::Black, false);
        assert!(status.is_game_over());
        assert_eq!(status.draw_reason, DrawReason::Agreement);
        assert_eq!(status.result_message().as_deref(), Some("Draw: by agreement."));
    }
}
