//! Two-player terminal game.
//!
//! Reads one command per line, applies it to the session and prints the
//! board after every change. All position changes go through `make_move`
//! and `undo_move`.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::game_state::chess_types::*;
use crate::game_state::game_status::{assess_status, GameStatus};
use crate::move_generation::legal_move_apply::{make_move, undo_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::long_algebraic::{find_legal_move, move_to_long_algebraic};
use crate::utils::render_game_state::render_board_rows;

const LEGAL_MOVES_SHOWN: usize = 8;
const LEGAL_COLUMN_WIDTH: usize = 18;

const HELP_TEXT: &str = "\
Commands:
  <move>  play a move in long algebraic form (e2e4, e1g1, g7g8q)
  undo    take back the last move
  list    show every legal move
  fen     print the current position as FEN
  draw    end the game as a draw by agreement
  help    show this text
  quit    leave the game";

/// Play a game on stdin/stdout until `quit` or end of input.
pub fn run_stdio_loop(position: Position) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = GameSession::new(position);

    session.print_state(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

/// One game in progress: the position, the text of every move played and
/// the last assessed status.
#[derive(Debug, Clone)]
pub struct GameSession {
    position: Position,
    history: Vec<String>,
    status: GameStatus,
}

impl GameSession {
    pub fn new(mut position: Position) -> Self {
        let status = assess_status(&mut position);
        Self {
            position,
            history: Vec::new(),
            status,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Run one command line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        match trimmed {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "fen" => writeln!(out, "{}", self.position.get_fen())?,
            "undo" => self.undo(out)?,
            _ if self.status.is_game_over() => {
                writeln!(out, "The game is over. Use 'undo', 'fen', 'help' or 'quit'.")?;
            }
            "list" => self.list_moves(out)?,
            "draw" => {
                self.status =
                    GameStatus::draw_by_agreement(self.position.side_to_move, self.status.in_check);
                info!("game drawn by agreement after {} moves", self.history.len());
                self.print_state(out)?;
            }
            text => self.play(text, out)?,
        }

        Ok(false)
    }

    fn play(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        match find_legal_move(&mut self.position, text) {
            Ok(mv) => {
                make_move(&mut self.position, mv);
                let played = move_to_long_algebraic(mv);
                info!("{} played {played}", self.position.side_to_move.opposite().name());
                self.history.push(played);
                self.status = assess_status(&mut self.position);
                self.print_state(out)
            }
            Err(err) => {
                warn!("rejected move input {text:?}: {err}");
                writeln!(out, "{err}. Type 'list' for legal moves or 'help' for commands.")
            }
        }
    }

    fn undo(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.position.undo_stack.is_empty() {
            return writeln!(out, "Nothing to undo.");
        }

        undo_move(&mut self.position);
        let taken_back = self.history.pop().unwrap_or_default();
        info!("took back {taken_back}");
        self.status = assess_status(&mut self.position);
        self.print_state(out)
    }

    fn list_moves(&mut self, out: &mut impl Write) -> io::Result<()> {
        let legal: Vec<String> = generate_legal_moves(&mut self.position)
            .into_iter()
            .map(move_to_long_algebraic)
            .collect();
        writeln!(out, "Legal moves ({}): {}", legal.len(), legal.join(" "))
    }

    /// Header, board with the first legal moves beside it, move list and,
    /// once the game has ended, the result.
    pub fn print_state(&mut self, out: &mut impl Write) -> io::Result<()> {
        let legal = generate_legal_moves(&mut self.position);
        let position = &self.position;

        writeln!(
            out,
            "Turn: {}    Fullmove: {}    Halfmove: {}    Last move: {}",
            position.side_to_move.name(),
            position.fullmove_number,
            position.halfmove_clock,
            self.history.last().map_or("-", String::as_str),
        )?;
        writeln!(
            out,
            "Castling: {}    EP: {}    Legal moves: {}{}",
            castling_slots(position.castling_rights),
            position
                .en_passant_square
                .and_then(|sq| square_to_algebraic(sq).ok())
                .unwrap_or_else(|| "-".to_owned()),
            legal.len(),
            if self.status.in_check { "    Check!" } else { "" },
        )?;
        writeln!(out)?;

        let rows = render_board_rows(position);
        for (i, row) in rows.iter().enumerate() {
            let label = match legal.get(i) {
                Some(&mv) if i < LEGAL_MOVES_SHOWN => format!("{:>2}) {mv}", i + 1),
                _ => String::new(),
            };
            writeln!(out, "{label:<width$} | {row}", width = LEGAL_COLUMN_WIDTH)?;
        }
        writeln!(out)?;

        if self.history.is_empty() {
            writeln!(out, "Moves played (0): -")?;
        } else {
            writeln!(
                out,
                "Moves played ({}): {}",
                self.history.len(),
                self.history.join(" ")
            )?;
        }

        if let Some(result) = self.status.result_message() {
            writeln!(out, "{result}")?;
        }

        Ok(())
    }
}

/// Castling rights as four fixed slots, `-` for a missing right.
fn castling_slots(rights: CastlingRights) -> String {
    [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ]
    .into_iter()
    .map(|(right, ch)| if rights & right != 0 { ch } else { '-' })
    .collect()
}
