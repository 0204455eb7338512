//! Interactive terminal front end.
//!
//! A line-oriented command loop over stdin/stdout. All game rules live in
//! [`crate::game`]; this module only parses commands, forwards them to the
//! engine, and turns [`Effects`](crate::game::Effects) and
//! [`RuleError`](crate::error::RuleError) values into text.
//!
//! ## Commands
//!
//! - `place <point>` - put a chip on the board (placement phase)
//! - `move <from> <to>` - move a chip (movement phase); `move A1A4` also works
//! - `take <point>` - capture an opponent chip after forming a mill
//! - `show` - print the board
//! - `status` - print phase, turn and chip counts
//! - `help` - print the rules and command reference
//! - `quit` - leave the game

use std::io::{self, BufRead, Write};

use crate::game::{Effects, Game, Outcome, Phase};

/// Rules summary and command reference, also served by `mills rules`.
pub const RULES: &str = "\
Nine men's morris, two players, nine chips each.

The game has two phases:
  * Placement: players take turns putting one chip on any empty point.
  * Movement: once all chips are placed, players move one chip per turn
    to an empty neighbouring point. A player down to exactly three chips
    may fly: move to any empty point on the board.

Completing a mill (three of your chips on one marked line) lets you
remove one opponent chip immediately. Chips inside a formed mill are
protected while the opponent still has a free chip; captured chips never
return. A player loses when reduced below three chips or left without a
legal move.

Commands:
  place <point>      e.g. place A1
  move <from> <to>   e.g. move A1 A4 (or: move A1A4)
  take <point>       capture after forming a mill
  show               print the board
  status             print phase, turn and chip counts
  help               this text
  quit               leave the game";

/// The command loop state: one running game.
pub struct Repl {
    game: Game,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

impl Repl {
    pub fn new() -> Self {
        Repl { game: Game::new() }
    }

    /// Run the command loop until `quit`, end of input, or game over.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        writeln!(stdout, "Welcome to nine men's morris! Type 'help' for the rules.\n")?;
        writeln!(stdout, "{}\n", self.game.snapshot())?;
        write!(stdout, "{}", self.prompt())?;
        stdout.flush()?;

        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                write!(stdout, "{}", self.prompt())?;
                stdout.flush()?;
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (_ok, message) = self.execute(&command, args);
            if !message.is_empty() {
                writeln!(stdout, "{message}")?;
            }

            if command == "quit" || self.game.outcome().is_some() {
                break;
            }

            write!(stdout, "{}", self.prompt())?;
            stdout.flush()?;
        }

        Ok(())
    }

    /// Execute one command and return (success, response text).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "help" => (true, RULES.to_string()),

            "show" => (true, self.game.snapshot().to_string()),

            "status" => (true, self.status_line()),

            "quit" => (true, String::new()),

            "place" => {
                let [pos] = args else {
                    return (false, "usage: place <point>".to_string());
                };
                match self.game.place_chip(pos) {
                    Ok(effects) => (true, self.report(effects)),
                    Err(err) => (false, err.to_string()),
                }
            }

            "move" => {
                let (from, to) = match args {
                    [from, to] => ((*from).to_string(), (*to).to_string()),
                    // the compact form the original game used: "move A1A4";
                    // the labels are ASCII, anything else is malformed input
                    [both] if both.len() == 4 && both.is_ascii() => {
                        (both[..2].to_string(), both[2..].to_string())
                    }
                    _ => return (false, "usage: move <from> <to>".to_string()),
                };
                match self.game.move_chip(&from, &to) {
                    Ok(effects) => (true, self.report(effects)),
                    Err(err) => (false, err.to_string()),
                }
            }

            "take" => {
                let [pos] = args else {
                    return (false, "usage: take <point>".to_string());
                };
                match self.game.capture_chip(pos) {
                    Ok(effects) => (true, self.report(effects)),
                    Err(err) => (false, err.to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Board plus any notable consequences of a successful command.
    fn report(&self, effects: Effects) -> String {
        let mut out = format!("\n{}\n", self.game.snapshot());
        if effects.mill_formed {
            out.push_str("\nMill! Take one opponent chip (take <point>).");
        }
        if effects.phase_changed {
            out.push_str("\nAll chips are placed. Movement phase begins.");
        }
        match effects.game_over {
            Some(Outcome::Win(color)) => {
                out.push_str(&format!("\n{} wins!", color.name()));
            }
            Some(Outcome::Draw) => {
                out.push_str("\nDraw: neither player can move.");
            }
            None => {}
        }
        out
    }

    fn status_line(&self) -> String {
        let snapshot = self.game.snapshot();
        let phase = match snapshot.phase {
            Phase::Placement => "placement",
            Phase::Movement => "movement",
        };
        format!(
            "phase: {phase}, to move: {}, in hand X/O: {}/{}, on board X/O: {}/{}",
            snapshot.active.name(),
            snapshot.in_hand[0],
            snapshot.in_hand[1],
            snapshot.on_board[0],
            snapshot.on_board[1],
        )
    }

    fn prompt(&self) -> String {
        let color = self.game.active_color();
        let action = if self.game.pending_capture() {
            "take an opponent chip"
        } else {
            match self.game.phase() {
                Phase::Placement => "place a chip",
                Phase::Movement => "move a chip",
            }
        };
        format!("{} ({}), {action}: ", color.name(), color.glyph())
    }
}
