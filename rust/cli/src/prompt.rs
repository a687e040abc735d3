//! Line-based adapter between the engine's table boundary and
//! stdin/stdout. This is the only place free text is interpreted; the
//! betting engine sees nothing but closed [`Action`] values.

use std::io::{BufRead, Write};

use quinte_engine::cards::Card;
use quinte_engine::events::TableEvent;
use quinte_engine::io::TableIo;
use quinte_engine::player::{Action, Player};

use crate::formatters::{format_cards, format_event};
use crate::io_utils::read_stdin_line;
use crate::validation::{parse_action, parse_raise_amount, ParsedInput};

/// Drives one table over arbitrary read/write streams, which is how
/// tests script entire sessions through in-memory buffers.
pub struct StdioTable<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

impl<'a> StdioTable<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self { input, out }
    }

    /// Keeps asking until the reply is numeric. Re-prompting here is a
    /// deliberate softening of the original behavior, which crashed on
    /// a non-numeric amount; EOF gives up and folds.
    fn prompt_raise_amount(&mut self) -> Option<u32> {
        loop {
            let _ = write!(self.out, "How much do you want to raise? ");
            let _ = self.out.flush();
            let line = read_stdin_line(self.input)?;
            match parse_raise_amount(&line) {
                Some(amount) => return Some(amount),
                None => {
                    let _ = writeln!(self.out, "Please enter a number.");
                }
            }
        }
    }
}

impl TableIo for StdioTable<'_> {
    fn prompt_action(&mut self, seat: &Player, highest_bet: u32, _table: &[Card]) -> Action {
        let _ = writeln!(
            self.out,
            "{}, it's your turn. Your cards: {}",
            seat.name(),
            format_cards(seat.hole())
        );
        let _ = writeln!(
            self.out,
            "Highest bet: {}. You have {} chips.",
            highest_bet,
            seat.chips()
        );
        let _ = write!(self.out, "Do you want to (c)all, (r)aise, or (f)old? ");
        let _ = self.out.flush();

        let Some(line) = read_stdin_line(self.input) else {
            // EOF folds the seat so piped sessions wind down cleanly
            return Action::Fold;
        };
        match parse_action(&line) {
            ParsedInput::Action(action) => action,
            ParsedInput::RaiseIntent => match self.prompt_raise_amount() {
                Some(amount) => Action::Raise(amount),
                None => Action::Fold,
            },
            ParsedInput::Invalid(_) => {
                let _ = writeln!(self.out, "Invalid action. Folding by default.");
                Action::Fold
            }
        }
    }

    fn prompt_name(&mut self, seat_index: usize) -> String {
        let _ = write!(
            self.out,
            "Name for seat {} (\"bot\" for a computer player): ",
            seat_index + 1
        );
        let _ = self.out.flush();
        // EOF fills the remaining seats with bots
        read_stdin_line(self.input).unwrap_or_else(|| "bot".to_string())
    }

    fn display(&mut self, event: TableEvent) {
        // Fire-and-forget: a failed write must not disturb the game
        let _ = writeln!(self.out, "{}", format_event(&event));
    }
}
