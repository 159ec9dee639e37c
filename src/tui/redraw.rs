//! Erase a just-echoed block of rows and write its replacement.
//!
//! Cursor convention: every erase starts with the cursor on the row *below*
//! the echoed block, which is where the terminal leaves it after the user
//! presses Enter. Moving up `rows` therefore lands on the block's first row.

use std::io::{self, Write};

use crossterm::cursor::{MoveDown, MoveUp};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use tracing::debug;

use crate::tui::prompt::{write_prompt, PromptKind};
use crate::tui::settings;
use crate::tui::terminal::{Interactivity, TerminalSink};

/// Issues erase/redraw sequences against one sink.
///
/// On a non-interactive sink nothing is erased: lines are echoed verbatim,
/// sentinel included, and no control sequences are ever written.
pub struct RedrawController<'a, S: TerminalSink + ?Sized> {
    sink: &'a mut S,
    color: bool,
}

impl<'a, S: TerminalSink + ?Sized> RedrawController<'a, S> {
    pub fn new(sink: &'a mut S, color: bool) -> Self {
        Self { sink, color }
    }

    pub fn interactivity(&self) -> Interactivity {
        self.sink.interactivity()
    }

    /// Clear exactly `rows` rows above the cursor, leaving it on the top one.
    ///
    /// `rows` below 1 is clamped to 1; some terminals read a zero count as 1.
    pub fn erase_block(&mut self, rows: usize) -> io::Result<()> {
        if !self.interactivity().is_interactive() {
            return Ok(());
        }
        let rows = rows.max(1);
        self.sink.queue(MoveUp(clamp_u16(rows)))?;
        for row in 0..rows {
            self.sink.queue(Print(settings::CARRIAGE_RETURN))?;
            self.sink.queue(Clear(ClearType::CurrentLine))?;
            if row + 1 < rows {
                self.sink.queue(MoveDown(1))?;
            }
        }
        if rows > 1 {
            self.sink.queue(MoveUp(clamp_u16(rows - 1)))?;
        }
        self.sink.flush()
    }

    /// Write `prompt + text` and a line terminator at the cursor.
    ///
    /// Any wrapping of the replacement is left to the terminal.
    pub fn write_replacement(
        &mut self,
        prompt: &str,
        kind: PromptKind,
        text: &str,
    ) -> io::Result<()> {
        write_prompt(&mut *self.sink, prompt, kind, self.color)?;
        self.sink.queue(Print(text))?;
        self.sink.queue(Print(settings::LINE_TERMINATOR))?;
        self.sink.flush()
    }

    /// Echo a physical line exactly as typed. Only used on non-interactive sinks.
    pub fn echo_raw(&mut self, line: &str) -> io::Result<()> {
        if self.interactivity().is_interactive() {
            return Ok(());
        }
        self.sink.queue(Print(line))?;
        self.sink.queue(Print(settings::LINE_TERMINATOR))?;
        self.sink.flush()
    }

    /// Replace an echoed continued line with its sentinel-free form.
    ///
    /// `rows` must come from the same width computation and the same captured
    /// terminal width used for the echo.
    pub fn redraw_continued(
        &mut self,
        prompt: &str,
        kind: PromptKind,
        raw_line: &str,
        stripped: &str,
        rows: usize,
    ) -> io::Result<()> {
        match self.interactivity() {
            Interactivity::Interactive => {
                debug!(rows, "erasing echoed continuation line");
                self.erase_block(rows)?;
                self.write_replacement(prompt, kind, stripped)
            }
            Interactivity::NotATerminal => {
                debug!("sink is not a terminal; echoing continuation line verbatim");
                self.echo_raw(raw_line)
            }
        }
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
