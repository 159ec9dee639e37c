//! Input and output boundaries of the line editor.
//!
//! `LineSource` yields physical lines; `TerminalSink` is where prompts and
//! redraws go. Both are traits so sessions can run against stdin/stderr in
//! production and against scripted fixtures in tests.

use std::io::{self, IsTerminal, Write};

use async_trait::async_trait;
use crossterm::terminal;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

use crate::tui::metrics::TerminalSize;

/// Whether the output sink can honor cursor-movement sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactivity {
    Interactive,
    /// Captured or redirected output: redraw degrades to plain echo.
    NotATerminal,
}

impl Interactivity {
    pub fn from_flag(interactive: bool) -> Self {
        if interactive {
            Self::Interactive
        } else {
            Self::NotATerminal
        }
    }

    pub fn is_interactive(self) -> bool {
        self == Self::Interactive
    }
}

/// Source of physical input lines.
#[async_trait]
pub trait LineSource: Send {
    /// Read one physical line without its line terminator.
    ///
    /// Returns `Ok(None)` once the input stream is closed.
    async fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Character sink for prompts and redraws, plus a live size query.
pub trait TerminalSink: Write + Send {
    fn interactivity(&self) -> Interactivity;

    /// Current terminal size. Called before every row computation.
    fn size(&self) -> io::Result<TerminalSize>;
}

/// Line source backed by the process stdin.
pub struct StdinLineSource {
    reader: BufReader<Stdin>,
}

impl StdinLineSource {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl Default for StdinLineSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineSource for StdinLineSource {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_terminator(line)))
    }
}

/// Stderr-backed sink; interactive only when stdin and stderr are both TTYs.
pub struct StderrSink {
    stderr: io::Stderr,
    interactivity: Interactivity,
}

impl StderrSink {
    pub fn new() -> Self {
        let interactive = io::stdin().is_terminal() && io::stderr().is_terminal();
        Self {
            stderr: io::stderr(),
            interactivity: Interactivity::from_flag(interactive),
        }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StderrSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stderr.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stderr.flush()
    }
}

impl TerminalSink for StderrSink {
    fn interactivity(&self) -> Interactivity {
        self.interactivity
    }

    fn size(&self) -> io::Result<TerminalSize> {
        if !self.interactivity.is_interactive() {
            return Ok(TerminalSize::default());
        }
        let (columns, rows) = terminal::size()?;
        Ok(TerminalSize { columns, rows })
    }
}

/// Drop one trailing `\n` and, if present, the `\r` before it.
pub(crate) fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
