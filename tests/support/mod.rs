//! Fixtures for driving the editor through its public boundary traits.

use std::collections::VecDeque;
use std::io::{self, Write};

use async_trait::async_trait;
use lineweave::tui::{Interactivity, LineSource, TerminalSink, TerminalSize};

/// In-memory terminal with a fixed width.
pub struct FakeTerminal {
    pub written: Vec<u8>,
    pub columns: u16,
    pub interactivity: Interactivity,
}

impl FakeTerminal {
    pub fn tty(columns: u16) -> Self {
        Self {
            written: Vec::new(),
            columns,
            interactivity: Interactivity::Interactive,
        }
    }

    pub fn redirected() -> Self {
        Self {
            written: Vec::new(),
            columns: 80,
            interactivity: Interactivity::NotATerminal,
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.written).into_owned()
    }
}

impl Write for FakeTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TerminalSink for FakeTerminal {
    fn interactivity(&self) -> Interactivity {
        self.interactivity
    }

    fn size(&self) -> io::Result<TerminalSize> {
        Ok(TerminalSize {
            columns: self.columns,
            rows: 24,
        })
    }
}

/// Replays typed lines, then reports the stream as closed.
pub struct TypedLines(pub VecDeque<String>);

impl TypedLines {
    pub fn new(lines: &[&str]) -> Self {
        Self(lines.iter().map(|line| line.to_string()).collect())
    }
}

#[async_trait]
impl LineSource for TypedLines {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.0.pop_front())
    }
}
