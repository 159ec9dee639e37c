//! Shared test fixtures for editor test modules.
//!
//! `CaptureSink` records everything written to it and answers size queries
//! from shared state; `ScriptedLines` replays a fixed list of physical lines
//! and can observe a sink to check what was flushed before each read.

use std::collections::{BTreeMap, VecDeque};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::tui::metrics::TerminalSize;
use crate::tui::terminal::{Interactivity, LineSource, TerminalSink};

#[derive(Debug, Default)]
pub struct CaptureState {
    pub written: Vec<u8>,
    /// Byte length of `written` at the last flush.
    pub flushed_len: usize,
    pub flushes: usize,
    pub size_queries: usize,
    pub columns: u16,
}

impl CaptureState {
    pub fn unflushed(&self) -> usize {
        self.written.len() - self.flushed_len
    }
}

/// Sink fixture that captures output in memory.
#[derive(Debug, Clone)]
pub struct CaptureSink {
    state: Arc<Mutex<CaptureState>>,
    interactivity: Interactivity,
}

impl CaptureSink {
    /// Terminal-like sink with a fixed starting width.
    pub fn interactive(columns: u16) -> Self {
        Self::with(Interactivity::Interactive, columns)
    }

    /// Redirected/captured sink.
    pub fn captured() -> Self {
        Self::with(Interactivity::NotATerminal, 80)
    }

    fn with(interactivity: Interactivity, columns: u16) -> Self {
        Self {
            state: Arc::new(Mutex::new(CaptureState {
                columns,
                ..CaptureState::default()
            })),
            interactivity,
        }
    }

    pub fn state(&self) -> MutexGuard<'_, CaptureState> {
        self.state.lock().expect("capture state poisoned")
    }

    pub fn output(&self) -> String {
        String::from_utf8(self.state().written.clone()).expect("captured output is utf-8")
    }

    pub fn flushes(&self) -> usize {
        self.state().flushes
    }

    pub fn size_queries(&self) -> usize {
        self.state().size_queries
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.state().written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self.state();
        state.flushed_len = state.written.len();
        state.flushes += 1;
        Ok(())
    }
}

impl TerminalSink for CaptureSink {
    fn interactivity(&self) -> Interactivity {
        self.interactivity
    }

    fn size(&self) -> io::Result<TerminalSize> {
        let mut state = self.state();
        state.size_queries += 1;
        Ok(TerminalSize {
            columns: state.columns,
            rows: 24,
        })
    }
}

/// Line source fixture replaying scripted physical lines.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    reads: usize,
    /// Terminal width to switch to once the given read returns.
    resizes: BTreeMap<usize, u16>,
    watched: Option<CaptureSink>,
    /// Unflushed byte count of the watched sink at each read.
    pub unflushed_at_read: Vec<usize>,
    fail_at: Option<usize>,
}

impl ScriptedLines {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Record flush state of `sink` and apply resizes to it.
    pub fn watching(mut self, sink: &CaptureSink) -> Self {
        self.watched = Some(sink.clone());
        self
    }

    /// Change the watched sink's width right after read `index` returns.
    pub fn resize_after_read(mut self, index: usize, columns: u16) -> Self {
        self.resizes.insert(index, columns);
        self
    }

    /// Make read `index` fail with an I/O error.
    pub fn fail_at_read(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

#[async_trait]
impl LineSource for ScriptedLines {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let index = self.reads;
        self.reads += 1;
        if let Some(sink) = &self.watched {
            self.unflushed_at_read.push(sink.state().unflushed());
        }
        if self.fail_at == Some(index) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "scripted read failure"));
        }
        let line = self.lines.pop_front();
        if let (Some(sink), Some(columns)) = (&self.watched, self.resizes.get(&index)) {
            sink.state().columns = *columns;
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_sink_tracks_unflushed_bytes() {
        let mut sink = CaptureSink::interactive(80);
        sink.write_all(b"abc").unwrap();
        assert_eq!(sink.state().unflushed(), 3);
        sink.flush().unwrap();
        assert_eq!(sink.state().unflushed(), 0);
        assert_eq!(sink.output(), "abc");
    }

    #[tokio::test]
    async fn scripted_lines_replay_then_close() {
        let mut source = ScriptedLines::new(["a", "b"]);
        assert_eq!(source.read_line().await.unwrap().as_deref(), Some("a"));
        assert_eq!(source.read_line().await.unwrap().as_deref(), Some("b"));
        assert_eq!(source.read_line().await.unwrap(), None);
        assert_eq!(source.reads(), 3);
    }

    #[tokio::test]
    async fn scripted_resize_applies_after_read() {
        let sink = CaptureSink::interactive(80);
        let mut source = ScriptedLines::new(["a"]).watching(&sink).resize_after_read(0, 20);
        source.read_line().await.unwrap();
        assert_eq!(sink.size().unwrap().columns, 20);
    }
}
