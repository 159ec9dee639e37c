//! Multi-line message composition with a trailing continuation sentinel.
//!
//! A session reads physical lines until one does not end with the sentinel,
//! hiding the sentinel on screen as it goes, and joins the stripped lines into
//! one logical message. Sessions are single-use: `run` consumes them.

use std::io::Write;

use tracing::{debug, trace};

use crate::error::InputError;
use crate::tui::metrics::{compute_rows, terminal_size};
use crate::tui::prompt::{write_prompt, PromptKind};
use crate::tui::redraw::RedrawController;
use crate::tui::settings;
use crate::tui::terminal::{LineSource, TerminalSink};

/// Prompt pair, sentinel and tab width for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub prompt: String,
    pub continuation_prompt: String,
    pub sentinel: char,
    pub tab_size: usize,
    /// Style prompts on interactive sinks.
    pub color: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: settings::PROMPT_PRIMARY.to_string(),
            continuation_prompt: settings::PROMPT_CONTINUATION.to_string(),
            sentinel: settings::SENTINEL,
            tab_size: settings::TAB_SIZE,
            color: false,
        }
    }
}

/// Where a session is in composing its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing read yet; the primary prompt is shown.
    AwaitingLine,
    /// At least one continued line read; the continuation prompt is shown.
    Accumulating,
    Done,
}

/// Reads one logical message from a line source.
#[derive(Debug)]
pub struct MultiLineSession {
    options: SessionOptions,
    state: SessionState,
    lines: Vec<String>,
}

impl MultiLineSession {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            state: SessionState::AwaitingLine,
            lines: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Read physical lines until one is not continued, then return the message.
    ///
    /// Fails with `StreamClosed` if input ends before a terminating line; the
    /// partial message is dropped with the session.
    pub async fn run<L, S>(mut self, source: &mut L, sink: &mut S) -> Result<String, InputError>
    where
        L: LineSource + ?Sized,
        S: TerminalSink + ?Sized,
    {
        while self.state != SessionState::Done {
            let kind = self.prompt_kind();
            let prompt = self.prompt_text(kind).to_string();
            let color = self.options.color && sink.interactivity().is_interactive();
            write_prompt(sink, &prompt, kind, color)?;
            sink.flush()?;

            let Some(line) = source.read_line().await? else {
                debug!(
                    state = ?self.state,
                    lines = self.lines.len(),
                    "input closed mid-message"
                );
                return Err(InputError::StreamClosed);
            };
            self.accept_line(line, &prompt, kind, sink)?;
        }
        Ok(self.lines.join("\n"))
    }

    fn accept_line<S>(
        &mut self,
        line: String,
        prompt: &str,
        kind: PromptKind,
        sink: &mut S,
    ) -> Result<(), InputError>
    where
        S: TerminalSink + ?Sized,
    {
        let color = self.options.color && sink.interactivity().is_interactive();

        let Some(stripped) = line.strip_suffix(self.options.sentinel) else {
            RedrawController::new(sink, color).echo_raw(&line)?;
            trace!(len = line.len(), "final line read");
            self.lines.push(line);
            self.state = SessionState::Done;
            return Ok(());
        };

        // Width is captured once and used only for this line's erase.
        let columns = usize::from(terminal_size(&*sink)?.columns);
        let rows = compute_rows(prompt, &line, columns, self.options.tab_size);
        trace!(rows, columns, "continued line read");
        RedrawController::new(sink, color)
            .redraw_continued(prompt, kind, &line, stripped, rows)?;

        self.lines.push(stripped.to_string());
        self.state = SessionState::Accumulating;
        Ok(())
    }

    fn prompt_kind(&self) -> PromptKind {
        match self.state {
            SessionState::AwaitingLine => PromptKind::Primary,
            _ => PromptKind::Continuation,
        }
    }

    fn prompt_text(&self, kind: PromptKind) -> &str {
        match kind {
            PromptKind::Primary => &self.options.prompt,
            PromptKind::Continuation => &self.options.continuation_prompt,
        }
    }
}
