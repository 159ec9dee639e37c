//! Entry points for reading one user turn.
//!
//! `read_logical_message` is the multi-line editor; `read_single_line` is the
//! plain one-line mode. Both take the terminal boundaries explicitly so the
//! caller owns them for the whole session and no other reader interleaves.

use std::io::Write;

use tracing::debug;

use crate::error::InputError;
use crate::tui::prompt::{write_prompt, PromptKind};
use crate::tui::redraw::RedrawController;
use crate::tui::session::{MultiLineSession, SessionOptions};
use crate::tui::terminal::{LineSource, TerminalSink};

/// Read one logical message, joining sentinel-continued lines with `\n`.
///
/// A fresh session is created per call. On a non-terminal sink, continued
/// lines are echoed with their sentinel still in place.
pub async fn read_logical_message<L, S>(
    options: &SessionOptions,
    source: &mut L,
    sink: &mut S,
) -> Result<String, InputError>
where
    L: LineSource + ?Sized,
    S: TerminalSink + ?Sized,
{
    let message = MultiLineSession::new(options.clone())
        .run(source, sink)
        .await?;
    debug!(
        lines = message.split('\n').count(),
        bytes = message.len(),
        "logical message read"
    );
    Ok(message)
}

/// Read exactly one physical line with the primary prompt; no continuation.
pub async fn read_single_line<L, S>(
    options: &SessionOptions,
    source: &mut L,
    sink: &mut S,
) -> Result<String, InputError>
where
    L: LineSource + ?Sized,
    S: TerminalSink + ?Sized,
{
    let color = options.color && sink.interactivity().is_interactive();
    write_prompt(sink, &options.prompt, PromptKind::Primary, color)?;
    sink.flush()?;

    let line = source.read_line().await?.ok_or(InputError::StreamClosed)?;
    RedrawController::new(sink, color).echo_raw(&line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{CaptureSink, ScriptedLines};

    #[tokio::test]
    async fn logical_message_creates_fresh_session_per_call() {
        let options = SessionOptions::default();
        let mut sink = CaptureSink::interactive(80);
        let mut source = ScriptedLines::new(["a \\", "b", "c"]);

        let first = read_logical_message(&options, &mut source, &mut sink)
            .await
            .unwrap();
        let second = read_logical_message(&options, &mut source, &mut sink)
            .await
            .unwrap();
        assert_eq!(first, "a \nb");
        assert_eq!(second, "c");
        // The second call starts again from the primary prompt.
        assert!(sink.output().ends_with("~ > "));
    }

    #[tokio::test]
    async fn single_line_keeps_sentinel() {
        let options = SessionOptions::default();
        let mut sink = CaptureSink::interactive(80);
        let mut source = ScriptedLines::new(["keep \\"]);
        let line = read_single_line(&options, &mut source, &mut sink)
            .await
            .unwrap();
        assert_eq!(line, "keep \\");
        assert_eq!(sink.output(), "> ");
    }

    #[tokio::test]
    async fn single_line_eof_is_stream_closed() {
        let options = SessionOptions::default();
        let mut sink = CaptureSink::captured();
        let mut source = ScriptedLines::new(Vec::<String>::new());
        let err = read_single_line(&options, &mut source, &mut sink)
            .await
            .unwrap_err();
        assert!(err.is_stream_closed());
    }

    #[tokio::test]
    async fn single_line_echoes_on_captured_sink() {
        let options = SessionOptions::default();
        let mut sink = CaptureSink::captured();
        let mut source = ScriptedLines::new(["hi"]);
        read_single_line(&options, &mut source, &mut sink)
            .await
            .unwrap();
        assert_eq!(sink.output(), "> hi\n");
    }
}
