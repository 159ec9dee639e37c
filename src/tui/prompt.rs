//! Prompt rendering helpers for the line editor.

use crate::tui::settings;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Which of the two prompts is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Shown before the first physical line of a message.
    Primary,
    /// Shown before every continued line.
    Continuation,
}

/// Queue a prompt, styled when `color` is enabled.
///
/// Styling only wraps the text in SGR sequences; the visible cells are the
/// plain prompt text, which is what row computations use.
pub(crate) fn write_prompt<W>(
    out: &mut W,
    prompt: &str,
    kind: PromptKind,
    color: bool,
) -> io::Result<()>
where
    W: Write + ?Sized,
{
    if prompt.is_empty() {
        return Ok(());
    }
    if color {
        let styled = match kind {
            PromptKind::Primary => prompt.with(settings::COLOR_PROMPT_PRIMARY).bold(),
            PromptKind::Continuation => prompt.with(settings::COLOR_PROMPT_CONTINUATION),
        };
        out.queue(PrintStyledContent(styled))?;
    } else {
        out.queue(Print(prompt))?;
    }
    Ok(())
}
