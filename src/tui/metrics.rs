//! Terminal row math for echoed prompt + input lines.
//!
//! The same walk is used to predict how a line echoes and to decide how many
//! rows to erase afterwards, so the two can never disagree about where the
//! terminal wrapped.

use std::io;

use unicode_width::UnicodeWidthChar;

use crate::tui::settings;
use crate::tui::terminal::TerminalSink;

/// Current terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self {
            columns: settings::FALLBACK_COLUMNS,
            rows: settings::FALLBACK_ROWS,
        }
    }
}

/// Query the sink for its size right now. Never cache the result.
pub fn terminal_size<S>(sink: &S) -> io::Result<TerminalSize>
where
    S: TerminalSink + ?Sized,
{
    let size = sink.size()?;
    if size.columns == 0 {
        return Ok(TerminalSize {
            columns: settings::FALLBACK_COLUMNS,
            ..size
        });
    }
    Ok(size)
}

/// Cells the cursor advances when `ch` is printed at column `col`.
///
/// Tabs jump to the next multiple of `tab_size`; a `tab_size` of zero makes a
/// tab a single cell. Control characters have no width.
pub fn char_cells(ch: char, col: usize, tab_size: usize) -> usize {
    if ch == '\t' {
        if tab_size == 0 {
            return 1;
        }
        return tab_size - col % tab_size;
    }
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Number of terminal rows `prompt` followed by `text` occupies when echoed.
///
/// Always at least 1. `columns` of 0 is treated as a one-column terminal.
pub fn compute_rows(prompt: &str, text: &str, columns: usize, tab_size: usize) -> usize {
    let mut cursor = Cursor::new(columns.max(1));
    for ch in prompt.chars().chain(text.chars()) {
        let cells = char_cells(ch, cursor.col, tab_size);
        if ch == '\t' {
            // A tab is a run of blanks; each blank follows the single-cell rule.
            for _ in 0..cells {
                cursor.place(1);
            }
        } else {
            cursor.place(cells);
        }
    }
    cursor.rows
}

/// Cursor walking a wrapped terminal surface.
///
/// `col == columns` means the last cell of the row is filled and the wrap is
/// pending: the terminal keeps the cursor at the margin until the next
/// printable cell arrives.
#[derive(Debug)]
struct Cursor {
    columns: usize,
    rows: usize,
    col: usize,
}

impl Cursor {
    fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: 1,
            col: 0,
        }
    }

    fn place(&mut self, width: usize) {
        if width == 0 {
            return;
        }
        let width = width.min(self.columns);
        if self.col + width > self.columns {
            // Wide glyphs never split across the margin.
            self.rows += 1;
            self.col = 0;
        }
        self.col += width;
    }
}
