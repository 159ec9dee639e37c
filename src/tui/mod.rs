//! Terminal line-editor building blocks.
//!
//! Row math, erase/redraw, and the session state machine live in separate
//! modules so the width computation stays pure and shared between echo
//! prediction and erasure.

pub mod input;
pub mod metrics;
mod prompt;
pub mod redraw;
pub mod session;
pub mod settings;
pub mod terminal;

pub use input::{read_logical_message, read_single_line};
pub use metrics::{char_cells, compute_rows, terminal_size, TerminalSize};
pub use prompt::PromptKind;
pub use redraw::RedrawController;
pub use session::{MultiLineSession, SessionOptions, SessionState};
pub use terminal::{Interactivity, LineSource, StderrSink, StdinLineSource, TerminalSink};
