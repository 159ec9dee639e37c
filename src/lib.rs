//! Lineweave — a terminal multi-line message editor.
//!
//! Users end a line with a sentinel character (default `\`) to keep typing on
//! the next line. The editor hides each sentinel by erasing and redrawing the
//! echoed line, accounting for wide characters, tabs, and terminal wrapping.
//!
//! # Quick start
//!
//! ```no_run
//! use lineweave::tui::{read_logical_message, SessionOptions, StderrSink, StdinLineSource};
//!
//! # async fn example() {
//! let mut source = StdinLineSource::new();
//! let mut sink = StderrSink::new();
//! let message = read_logical_message(&SessionOptions::default(), &mut source, &mut sink)
//!     .await
//!     .unwrap();
//! println!("{message}");
//! # }
//! ```

pub mod config;
pub mod error;
pub mod payload;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
