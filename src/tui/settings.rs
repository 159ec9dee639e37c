//! Centralized, hardcoded UI settings for the line editor.
//!
//! This is the single place to tweak prompt strings, the continuation
//! sentinel, escape sequences, and prompt colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_PRIMARY: &str = "> ";
pub const PROMPT_CONTINUATION: &str = "~ ";

// ---------------------------------------------------------------------------
// Line continuation
// ---------------------------------------------------------------------------

pub const SENTINEL: char = '\\';
pub const TAB_SIZE: usize = 8;
/// Upper bound accepted from config; wider stops only hide config mistakes.
pub const TAB_SIZE_MAX: usize = 64;

// ---------------------------------------------------------------------------
// Terminal fallbacks
// ---------------------------------------------------------------------------

pub const FALLBACK_COLUMNS: u16 = 80;
pub const FALLBACK_ROWS: u16 = 24;

// ---------------------------------------------------------------------------
// Escape sequences
// ---------------------------------------------------------------------------

pub const CARRIAGE_RETURN: &str = "\r";
pub const LINE_TERMINATOR: &str = "\n";
pub const ESC: char = '\x1b';

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_PROMPT_PRIMARY: Color = Color::White;
pub const COLOR_PROMPT_CONTINUATION: Color = Color::DarkGrey;
