//! Centralized, hardcoded settings for the terminal host.

/// Event poll interval; one host tick per poll.
pub const EVENT_POLL_MS: u64 = 50;

/// Without key-release reporting, Escape presses closer together than this
/// are auto-repeat of one hold. Covers common initial repeat delays.
pub const CANCEL_REPEAT_WINDOW_MS: u64 = 650;

pub const INDENT_1: &str = "  ";

pub const GLYPH_FOCUS: &str = "▶";
pub const GLYPH_FOCUS_PLAIN: &str = ">";
pub const GLYPH_UNFOCUSED: &str = " ";
pub const GLYPH_TITLE_BULLET: &str = "•";

pub const HINT_MENU: &str = "↑/↓ move · Enter select · Esc leave";
pub const HINT_PANEL: &str = "Enter close · Esc back";
pub const HINT_LINE_MODE: &str = "commands: up, down, enter, esc";

pub const LABEL_LEAVING: &str = "Leaving for";
