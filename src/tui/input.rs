//! Key input mapping and cancel-edge detection.
//!
//! The cancel signal fires on Escape *release*. Terminals only report key
//! releases when the keyboard enhancement protocol is active; without it the
//! signal fires on the initial press. Auto-repeat then arrives as further
//! presses, so presses closer together than the repeat window count as one
//! hold.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

use super::settings;

/// Host-level input after key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostInput {
    FocusPrevious,
    FocusNext,
    Activate,
    /// Cancel edge detected this tick.
    Cancel,
    /// Ctrl-C: leave the host without a scene transition.
    Interrupt,
}

/// Tracks Escape state so only one cancel fires per press/release cycle.
#[derive(Debug, Clone, Default)]
pub struct CancelEdge {
    releases_reported: bool,
    held: bool,
    last_press: Option<Instant>,
}

impl CancelEdge {
    pub fn new(releases_reported: bool) -> Self {
        Self {
            releases_reported,
            ..Self::default()
        }
    }

    /// Feed one Escape key event; returns true on the cancel edge.
    pub fn observe(&mut self, kind: KeyEventKind) -> bool {
        self.observe_at(kind, Instant::now())
    }

    fn observe_at(&mut self, kind: KeyEventKind, now: Instant) -> bool {
        match kind {
            KeyEventKind::Press if self.releases_reported => {
                self.held = true;
                false
            }
            KeyEventKind::Press => {
                let window = Duration::from_millis(settings::CANCEL_REPEAT_WINDOW_MS);
                // Measured from the previous press, so a long hold keeps
                // extending the same edge.
                let repeated = self
                    .last_press
                    .is_some_and(|last| now.saturating_duration_since(last) < window);
                self.last_press = Some(now);
                !repeated
            }
            KeyEventKind::Repeat => false,
            KeyEventKind::Release => std::mem::take(&mut self.held),
        }
    }
}

/// Map one terminal key event to host input.
pub fn map_key_event(key: KeyEvent, cancel: &mut CancelEdge) -> Option<HostInput> {
    if key.code == KeyCode::Esc {
        return cancel.observe(key.kind).then_some(HostInput::Cancel);
    }
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(HostInput::Interrupt)
        }
        KeyCode::Up | KeyCode::BackTab => Some(HostInput::FocusPrevious),
        KeyCode::Down | KeyCode::Tab => Some(HostInput::FocusNext),
        KeyCode::Enter | KeyCode::Char(' ') if key.kind == KeyEventKind::Press => {
            Some(HostInput::Activate)
        }
        _ => None,
    }
}

/// Parse one line of the non-interactive command stream.
pub fn parse_command_line(line: &str) -> Option<HostInput> {
    match line.trim().to_ascii_lowercase().as_str() {
        "up" | "k" => Some(HostInput::FocusPrevious),
        "down" | "j" => Some(HostInput::FocusNext),
        "enter" | "select" => Some(HostInput::Activate),
        "esc" | "escape" | "cancel" => Some(HostInput::Cancel),
        "quit" | "exit" => Some(HostInput::Interrupt),
        _ => None,
    }
}
