//! Hover feedback playback.

use std::io::{self, Write};

/// A one-shot sound the host can trigger.
pub trait AudioSource {
    fn play(&mut self);
}

impl<A: AudioSource + ?Sized> AudioSource for Box<A> {
    fn play(&mut self) {
        (**self).play();
    }
}

/// Rings the terminal bell on stderr.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AudioSource for TerminalBell {
    fn play(&mut self) {
        let mut stderr = io::stderr();
        // Feedback is best effort; a closed stderr must not abort the scene.
        let _ = stderr.write_all(b"\x07");
        let _ = stderr.flush();
    }
}

/// Present but inaudible source, used by `--mute`.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSource for SilentAudio {
    fn play(&mut self) {}
}

/// Hover sound selection from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverSound {
    #[default]
    Bell,
    Silent,
    /// No audio source at all; the scene refuses to start.
    None,
}

impl HoverSound {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bell" => Some(Self::Bell),
            "silent" => Some(Self::Silent),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Build the configured source, if any.
    pub fn source(self) -> Option<Box<dyn AudioSource>> {
        match self {
            Self::Bell => Some(Box::new(TerminalBell)),
            Self::Silent => Some(Box::new(SilentAudio)),
            Self::None => None,
        }
    }
}
