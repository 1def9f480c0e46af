//! Interactive and line-driven host loops.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::audio::AudioSource;
use crate::ui::theme::Theme;

use super::host::{HostStep, SceneHost};
use super::input::{map_key_event, parse_command_line, CancelEdge, HostInput};
use super::render::{draw_frame, plain_frame, Frame};
use super::settings;

/// Raw-mode switches and capability probe used by [`TerminalGuard`].
#[derive(Clone, Copy)]
struct TerminalOps {
    enable_raw: fn() -> io::Result<()>,
    disable_raw: fn() -> io::Result<()>,
    keyboard_enhancement: fn() -> io::Result<bool>,
}

const CROSSTERM_OPS: TerminalOps = TerminalOps {
    enable_raw: terminal::enable_raw_mode,
    disable_raw: terminal::disable_raw_mode,
    keyboard_enhancement: terminal::supports_keyboard_enhancement,
};

/// Raw mode + alternate screen lifetime guard so terminal state is restored
/// on any return path, including a failure halfway through setup.
struct TerminalGuard<W: Write> {
    out: W,
    enhanced_keys: bool,
    disable_raw: fn() -> io::Result<()>,
}

impl<W: Write> TerminalGuard<W> {
    fn acquire(out: W) -> io::Result<Self> {
        Self::acquire_with(out, CROSSTERM_OPS)
    }

    fn acquire_with(out: W, ops: TerminalOps) -> io::Result<Self> {
        (ops.enable_raw)()?;
        let mut guard = Self {
            out,
            enhanced_keys: false,
            disable_raw: ops.disable_raw,
        };
        guard.out.execute(EnterAlternateScreen)?;
        guard.out.execute(Hide)?;
        if (ops.keyboard_enhancement)().unwrap_or(false) {
            guard.out.execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
            guard.enhanced_keys = true;
        }
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.enhanced_keys {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(Show);
        let _ = self.out.execute(LeaveAlternateScreen);
        let _ = (self.disable_raw)();
    }
}

/// Full-screen loop used when stdin/stdout are terminals.
pub fn run_interactive<A: AudioSource>(
    host: &mut SceneHost<A>,
    theme: &Theme,
    color: bool,
) -> io::Result<HostStep> {
    let mut guard = TerminalGuard::acquire(io::stdout())?;
    let mut cancel = CancelEdge::new(guard.enhanced_keys);
    let out = &mut guard.out;
    let mut last_frame: Option<Frame> = None;

    loop {
        let frame = Frame::capture(host);
        if last_frame.as_ref() != Some(&frame) {
            // Skip full repaint when nothing visual changed.
            let (_, height) = terminal::size()?;
            draw_frame(out, &frame, theme, color, height)?;
            last_frame = Some(frame);
        }

        let mut input = None;
        if event::poll(Duration::from_millis(settings::EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) => input = map_key_event(key, &mut cancel),
                Event::Resize(..) => last_frame = None,
                _ => {}
            }
        }

        if input == Some(HostInput::Activate) && flash_pressed(out, host, theme, color)? {
            last_frame = None;
        }

        let step = host.handle(input);
        if step != HostStep::Continue {
            return Ok(step);
        }
    }
}

/// Show the focused button in its pressed tint for the style's fade time.
/// Returns false when there is no tint to show.
fn flash_pressed<A: AudioSource>(
    out: &mut impl Write,
    host: &SceneHost<A>,
    theme: &Theme,
    color: bool,
) -> io::Result<bool> {
    if !color {
        return Ok(false);
    }
    let Some(target) = host.focused() else {
        return Ok(false);
    };
    let Some(colors) = host.button(target).colors() else {
        return Ok(false);
    };
    let fade = Duration::try_from_secs_f32(colors.fade_duration).unwrap_or_default();
    let (_, height) = terminal::size()?;
    draw_frame(out, &Frame::pressed(host, target), theme, true, height)?;
    thread::sleep(fade);
    Ok(true)
}

/// Line-driven loop for non-TTY input: one command per line.
pub fn run_line_driven<A: AudioSource>(
    host: &mut SceneHost<A>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<HostStep> {
    writeln!(out, "{}", settings::HINT_LINE_MODE)?;
    write_plain(out, &Frame::capture(host))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = parse_command_line(&line) else {
            writeln!(out, "unknown command `{}`", line.trim())?;
            continue;
        };
        let step = host.handle(Some(command));
        if step != HostStep::Continue {
            return Ok(step);
        }
        write_plain(out, &Frame::capture(host))?;
    }
    Ok(HostStep::Interrupted)
}

fn write_plain(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    for line in plain_frame(frame) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
