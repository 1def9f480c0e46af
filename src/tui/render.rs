//! Frame layout and drawing for the terminal host.
//!
//! [`Frame`] is a plain description of what is on screen; `draw_frame` turns
//! it into crossterm commands and `plain_frame` into text for the line-driven
//! fallback.

use crossterm::cursor::MoveTo;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

use crate::audio::AudioSource;
use crate::controller::VisibilityState;
use crate::style::{ButtonVisual, ColorBlock};
use crate::ui::theme::{Theme, ThemeToken};

use super::host::{FocusTarget, SceneHost};
use super::settings;

/// One button row.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameButton {
    pub label: String,
    pub focused: bool,
    pub visual: ButtonVisual,
    pub colors: Option<ColorBlock>,
}

/// Everything drawn for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub title: String,
    pub body: Vec<String>,
    pub buttons: Vec<FrameButton>,
    pub hint: &'static str,
}

impl Frame {
    pub fn capture<A: AudioSource>(host: &SceneHost<A>) -> Self {
        Self::build(host, None)
    }

    /// Like [`Frame::capture`], with `target` drawn in its pressed state.
    pub fn pressed<A: AudioSource>(host: &SceneHost<A>, target: FocusTarget) -> Self {
        Self::build(host, Some(target))
    }

    fn build<A: AudioSource>(host: &SceneHost<A>, pressed: Option<FocusTarget>) -> Self {
        let scene = host.scene();
        let focused = host.focused();
        let buttons = host
            .targets()
            .into_iter()
            .map(|target| {
                let button = host.button(target);
                let is_focused = focused == Some(target);
                FrameButton {
                    label: button.label().to_string(),
                    focused: is_focused,
                    visual: button.visual(is_focused, pressed == Some(target)),
                    colors: button.colors().copied(),
                }
            })
            .collect();

        match (scene.controller.state(), scene.open_panel()) {
            (VisibilityState::SubviewVisible, Some(index)) => {
                let panel = &scene.panels[index];
                Self {
                    title: panel.title.clone(),
                    body: panel.body.clone(),
                    buttons,
                    hint: settings::HINT_PANEL,
                }
            }
            _ => Self {
                title: scene.title.clone(),
                body: Vec::new(),
                buttons,
                hint: settings::HINT_MENU,
            },
        }
    }
}

/// Render a frame as plain text lines.
pub fn plain_frame(frame: &Frame) -> Vec<String> {
    let mut lines = vec![format!("{} {}", settings::GLYPH_TITLE_BULLET, frame.title)];
    lines.extend(
        frame
            .body
            .iter()
            .map(|line| format!("{}{line}", settings::INDENT_1)),
    );
    for button in &frame.buttons {
        let marker = if button.focused {
            settings::GLYPH_FOCUS_PLAIN
        } else {
            settings::GLYPH_UNFOCUSED
        };
        lines.push(format!("{}{marker} [{}]", settings::INDENT_1, button.label));
    }
    lines
}

/// Draw a full frame into a screen `height` rows tall, clearing the
/// previous one. Body text is cut short so the buttons and hint stay visible.
pub fn draw_frame(
    out: &mut impl Write,
    frame: &Frame,
    theme: &Theme,
    color: bool,
    height: u16,
) -> io::Result<()> {
    out.queue(MoveTo(0, 0))?;
    out.queue(Clear(ClearType::All))?;
    let mut rows = Rows::new(height);

    if !rows.advance(out)? {
        return out.flush();
    }
    if color {
        out.queue(SetForegroundColor(theme.color(ThemeToken::Title)))?;
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    out.queue(Print(format!(
        "{} {}",
        settings::GLYPH_TITLE_BULLET,
        frame.title
    )))?;
    if color {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(ResetColor)?;
    }

    // Title, blank, buttons, blank, hint.
    let reserved = frame.buttons.len().saturating_add(4);
    let body_rows = usize::from(height).saturating_sub(reserved);
    for text in frame.body.iter().take(body_rows) {
        if !rows.advance(out)? {
            break;
        }
        if color {
            out.queue(SetForegroundColor(theme.color(ThemeToken::Body)))?;
        }
        out.queue(Print(format!("{}{text}", settings::INDENT_1)))?;
        if color {
            out.queue(ResetColor)?;
        }
    }

    rows.skip();
    for button in &frame.buttons {
        if !rows.advance(out)? {
            break;
        }
        draw_button(out, button, theme, color)?;
    }

    rows.skip();
    if rows.advance(out)? {
        if color {
            out.queue(SetForegroundColor(theme.color(ThemeToken::Hint)))?;
        }
        out.queue(Print(format!("{}{}", settings::INDENT_1, frame.hint)))?;
        if color {
            out.queue(ResetColor)?;
        }
    }
    out.flush()
}

/// Next free screen row, bounded by the terminal height.
struct Rows {
    next: u16,
    limit: u16,
}

impl Rows {
    fn new(limit: u16) -> Self {
        Self { next: 0, limit }
    }

    /// Move the cursor to the next row; false once the screen is full.
    fn advance(&mut self, out: &mut impl Write) -> io::Result<bool> {
        if self.next >= self.limit {
            return Ok(false);
        }
        out.queue(MoveTo(0, self.next))?;
        self.next += 1;
        Ok(true)
    }

    fn skip(&mut self) {
        self.next = self.next.saturating_add(1);
    }
}

fn draw_button(
    out: &mut impl Write,
    button: &FrameButton,
    theme: &Theme,
    color: bool,
) -> io::Result<()> {
    let label = format!(" {} ", button.label);
    if !color {
        let marker = if button.focused {
            settings::GLYPH_FOCUS_PLAIN
        } else {
            settings::GLYPH_UNFOCUSED
        };
        out.queue(Print(format!("{}{marker} [{label}]", settings::INDENT_1)))?;
        return Ok(());
    }

    out.queue(Print(settings::INDENT_1))?;
    if button.focused {
        out.queue(SetForegroundColor(theme.color(ThemeToken::FocusMarker)))?;
        out.queue(Print(settings::GLYPH_FOCUS))?;
    } else {
        out.queue(Print(settings::GLYPH_UNFOCUSED))?;
    }
    out.queue(Print(" "))?;

    match button.colors {
        Some(colors) => {
            let background = theme.tint(colors.tint(button.visual));
            out.queue(SetBackgroundColor(background))?;
            out.queue(SetForegroundColor(contrasting_text(background)))?;
        }
        None => {
            out.queue(SetForegroundColor(theme.color(ThemeToken::ButtonText)))?;
            if button.focused {
                out.queue(SetAttribute(Attribute::Reverse))?;
            }
        }
    }
    out.queue(Print(label))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    Ok(())
}

/// Black or white text, whichever reads better on `background`.
pub fn contrasting_text(background: Color) -> Color {
    let Color::Rgb { r, g, b } = background else {
        return Color::Reset;
    };
    let luma = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
    if luma >= 128 {
        Color::Black
    } else {
        Color::White
    }
}
