//! Semantic terminal theme.
//!
//! Every color the terminal host draws resolves through a [`Theme`], so the
//! `[theme]` config table can restyle the whole scene consistently. Button
//! tints come from [`crate::style::ColorBlock`] and are composited over the
//! theme backdrop.

use crossterm::style::Color;
use std::collections::BTreeMap;

use crate::style::Rgba;

/// Semantic color token used by terminal rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeToken {
    Backdrop,
    Title,
    Body,
    Hint,
    FocusMarker,
    ButtonText,
    Warning,
    Error,
}

impl ThemeToken {
    /// Stable config key for this token (used by `[theme.colors]`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::Title => "title",
            Self::Body => "body",
            Self::Hint => "hint",
            Self::FocusMarker => "focus_marker",
            Self::ButtonText => "button_text",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    fn all() -> &'static [ThemeToken] {
        &[
            Self::Backdrop,
            Self::Title,
            Self::Body,
            Self::Hint,
            Self::FocusMarker,
            Self::ButtonText,
            Self::Warning,
            Self::Error,
        ]
    }
}

/// Named theme resolved by token.
#[derive(Debug, Clone)]
pub struct Theme {
    /// User-facing theme name (`dark`, `light`).
    pub name: String,
    colors: BTreeMap<ThemeToken, Color>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            colors: dark_colors(),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            colors: light_colors(),
        }
    }

    /// Resolve a built-in theme, then apply per-token overrides.
    ///
    /// Unknown theme names fall back to `dark`; unknown token keys are
    /// skipped. Both are reported as warnings. Malformed color values are
    /// errors.
    pub fn from_config(
        name: &str,
        overrides: &BTreeMap<String, String>,
    ) -> Result<(Self, Vec<String>), String> {
        let mut warnings = Vec::new();
        let mut theme = match normalize_theme_name(name).as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            other => {
                warnings.push(format!("unknown theme `{other}`; using dark"));
                Self::dark()
            }
        };
        for (key, value) in overrides {
            let Some(token) = token_from_key(key) else {
                warnings.push(format!("unknown theme color `{key}` ignored"));
                continue;
            };
            theme.colors.insert(token, parse_color(value)?);
        }
        Ok((theme, warnings))
    }

    pub fn color(&self, token: ThemeToken) -> Color {
        self.colors
            .get(&token)
            .copied()
            .unwrap_or_else(|| Theme::dark().color(token))
    }

    /// Terminal color for a button tint drawn over this theme's backdrop.
    pub fn tint(&self, tint: Rgba) -> Color {
        let (r, g, b) = tint.over(to_rgb(self.color(ThemeToken::Backdrop)));
        Color::Rgb { r, g, b }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

fn token_from_key(key: &str) -> Option<ThemeToken> {
    let wanted = key.trim().to_ascii_lowercase();
    ThemeToken::all()
        .iter()
        .copied()
        .find(|token| token.key() == wanted)
}

fn normalize_theme_name(name: &str) -> String {
    match name.trim().to_ascii_lowercase() {
        empty if empty.is_empty() => "dark".to_string(),
        named => named,
    }
}

type Palette = [(ThemeToken, (u8, u8, u8)); 8];

/// Night shift: ink-blue backdrop, lamp-amber accents.
const DARK_PALETTE: Palette = [
    (ThemeToken::Backdrop, (0x1b, 0x1f, 0x2a)),
    (ThemeToken::Title, (0xf2, 0xb8, 0x5c)),
    (ThemeToken::Body, (0xc9, 0xce, 0xd6)),
    (ThemeToken::Hint, (0x6f, 0x78, 0x88)),
    (ThemeToken::FocusMarker, (0xe0, 0x7a, 0x3f)),
    (ThemeToken::ButtonText, (0xe8, 0xea, 0xee)),
    (ThemeToken::Warning, (0xe5, 0xc0, 0x4b)),
    (ThemeToken::Error, (0xe0, 0x55, 0x55)),
];

/// Day shift: paper backdrop, walnut text.
const LIGHT_PALETTE: Palette = [
    (ThemeToken::Backdrop, (0xf7, 0xf3, 0xea)),
    (ThemeToken::Title, (0x8a, 0x4b, 0x1c)),
    (ThemeToken::Body, (0x3b, 0x35, 0x2e)),
    (ThemeToken::Hint, (0x8c, 0x86, 0x7c)),
    (ThemeToken::FocusMarker, (0xc0, 0x5a, 0x1e)),
    (ThemeToken::ButtonText, (0x22, 0x20, 0x1c)),
    (ThemeToken::Warning, (0x9a, 0x6f, 0x00)),
    (ThemeToken::Error, (0xb0, 0x2a, 0x2a)),
];

fn palette_colors(palette: &Palette) -> BTreeMap<ThemeToken, Color> {
    palette
        .iter()
        .map(|&(token, (r, g, b))| (token, Color::Rgb { r, g, b }))
        .collect()
}

fn dark_colors() -> BTreeMap<ThemeToken, Color> {
    palette_colors(&DARK_PALETTE)
}

fn light_colors() -> BTreeMap<ThemeToken, Color> {
    palette_colors(&LIGHT_PALETTE)
}

/// Named colors accepted in `[theme.colors]`, with the RGB used when a
/// named color has to be composited.
const NAMED_COLORS: &[(&str, Color, (u8, u8, u8))] = &[
    ("black", Color::Black, (0, 0, 0)),
    ("darkgrey", Color::DarkGrey, (85, 85, 85)),
    ("grey", Color::Grey, (170, 170, 170)),
    ("white", Color::White, (255, 255, 255)),
    ("red", Color::Red, (255, 0, 0)),
    ("darkred", Color::DarkRed, (128, 0, 0)),
    ("green", Color::Green, (0, 255, 0)),
    ("darkgreen", Color::DarkGreen, (0, 128, 0)),
    ("yellow", Color::Yellow, (255, 255, 0)),
    ("darkyellow", Color::DarkYellow, (128, 128, 0)),
    ("blue", Color::Blue, (0, 0, 255)),
    ("darkblue", Color::DarkBlue, (0, 0, 128)),
    ("magenta", Color::Magenta, (255, 0, 255)),
    ("darkmagenta", Color::DarkMagenta, (128, 0, 128)),
    ("cyan", Color::Cyan, (0, 255, 255)),
    ("darkcyan", Color::DarkCyan, (0, 128, 128)),
];

fn parse_color(input: &str) -> Result<Color, String> {
    let value = input.trim().to_ascii_lowercase();
    if value.is_empty() {
        return Err("color value is empty".to_string());
    }
    if let Some(digits) = value.strip_prefix('#') {
        return parse_hex(digits).ok_or_else(|| format!("bad color `{input}`, expected #RRGGBB"));
    }
    // `dark-grey`, `dark_gray` and `darkgray` all name the same color.
    let key = value.replace(['-', '_'], "").replace("gray", "grey");
    NAMED_COLORS
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|&(_, color, _)| color)
        .ok_or_else(|| format!("unknown color name `{input}`"))
}

fn parse_hex(digits: &str) -> Option<Color> {
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// RGB for compositing. ANSI palette entries map to grey ramps; `Reset`
/// is treated as black.
fn to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb { r, g, b } => (r, g, b),
        Color::AnsiValue(level) => (level, level, level),
        other => NAMED_COLORS
            .iter()
            .find(|(_, named, _)| *named == other)
            .map_or((0, 0, 0), |&(_, _, rgb)| rgb),
    }
}
