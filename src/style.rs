//! Button color styling.
//!
//! A [`ColorBlock`] is an immutable value describing how a button looks in
//! each interaction state. [`BUTTON_COLORS`] is the block every hoverable
//! control in the office scene receives when the scene starts.

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Composite this color over an opaque backdrop.
    pub fn over(self, backdrop: (u8, u8, u8)) -> (u8, u8, u8) {
        let alpha = u16::from(self.a);
        let mix = |fg: u8, bg: u8| -> u8 {
            let value = (u16::from(fg) * alpha + u16::from(bg) * (255 - alpha) + 127) / 255;
            value as u8
        };
        (
            mix(self.r, backdrop.0),
            mix(self.g, backdrop.1),
            mix(self.b, backdrop.2),
        )
    }

    /// Scale the color channels, saturating at 255. Alpha is preserved.
    pub fn scaled(self, multiplier: f32) -> Self {
        let scale = |channel: u8| -> u8 {
            (f32::from(channel) * multiplier).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }
}

/// Interaction state a button is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVisual {
    Normal,
    Highlighted,
    Pressed,
}

/// Per-state tint applied to a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBlock {
    pub normal: Rgba,
    pub highlighted: Rgba,
    pub pressed: Rgba,
    /// Carried with the block; office buttons are never disabled, so no
    /// visual state selects it.
    pub disabled: Rgba,
    pub color_multiplier: f32,
    /// Seconds taken to cross-fade between states.
    pub fade_duration: f32,
}

impl ColorBlock {
    /// Tint for one interaction state, with the multiplier applied.
    pub fn tint(&self, visual: ButtonVisual) -> Rgba {
        let base = match visual {
            ButtonVisual::Normal => self.normal,
            ButtonVisual::Highlighted => self.highlighted,
            ButtonVisual::Pressed => self.pressed,
        };
        base.scaled(self.color_multiplier)
    }
}

/// Colors shared by every hoverable office button.
pub const BUTTON_COLORS: ColorBlock = ColorBlock {
    normal: Rgba::new(u8::MAX, u8::MAX, u8::MAX, u8::MAX),
    highlighted: Rgba::new(10, 10, 10, 128),
    pressed: Rgba::new(200, 200, 200, u8::MAX),
    disabled: Rgba::new(200, 200, 200, 128),
    color_multiplier: 1.0,
    fade_duration: 0.1,
};
