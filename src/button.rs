//! Clickable/hoverable button handles and their subscriptions.
//!
//! Buttons do not own callbacks. Each click or hover subscription is a
//! [`ButtonAction`] value; firing an event returns the subscribed actions and
//! the host routes them to the controller.

use crate::style::{ButtonVisual, ColorBlock};

/// Work a button event can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Hide the container and switch to the sub-view.
    OpenSubview,
    /// Show the closeable surface at this index.
    ShowSurface(usize),
    /// Close every closeable surface and bring the menu back.
    CloseAll,
    /// Play the hover feedback sound.
    PlayHoverSound,
    /// Leave the scene for the main menu.
    PromptQuit,
}

/// Whether a button reacts to pointer hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Plain,
    Hoverable,
}

#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    kind: ButtonKind,
    colors: Option<ColorBlock>,
    on_click: Vec<ButtonAction>,
    on_hover: Vec<ButtonAction>,
}

impl Button {
    pub fn new(label: impl Into<String>, kind: ButtonKind) -> Self {
        Self {
            label: label.into(),
            kind,
            colors: None,
            on_click: Vec::new(),
            on_hover: Vec::new(),
        }
    }

    pub fn hoverable(label: impl Into<String>) -> Self {
        Self::new(label, ButtonKind::Hoverable)
    }

    pub fn plain(label: impl Into<String>) -> Self {
        Self::new(label, ButtonKind::Plain)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_hoverable(&self) -> bool {
        self.kind == ButtonKind::Hoverable
    }

    pub fn colors(&self) -> Option<&ColorBlock> {
        self.colors.as_ref()
    }

    pub fn set_colors(&mut self, colors: ColorBlock) {
        self.colors = Some(colors);
    }

    /// Subscribe an action to this button's click event.
    pub fn on_click(&mut self, action: ButtonAction) {
        self.on_click.push(action);
    }

    /// Subscribe an action to this button's hover event.
    ///
    /// Plain buttons never emit hover events, so subscriptions on them stay
    /// inert.
    pub fn on_hover(&mut self, action: ButtonAction) {
        self.on_hover.push(action);
    }

    /// Fire the click event, returning subscribed actions in order.
    pub fn click(&self) -> &[ButtonAction] {
        &self.on_click
    }

    /// Fire the hover event, returning subscribed actions in order.
    pub fn hover(&self) -> &[ButtonAction] {
        if !self.is_hoverable() {
            return &[];
        }
        &self.on_hover
    }

    /// Visual state to draw given focus/press flags.
    pub fn visual(&self, focused: bool, pressed: bool) -> ButtonVisual {
        if pressed {
            ButtonVisual::Pressed
        } else if focused && self.is_hoverable() {
            ButtonVisual::Highlighted
        } else {
            ButtonVisual::Normal
        }
    }
}

/// Every button the scene wires up, grouped by role.
#[derive(Debug, Clone, Default)]
pub struct ButtonBoard {
    /// Menu buttons that open a sub-view.
    pub openers: Vec<Button>,
    /// Buttons that close every open sub-view.
    pub closers: Vec<Button>,
    /// Remaining menu children (e.g. the quit button).
    pub others: Vec<Button>,
}

impl ButtonBoard {
    /// Buttons drawn on the container, in display order.
    pub fn menu_buttons(&self) -> impl Iterator<Item = &Button> {
        self.openers.iter().chain(self.others.iter())
    }

    /// All hoverable controls on the board.
    pub fn hoverables_mut(&mut self) -> impl Iterator<Item = &mut Button> {
        self.openers
            .iter_mut()
            .chain(self.closers.iter_mut())
            .chain(self.others.iter_mut())
            .filter(|button| button.is_hoverable())
    }
}
