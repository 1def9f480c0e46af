//! Scene host state: focus tracking and routing of input to the controller.
//!
//! `SceneHost` holds no terminal handles, so the same logic drives both the
//! interactive crossterm loop and the line-driven fallback.

use crate::audio::AudioSource;
use crate::button::Button;
use crate::controller::{CancelOutcome, VisibilityState};
use crate::layout::OfficeScene;
use crate::scene::{PendingTransition, SceneId};

use super::input::HostInput;

/// What the host loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStep {
    Continue,
    /// A scene transition was requested.
    Leave(SceneId),
    /// The operator interrupted the host (Ctrl-C / EOF).
    Interrupted,
}

/// A focusable button on the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Opener(usize),
    Other(usize),
    Closer(usize),
}

pub struct SceneHost<A> {
    scene: OfficeScene<A, PendingTransition>,
    focus: usize,
}

impl<A: AudioSource> SceneHost<A> {
    pub fn new(scene: OfficeScene<A, PendingTransition>) -> Self {
        Self { scene, focus: 0 }
    }

    pub fn scene(&self) -> &OfficeScene<A, PendingTransition> {
        &self.scene
    }

    /// Buttons reachable on the current view, in display order.
    pub fn targets(&self) -> Vec<FocusTarget> {
        match self.scene.controller.state() {
            VisibilityState::MenuVisible => (0..self.scene.board.openers.len())
                .map(FocusTarget::Opener)
                .chain((0..self.scene.board.others.len()).map(FocusTarget::Other))
                .collect(),
            VisibilityState::SubviewVisible => self
                .scene
                .panels
                .iter()
                .enumerate()
                .filter(|(_, panel)| panel.surface.is_visible())
                .map(|(index, _)| FocusTarget::Closer(index))
                .collect(),
        }
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.targets().get(self.focus).copied()
    }

    pub fn button(&self, target: FocusTarget) -> &Button {
        let board = &self.scene.board;
        match target {
            FocusTarget::Opener(index) => &board.openers[index],
            FocusTarget::Other(index) => &board.others[index],
            FocusTarget::Closer(index) => &board.closers[index],
        }
    }

    /// Advance one tick with at most one input.
    pub fn handle(&mut self, input: Option<HostInput>) -> HostStep {
        let before = self.scene.controller.state();
        let edge = input == Some(HostInput::Cancel);

        match input {
            Some(HostInput::FocusPrevious) => self.move_focus(-1),
            Some(HostInput::FocusNext) => self.move_focus(1),
            Some(HostInput::Activate) => {
                if let Some(target) = self.focused() {
                    let actions = self.button(target).click().to_vec();
                    self.scene.controller.dispatch_all(&actions);
                }
            }
            Some(HostInput::Interrupt) => return HostStep::Interrupted,
            Some(HostInput::Cancel) | None => {}
        }

        match self.scene.controller.on_cancel_signal(edge) {
            CancelOutcome::Closed => tracing::debug!("cancel closed open panels"),
            CancelOutcome::QuitRequested => tracing::debug!("cancel requested quit"),
            CancelOutcome::Idle => {}
        }

        if self.scene.controller.state() != before {
            self.focus = 0;
        }

        match self.scene.controller.quit_prompt().loader().requested() {
            Some(scene) => HostStep::Leave(scene),
            None => HostStep::Continue,
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let count = self.targets().len();
        if count == 0 {
            return;
        }
        let next = (self.focus as isize + delta).rem_euclid(count as isize) as usize;
        if next == self.focus {
            return;
        }
        self.focus = next;
        if let Some(target) = self.focused() {
            let actions = self.button(target).hover().to_vec();
            self.scene.controller.dispatch_all(&actions);
        }
    }
}
