//! Interface visibility controller for the office scene.
//!
//! The controller mediates between "open a sub-view" and "return to the
//! button menu". Its state is read straight from the container surface, so a
//! host that toggles the container directly is always reflected.

use crate::audio::AudioSource;
use crate::button::{ButtonAction, ButtonBoard};
use crate::error::SceneError;
use crate::scene::{QuitPrompt, SceneLoader};
use crate::style::BUTTON_COLORS;
use crate::surface::Surface;

/// Which view the scene is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    /// Container shown; closeable surfaces assumed hidden.
    MenuVisible,
    /// Container hidden; any closeable surface may be shown.
    SubviewVisible,
}

/// Result of one per-tick cancel check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// No cancel edge this tick.
    Idle,
    /// Open surfaces were closed and the menu is back.
    Closed,
    /// Nothing was open; the quit prompt was invoked.
    QuitRequested,
}

pub struct InterfaceVisibilityController<A, L> {
    container: Surface,
    closeables: Vec<Surface>,
    hover_audio: A,
    quit: QuitPrompt<L>,
}

impl<A: AudioSource, L: SceneLoader> InterfaceVisibilityController<A, L> {
    /// Wire the board's buttons to this controller.
    ///
    /// Hoverable buttons get the hover sound and [`BUTTON_COLORS`], openers
    /// hide the container on click, and closers close every closeable
    /// surface. Fails before touching any button when `hover_audio` is
    /// missing.
    pub fn initialize(
        container: Surface,
        closeables: Vec<Surface>,
        board: &mut ButtonBoard,
        hover_audio: Option<A>,
        quit: QuitPrompt<L>,
    ) -> Result<Self, SceneError> {
        let hover_audio =
            hover_audio.ok_or(SceneError::MissingDependency("hover audio source"))?;

        for button in board.hoverables_mut() {
            button.on_hover(ButtonAction::PlayHoverSound);
            button.set_colors(BUTTON_COLORS);
        }
        for opener in &mut board.openers {
            opener.on_click(ButtonAction::OpenSubview);
        }
        for closer in &mut board.closers {
            closer.on_click(ButtonAction::CloseAll);
        }

        tracing::debug!(
            container = container.name(),
            closeables = closeables.len(),
            openers = board.openers.len(),
            closers = board.closers.len(),
            "interface controller initialized"
        );

        Ok(Self {
            container,
            closeables,
            hover_audio,
            quit,
        })
    }

    pub fn state(&self) -> VisibilityState {
        if self.container.is_visible() {
            VisibilityState::MenuVisible
        } else {
            VisibilityState::SubviewVisible
        }
    }

    pub fn container(&self) -> &Surface {
        &self.container
    }

    pub fn closeables(&self) -> &[Surface] {
        &self.closeables
    }

    pub fn quit_prompt(&self) -> &QuitPrompt<L> {
        &self.quit
    }

    /// Hide the button menu.
    pub fn open_subview(&mut self) {
        self.container.set_visible(false);
        tracing::debug!("sub-view opened");
    }

    /// Close every closeable surface and show the menu again.
    ///
    /// Returns `false` without touching anything when the menu is already
    /// shown.
    pub fn close_all(&mut self) -> bool {
        if self.state() == VisibilityState::MenuVisible {
            let stray: Vec<&str> = self
                .closeables
                .iter()
                .filter(|surface| surface.is_visible())
                .map(Surface::name)
                .collect();
            if !stray.is_empty() {
                tracing::warn!(?stray, "closeable surfaces visible while the menu is shown");
            }
            return false;
        }

        for surface in &self.closeables {
            surface.set_visible(false);
        }
        self.container.set_visible(true);
        tracing::debug!("closeable surfaces closed");
        true
    }

    /// Per-tick cancel check.
    pub fn on_cancel_signal(&mut self, edge: bool) -> CancelOutcome {
        if !edge {
            return CancelOutcome::Idle;
        }
        if self.close_all() {
            return CancelOutcome::Closed;
        }
        self.quit.request();
        CancelOutcome::QuitRequested
    }

    pub fn hover(&mut self) {
        self.hover_audio.play();
    }

    /// Route one button action.
    pub fn dispatch(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::OpenSubview => self.open_subview(),
            ButtonAction::ShowSurface(index) => match self.closeables.get(index) {
                Some(surface) => surface.set_visible(true),
                None => tracing::warn!(index, "no closeable surface at index"),
            },
            ButtonAction::CloseAll => {
                self.close_all();
            }
            ButtonAction::PlayHoverSound => self.hover(),
            ButtonAction::PromptQuit => self.quit.request(),
        }
    }

    /// Route every action a button event produced, in order.
    pub fn dispatch_all(&mut self, actions: &[ButtonAction]) {
        for action in actions {
            self.dispatch(*action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::Button;
    use crate::scene::SceneId;
    use crate::testsupport::{RecordingAudio, RecordingLoader};

    struct Fixture {
        controller: InterfaceVisibilityController<RecordingAudio, RecordingLoader>,
        board: ButtonBoard,
        audio: RecordingAudio,
        container: Surface,
        panels: Vec<Surface>,
    }

    fn fixture() -> Fixture {
        let container = Surface::new("Office", true);
        let panels = vec![Surface::new("Computer", false), Surface::new("Phone", false)];
        let mut board = ButtonBoard {
            openers: vec![Button::hoverable("Computer"), Button::hoverable("Phone")],
            closers: vec![Button::plain("Close")],
            others: vec![Button::hoverable("Quit")],
        };
        board.openers[0].on_click(ButtonAction::ShowSurface(0));
        board.openers[1].on_click(ButtonAction::ShowSurface(1));
        QuitPrompt::<RecordingLoader>::attach(&mut board.others[0]);
        let audio = RecordingAudio::default();
        let controller = InterfaceVisibilityController::initialize(
            container.clone(),
            panels.clone(),
            &mut board,
            Some(audio.clone()),
            QuitPrompt::new(RecordingLoader::default()),
        )
        .expect("initialize");
        Fixture {
            controller,
            board,
            audio,
            container,
            panels,
        }
    }

    #[test]
    fn missing_hover_audio_is_rejected_before_wiring() {
        let mut board = ButtonBoard {
            openers: vec![Button::hoverable("Computer")],
            ..ButtonBoard::default()
        };
        let result = InterfaceVisibilityController::<RecordingAudio, _>::initialize(
            Surface::new("Office", true),
            Vec::new(),
            &mut board,
            None,
            QuitPrompt::new(RecordingLoader::default()),
        );
        assert_eq!(
            result.err(),
            Some(SceneError::MissingDependency("hover audio source"))
        );
        assert!(board.openers[0].click().is_empty());
        assert!(board.openers[0].colors().is_none());
    }

    #[test]
    fn initialize_styles_and_wires_hoverables() {
        let fx = fixture();
        for button in fx.board.menu_buttons() {
            assert_eq!(button.colors(), Some(&BUTTON_COLORS));
            assert_eq!(button.hover(), &[ButtonAction::PlayHoverSound]);
        }
        assert!(fx.board.closers[0].colors().is_none());
        assert_eq!(fx.board.closers[0].click(), &[ButtonAction::CloseAll]);
        assert_eq!(fx.controller.state(), VisibilityState::MenuVisible);
    }

    #[test]
    fn opener_click_hides_container_and_shows_panel() {
        let mut fx = fixture();
        let actions = fx.board.openers[1].click().to_vec();
        fx.controller.dispatch_all(&actions);
        assert_eq!(fx.controller.state(), VisibilityState::SubviewVisible);
        assert!(!fx.container.is_visible());
        assert!(fx.panels[1].is_visible());
        assert!(!fx.panels[0].is_visible());
    }

    #[test]
    fn close_all_returns_true_once_per_cycle() {
        let mut fx = fixture();
        assert!(!fx.controller.close_all());
        fx.controller.open_subview();
        assert!(fx.controller.close_all());
        assert!(!fx.controller.close_all());
        fx.controller.open_subview();
        assert!(fx.controller.close_all());
    }

    #[test]
    fn cancel_on_menu_invokes_quit_once() {
        let mut fx = fixture();
        assert_eq!(
            fx.controller.on_cancel_signal(true),
            CancelOutcome::QuitRequested
        );
        assert_eq!(fx.controller.quit_prompt().loader().loads, vec![SceneId::MainMenu]);
    }

    #[test]
    fn cancel_in_subview_closes_without_quitting() {
        let mut fx = fixture();
        fx.controller.open_subview();
        fx.panels[0].set_visible(true);
        fx.panels[1].set_visible(true);

        assert_eq!(fx.controller.on_cancel_signal(true), CancelOutcome::Closed);
        assert!(fx.panels.iter().all(|panel| !panel.is_visible()));
        assert!(fx.container.is_visible());
        assert_eq!(fx.controller.state(), VisibilityState::MenuVisible);
        assert!(fx.controller.quit_prompt().loader().loads.is_empty());
    }

    #[test]
    fn no_edge_is_idle() {
        let mut fx = fixture();
        fx.controller.open_subview();
        assert_eq!(fx.controller.on_cancel_signal(false), CancelOutcome::Idle);
        assert_eq!(fx.controller.state(), VisibilityState::SubviewVisible);
    }

    #[test]
    fn repeated_close_all_matches_single_close() {
        let mut fx = fixture();
        fx.controller.open_subview();
        fx.panels[0].set_visible(true);
        fx.controller.close_all();
        let once: Vec<bool> = fx.panels.iter().map(Surface::is_visible).collect();
        fx.controller.close_all();
        let twice: Vec<bool> = fx.panels.iter().map(Surface::is_visible).collect();
        assert_eq!(once, twice);
        assert!(fx.container.is_visible());
    }

    #[test]
    fn stray_panels_are_left_alone_while_menu_is_shown() {
        let mut fx = fixture();
        fx.panels[0].set_visible(true);
        assert!(!fx.controller.close_all());
        assert!(fx.panels[0].is_visible());
    }

    #[test]
    fn hover_and_quit_buttons_dispatch() {
        let mut fx = fixture();
        let hover = fx.board.others[0].hover().to_vec();
        fx.controller.dispatch_all(&hover);
        assert_eq!(fx.audio.plays(), 1);

        let click = fx.board.others[0].click().to_vec();
        fx.controller.dispatch_all(&click);
        assert_eq!(fx.controller.quit_prompt().loader().loads, vec![SceneId::MainMenu]);
    }

    #[test]
    fn unknown_surface_index_is_ignored() {
        let mut fx = fixture();
        fx.controller.dispatch(ButtonAction::ShowSurface(9));
        assert!(fx.panels.iter().all(|panel| !panel.is_visible()));
    }

    #[test]
    fn empty_board_and_surfaces_are_valid() {
        let mut board = ButtonBoard::default();
        let mut controller = InterfaceVisibilityController::initialize(
            Surface::new("Office", true),
            Vec::new(),
            &mut board,
            Some(RecordingAudio::default()),
            QuitPrompt::new(RecordingLoader::default()),
        )
        .expect("initialize");
        controller.open_subview();
        assert!(controller.close_all());
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone, Copy)]
        enum Op {
            Open,
            Close,
        }

        proptest! {
            #[test]
            fn close_all_true_exactly_once_per_cycle(
                ops in proptest::collection::vec(prop_oneof![Just(Op::Open), Just(Op::Close)], 0..64)
            ) {
                let mut fx = fixture();
                let mut open = false;
                for op in ops {
                    match op {
                        Op::Open => {
                            fx.controller.open_subview();
                            open = true;
                        }
                        Op::Close => {
                            let closed = fx.controller.close_all();
                            prop_assert_eq!(closed, open);
                            open = false;
                        }
                    }
                    prop_assert_eq!(fx.container.is_visible(), !open);
                }
            }
        }
    }
}
