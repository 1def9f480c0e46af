//! Builds the office scene graph from configuration.
//!
//! The layout creates every surface and button, wires each opener to its
//! panel, attaches the quit prompt to the quit button, and hands everything to
//! [`InterfaceVisibilityController::initialize`].

use crate::audio::AudioSource;
use crate::button::{Button, ButtonAction, ButtonBoard};
use crate::config::Config;
use crate::controller::InterfaceVisibilityController;
use crate::error::SceneError;
use crate::scene::{QuitPrompt, SceneLoader};
use crate::surface::Surface;

/// Display data for one closeable panel.
#[derive(Debug, Clone)]
pub struct PanelView {
    pub title: String,
    pub body: Vec<String>,
    pub surface: Surface,
}

/// A fully wired office scene.
pub struct OfficeScene<A, L> {
    pub title: String,
    pub controller: InterfaceVisibilityController<A, L>,
    /// `closers[i]` belongs to `panels[i]`.
    pub board: ButtonBoard,
    pub panels: Vec<PanelView>,
}

impl<A: AudioSource, L: SceneLoader> OfficeScene<A, L> {
    pub fn build(config: &Config, hover_audio: Option<A>, loader: L) -> Result<Self, SceneError> {
        let container = Surface::new(config.scene.title.as_str(), true);
        let mut board = ButtonBoard::default();
        let mut panels = Vec::with_capacity(config.panels.len());

        for (index, panel) in config.panels.iter().enumerate() {
            let surface = Surface::new(panel.name.as_str(), false);

            let mut opener = Button::hoverable(panel.opener.as_str());
            opener.on_click(ButtonAction::ShowSurface(index));
            board.openers.push(opener);
            board
                .closers
                .push(Button::plain(config.scene.close_label.as_str()));

            panels.push(PanelView {
                title: panel.name.clone(),
                body: panel.body.clone(),
                surface,
            });
        }

        let mut quit = Button::hoverable(config.scene.quit_label.as_str());
        QuitPrompt::<L>::attach(&mut quit);
        board.others.push(quit);

        let closeables = panels.iter().map(|panel| panel.surface.clone()).collect();
        let controller = InterfaceVisibilityController::initialize(
            container,
            closeables,
            &mut board,
            hover_audio,
            QuitPrompt::with_target(loader, config.scene.main_menu),
        )?;

        Ok(Self {
            title: config.scene.title.clone(),
            controller,
            board,
            panels,
        })
    }

    /// Index of the first visible panel, if any.
    pub fn open_panel(&self) -> Option<usize> {
        self.panels
            .iter()
            .position(|panel| panel.surface.is_visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::controller::VisibilityState;
    use crate::scene::SceneId;
    use crate::testsupport::{RecordingAudio, RecordingLoader};

    fn template_scene() -> OfficeScene<RecordingAudio, RecordingLoader> {
        let config = parse_config(include_str!("templates/office.toml"))
            .unwrap()
            .config;
        OfficeScene::build(
            &config,
            Some(RecordingAudio::default()),
            RecordingLoader::default(),
        )
        .unwrap()
    }

    #[test]
    fn builds_one_opener_and_closer_per_panel() {
        let scene = template_scene();
        assert_eq!(scene.panels.len(), 3);
        assert_eq!(scene.board.openers.len(), 3);
        assert_eq!(scene.board.closers.len(), 3);
        assert_eq!(scene.board.others.len(), 1);
        assert_eq!(scene.board.others[0].label(), "Quit");
        assert_eq!(scene.controller.state(), VisibilityState::MenuVisible);
        assert_eq!(scene.open_panel(), None);
    }

    #[test]
    fn opener_shows_its_own_panel() {
        let mut scene = template_scene();
        let actions = scene.board.openers[2].click().to_vec();
        scene.controller.dispatch_all(&actions);
        assert_eq!(scene.open_panel(), Some(2));
        assert_eq!(scene.controller.state(), VisibilityState::SubviewVisible);

        let close = scene.board.closers[2].click().to_vec();
        scene.controller.dispatch_all(&close);
        assert_eq!(scene.open_panel(), None);
        assert_eq!(scene.controller.state(), VisibilityState::MenuVisible);
    }

    #[test]
    fn quit_button_targets_configured_scene() {
        let mut config = parse_config("").unwrap().config;
        config.scene.main_menu = SceneId::Office;
        let mut scene = OfficeScene::build(
            &config,
            Some(RecordingAudio::default()),
            RecordingLoader::default(),
        )
        .unwrap();
        let actions = scene.board.others[0].click().to_vec();
        scene.controller.dispatch_all(&actions);
        assert_eq!(scene.controller.quit_prompt().loader().loads, vec![SceneId::Office]);
    }

    #[test]
    fn missing_audio_fails_the_build() {
        let config = parse_config("").unwrap().config;
        let result = OfficeScene::<RecordingAudio, _>::build(&config, None, RecordingLoader::default());
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("missing dependency: hover audio source".to_string())
        );
    }
}
