//! Scene identifiers, the host scene loader, and the quit prompt.

use std::fmt;

use crate::button::{Button, ButtonAction};

/// Scenes the game knows how to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
pub enum SceneId {
    #[default]
    MainMenu,
    Office,
}

impl SceneId {
    /// Stable scene name used by the loader.
    pub fn name(self) -> &'static str {
        match self {
            Self::MainMenu => "MainMenu",
            Self::Office => "Office",
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Host collaborator that performs scene transitions.
pub trait SceneLoader {
    fn load_scene(&mut self, scene: SceneId);
}

/// Loader that records the requested transition for the host loop to act on.
#[derive(Debug, Default)]
pub struct PendingTransition {
    requested: Option<SceneId>,
}

impl PendingTransition {
    pub fn requested(&self) -> Option<SceneId> {
        self.requested
    }
}

impl SceneLoader for PendingTransition {
    fn load_scene(&mut self, scene: SceneId) {
        self.requested = Some(scene);
    }
}

/// Leaves the current scene for the main menu.
#[derive(Debug)]
pub struct QuitPrompt<L> {
    loader: L,
    target: SceneId,
}

impl<L: SceneLoader> QuitPrompt<L> {
    pub fn new(loader: L) -> Self {
        Self::with_target(loader, SceneId::MainMenu)
    }

    pub fn with_target(loader: L, target: SceneId) -> Self {
        Self { loader, target }
    }

    /// Wire this prompt to a button's click event.
    pub fn attach(button: &mut Button) {
        button.on_click(ButtonAction::PromptQuit);
    }

    pub fn request(&mut self) {
        tracing::info!(scene = %self.target, "leaving office scene");
        self.loader.load_scene(self.target);
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_loads_main_menu_by_default() {
        let mut prompt = QuitPrompt::new(PendingTransition::default());
        assert_eq!(prompt.loader().requested(), None);
        prompt.request();
        assert_eq!(prompt.loader().requested(), Some(SceneId::MainMenu));
    }

    #[test]
    fn attach_subscribes_quit_on_click() {
        let mut button = Button::hoverable("Quit");
        QuitPrompt::<PendingTransition>::attach(&mut button);
        assert_eq!(button.click(), &[ButtonAction::PromptQuit]);
    }

    #[test]
    fn scene_names_are_stable() {
        assert_eq!(SceneId::MainMenu.to_string(), "MainMenu");
        assert_eq!(SceneId::Office.name(), "Office");
    }
}
