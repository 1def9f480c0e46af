//! Configuration data model.
//!
//! Struct/enum definitions plus default values. Loading and validation live
//! in `config::mod`.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::audio::HoverSound;
use crate::scene::SceneId;

use super::defaults::{
    DEFAULT_CLOSE_LABEL, DEFAULT_QUIT_LABEL, DEFAULT_SCENE_TITLE, DEFAULT_THEME_NAME,
};

/// Top-level scene configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scene: SceneConfig,
    pub audio: AudioConfig,
    pub display: DisplayConfig,
    pub theme: ThemeConfig,
    /// Closeable panels, each opened by one menu button.
    pub panels: Vec<PanelConfig>,
}

/// `[scene]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub title: String,
    /// Scene requested when the player leaves the office.
    pub main_menu: SceneId,
    pub close_label: String,
    pub quit_label: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_SCENE_TITLE.to_string(),
            main_menu: SceneId::MainMenu,
            close_label: DEFAULT_CLOSE_LABEL.to_string(),
            quit_label: DEFAULT_QUIT_LABEL.to_string(),
        }
    }
}

/// `[audio]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub hover_sound: HoverSound,
}

/// `[display]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// `[theme]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Built-in base theme (`dark` or `light`).
    pub name: String,
    /// Per-token color overrides (`#RRGGBB` or a named color).
    pub colors: BTreeMap<String, String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME_NAME.to_string(),
            colors: BTreeMap::new(),
        }
    }
}

/// One `[[panels]]` entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub name: String,
    /// Label of the menu button that opens this panel.
    pub opener: String,
    /// Text lines shown while the panel is open.
    pub body: Vec<String>,
}

/// Non-fatal findings collected while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    pub warnings: Vec<String>,
}

/// Configuration payload plus load-time diagnostics.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub diagnostics: ConfigDiagnostics,
}
