//! Default configuration constants.

/// Embedded default `office.toml`, also used when no config file exists.
pub(super) const DEFAULT_OFFICE_CONFIG_TEMPLATE: &str = include_str!("../templates/office.toml");
/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "office.toml";
/// Directory under the config root holding the global config.
pub(super) const CONFIG_DIR_NAME: &str = "office";
pub(super) const DEFAULT_SCENE_TITLE: &str = "Office";
pub(super) const DEFAULT_CLOSE_LABEL: &str = "Close";
pub(super) const DEFAULT_QUIT_LABEL: &str = "Quit";
pub(super) const DEFAULT_THEME_NAME: &str = "dark";
