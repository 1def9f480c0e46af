//! Scene configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`OFFICE_HOVER_SOUND`, `OFFICE_NO_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./office.toml in the current directory
//! 4. $XDG_CONFIG_HOME/office/office.toml (or ~/.config/office/office.toml)
//! 5. Built-in template

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

mod defaults;
mod env;
mod sources;
mod types;

pub use sources::config_root_dir;
pub use types::{
    AudioConfig, Config, ConfigDiagnostics, DisplayConfig, LoadedConfig, PanelConfig,
    SceneConfig, ThemeConfig,
};

use env::apply_runtime_env_overrides;
use sources::read_config_text_with_sources;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_diagnostics(path_override)?.config)
}

/// Load configuration and return non-fatal diagnostics.
pub fn load_config_with_diagnostics(
    path_override: Option<&str>,
) -> Result<LoadedConfig, ConfigError> {
    load_config_with_diagnostics_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

/// Parse config text without consulting files or the environment.
pub fn parse_config(text: &str) -> Result<LoadedConfig, ConfigError> {
    let config: Config = toml::from_str(text)?;
    let mut diagnostics = ConfigDiagnostics::default();
    validate_config(&config, &mut diagnostics)?;
    Ok(LoadedConfig {
        config,
        diagnostics,
    })
}

fn load_config_with_diagnostics_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    tracing::debug!(%source, "loading scene config");
    let mut loaded = parse_config(&config_text)?;
    apply_runtime_env_overrides(&mut loaded.config, &env_lookup)?;
    Ok(loaded)
}

fn validate_config(config: &Config, diagnostics: &mut ConfigDiagnostics) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::new();
    for (index, panel) in config.panels.iter().enumerate() {
        let name = panel.name.trim();
        if name.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "panels[{index}] must have a non-empty `name`"
            )));
        }
        if panel.opener.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "panel `{name}` must have a non-empty `opener` label"
            )));
        }
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(ConfigError::Invalid(format!("duplicate panel `{name}`")));
        }
        if panel.body.is_empty() {
            diagnostics
                .warnings
                .push(format!("panel `{name}` has no body text"));
        }
    }
    if config.panels.is_empty() {
        diagnostics
            .warnings
            .push("no panels configured; the menu only offers quit".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::HoverSound;
    use crate::scene::SceneId;
    use crate::testsupport::TestTempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn builtin_template_parses_with_three_panels() {
        let loaded = parse_config(defaults::DEFAULT_OFFICE_CONFIG_TEMPLATE).unwrap();
        let names: Vec<&str> = loaded
            .config
            .panels
            .iter()
            .map(|panel| panel.name.as_str())
            .collect();
        assert_eq!(names, ["Computer", "Phone", "Bookshelf"]);
        assert_eq!(loaded.config.scene.main_menu, SceneId::MainMenu);
        assert_eq!(loaded.config.audio.hover_sound, HoverSound::Bell);
        assert!(loaded.diagnostics.warnings.is_empty());
    }

    #[test]
    fn empty_text_uses_struct_defaults() {
        let loaded = parse_config("").unwrap();
        assert_eq!(loaded.config.scene.close_label, "Close");
        assert!(loaded.config.display.color);
        assert_eq!(
            loaded.diagnostics.warnings,
            vec!["no panels configured; the menu only offers quit".to_string()]
        );
    }

    #[test]
    fn duplicate_panel_names_are_rejected() {
        let text = r#"
            [[panels]]
            name = "Desk"
            opener = "Sit"
            [[panels]]
            name = "desk"
            opener = "Stand"
        "#;
        let err = parse_config(text).unwrap_err();
        assert_eq!(err.to_string(), "invalid config: duplicate panel `desk`");
    }

    #[test]
    fn blank_opener_is_rejected() {
        let text = r#"
            [[panels]]
            name = "Desk"
            opener = "  "
        "#;
        let err = parse_config(text).unwrap_err();
        assert!(err.to_string().contains("opener"), "got: {err}");
    }

    #[test]
    fn empty_body_is_a_warning() {
        let text = r#"
            [[panels]]
            name = "Desk"
            opener = "Sit"
        "#;
        let loaded = parse_config(text).unwrap();
        assert_eq!(
            loaded.diagnostics.warnings,
            vec!["panel `Desk` has no body text".to_string()]
        );
    }

    #[test]
    fn unknown_hover_sound_is_a_toml_error() {
        let err = parse_config("[audio]\nhover_sound = \"chime\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn explicit_file_and_env_overrides_combine() {
        let dir = TestTempDir::new("config");
        let path = dir.write_text(
            "scene.toml",
            "[audio]\nhover_sound = \"bell\"\n[scene]\nmain_menu = \"Office\"\n",
        );
        let path_str = path.to_string_lossy().to_string();
        let loaded = load_config_with_diagnostics_from_sources(
            Some(path_str.as_str()),
            |p| std::fs::read_to_string(p),
            |name| (name == "OFFICE_HOVER_SOUND").then(|| "none".to_string()),
            || None,
        )
        .unwrap();
        assert_eq!(loaded.config.scene.main_menu, SceneId::Office);
        assert_eq!(loaded.config.audio.hover_sound, HoverSound::None);
    }

    #[test]
    fn missing_sources_fall_back_to_template() {
        let loaded = load_config_with_diagnostics_from_sources(
            None,
            |_| Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing")),
            no_env,
            || None,
        )
        .unwrap();
        assert_eq!(loaded.config.panels.len(), 3);
    }
}
