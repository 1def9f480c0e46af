//! Config-file source discovery.
//!
//! Source order: explicit path > local file > global file > built-in template.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_OFFICE_CONFIG_TEMPLATE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from local `./office.toml`.
    Local,
    /// Config loaded from the per-user config directory.
    Global(PathBuf),
    /// No file found; the embedded template was used.
    BuiltInDefaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) | Self::Global(path) => write!(f, "{}", path.display()),
            Self::Local => write!(f, "./{CONFIG_FILE_NAME}"),
            Self::BuiltInDefaults => write!(f, "built-in defaults"),
        }
    }
}

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist; falling through would hide typos.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }

    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((
        DEFAULT_OFFICE_CONFIG_TEMPLATE.to_string(),
        ConfigSource::BuiltInDefaults,
    ))
}

/// Per-user config root (`$XDG_CONFIG_HOME`, else `~/.config`).
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io;

    fn reader(files: BTreeMap<PathBuf, &'static str>) -> impl Fn(&Path) -> io::Result<String> {
        move |path| {
            files
                .get(path)
                .map(|text| text.to_string())
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
        }
    }

    #[test]
    fn explicit_path_wins_and_must_exist() {
        let read = reader(BTreeMap::from([(PathBuf::from("custom.toml"), "a")]));
        let root = || Some(PathBuf::from("/cfg"));
        let (text, source) =
            read_config_text_with_sources(Some("custom.toml"), &read, &root).unwrap();
        assert_eq!(text, "a");
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("custom.toml")));

        let err = read_config_text_with_sources(Some("nope.toml"), &read, &root).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn local_file_beats_global() {
        let read = reader(BTreeMap::from([
            (PathBuf::from("office.toml"), "local"),
            (PathBuf::from("/cfg/office/office.toml"), "global"),
        ]));
        let root = || Some(PathBuf::from("/cfg"));
        let (text, source) = read_config_text_with_sources(None, &read, &root).unwrap();
        assert_eq!(text, "local");
        assert_eq!(source, ConfigSource::Local);
    }

    #[test]
    fn global_file_used_when_no_local() {
        let read = reader(BTreeMap::from([(
            PathBuf::from("/cfg/office/office.toml"),
            "global",
        )]));
        let root = || Some(PathBuf::from("/cfg"));
        let (text, source) = read_config_text_with_sources(None, &read, &root).unwrap();
        assert_eq!(text, "global");
        assert_eq!(
            source,
            ConfigSource::Global(PathBuf::from("/cfg/office/office.toml"))
        );
    }

    #[test]
    fn falls_back_to_template() {
        let read = reader(BTreeMap::new());
        let root = || None;
        let (text, source) = read_config_text_with_sources(None, &read, &root).unwrap();
        assert_eq!(text, DEFAULT_OFFICE_CONFIG_TEMPLATE);
        assert_eq!(source, ConfigSource::BuiltInDefaults);
        assert_eq!(source.to_string(), "built-in defaults");
    }
}
