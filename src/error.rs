//! Unified error types for the office scene.

use std::fmt;

// ---------------------------------------------------------------------------
// SceneError
// ---------------------------------------------------------------------------

/// Errors raised while setting up a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A collaborator the scene cannot run without was not supplied.
    MissingDependency(&'static str),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDependency(what) => write!(f, "missing dependency: {what}"),
        }
    }
}

impl std::error::Error for SceneError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// OfficeError (top-level)
// ---------------------------------------------------------------------------

/// Top-level error type for the `office` binary.
#[derive(Debug)]
pub enum OfficeError {
    Config(ConfigError),
    Scene(SceneError),
    /// Terminal I/O failure while hosting the scene.
    Io(std::io::Error),
}

impl fmt::Display for OfficeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Scene(e) => write!(f, "scene: {e}"),
            Self::Io(e) => write!(f, "terminal: {e}"),
        }
    }
}

impl std::error::Error for OfficeError {}

impl From<ConfigError> for OfficeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SceneError> for OfficeError {
    fn from(e: SceneError) -> Self {
        Self::Scene(e)
    }
}

impl From<std::io::Error> for OfficeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
