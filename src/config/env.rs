//! Environment overrides applied after the config file is parsed.

use crate::audio::HoverSound;
use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_HOVER_SOUND: &str = "OFFICE_HOVER_SOUND";
pub(super) const ENV_NO_COLOR: &str = "OFFICE_NO_COLOR";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(raw) = env_lookup(ENV_HOVER_SOUND) {
        config.audio.hover_sound = HoverSound::parse(&raw).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid {ENV_HOVER_SOUND} value `{raw}`: expected bell, silent, or none"
            ))
        })?;
    }
    if env_lookup(ENV_NO_COLOR).is_some_and(|value| !value.trim().is_empty()) {
        config.display.color = false;
    }
    Ok(())
}
