//! CLI command implementations

pub mod effects;
pub mod field;
pub mod profile;
pub mod simulate;

use anyhow::{Context, Result};
use jianghu_core::ThemeColor;
use jianghu_particles::{EngineConfig, EngineSettings};
use std::path::Path;

const DEFAULT_SETTINGS_FILE: &str = "jianghu.toml";

/// Load settings from an explicit path, else `./jianghu.toml` if present,
/// else built-in defaults.
pub fn load_settings(path: Option<&str>) -> Result<EngineSettings> {
    match path {
        Some(path) => EngineSettings::load(Path::new(path))
            .with_context(|| format!("Failed to load settings from {}", path)),
        None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
            log::info!("using settings from {}", DEFAULT_SETTINGS_FILE);
            EngineSettings::load(Path::new(DEFAULT_SETTINGS_FILE))
                .context("Failed to load jianghu.toml")
        }
        None => Ok(EngineSettings::default()),
    }
}

/// Build an engine config, filling gaps from settings
pub fn config_from(
    settings: &EngineSettings,
    tag: &str,
    count: Option<i64>,
    color: Option<&str>,
) -> EngineConfig {
    EngineConfig::new(
        tag,
        count.unwrap_or(settings.default_count),
        color.map_or_else(|| settings.default_color.clone(), ThemeColor::from),
    )
}
