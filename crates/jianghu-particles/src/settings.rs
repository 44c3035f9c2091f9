//! Engine settings loaded from `jianghu.toml`
//!
//! ```toml
//! default_count = 50
//! default_color = "#fff"
//! default_max = 40
//!
//! [budget]
//! falling-petal = 120
//! lightning = 20
//! ```

use crate::budget::{BudgetTable, DEFAULT_MAX};
use crate::effect::EffectType;
use jianghu_core::{JianghuError, Result, ThemeColor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Tunable defaults for the engine façade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Particles requested when the caller gives no count
    pub default_count: i64,
    /// Theme color when the caller gives none
    pub default_color: ThemeColor,
    /// Cap for unrecognized effect tags
    pub default_max: usize,
    /// Per-tag cap overrides; keys may be canonical or legacy tags
    pub budget: BTreeMap<String, usize>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_count: 50,
            default_color: ThemeColor::default(),
            default_max: DEFAULT_MAX,
            budget: BTreeMap::new(),
        }
    }
}

impl EngineSettings {
    /// Load and validate settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate settings from a TOML string.
    ///
    /// Zero caps are raised to 1 with a warning. Unknown budget tags, an
    /// effect named twice (canonical and legacy tag) and negative default
    /// counts are rejected.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut settings: EngineSettings = toml::from_str(content)?;

        if settings.default_count < 0 {
            return Err(JianghuError::ValueOutOfRange {
                field: "default_count".into(),
                min: 0.0,
                max: i64::MAX as f64,
                value: settings.default_count as f64,
            });
        }

        if settings.default_max == 0 {
            log::warn!("default_max = 0 would hide every unknown effect, using 1");
            settings.default_max = 1;
        }

        let mut seen: BTreeMap<EffectType, &str> = BTreeMap::new();
        for (tag, max) in settings.budget.iter_mut() {
            let Some(effect) = EffectType::lookup(tag) else {
                return Err(JianghuError::ConfigError(format!(
                    "Unknown effect tag in [budget]: '{tag}'"
                )));
            };
            if let Some(previous) = seen.insert(effect, tag) {
                return Err(JianghuError::ConfigError(format!(
                    "[budget] sets '{effect}' twice: '{previous}' and '{tag}'"
                )));
            }
            if *max == 0 {
                log::warn!("budget for '{tag}' is 0, using 1");
                *max = 1;
            }
        }

        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Budget table with this file's overrides applied
    pub fn budget_table(&self) -> BudgetTable {
        self.budget
            .iter()
            .filter_map(|(tag, max)| EffectType::lookup(tag).map(|e| (e, *max)))
            .fold(
                BudgetTable::new().with_default_max(self.default_max),
                |table, (effect, max)| table.with_override(effect, max),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = EngineSettings::from_toml_str("").unwrap();
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.default_count, 50);
        assert_eq!(settings.default_color.as_str(), "#fff");
    }

    #[test]
    fn parse_overrides() {
        let toml_str = r##"
default_count = 12
default_color = "#ff00ff"
default_max = 10

[budget]
falling-petal = 120
"번개" = 5
"##;
        let settings = EngineSettings::from_toml_str(toml_str).unwrap();
        let table = settings.budget_table();
        assert_eq!(table.clamp_count(Some(EffectType::FallingPetal), 1000), 120);
        assert_eq!(table.clamp_count(Some(EffectType::Lightning), 1000), 5);
        assert_eq!(table.clamp_count(None, 1000), 10);
        assert_eq!(table.clamp_count(Some(EffectType::Mist), 1000), 30);
    }

    #[test]
    fn zero_caps_are_raised() {
        let settings =
            EngineSettings::from_toml_str("default_max = 0\n[budget]\nmist = 0\n").unwrap();
        assert_eq!(settings.default_max, 1);
        assert_eq!(settings.budget["mist"], 1);
    }

    #[test]
    fn unknown_budget_tag_is_rejected() {
        let err = EngineSettings::from_toml_str("[budget]\nconfetti = 3\n").unwrap_err();
        assert!(matches!(err, JianghuError::ConfigError(_)));
    }

    #[test]
    fn effect_named_twice_is_rejected() {
        let toml_str = "[budget]\nfalling-petal = 10\n\"꽃잎\" = 20\n";
        let err = EngineSettings::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, JianghuError::ConfigError(ref msg) if msg.contains("falling-petal")));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("jianghu-settings-that-does-not-exist.toml");
        let err = EngineSettings::load(&path).unwrap_err();
        assert!(matches!(err, JianghuError::IoError(_)));
    }

    #[test]
    fn negative_default_count_is_rejected() {
        let err = EngineSettings::from_toml_str("default_count = -1").unwrap_err();
        assert!(matches!(err, JianghuError::ValueOutOfRange { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineSettings::from_toml_str("default_max = [").unwrap_err();
        assert!(matches!(err, JianghuError::TomlParseError(_)));
    }

    #[test]
    fn round_trips_through_toml() {
        let mut settings = EngineSettings::default();
        settings.budget.insert("flame".into(), 9);
        let text = settings.to_toml_string().unwrap();
        assert_eq!(EngineSettings::from_toml_str(&text).unwrap(), settings);
    }
}
