//! Error types for Jianghu

use thiserror::Error;

/// The main error type for Jianghu operations
///
/// The visual path never produces these: unknown effect tags and bad counts
/// degrade to fallbacks. Errors only surface from settings loading, strict
/// tag validation and I/O.
#[derive(Debug, Error)]
pub enum JianghuError {
    #[error("Unknown effect type: {0}")]
    UnknownEffect(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Animation error: {0}")]
    AnimationError(String),
}

/// Result type alias for Jianghu operations
pub type Result<T> = std::result::Result<T, JianghuError>;

impl From<toml::de::Error> for JianghuError {
    fn from(err: toml::de::Error) -> Self {
        JianghuError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for JianghuError {
    fn from(err: toml::ser::Error) -> Self {
        JianghuError::TomlSerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_effect_message_names_tag() {
        let err = JianghuError::UnknownEffect("unknown-tag-xyz".into());
        assert_eq!(err.to_string(), "Unknown effect type: unknown-tag-xyz");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "jianghu.toml");
        let err: JianghuError = io.into();
        assert!(matches!(err, JianghuError::IoError(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn toml_error_converts() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("= broken");
        let err: JianghuError = parsed.unwrap_err().into();
        assert!(matches!(err, JianghuError::TomlParseError(_)));
    }
}
