//! Configuration error types (pure - no I/O variants).

use thiserror::Error;

/// Version of the built-in defaults registry this crate understands.
pub const DEFAULTS_VERSION: u32 = 1;

/// Errors raised while loading theme, product or defaults JSON.
///
/// These only occur at the composition root. Once a site is loaded, rendering
/// never fails on content: missing or malformed fields degrade to defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid theme config: {0}")]
    InvalidTheme(String),

    #[error("Invalid product records: {0}")]
    InvalidProducts(String),

    #[error("Invalid defaults registry: {0}")]
    InvalidDefaults(String),

    #[error("Defaults registry version {found} is not supported (expected {expected})")]
    UnsupportedDefaultsVersion { found: u32, expected: u32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::InvalidTheme("expected object".to_string()).to_string(),
            "Invalid theme config: expected object"
        );
        assert_eq!(
            ConfigError::UnsupportedDefaultsVersion {
                found: 7,
                expected: DEFAULTS_VERSION
            }
            .to_string(),
            "Defaults registry version 7 is not supported (expected 1)"
        );
    }
}
