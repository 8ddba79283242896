//! Configuration loading from TOML files

mod legacy;
mod leveling;

pub use legacy::LegacyStatFields;
pub use leveling::{default_config, load_config, parse_config, ClassConfig, LevelingConfig};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a leveling config could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read leveling config: {0}")]
    Read(#[from] std::io::Error),
    #[error("leveling config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("leveling config rejected: {0}")]
    Invalid(String),
}

/// Read a TOML file from disk, then hand it to [`parse_toml`]
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    parse_toml(&fs::read_to_string(path)?)
}

/// Deserialize TOML text, with missing tables falling back to serde defaults
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let result: Result<LevelingConfig, _> = load_toml(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let result: Result<LevelingConfig, _> = parse_toml("[weapon\nmax_level = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_error_messages_name_the_config() {
        let err = ConfigError::Invalid("weapon: max_level too low".to_string());
        assert_eq!(err.to_string(), "leveling config rejected: weapon: max_level too low");
    }
}
