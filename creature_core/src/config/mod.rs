//! Settings loading from TOML files

mod demo;

pub use demo::DemoSettings;

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Settings loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML")]
    Parse(#[from] toml::de::Error),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Deserialize a TOML string
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let result: Result<DemoSettings, _> = load_toml(Path::new("/nonexistent/creature.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result: Result<DemoSettings, _> = parse_toml("offense_power = [");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_error_message_leaves_cause_to_source() {
        use std::error::Error as _;

        let err = load_toml::<DemoSettings>(Path::new("/nonexistent/creature.toml")).unwrap_err();
        assert_eq!(err.to_string(), "Failed to read settings file");
        assert!(err.source().is_some());

        let err = parse_toml::<DemoSettings>("offense_power = [").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse TOML");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let result: Result<DemoSettings, _> = parse_toml(r#"offense_power = "fifty""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
