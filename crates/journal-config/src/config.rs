use journal_types::DuplicateUserPolicy;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// Attempts allowed per validated prompt; unset retries forever.
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersConfig {
    #[serde(default)]
    pub duplicate_names: DuplicateUserPolicy,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub users: UsersConfig,
}

impl Config {
    /// Reads the config at `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.input.max_attempts, None);
        assert_eq!(config.users.duplicate_names, DuplicateUserPolicy::Alias);
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[log]
level = "debug"

[input]
max_attempts = 3

[users]
duplicate_names = "reject"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.input.max_attempts, Some(3));
        assert_eq!(config.users.duplicate_names, DuplicateUserPolicy::Reject);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[input]\nmax_attempts = 10\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.input.max_attempts, Some(10));
        assert_eq!(config.users.duplicate_names, DuplicateUserPolicy::Alias);
    }

    #[test]
    fn test_unknown_policy_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[users]\nduplicate_names = \"merge\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }
}
