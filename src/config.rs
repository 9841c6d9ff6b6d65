use std::env;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

pub const PASSWORD_LENGTH_VAR: &str = "PASSWORD_LENGTH";
pub const CLIP_ALLOWED_VAR: &str = "CLIP_ALLOWED";

pub const ENV_FILE_NAME: &str = ".env";

/// Loads the nearest `.env` found in `start` or one of its parents.
///
/// A missing file is fine, the variables may come from the process
/// environment instead. A file that exists but cannot be parsed is an error.
/// Returns the path of the file that was loaded.
pub fn load_env_file(start: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let Some(path) = start
        .ancestors()
        .map(|dir| dir.join(ENV_FILE_NAME))
        .find(|candidate| candidate.is_file())
    else {
        return Ok(None);
    };

    dotenvy::from_path(&path)?;
    Ok(Some(path))
}

pub fn load_env_from_current_dir() -> Result<Option<PathBuf>, ConfigError> {
    let cwd = env::current_dir().map_err(ConfigError::WorkingDir)?;
    load_env_file(&cwd)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub default_length: Option<i64>,
    pub clip_allowed: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_length = match lookup(PASSWORD_LENGTH_VAR) {
            Some(value) => Some(value.trim().parse::<i64>().map_err(|_| {
                ConfigError::InvalidLength {
                    value: value.clone(),
                }
            })?),
            None => None,
        };

        // Only the exact string "true" turns clipboard support on.
        let clip_allowed = lookup(CLIP_ALLOWED_VAR).as_deref() == Some("true");

        Ok(Self {
            default_length,
            clip_allowed,
        })
    }

    /// The `--length` flag wins over `PASSWORD_LENGTH`.
    pub fn resolve_length(&self, flag: Option<i64>) -> Result<i64, ConfigError> {
        flag.or(self.default_length)
            .ok_or(ConfigError::MissingLength)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn reads_length_and_clip_flag() {
        let config =
            Config::from_lookup(lookup(&[("PASSWORD_LENGTH", "12"), ("CLIP_ALLOWED", "true")]))
                .unwrap();

        assert_eq!(config.default_length, Some(12));
        assert!(config.clip_allowed);
    }

    #[test]
    fn clip_requires_exact_true() {
        for value in ["TRUE", "True", "1", "yes", "false", ""] {
            let config = Config::from_lookup(lookup(&[("CLIP_ALLOWED", value)])).unwrap();
            assert!(!config.clip_allowed, "{value:?} should not enable clipboard");
        }

        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(!config.clip_allowed);
    }

    #[test]
    fn invalid_length_variable() {
        let err = Config::from_lookup(lookup(&[("PASSWORD_LENGTH", "twelve")])).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidLength { ref value } if value == "twelve"));
    }

    #[test]
    fn negative_length_variable_is_kept() {
        let config = Config::from_lookup(lookup(&[("PASSWORD_LENGTH", " -4 ")])).unwrap();

        assert_eq!(config.default_length, Some(-4));
    }

    #[test]
    fn flag_overrides_variable() {
        let config = Config::from_lookup(lookup(&[("PASSWORD_LENGTH", "10")])).unwrap();

        assert_eq!(config.resolve_length(Some(20)).unwrap(), 20);
        assert_eq!(config.resolve_length(Some(0)).unwrap(), 0);
        assert_eq!(config.resolve_length(None).unwrap(), 10);
    }

    #[test]
    fn missing_length() {
        let config = Config::default();

        assert!(matches!(
            config.resolve_length(None),
            Err(ConfigError::MissingLength)
        ));
    }

    #[test]
    fn missing_env_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("empty");
        fs::create_dir(&nested).unwrap();

        // Parents outside the temp dir could hold a stray .env, so only
        // check that nothing inside it was picked up.
        let loaded = load_env_file(&nested).unwrap();
        assert!(loaded.is_none_or(|path| !path.starts_with(dir.path())));
    }

    #[test]
    fn malformed_env_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(ENV_FILE_NAME), "not a valid line\n").unwrap();

        assert!(matches!(
            load_env_file(dir.path()),
            Err(ConfigError::EnvFile(_))
        ));
    }

    #[test]
    fn env_file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ENV_FILE_NAME);
        fs::write(&path, "PASSGEN_CONFIG_TEST_VALUE=42\n").unwrap();

        assert_eq!(load_env_file(dir.path()).unwrap(), Some(path));
        assert_eq!(env::var("PASSGEN_CONFIG_TEST_VALUE").unwrap(), "42");
    }

    #[test]
    fn env_file_found_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ENV_FILE_NAME);
        fs::write(&path, "PASSGEN_CONFIG_PARENT_VALUE=7\n").unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(load_env_file(&nested).unwrap(), Some(path));
        assert_eq!(env::var("PASSGEN_CONFIG_PARENT_VALUE").unwrap(), "7");
    }
}
