use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What to do when the chord count and the coarse translation count differ.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PairingPolicy {
    /// Log a warning and pair up to the shorter list.
    #[default]
    Warn,
    /// Fail the lesson.
    Strict,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Plover JSON dictionary used to validate chord merges.
    pub dictionary_path: Option<PathBuf>,
    pub compress_chords: bool,
    pub pairing: PairingPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dictionary_path: None,
            compress_chords: true,
            pairing: PairingPolicy::Warn,
        }
    }
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str::<Config>(contents)?)
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(file_path).map_err(|source| ConfigError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    let loaded_config = parse_config(&contents)?;
    if let Some(dictionary_path) = &loaded_config.dictionary_path {
        if !dictionary_path.is_file() {
            return Err(ConfigError::MissingDictionary(dictionary_path.clone()));
        }
    }
    Ok(loaded_config)
}
