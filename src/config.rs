use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

use crate::logger::DEFAULT_MAX_MESSAGES;

/// Editor configuration, read from an optional `config.toml` next to the
/// binary. A missing file yields the defaults; a malformed file is an error
/// the caller may downgrade to defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogConfig {
    /// Target log file; resolved by the logger (empty means `logfile.txt`).
    #[serde(default)]
    pub path: String,
    /// Maximum retained log lines.
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            max_messages: DEFAULT_MAX_MESSAGES,
        }
    }
}

fn default_max_messages() -> usize {
    DEFAULT_MAX_MESSAGES
}

impl Config {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let string = match std::fs::read_to_string(path) {
            Ok(string) => string,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(error) => return Err(error.into()),
        };
        let config = toml::from_str(&string)?;
        Ok(config)
    }
}
