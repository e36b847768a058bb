use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, Result};

pub const DEFAULT_STATEMENT: &str = "CREATE TABLE users (id INT, name STRING);";

/// How `ddllex` prints the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Token: Type=KEYWORD, Literal=CREATE`
    #[default]
    Text,
    /// One JSON object per token
    Json,
}

/// What `ddllex` does after an unexpected character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IllegalPolicy {
    /// Report it and keep scanning
    #[default]
    Continue,
    /// Report it and stop
    Abort,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    pub on_illegal: IllegalPolicy,
    /// Statement lexed when no input is given on the command line.
    pub demo_statement: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::default(),
            on_illegal: IllegalPolicy::default(),
            demo_statement: DEFAULT_STATEMENT.to_string(),
        }
    }
}

impl Config {
    /// Loads the config from `explicit` if given, otherwise from
    /// [`Config::get_config_path`]. Only a missing default file falls back
    /// to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Self::get_config_path();
                if path.exists() {
                    Self::load_from_path(&path)
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        serde_json::from_str(&contents)
            .map_err(|e| CliError::Config(format!("invalid config file {}: {}", path.display(), e)))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CliError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get_config_path() -> PathBuf {
        let home = if cfg!(windows) {
            env::var("USERPROFILE")
        } else {
            env::var("HOME")
        };
        PathBuf::from(home.unwrap_or_else(|_| String::from(".")))
            .join(".ddllex")
            .join("config.json")
    }
}
