//! Ingest settings resolution
//!
//! Each setting is taken from the first place that has it:
//! 1. Command-line flag
//! 2. Environment variable (via clap `env`)
//! 3. TOML config file given with `--config`
//! 4. Compiled default

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use mixtape_ingest::TransportConfig;

use crate::commands::ingest::IngestArgs;

pub const DEFAULT_SOURCE: &str = "http://localhost:8080/data";
pub const DEFAULT_OUTPUT: &str = "output.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("{key} must be greater than zero")]
    ZeroTimeout { key: &'static str },
}

/// Keys accepted in the TOML config file
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub source: Option<String>,
    pub output: Option<PathBuf>,
    pub connect_timeout_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Fully resolved settings for one ingest run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSettings {
    pub source: String,
    pub output: PathBuf,
    pub transport: TransportConfig,
}

pub fn resolve_ingest(args: &IngestArgs) -> Result<IngestSettings, ConfigError> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    merge(args, file)
}

fn merge(args: &IngestArgs, file: FileConfig) -> Result<IngestSettings, ConfigError> {
    let defaults = TransportConfig::default();

    let connect_timeout = seconds(
        "connect_timeout_secs",
        args.connect_timeout_secs.or(file.connect_timeout_secs),
        defaults.connect_timeout,
    )?;
    let timeout = seconds(
        "timeout_secs",
        args.timeout_secs.or(file.timeout_secs),
        defaults.timeout,
    )?;

    Ok(IngestSettings {
        source: args
            .source
            .clone()
            .or(file.source)
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        output: args
            .output
            .clone()
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        transport: TransportConfig {
            connect_timeout,
            timeout,
        },
    })
}

fn seconds(key: &'static str, value: Option<u64>, default: Duration) -> Result<Duration, ConfigError> {
    match value {
        Some(0) => Err(ConfigError::ZeroTimeout { key }),
        Some(secs) => Ok(Duration::from_secs(secs)),
        None => Ok(default),
    }
}
