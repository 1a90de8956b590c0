use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::count::DEFAULT_MAX_COUNT;
use crate::poller::{DEFAULT_ALERT_PERIOD_SECS, DEFAULT_POLL_INTERVAL};
use crate::storage::DEFAULT_OUTPUT_PATH;
use crate::targets;
use crate::Error;

pub const DEFAULT_CONFIG_PATH: &str = "deskforms.ron";
pub const CONFIG_PATH_ENV: &str = "DESKFORMS_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => f.write_str("error"),
            LogLevel::Warn => f.write_str("warn"),
            LogLevel::Info => f.write_str("info"),
            LogLevel::Debug => f.write_str("debug"),
            LogLevel::Trace => f.write_str("trace"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub output_path: PathBuf,
    pub max_count: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub poll_interval_ms: u64,
    pub alert_period_secs: u64,
    pub initial_cameras: usize,
    pub max_count: usize,
}

impl MonitorConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            alert_period_secs: DEFAULT_ALERT_PERIOD_SECS,
            initial_cameras: 1,
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub form: FormConfig,
    pub monitor: MonitorConfig,
}

impl AppConfig {
    pub fn from_ron(contents: &str) -> Result<Self, Error> {
        ron::from_str(contents).map_err(|source| Error::Ron { path: None, source })
    }

    /// A missing file is not an error; it yields the defaults.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::ConfigIo {
                    path: Some(path.display().to_string()),
                    source,
                });
            }
        };
        ron::from_str(&contents).map_err(|source| Error::Ron {
            path: Some(path.display().to_string()),
            source,
        })
    }

    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Loads from [`AppConfig::default_path`]. On failure the defaults are
    /// returned together with the error so the caller can report it once
    /// logging is up.
    pub fn load_or_default() -> (Self, Option<Error>) {
        let path = Self::default_path();
        match Self::load(&path) {
            Ok(config) => (config, None),
            Err(error) => (Self::default(), Some(error)),
        }
    }

    pub fn report_load(error: Option<&Error>) {
        match error {
            None => info!(
                target: targets::CONFIG,
                path = %Self::default_path().display(),
                "Configuration resolved"
            ),
            Some(error) => warn!(
                target: targets::CONFIG,
                "{} Using defaults.",
                error.technical_detail()
            ),
        }
    }
}
