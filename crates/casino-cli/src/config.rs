use casino_core::model::STARTING_STAKE;
use casino_core::roulette::TICK_INTERVAL;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

const DEFAULT_TICK_MS: u64 = TICK_INTERVAL.as_millis() as u64;
const MAX_TICK_MS: u64 = 1_000;
const DEFAULT_LOG_PATH: &str = "casino.log.jsonl";

/// Root table configuration loaded from YAML. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct CasinoConfig {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub roulette: RouletteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl CasinoConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: CasinoConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.table.validate()?;
        self.roulette.validate()?;
        self.logging.normalize();
        self.logging.validate()?;
        self.assets.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TableConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_starting_chips")]
    pub starting_chips: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_chips: default_starting_chips(),
        }
    }
}

impl TableConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.starting_chips == 0 {
            return Err(ValidationError::InvalidField {
                field: "table.starting_chips".to_string(),
                message: "starting chips must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn default_starting_chips() -> u64 {
    STARTING_STAKE
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouletteConfig {
    /// Delay between wheel ticks while spinning; 0 resolves instantly.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl RouletteConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.tick_ms > MAX_TICK_MS {
            return Err(ValidationError::InvalidField {
                field: "roulette.tick_ms".to_string(),
                message: format!("tick interval must be at most {MAX_TICK_MS} ms"),
            });
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            path: default_log_path(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!("unknown level '{}'", self.tracing_level),
            });
        }
        if self.enable_structured && self.path.components().count() == 0 {
            return Err(ValidationError::InvalidField {
                field: "logging.path".to_string(),
                message: "log path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AssetsConfig {
    /// Print the resolved card-art path next to each card.
    #[serde(default)]
    pub show_art: bool,
    /// JSON card-art manifest; overrides `CASINO_CARD_MANIFEST`.
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}

impl AssetsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(manifest) = &self.manifest {
            if manifest.components().count() == 0 {
                return Err(ValidationError::InvalidField {
                    field: "assets.manifest".to_string(),
                    message: "manifest path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
