//! Run configuration
//!
//! Values come from an optional YAML file, then command-line flags override
//! them.

use crate::cli::Cli;
use crate::extract::DEFAULT_DELIMITER;
use crate::output::OutputFormat;
use chatsonar_classifiers::ClassifierConfig;
use chatsonar_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file consulted when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "chatsonar.yaml";

/// File-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Show a progress bar on stderr
    #[serde(default = "default_true")]
    pub progress: bool,

    /// Line extraction settings
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Classifier backend
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            progress: true,
            extract: ExtractConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Config {
    /// Load a config file. A missing file is only an error when `required`.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !path.exists() {
            if required {
                return Err(Error::config(format!(
                    "config file {} not found",
                    path.display()
                )));
            }
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::config(format!("invalid config {}: {}", path.display(), e)))
    }
}

/// Line extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Separator between the `[timestamp] <user>` prefix and the message
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

/// Everything a single run needs
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub dataset_path: PathBuf,
    pub out: Option<PathBuf>,
    pub format: OutputFormat,
    pub progress: bool,
    pub delimiter: String,
    pub classifier: ClassifierConfig,
}

impl RunConfig {
    /// Resolve the config file and apply CLI overrides
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::load(path, true)?,
            None => Config::load(Path::new(DEFAULT_CONFIG_PATH), false)?,
        };

        Self::with_overrides(config, cli)
    }

    /// Apply CLI overrides to an already loaded config
    pub fn with_overrides(mut config: Config, cli: &Cli) -> Result<Self> {
        let dataset_path = cli
            .dataset_path
            .clone()
            .ok_or_else(|| Error::config("--dataset_path is required"))?;

        if let Some(format) = cli.format {
            config.format = format;
        }

        if cli.no_progress {
            config.progress = false;
        }

        if let Some(kind) = cli.classifier {
            config.classifier.kind = kind;
        }

        if let Some(endpoint) = &cli.endpoint {
            config.classifier.endpoint = Some(endpoint.clone());
        }

        Ok(Self {
            dataset_path,
            out: cli.out.clone(),
            format: config.format,
            progress: config.progress,
            delimiter: config.extract.delimiter,
            classifier: config.classifier,
        })
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_true() -> bool {
    true
}
