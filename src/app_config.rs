use anyhow::{Context, Result, anyhow};
use log::{LevelFilter, debug};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::TranslatorError;
use crate::resources::{
    BundledResources, DEFAULT_RESOURCE, DirectoryResources, ResourceProvider,
    is_plain_resource_name,
};
use crate::translator::JsonTranslator;

/// Application configuration module
/// This module handles loading and validating the settings that decide
/// which dataset the translator is built from.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Logical name of the dataset to load
    #[serde(default = "default_resource")]
    pub resource: String,

    /// Directory holding datasets; bundled datasets are used when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Language used by `translate` when none is given (ISO 639)
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_resource() -> String {
    DEFAULT_RESOURCE.to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resource: default_resource(),
            data_dir: None,
            default_language: default_language(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when it is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let config: Config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !is_plain_resource_name(&self.resource) {
            return Err(anyhow!(
                "Resource name must be a plain file name: '{}'",
                self.resource
            ));
        }

        crate::language_utils::validate_language_code(&self.default_language)
            .context("Invalid default language")?;

        if let Some(dir) = &self.data_dir {
            if !dir.is_dir() {
                return Err(anyhow!("Data directory does not exist: {:?}", dir));
            }
        }

        Ok(())
    }

    /// Provider matching the configured data source
    pub fn resource_provider(&self) -> Box<dyn ResourceProvider> {
        match &self.data_dir {
            Some(dir) => Box::new(DirectoryResources::new(dir)),
            None => Box::new(BundledResources),
        }
    }

    /// Build the translator described by this configuration
    pub fn open_translator(&self) -> Result<JsonTranslator, TranslatorError> {
        let provider = self.resource_provider();
        JsonTranslator::from_resource(&*provider, &self.resource)
    }
}
