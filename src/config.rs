//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rscalc/rscalc.toml`
//! 3. Environment variables: `RSCALC_*` prefix

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, DEFAULT_RESULT_LABEL};

/// Default prefix for error lines in interactive mode.
const DEFAULT_ERROR_LABEL: &str = "Error: ";

/// Unified configuration for rscalc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Prefix attached to successful result lines
    pub result_label: String,
    /// Prefix attached to error lines in interactive mode
    pub error_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            result_label: DEFAULT_RESULT_LABEL.into(),
            error_label: DEFAULT_ERROR_LABEL.into(),
        }
    }
}

/// Get the XDG config directory for rscalc.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rscalc").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rscalc.toml"))
}

impl Settings {
    /// Load settings: compiled defaults, overlaid by the global config file
    /// (if present), overlaid by `RSCALC_*` environment variables.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path())
    }

    /// Load settings with an explicit config file path (None skips the file
    /// layer entirely). Split out so tests can point at a temp file.
    pub fn load_from(path: Option<PathBuf>) -> Result<Self, ApplicationError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Settings::default()).map_err(config_err)?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("RSCALC"));

        builder
            .build()
            .map_err(config_err)?
            .try_deserialize()
            .map_err(config_err)
    }

    /// Render a commented TOML template carrying the compiled defaults.
    pub fn template() -> Result<String, ApplicationError> {
        let body =
            toml::to_string_pretty(&Settings::default()).map_err(|e| ApplicationError::Config {
                message: format!("render template: {}", e),
            })?;
        Ok(format!(
            "# rscalc configuration\n\
             # Values here override the compiled defaults;\n\
             # RSCALC_* environment variables override both.\n\n{}",
            body
        ))
    }
}

fn config_err(e: config::ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
