//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.storefront.toml` in the working directory
//! 4. `~/.config/storefront/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

/// Products API connection settings.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bearer token sent on authenticated requests.
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// On-disk shape of a config file.
///
/// Every field is optional so that a value written explicitly, even one
/// equal to the built-in default, still overrides the layers below it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api: FileApiConfig,
}

/// `[api]` table of a config file.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for FileApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `.storefront.toml` from `dir`, then
    /// applies environment variable overrides. CLI flags are applied by the
    /// caller with [`Config::apply_overrides`].
    pub fn load(dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        Self::load_from(Self::global_config_path().as_deref(), dir, env)
    }

    /// Same as [`Config::load`] with an explicit global config path.
    pub fn load_from(
        global_path: Option<&Path>,
        dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                let global = Self::load_file(global_path)?;
                config.merge(global, global_path);
            }
        }

        // Layer 3: local config
        if let Some(dir) = dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local, &local_path);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a config file into this one; every value the file sets wins.
    ///
    /// A zero timeout is ignored with a warning, as for `STOREFRONT_TIMEOUT`.
    fn merge(&mut self, other: FileConfig, source: &Path) {
        if let Some(base_url) = other.api.base_url {
            self.api.base_url = base_url;
        }
        if other.api.token.is_some() {
            self.api.token = other.api.token;
        }
        match other.api.timeout_secs {
            Some(0) => warn!("ignoring timeout_secs = 0 in {}", source.display()),
            Some(secs) => self.api.timeout_secs = secs,
            None => {}
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(constants::ENV_BASE_URL) {
            self.api.base_url = val;
        }
        if let Some(val) = env.non_empty(constants::ENV_TOKEN) {
            self.api.token = Some(val);
        }
        if let Some(val) = env.non_empty(constants::ENV_TIMEOUT) {
            match val.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.api.timeout_secs = secs,
                _ => warn!("ignoring invalid {} value: {val}", constants::ENV_TIMEOUT),
            }
        }
    }

    /// Apply CLI flag overrides (highest priority).
    pub fn apply_overrides(&mut self, base_url: Option<String>, token: Option<String>) {
        if let Some(url) = base_url {
            self.api.base_url = url;
        }
        if let Some(token) = token {
            self.api.token = Some(token);
        }
    }
}
