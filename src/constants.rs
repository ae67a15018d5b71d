//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "storefront";

/// Crate version, for `storefront version` and the clap `--version` flag.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = ".storefront.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "storefront";

/// Base URL of the products API when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Request timeout when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "STOREFRONT_BASE_URL";
pub const ENV_TOKEN: &str = "STOREFRONT_TOKEN";
pub const ENV_TIMEOUT: &str = "STOREFRONT_TIMEOUT";
pub const ENV_LOG: &str = "STOREFRONT_LOG";
