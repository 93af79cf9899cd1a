//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "classdivider";

/// Crate version, reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.classdivider.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".classdivider.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "classdivider";

/// Deviation used when neither the CLI nor config provide one.
pub const DEFAULT_DEVIATION: usize = 1;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_DEVIATION: &str = "CLASSDIVIDER_DEVIATION";
pub const ENV_FORMAT: &str = "CLASSDIVIDER_FORMAT";
pub const ENV_LOG: &str = "CLASSDIVIDER_LOG";
