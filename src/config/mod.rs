//! Configuration loading and layering.
//!
//! Handles `.classdivider.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{
    Config, ConfigError, DivideConfig, OutputConfig, PartialConfig, PartialDivideConfig,
    PartialOutputConfig,
};
