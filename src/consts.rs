// src/consts.rs
//! Shared constants: file naming and fallback defaults

/// Name of the JSON file the config is stored in
pub const CONFIG_FILENAME: &str = "config.json";

/// Fallback app name used when the caller sets none
// An empty name would collapse the per-app subdirectory into the root.
pub const DEFAULT_APP_NAME: &str = "unnamed_app";
