//! Configuration management for listkeeper.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::theme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Directory used for storage
pub const DATA_DIR_VAR: &str = "LISTKEEPER_DATA_DIR";
/// Device color scheme preference, `light` or `dark`
pub const COLOR_SCHEME_VAR: &str = "LISTKEEPER_COLOR_SCHEME";
/// Log filter used when `RUST_LOG` is unset
pub const LOG_VAR: &str = "LISTKEEPER_LOG";

const DEFAULT_LOG_FILTER: &str = "warn,listkeeper=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the persisted list
    pub data_dir: PathBuf,
    /// Initial color scheme (the device preference)
    pub color_scheme: ColorScheme,
    /// Default `tracing` filter directives
    pub log_filter: String,
    /// Unparseable `LISTKEEPER_COLOR_SCHEME` value that was ignored
    #[serde(skip)]
    pub rejected_color_scheme: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (color_scheme, rejected_color_scheme) = match lookup(COLOR_SCHEME_VAR) {
            Some(raw) => match raw.parse() {
                Ok(scheme) => (scheme, None),
                Err(_) => (ColorScheme::default(), Some(raw)),
            },
            None => (ColorScheme::default(), None),
        };

        Self {
            data_dir: lookup(DATA_DIR_VAR)
                .filter(|dir| !dir.trim().is_empty())
                .map_or_else(default_data_dir, PathBuf::from),
            color_scheme,
            log_filter: lookup(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            rejected_color_scheme,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Platform data directory, or `./.listkeeper` when there is none
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from(".listkeeper"),
        |dir| dir.join("listkeeper"),
    )
}
