//! Boot configuration parsed from host-supplied JSON.
//!
//! The host page may pass a JSON object to [`crate::engine::start`]; absent
//! fields fall back to defaults. Grid dimensions deserialize as `NonZeroU32`
//! so a zero-sized world is rejected at the parse boundary instead of being
//! checked at every use site.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::NonZeroU32;

use serde::Deserialize;
use thiserror::Error;

use crate::consts::{DEFAULT_WORLD_COLS, DEFAULT_WORLD_ROWS};
use crate::grid::WorldSize;

/// Failure to interpret the host-supplied configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Engine boot parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// World width in columns.
    pub cols: NonZeroU32,
    /// World height in rows.
    pub rows: NonZeroU32,
    /// Draw the center crosshair overlay.
    pub debug: bool,
    /// Fixed RNG seed for world generation; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cols: DEFAULT_WORLD_COLS,
            rows: DEFAULT_WORLD_ROWS,
            debug: false,
            seed: None,
        }
    }
}

impl Config {
    /// Parse a configuration from a JSON object string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid JSON, has
    /// unknown fields, or carries a zero grid dimension.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The world dimensions this configuration asks for.
    #[must_use]
    pub fn world_size(&self) -> WorldSize {
        WorldSize::new(self.cols, self.rows)
    }
}
