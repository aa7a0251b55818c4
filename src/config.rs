//! Marker color palette.
//!
//! [`Palette`] maps each input lifecycle stage to the color the marker wears when
//! that stage fires. The defaults match the classic demo scheme (yellow on touch
//! start, green on touch end, red on cancel). Profiles are plain TOML and may
//! override any subset of fields:
//!
//! ```toml
//! touch_start = "#fc0"
//! pointer_move = "#09c"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Failure while loading a palette profile.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read palette profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid palette profile: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Marker colors keyed by input lifecycle stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub touch_start: String,
    pub touch_end: String,
    pub touch_cancel: String,
    pub pointer_down: String,
    pub pointer_move: String,
    pub pointer_up: String,
    pub pointer_cancel: String,
    /// Color before any input arrives.
    pub idle: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            touch_start: "#ff0".into(),
            touch_end: "#0f0".into(),
            touch_cancel: "#f00".into(),
            pointer_down: "#0f0".into(),
            pointer_move: "#0ff".into(),
            pointer_up: "#00f".into(),
            pointer_cancel: "#f00".into(),
            idle: "#888".into(),
        }
    }
}

impl Palette {
    /// Parses a palette profile from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a palette profile from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}
