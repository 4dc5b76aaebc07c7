//! User configuration.
//!
//! Read once at startup from `<config dir>/zcalc/config.toml`
//! (e.g. `~/.config/zcalc/config.toml` on Linux). A missing file yields the
//! defaults; every field is optional.
//!
//! ```toml
//! [display]
//! thousands_separators = true
//! precision = 10
//!
//! [clipboard]
//! copy_results = false
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How numeric results are rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Group the integer part of displayed results with `,`.
    pub thousands_separators: bool,
    /// Maximum number of decimal places shown; trailing zeros are trimmed.
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thousands_separators: true,
            precision: 10,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy every successful result to the clipboard.
    pub copy_results: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
}

impl Config {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A file that does not exist yields the defaults. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
