//! # tcio-ocio
//!
//! Minimal OpenColorIO-style configuration loading.
//!
//! Reads the top-level fields of an `.ocio` YAML config: profile version,
//! LUT search path and role mappings. This is early scaffolding for
//! broader color management; color space definitions, displays and
//! transform graphs are not modeled yet.
//!
//! # Example
//!
//! ```ignore
//! use tcio_ocio::Config;
//!
//! let config = Config::from_file(Path::new("config.ocio"))?;
//! println!("profile version {}", config.ocio_profile_version);
//! ```

#![warn(missing_docs)]

mod error;

pub use error::{OcioError, OcioResult};

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// An OCIO configuration, top-level fields only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Config format version (1 or 2).
    #[serde(default)]
    pub ocio_profile_version: u32,

    /// Colon-separated search path for LUT files referenced by the
    /// config.
    #[serde(default)]
    pub search_path: Option<String>,

    /// Role name to color space name mappings.
    #[serde(default)]
    pub roles: HashMap<String, String>,
}

impl Config {
    /// Loads a config from a YAML file.
    pub fn from_file(path: &Path) -> OcioResult<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_yaml(&src)
    }

    /// Parses a config from a YAML string.
    ///
    /// Unknown keys (colorspaces, displays, looks) are ignored until
    /// those sections are modeled.
    pub fn from_yaml(src: &str) -> OcioResult<Self> {
        Ok(serde_yaml::from_str(src)?)
    }
}
