// SPDX-License-Identifier: MPL-2.0
//! Page manifest (`pages.toml`) parsing.
//!
//! ```toml
//! [[page]]
//! id = 0
//! image_name = "magazine-front-cover"
//!
//! [[page]]
//! id = 1
//! image_name = "magazine-back-cover"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One `[[page]]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub id: usize,
    pub image_name: String,
}

/// Ordered list of pages as written in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Manifest {
    #[serde(default)]
    pub page: Vec<ManifestEntry>,
}

impl Manifest {
    /// Parses a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] if the text is not a valid manifest.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::Manifest(err.to_string()))
    }
}

/// Reads and parses a manifest file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Manifest`]
/// if it cannot be parsed.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    Manifest::parse(&content)
}
