//! User unit file
//!
//! Units registered at runtime can be saved to `~/.config/unitr/units.json`
//! (or the platform equivalent) and loaded back on the next start.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::UnitEntry;

/// Unit file format
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitFile {
    #[serde(default)]
    pub units: Vec<UnitEntry>,
}

/// Default unit file path
#[cfg(not(target_arch = "wasm32"))]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "unitr").map(|dirs| dirs.config_dir().join("units.json"))
}

/// Read a unit file
pub fn load(path: &Path) -> Result<UnitFile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a unit file, creating its directory if needed
pub fn save(path: &Path, file: &UnitFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(file)?;
    fs::write(path, content)?;
    Ok(())
}
