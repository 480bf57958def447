//! Editing session configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::voxel::BlockKind;
use super::mode::EditMode;

/// Configuration for an editing session.
///
/// Loaded from JSON; any missing field takes its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Row that ground placements land on
    pub ground_y: i32,
    /// Block kind selected when the session starts
    pub default_block: BlockKind,
    /// Edit mode when the session starts
    pub default_mode: EditMode,
    /// Indent exported JSON (two spaces)
    pub pretty_export: bool,
    /// TCP port for the debug protocol
    pub debug_port: u16,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ground_y: 0,
            default_block: BlockKind::Grass,
            default_mode: EditMode::Build,
            pretty_export: true,
            debug_port: blockbuilder_debug::DEFAULT_PORT,
        }
    }
}

impl SessionConfig {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
