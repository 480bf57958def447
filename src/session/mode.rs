//! Edit mode selected in the widget toolbar

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which operation a click on an existing block performs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Clicking a face places a block against it ("Construir")
    #[default]
    Build,
    /// Clicking a block removes it ("Borrar")
    Delete,
}

impl EditMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EditMode::Build => "build",
            EditMode::Delete => "delete",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "build" | "construir" => Ok(EditMode::Build),
            "delete" | "borrar" => Ok(EditMode::Delete),
            _ => Err(format!("unknown edit mode: {:?}", s)),
        }
    }
}
