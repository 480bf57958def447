//! Block kinds placeable in the world

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Material of a placed block.
///
/// Serialized under its canonical English name. The Spanish labels shown by
/// the widget are accepted as aliases when reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    #[serde(alias = "Tierra")]
    Earth,
    #[default]
    #[serde(alias = "Hierba")]
    Grass,
    #[serde(alias = "Piedra")]
    Stone,
    #[serde(alias = "Madera")]
    Wood,
    #[serde(alias = "Agua")]
    Water,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block kind: {0:?}")]
pub struct UnknownBlockKind(pub String);

impl BlockKind {
    /// All kinds in palette order
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Earth,
        BlockKind::Grass,
        BlockKind::Stone,
        BlockKind::Wood,
        BlockKind::Water,
    ];

    /// Canonical name used in the serialized form
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Earth => "Earth",
            BlockKind::Grass => "Grass",
            BlockKind::Stone => "Stone",
            BlockKind::Wood => "Wood",
            BlockKind::Water => "Water",
        }
    }

    /// Label shown in the widget's block selector
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Earth => "Tierra",
            BlockKind::Grass => "Hierba",
            BlockKind::Stone => "Piedra",
            BlockKind::Wood => "Madera",
            BlockKind::Water => "Agua",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKind {
    type Err = UnknownBlockKind;

    /// Case-sensitive; accepts canonical names and widget labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|k| k.name() == s || k.label() == s)
            .ok_or_else(|| UnknownBlockKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_labels() {
        assert_eq!("Stone".parse::<BlockKind>(), Ok(BlockKind::Stone));
        assert_eq!("Hierba".parse::<BlockKind>(), Ok(BlockKind::Grass));
        assert_eq!("Agua".parse::<BlockKind>(), Ok(BlockKind::Water));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("stone".parse::<BlockKind>().is_err());
        assert!("WOOD".parse::<BlockKind>().is_err());
        assert!("Lava".parse::<BlockKind>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&BlockKind::Wood).unwrap();
        assert_eq!(json, "\"Wood\"");

        let kind: BlockKind = serde_json::from_str("\"Madera\"").unwrap();
        assert_eq!(kind, BlockKind::Wood);
        assert!(serde_json::from_str::<BlockKind>("\"wood\"").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.to_string().parse::<BlockKind>(), Ok(kind));
        }
    }
}
