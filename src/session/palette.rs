//! Display colours per block kind, owned by the view side

use std::collections::HashMap;

use crate::voxel::BlockKind;

/// sRGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// `#rrggbb`
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Flat colour for each block kind
#[derive(Clone, Debug)]
pub struct BlockPalette {
    colors: HashMap<BlockKind, Rgb>,
}

impl BlockPalette {
    pub fn color(&self, kind: BlockKind) -> Rgb {
        self.colors
            .get(&kind)
            .copied()
            .unwrap_or_else(|| default_color(kind))
    }

    pub fn set_color(&mut self, kind: BlockKind, color: Rgb) {
        self.colors.insert(kind, color);
    }
}

fn default_color(kind: BlockKind) -> Rgb {
    match kind {
        BlockKind::Earth => Rgb::from_hex(0x8d6e63),
        BlockKind::Grass => Rgb::from_hex(0x66bb6a),
        BlockKind::Stone => Rgb::from_hex(0x90a4ae),
        BlockKind::Wood => Rgb::from_hex(0xa1887f),
        BlockKind::Water => Rgb::from_hex(0x4fc3f7),
    }
}

impl Default for BlockPalette {
    fn default() -> Self {
        Self {
            colors: BlockKind::ALL
                .into_iter()
                .map(|k| (k, default_color(k)))
                .collect(),
        }
    }
}
