//! Integer cell coordinates and their string key encoding

use std::fmt;
use std::str::FromStr;

use glam::IVec3;
use thiserror::Error;

use super::face::FaceDirection;

/// Separator between components of an encoded key
pub const KEY_DELIMITER: char = ',';

/// Integer coordinate identifying one unit cell of the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Failure to decode a coordinate key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("expected 3 components, found {0}")]
    ComponentCount(usize),

    #[error("component {index} is not an integer: {text:?}")]
    NotInteger { index: usize, text: String },
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0, z: 0 };

    /// Create a new coordinate
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Encode as `x,y,z` in base 10
    pub fn to_key(&self) -> String {
        self.to_string()
    }

    /// Decode a key produced by [`Coordinate::to_key`].
    ///
    /// Each component must parse as a signed 32-bit integer; surrounding
    /// whitespace and trailing garbage are rejected.
    pub fn from_key(key: &str) -> Result<Self, KeyError> {
        let parts: Vec<&str> = key.split(KEY_DELIMITER).collect();
        if parts.len() != 3 {
            return Err(KeyError::ComponentCount(parts.len()));
        }

        let mut values = [0i32; 3];
        for (index, text) in parts.iter().enumerate() {
            values[index] = text.parse().map_err(|_| KeyError::NotInteger {
                index,
                text: text.to_string(),
            })?;
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }

    /// The neighbouring cell across the given face, or None on i32 overflow
    pub fn step(&self, face: FaceDirection) -> Option<Self> {
        let d = face.step();
        Some(Self {
            x: self.x.checked_add(d.x)?,
            y: self.y.checked_add(d.y)?,
            z: self.z.checked_add(d.z)?,
        })
    }

    /// Cell center as an `IVec3` for the rendering layer
    pub fn as_ivec3(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{d}{}{d}{}", self.x, self.y, self.z, d = KEY_DELIMITER)
    }
}

impl FromStr for Coordinate {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl From<IVec3> for Coordinate {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<(i32, i32, i32)> for Coordinate {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Coordinate> for IVec3 {
    fn from(c: Coordinate) -> Self {
        c.as_ivec3()
    }
}
