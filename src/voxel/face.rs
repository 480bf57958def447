//! Axis-aligned cube faces used for adjacency placement

use glam::{IVec3, Vec3};

/// One of the six faces of a unit cell, as the unit step leaving through it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceDirection {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl FaceDirection {
    pub const ALL: [FaceDirection; 6] = [
        FaceDirection::PosX,
        FaceDirection::NegX,
        FaceDirection::PosY,
        FaceDirection::NegY,
        FaceDirection::PosZ,
        FaceDirection::NegZ,
    ];

    /// Integer step to the neighbouring cell
    pub fn step(self) -> IVec3 {
        match self {
            FaceDirection::PosX => IVec3::X,
            FaceDirection::NegX => IVec3::NEG_X,
            FaceDirection::PosY => IVec3::Y,
            FaceDirection::NegY => IVec3::NEG_Y,
            FaceDirection::PosZ => IVec3::Z,
            FaceDirection::NegZ => IVec3::NEG_Z,
        }
    }

    /// Validate an integer step: exactly one component nonzero, and it is ±1
    pub fn from_step(step: IVec3) -> Option<Self> {
        match (step.x, step.y, step.z) {
            (1, 0, 0) => Some(FaceDirection::PosX),
            (-1, 0, 0) => Some(FaceDirection::NegX),
            (0, 1, 0) => Some(FaceDirection::PosY),
            (0, -1, 0) => Some(FaceDirection::NegY),
            (0, 0, 1) => Some(FaceDirection::PosZ),
            (0, 0, -1) => Some(FaceDirection::NegZ),
            _ => None,
        }
    }

    /// Resolve a hit-test face normal.
    ///
    /// Each component is rounded half away from zero before validation, so
    /// noise such as `(0.02, 0.99, -0.01)` resolves to `PosY` while a corner
    /// hit like `(0.7, 0.7, 0.0)` is rejected.
    pub fn from_normal(normal: Vec3) -> Option<Self> {
        if !normal.is_finite() {
            return None;
        }
        let r = normal.round();
        // Anything beyond ±1 after rounding cannot be a unit step
        if r.abs().max_element() > 1.0 {
            return None;
        }
        Self::from_step(r.as_ivec3())
    }

    /// The face on the opposite side of the cell
    pub fn opposite(self) -> Self {
        match self {
            FaceDirection::PosX => FaceDirection::NegX,
            FaceDirection::NegX => FaceDirection::PosX,
            FaceDirection::PosY => FaceDirection::NegY,
            FaceDirection::NegY => FaceDirection::PosY,
            FaceDirection::PosZ => FaceDirection::NegZ,
            FaceDirection::NegZ => FaceDirection::PosZ,
        }
    }
}
