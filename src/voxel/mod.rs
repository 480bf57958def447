//! Voxel world model: coordinates, block kinds, the sparse grid and its
//! serialized form

pub mod block;
pub mod coord;
pub mod edit;
pub mod face;
pub mod grid;
pub mod serialize;
pub mod world;

pub use block::BlockKind;
pub use coord::{Coordinate, KeyError};
pub use edit::{EditOutcome, LastAction, NoOpReason};
pub use face::FaceDirection;
pub use grid::Grid;
pub use serialize::{ImportError, VoxelRecord};
pub use world::VoxelWorld;
