//! Blockbuilder - sparse voxel world model for a block-building widget

pub mod core;
pub mod voxel;
pub mod session;
