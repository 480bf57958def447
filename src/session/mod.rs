//! Editing session: owns a voxel world and maps rendering-layer gestures
//! (face hit, ground hit, cell hit) onto world operations

pub mod config;
pub mod editor;
pub mod handler;
pub mod mode;
pub mod observer;
pub mod palette;

pub use config::SessionConfig;
pub use editor::{DrawItem, EditSession};
pub use mode::EditMode;
pub use observer::{EditObserver, LogObserver};
pub use palette::{BlockPalette, Rgb};
