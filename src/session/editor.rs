//! Editing session: turns pointer gestures from the rendering layer into
//! world operations

use crate::core::types::Vec3;

use crate::core::Result;
use crate::voxel::{BlockKind, Coordinate, EditOutcome, NoOpReason, VoxelWorld};
use super::config::SessionConfig;
use super::mode::EditMode;
use super::observer::EditObserver;
use super::palette::{BlockPalette, Rgb};

/// One block to draw
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawItem {
    pub coord: Coordinate,
    pub kind: BlockKind,
    pub color: Rgb,
}

/// A single widget's editing session.
///
/// Owns the world exclusively. Every gesture runs to completion before the
/// next one, so `draw_list` always sees a whole mutation.
pub struct EditSession {
    world: VoxelWorld,
    config: SessionConfig,
    selected: BlockKind,
    mode: EditMode,
    palette: BlockPalette,
    observers: Vec<Box<dyn EditObserver + Send + Sync>>,
}

impl EditSession {
    pub fn new(config: SessionConfig) -> Self {
        log::info!(
            "Starting edit session (mode: {}, block: {}, ground y: {})",
            config.default_mode, config.default_block, config.ground_y
        );
        Self {
            world: VoxelWorld::new(),
            selected: config.default_block,
            mode: config.default_mode,
            config,
            palette: BlockPalette::default(),
            observers: Vec::new(),
        }
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        log::debug!("Mode: {}", mode);
        self.mode = mode;
    }

    pub fn selected_block(&self) -> BlockKind {
        self.selected
    }

    pub fn select_block(&mut self, kind: BlockKind) {
        log::debug!("Selected block: {}", kind);
        self.selected = kind;
    }

    pub fn palette_mut(&mut self) -> &mut BlockPalette {
        &mut self.palette
    }

    pub fn add_observer(&mut self, observer: impl EditObserver + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Place the selected block at `coord`
    pub fn place(&mut self, coord: Coordinate) -> EditOutcome {
        let outcome = self.world.place(coord, self.selected);
        self.notify(outcome)
    }

    /// A face of the block at `coord` was hit.
    ///
    /// Build mode places the selected block across that face; delete mode
    /// removes the block itself.
    pub fn on_face_hit(&mut self, coord: Coordinate, normal: Vec3) -> EditOutcome {
        let outcome = match self.mode {
            EditMode::Build => self.world.place_adjacent_normal(coord, normal, self.selected),
            EditMode::Delete => self.world.remove(coord),
        };
        self.notify(outcome)
    }

    /// The ground plane was hit at `point`. Ignored in delete mode.
    pub fn on_ground_hit(&mut self, point: Vec3) -> EditOutcome {
        if self.mode == EditMode::Delete {
            return EditOutcome::Unchanged(NoOpReason::Empty);
        }
        let Some(coord) = self.ground_cell(point) else {
            log::warn!("Ground hit outside the grid: {}", point);
            return EditOutcome::Unchanged(NoOpReason::OutOfRange);
        };
        self.place(coord)
    }

    /// Explicit removal gesture (shift-click), regardless of mode
    pub fn on_cell_hit(&mut self, coord: Coordinate) -> EditOutcome {
        let outcome = self.world.remove(coord);
        self.notify(outcome)
    }

    /// Cell a ground hit lands in: nearest integer x/z on the ground row
    pub fn ground_cell(&self, point: Vec3) -> Option<Coordinate> {
        let to_cell = |v: f32| {
            let r = v.round();
            (r.is_finite() && r >= i32::MIN as f32 && r <= i32::MAX as f32).then_some(r as i32)
        };
        Some(Coordinate::new(to_cell(point.x)?, self.config.ground_y, to_cell(point.z)?))
    }

    pub fn undo(&mut self) -> EditOutcome {
        let outcome = self.world.undo();
        self.notify(outcome)
    }

    pub fn clear(&mut self) -> EditOutcome {
        let outcome = self.world.clear();
        self.notify(outcome)
    }

    /// World as JSON text for the import/export panel
    pub fn export_text(&self) -> String {
        self.world.export_json(self.config.pretty_export)
    }

    /// Replace the world from JSON text; the world is untouched on error
    pub fn import_text(&mut self, text: &str) -> Result<EditOutcome> {
        let outcome = self.world.import_json(text)?;
        Ok(self.notify(outcome))
    }

    /// Blocks to draw, in insertion order
    pub fn draw_list(&self) -> Vec<DrawItem> {
        self.world
            .blocks()
            .map(|(coord, kind)| DrawItem {
                coord,
                kind,
                color: self.palette.color(kind),
            })
            .collect()
    }

    fn notify(&mut self, outcome: EditOutcome) -> EditOutcome {
        if outcome.is_change() {
            for observer in &mut self.observers {
                observer.on_edit(&outcome);
            }
        }
        outcome
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
