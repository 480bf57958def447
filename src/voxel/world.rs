//! Voxel world: the sparse grid plus single-level undo

use crate::core::types::Vec3;

use super::block::BlockKind;
use super::coord::Coordinate;
use super::edit::{EditOutcome, LastAction, NoOpReason};
use super::face::FaceDirection;
use super::grid::Grid;
use super::serialize::{self, ImportError, VoxelRecord};

/// The block world edited by one session.
///
/// All mutation goes through this type. A cell holds at most one block,
/// placement never overwrites, and the last successful add or remove can be
/// undone once.
#[derive(Clone, Debug, Default)]
pub struct VoxelWorld {
    grid: Grid,
    last_action: Option<LastAction>,
}

impl VoxelWorld {
    /// Create a new empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Kind of the block at `coord`, if any
    pub fn get(&self, coord: Coordinate) -> Option<BlockKind> {
        self.grid.get(coord)
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.grid.contains(coord)
    }

    /// Number of occupied cells
    pub fn block_count(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Occupied cells in insertion order, for redraw
    pub fn blocks(&self) -> impl Iterator<Item = (Coordinate, BlockKind)> + '_ {
        self.grid.iter()
    }

    /// Underlying grid (order-independent equality)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn last_action(&self) -> Option<LastAction> {
        self.last_action
    }

    pub fn can_undo(&self) -> bool {
        self.last_action.is_some()
    }

    /// Place a block in an empty cell
    pub fn place(&mut self, coord: Coordinate, kind: BlockKind) -> EditOutcome {
        if !self.grid.insert(coord, kind) {
            log::trace!("place at {} skipped: occupied", coord);
            return EditOutcome::Unchanged(NoOpReason::Occupied);
        }
        log::debug!("Placed {} at {}", kind, coord);
        self.last_action = Some(LastAction::Add { coord, kind });
        EditOutcome::Placed { coord, kind }
    }

    /// Place a block in the cell across `face` from `target`
    pub fn place_adjacent(
        &mut self,
        target: Coordinate,
        face: FaceDirection,
        kind: BlockKind,
    ) -> EditOutcome {
        match target.step(face) {
            Some(dest) => self.place(dest, kind),
            None => {
                log::warn!("Adjacent cell of {} toward {:?} is out of range", target, face);
                EditOutcome::Unchanged(NoOpReason::OutOfRange)
            }
        }
    }

    /// Adjacency placement from a hit-test face normal.
    ///
    /// The normal is rounded per component; anything not resolving to a
    /// single unit step is a no-op.
    pub fn place_adjacent_normal(
        &mut self,
        target: Coordinate,
        normal: Vec3,
        kind: BlockKind,
    ) -> EditOutcome {
        match FaceDirection::from_normal(normal) {
            Some(face) => self.place_adjacent(target, face, kind),
            None => {
                log::warn!("Ignoring placement on {}: invalid face normal {}", target, normal);
                EditOutcome::Unchanged(NoOpReason::InvalidDirection)
            }
        }
    }

    /// Remove the block at `coord`
    pub fn remove(&mut self, coord: Coordinate) -> EditOutcome {
        match self.grid.remove(coord) {
            Some(kind) => {
                log::debug!("Removed {} at {}", kind, coord);
                self.last_action = Some(LastAction::Remove { coord, kind });
                EditOutcome::Removed { coord, kind }
            }
            None => EditOutcome::Unchanged(NoOpReason::Empty),
        }
    }

    /// Reverse the last successful add or remove.
    ///
    /// Undoing an add empties the cell whatever it holds now. Undoing a
    /// removal is skipped if the cell has been re-occupied. The record is
    /// consumed in every case.
    pub fn undo(&mut self) -> EditOutcome {
        let Some(action) = self.last_action.take() else {
            return EditOutcome::Unchanged(NoOpReason::NothingToUndo);
        };

        let outcome = match action {
            LastAction::Add { coord, .. } => match self.grid.remove(coord) {
                Some(kind) => EditOutcome::Removed { coord, kind },
                None => EditOutcome::Unchanged(NoOpReason::Empty),
            },
            LastAction::Remove { coord, kind } => {
                if self.grid.insert(coord, kind) {
                    EditOutcome::Placed { coord, kind }
                } else {
                    EditOutcome::Unchanged(NoOpReason::RestoreBlocked)
                }
            }
        };
        log::debug!("Undo {:?}: {}", action, outcome);
        outcome
    }

    /// Remove every block. Not undoable; the undo record is left as is.
    pub fn clear(&mut self) -> EditOutcome {
        let count = self.grid.len();
        if count == 0 {
            return EditOutcome::Unchanged(NoOpReason::AlreadyEmpty);
        }
        self.grid.clear();
        log::info!("Cleared {} blocks", count);
        EditOutcome::Cleared { count }
    }

    /// One record per occupied cell, in insertion order
    pub fn export(&self) -> Vec<VoxelRecord> {
        serialize::export_records(&self.grid)
    }

    /// Export as JSON text
    pub fn export_json(&self, pretty: bool) -> String {
        serialize::records_to_json(&self.export(), pretty)
    }

    /// Replace the whole grid with decoded records.
    ///
    /// On error the world is untouched. On success the undo record is
    /// dropped.
    pub fn import(&mut self, records: &[VoxelRecord]) -> Result<EditOutcome, ImportError> {
        let grid = serialize::grid_from_records(records)?;
        Ok(self.replace_grid(grid))
    }

    /// Replace the whole grid with JSON text; same contract as [`VoxelWorld::import`]
    pub fn import_json(&mut self, text: &str) -> Result<EditOutcome, ImportError> {
        match serialize::parse_grid(text) {
            Ok(grid) => Ok(self.replace_grid(grid)),
            Err(e) => {
                log::warn!("Rejected import: {}", e);
                Err(e)
            }
        }
    }

    fn replace_grid(&mut self, grid: Grid) -> EditOutcome {
        let count = grid.len();
        self.grid = grid;
        self.last_action = None;
        log::info!("Imported {} blocks", count);
        EditOutcome::Imported { count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn c(x: i32, y: i32, z: i32) -> Coordinate {
        Coordinate::new(x, y, z)
    }

    #[test]
    fn test_new_world() {
        let world = VoxelWorld::new();
        assert!(world.is_empty());
        assert!(!world.can_undo());
    }

    #[test]
    fn test_place_and_get() {
        let mut world = VoxelWorld::new();
        let outcome = world.place(c(1, 2, 3), BlockKind::Wood);
        assert_eq!(outcome, EditOutcome::Placed { coord: c(1, 2, 3), kind: BlockKind::Wood });
        assert_eq!(world.get(c(1, 2, 3)), Some(BlockKind::Wood));
        assert_eq!(
            world.last_action(),
            Some(LastAction::Add { coord: c(1, 2, 3), kind: BlockKind::Wood })
        );
    }

    #[test]
    fn test_place_occupied_is_noop() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Stone);
        world.place(c(5, 5, 5), BlockKind::Earth);

        let outcome = world.place(c(0, 0, 0), BlockKind::Water);
        assert_eq!(outcome, EditOutcome::Unchanged(NoOpReason::Occupied));
        assert!(!outcome.is_change());
        assert_eq!(world.get(c(0, 0, 0)), Some(BlockKind::Stone));
        assert_eq!(world.block_count(), 2);
        // No-op does not touch the undo record
        assert_eq!(world.last_action().map(|a| a.coord()), Some(c(5, 5, 5)));
    }

    #[test]
    fn test_negative_coordinates() {
        let mut world = VoxelWorld::new();
        world.place(c(-10, -1, -300), BlockKind::Earth);
        assert!(world.is_occupied(c(-10, -1, -300)));
    }

    #[test]
    fn test_place_adjacent() {
        let mut world = VoxelWorld::new();
        world.place(c(2, 0, 3), BlockKind::Stone);

        let outcome = world.place_adjacent(c(2, 0, 3), FaceDirection::PosY, BlockKind::Water);
        assert_eq!(outcome, EditOutcome::Placed { coord: c(2, 1, 3), kind: BlockKind::Water });
        assert_eq!(world.get(c(2, 1, 3)), Some(BlockKind::Water));
        assert_eq!(world.get(c(2, 0, 3)), Some(BlockKind::Stone));
    }

    #[test]
    fn test_place_adjacent_onto_occupied() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Stone);
        world.place(c(1, 0, 0), BlockKind::Stone);
        let outcome = world.place_adjacent(c(0, 0, 0), FaceDirection::PosX, BlockKind::Wood);
        assert_eq!(outcome, EditOutcome::Unchanged(NoOpReason::Occupied));
    }

    #[test]
    fn test_place_adjacent_overflow() {
        let mut world = VoxelWorld::new();
        let outcome = world.place_adjacent(c(0, i32::MIN, 0), FaceDirection::NegY, BlockKind::Wood);
        assert_eq!(outcome, EditOutcome::Unchanged(NoOpReason::OutOfRange));
        assert!(world.is_empty());
    }

    #[test]
    fn test_place_adjacent_normal() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Earth);

        let outcome = world.place_adjacent_normal(c(0, 0, 0), Vec3::new(-0.98, 0.03, 0.0), BlockKind::Grass);
        assert_eq!(outcome, EditOutcome::Placed { coord: c(-1, 0, 0), kind: BlockKind::Grass });

        let outcome = world.place_adjacent_normal(c(0, 0, 0), Vec3::new(0.6, 0.6, 0.0), BlockKind::Grass);
        assert_eq!(outcome, EditOutcome::Unchanged(NoOpReason::InvalidDirection));
        assert_eq!(world.block_count(), 2);
    }

    #[test]
    fn test_remove() {
        let mut world = VoxelWorld::new();
        world.place(c(1, 1, 1), BlockKind::Wood);
        let outcome = world.remove(c(1, 1, 1));
        assert_eq!(outcome, EditOutcome::Removed { coord: c(1, 1, 1), kind: BlockKind::Wood });
        assert!(world.is_empty());
        assert_eq!(
            world.last_action(),
            Some(LastAction::Remove { coord: c(1, 1, 1), kind: BlockKind::Wood })
        );
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Wood);
        world.place(c(1, 0, 0), BlockKind::Stone);

        world.remove(c(0, 0, 0));
        let after_first = world.grid().clone();
        let outcome = world.remove(c(0, 0, 0));

        assert_eq!(outcome, EditOutcome::Unchanged(NoOpReason::Empty));
        assert_eq!(world.grid(), &after_first);
    }

    #[test]
    fn test_undo_place() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Stone);
        let outcome = world.undo();
        assert_eq!(outcome, EditOutcome::Removed { coord: c(0, 0, 0), kind: BlockKind::Stone });
        assert!(world.is_empty());
        assert!(!world.can_undo());
    }

    #[test]
    fn test_undo_remove() {
        let mut world = VoxelWorld::new();
        world.place(c(1, 1, 1), BlockKind::Wood);
        world.remove(c(1, 1, 1));
        let outcome = world.undo();
        assert_eq!(outcome, EditOutcome::Placed { coord: c(1, 1, 1), kind: BlockKind::Wood });
        assert_eq!(world.get(c(1, 1, 1)), Some(BlockKind::Wood));
    }

    #[test]
    fn test_undo_is_single_level() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Stone);
        world.place(c(0, 1, 0), BlockKind::Stone);

        world.undo();
        assert_eq!(world.undo(), EditOutcome::Unchanged(NoOpReason::NothingToUndo));
        assert_eq!(world.get(c(0, 0, 0)), Some(BlockKind::Stone));
        assert!(!world.is_occupied(c(0, 1, 0)));
    }

    #[test]
    fn test_undo_nothing() {
        let mut world = VoxelWorld::new();
        assert_eq!(world.undo(), EditOutcome::Unchanged(NoOpReason::NothingToUndo));
    }

    #[test]
    fn test_undo_add_after_clear_finds_empty_cell() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Stone);
        world.clear();
        assert!(world.can_undo());
        assert_eq!(world.undo(), EditOutcome::Unchanged(NoOpReason::Empty));
        assert!(!world.can_undo());
    }

    #[test]
    fn test_undo_remove_blocked_by_reoccupied_cell() {
        let mut world = VoxelWorld::new();
        world.place(c(3, 0, 0), BlockKind::Wood);
        world.remove(c(3, 0, 0));
        // Public mutations replace the record, so re-occupy through the grid
        world.grid.insert(c(3, 0, 0), BlockKind::Water);

        assert_eq!(world.undo(), EditOutcome::Unchanged(NoOpReason::RestoreBlocked));
        assert_eq!(world.get(c(3, 0, 0)), Some(BlockKind::Water));
        assert!(!world.can_undo());
    }

    #[test]
    fn test_clear_keeps_undo_record() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Earth);
        world.place(c(0, 1, 0), BlockKind::Grass);

        assert_eq!(world.clear(), EditOutcome::Cleared { count: 2 });
        assert!(world.is_empty());
        assert!(world.can_undo());
        assert_eq!(world.clear(), EditOutcome::Unchanged(NoOpReason::AlreadyEmpty));
    }

    #[test]
    fn test_export_then_clear() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), "Hierba".parse().unwrap());
        assert_eq!(world.export_json(false), r#"[{"key":"0,0,0","type":"Grass"}]"#);

        world.clear();
        assert!(world.export().is_empty());
        assert_eq!(world.export_json(false), "[]");
    }

    #[test]
    fn test_import_round_trip() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Earth);
        world.place(c(-1, 4, 2), BlockKind::Water);
        world.place(c(7, -3, 0), BlockKind::Wood);
        world.remove(c(0, 0, 0));
        world.place(c(0, 0, 0), BlockKind::Stone);

        let mut restored = VoxelWorld::new();
        let outcome = restored.import_json(&world.export_json(true)).unwrap();
        assert_eq!(outcome, EditOutcome::Imported { count: 3 });
        assert_eq!(restored.grid(), world.grid());

        let original: HashMap<_, _> = world.blocks().collect();
        let copy: HashMap<_, _> = restored.blocks().collect();
        assert_eq!(original, copy);
    }

    #[test]
    fn test_import_replaces_and_clears_undo() {
        let mut world = VoxelWorld::new();
        world.place(c(9, 9, 9), BlockKind::Stone);

        world.import_json(r#"[{"key":"1,0,0","type":"Wood"}]"#).unwrap();
        assert!(!world.is_occupied(c(9, 9, 9)));
        assert_eq!(world.get(c(1, 0, 0)), Some(BlockKind::Wood));
        assert!(!world.can_undo());
        assert_eq!(world.undo(), EditOutcome::Unchanged(NoOpReason::NothingToUndo));
    }

    #[test]
    fn test_malformed_import_is_inert() {
        let mut world = VoxelWorld::new();
        world.place(c(0, 0, 0), BlockKind::Stone);
        world.place(c(1, 0, 0), BlockKind::Wood);
        let before = world.grid().clone();

        for bad in [
            "not json",
            r#"[{"key":"0,0,0"}]"#,
            r#"{"key":"0,0,0","type":"Stone"}"#,
            r#"[{"key":"0,0,0","type":"Obsidian"}]"#,
            r#"[{"key":"5,5,5","type":"Wood"},{"key":"0,0","type":"Wood"}]"#,
        ] {
            assert!(world.import_json(bad).is_err(), "accepted {:?}", bad);
            assert_eq!(world.grid(), &before);
            assert!(world.can_undo());
        }
    }

    #[test]
    fn test_no_duplicate_occupancy() {
        let mut world = VoxelWorld::new();
        let kinds = [BlockKind::Earth, BlockKind::Grass, BlockKind::Stone];
        for (i, kind) in kinds.iter().enumerate() {
            world.place(c(0, 0, 0), *kind);
            world.place_adjacent(c(0, -1, 0), FaceDirection::PosY, kinds[(i + 1) % 3]);
        }
        assert_eq!(world.block_count(), 1);
        assert_eq!(world.get(c(0, 0, 0)), Some(BlockKind::Earth));
    }
}
