//! Sparse occupancy grid with stable insertion order

use std::collections::{BTreeMap, HashMap};

use super::block::BlockKind;
use super::coord::Coordinate;

#[derive(Clone, Copy, Debug)]
struct Cell {
    kind: BlockKind,
    /// Insertion sequence, key into `order`
    seq: u64,
}

/// Map from coordinate to block kind.
///
/// Lookups go through a `HashMap`; a sequence-keyed `BTreeMap` keeps
/// iteration in insertion order, so export output is deterministic.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cells: HashMap<Coordinate, Cell>,
    order: BTreeMap<u64, Coordinate>,
    next_seq: u64,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: Coordinate) -> Option<BlockKind> {
        self.cells.get(&coord).map(|c| c.kind)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Insert into an empty cell. Returns false if the cell was occupied.
    pub fn insert(&mut self, coord: Coordinate, kind: BlockKind) -> bool {
        if self.cells.contains_key(&coord) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.cells.insert(coord, Cell { kind, seq });
        self.order.insert(seq, coord);
        true
    }

    /// Insert or overwrite. An overwritten cell keeps its original position.
    pub fn upsert(&mut self, coord: Coordinate, kind: BlockKind) {
        match self.cells.get_mut(&coord) {
            Some(cell) => cell.kind = kind,
            None => {
                self.insert(coord, kind);
            }
        }
    }

    pub fn remove(&mut self, coord: Coordinate) -> Option<BlockKind> {
        let cell = self.cells.remove(&coord)?;
        self.order.remove(&cell.seq);
        Some(cell.kind)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.order.clear();
    }

    /// Occupied cells in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, BlockKind)> + '_ {
        self.order
            .values()
            .map(move |coord| (*coord, self.cells[coord].kind))
    }
}

/// Equality ignores insertion order
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(coord, kind)| other.get(coord) == Some(kind))
    }
}

impl Eq for Grid {}
