//! Export/import of the occupied-cell list as JSON.
//!
//! The format is a JSON array of `{"key": "x,y,z", "type": "<BlockKind>"}`
//! records, one per occupied cell, in insertion order:
//!
//! ```json
//! [
//!   { "key": "0,0,0", "type": "Grass" }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::block::BlockKind;
use super::coord::{Coordinate, KeyError};
use super::grid::Grid;

/// One occupied cell in serialized form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelRecord {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
}

impl VoxelRecord {
    pub fn new(coord: Coordinate, kind: BlockKind) -> Self {
        Self {
            key: coord.to_key(),
            kind,
        }
    }
}

/// Why an import was rejected
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    #[error("expected a JSON array of records")]
    NotSequence,

    #[error("entry {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("entry {index}: malformed key {key:?}: {source}")]
    BadKey {
        index: usize,
        key: String,
        #[source]
        source: KeyError,
    },
}

/// Records for every occupied cell, in grid iteration order
pub fn export_records(grid: &Grid) -> Vec<VoxelRecord> {
    grid.iter()
        .map(|(coord, kind)| VoxelRecord::new(coord, kind))
        .collect()
}

/// Serialize records as JSON text
pub fn records_to_json(records: &[VoxelRecord], pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };
    // Plain structs of strings and unit enums always serialize
    result.unwrap_or_else(|_| String::from("[]"))
}

/// Build a grid from decoded records.
///
/// A key repeated later in the list overrides the earlier kind but keeps
/// the earlier position.
pub fn grid_from_records(records: &[VoxelRecord]) -> Result<Grid, ImportError> {
    let mut grid = Grid::new();
    for (index, record) in records.iter().enumerate() {
        let coord = Coordinate::from_key(&record.key).map_err(|source| ImportError::BadKey {
            index,
            key: record.key.clone(),
            source,
        })?;
        grid.upsert(coord, record.kind);
    }
    Ok(grid)
}

/// Parse JSON text into records, validating structure and block kinds
pub fn parse_records(text: &str) -> Result<Vec<VoxelRecord>, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::NotJson)?;
    let Value::Array(entries) = value else {
        return Err(ImportError::NotSequence);
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<VoxelRecord>(entry)
                .map_err(|source| ImportError::InvalidEntry { index, source })
        })
        .collect()
}

/// Parse JSON text straight into a grid
pub fn parse_grid(text: &str) -> Result<Grid, ImportError> {
    grid_from_records(&parse_records(text)?)
}
