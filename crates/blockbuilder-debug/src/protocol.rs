//! Debug protocol - JSON command/response definitions
//!
//! One command per line in, one response per line out:
//!
//! ```text
//! {"cmd":"GroundHit","params":{"x":0.2,"z":-0.4}}
//! {"status":"ok","data":{"changed":true,"outcome":"placed Grass at 0,0,0","block_count":1}}
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commands sent from a front-end or test driver to an editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "params")]
pub enum DebugCommand {
    /// A face of an existing block was hit; `n*` is the face normal
    FaceHit {
        x: i32,
        y: i32,
        z: i32,
        nx: f32,
        ny: f32,
        nz: f32,
    },
    /// The ground plane was hit at world position (x, z)
    GroundHit { x: f32, z: f32 },
    /// Explicit removal gesture on an existing block
    CellHit { x: i32, y: i32, z: i32 },
    /// Switch edit mode ("build" or "delete")
    SetMode { mode: String },
    /// Select the block kind for new placements
    SelectBlock { kind: String },
    /// Undo the last placement or removal
    Undo,
    /// Remove every block
    Clear,
    /// Get the world as JSON text
    Export,
    /// Replace the world with JSON text
    Import { text: String },
    /// Get the current draw list
    GetBlocks,
    /// Get session summary
    GetWorldInfo,
    /// Ping (health check)
    Ping,
}

/// Responses from debug server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum DebugResponse {
    #[serde(rename = "ok")]
    Ok { data: ResponseData },
    #[serde(rename = "error")]
    Error { message: String },
}

/// Response data variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    None,
    Pong { message: String },
    Edit {
        changed: bool,
        outcome: String,
        block_count: usize,
    },
    Blocks { blocks: Vec<BlockInfo> },
    Exported { text: String, block_count: usize },
    WorldInfo {
        block_count: usize,
        mode: String,
        selected_block: String,
        can_undo: bool,
    },
}

/// One entry of the draw list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub position: [i32; 3],
    pub kind: String,
    /// `#rrggbb`
    pub color: String,
}

/// Failure to decode a command line
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("empty command line")]
    Empty,

    #[error("Invalid command JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DebugResponse {
    pub fn ok(data: ResponseData) -> Self {
        Self::Ok { data }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error {
            message: msg.into(),
        }
    }

    pub fn pong() -> Self {
        Self::ok(ResponseData::Pong {
            message: "pong".into(),
        })
    }

    pub fn none() -> Self {
        Self::ok(ResponseData::None)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

/// Decode one command line
pub fn parse_command(line: &str) -> Result<DebugCommand, ProtocolError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ProtocolError::Empty);
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Encode a response as a single line (newline included)
pub fn encode_response(response: &DebugResponse) -> String {
    let mut json = serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            "{{\"status\":\"error\",\"message\":\"Serialize error: {}\"}}",
            e
        )
    });
    json.push('\n');
    json
}
