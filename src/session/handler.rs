//! Debug protocol handler for an editing session

use blockbuilder_debug::{BlockInfo, DebugCommand, DebugHandler, DebugResponse, ResponseData};
use glam::Vec3;

use crate::voxel::{BlockKind, Coordinate, EditOutcome};
use super::editor::EditSession;
use super::mode::EditMode;

impl EditSession {
    fn edit_response(&self, outcome: EditOutcome) -> DebugResponse {
        DebugResponse::ok(ResponseData::Edit {
            changed: outcome.is_change(),
            outcome: outcome.to_string(),
            block_count: self.world().block_count(),
        })
    }

    fn blocks_response(&self) -> DebugResponse {
        let blocks = self
            .draw_list()
            .into_iter()
            .map(|item| BlockInfo {
                position: item.coord.as_ivec3().to_array(),
                kind: item.kind.name().to_string(),
                color: item.color.to_hex_string(),
            })
            .collect();
        DebugResponse::ok(ResponseData::Blocks { blocks })
    }
}

impl DebugHandler for EditSession {
    fn handle_command(&mut self, cmd: DebugCommand) -> DebugResponse {
        match cmd {
            DebugCommand::Ping => DebugResponse::pong(),

            DebugCommand::FaceHit { x, y, z, nx, ny, nz } => {
                let outcome = self.on_face_hit(Coordinate::new(x, y, z), Vec3::new(nx, ny, nz));
                self.edit_response(outcome)
            }

            DebugCommand::GroundHit { x, z } => {
                let outcome = self.on_ground_hit(Vec3::new(x, 0.0, z));
                self.edit_response(outcome)
            }

            DebugCommand::CellHit { x, y, z } => {
                let outcome = self.on_cell_hit(Coordinate::new(x, y, z));
                self.edit_response(outcome)
            }

            DebugCommand::SetMode { mode } => match mode.parse::<EditMode>() {
                Ok(mode) => {
                    self.set_mode(mode);
                    DebugResponse::none()
                }
                Err(e) => DebugResponse::error(e),
            },

            DebugCommand::SelectBlock { kind } => match kind.parse::<BlockKind>() {
                Ok(kind) => {
                    self.select_block(kind);
                    DebugResponse::none()
                }
                Err(e) => DebugResponse::error(e.to_string()),
            },

            DebugCommand::Undo => {
                let outcome = self.undo();
                self.edit_response(outcome)
            }

            DebugCommand::Clear => {
                let outcome = self.clear();
                self.edit_response(outcome)
            }

            DebugCommand::Export => DebugResponse::ok(ResponseData::Exported {
                text: self.export_text(),
                block_count: self.world().block_count(),
            }),

            DebugCommand::Import { text } => match self.import_text(&text) {
                Ok(outcome) => self.edit_response(outcome),
                Err(e) => DebugResponse::error(e.to_string()),
            },

            DebugCommand::GetBlocks => self.blocks_response(),

            DebugCommand::GetWorldInfo => DebugResponse::ok(ResponseData::WorldInfo {
                block_count: self.world().block_count(),
                mode: self.mode().to_string(),
                selected_block: self.selected_block().name().to_string(),
                can_undo: self.world().can_undo(),
            }),
        }
    }
}
