//! The persisted layout document.
//!
//! Only identity and position are stored. Building sizes, edge directions,
//! ribbon offsets, connection lists and junction types are all derived on
//! restore.

use serde::{Deserialize, Serialize};

use engine::RoadType;

use crate::LoadError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingRecord {
    pub id: String,
    pub building_id: u32,
    pub x: f32,
    pub y: f32,
    /// Degrees. Validated on restore.
    pub rotation: u16,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadNodeRecord {
    pub id: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadEdgeRecord {
    pub id: String,
    pub start_node_id: String,
    pub end_node_id: String,
    pub road_type: RoadType,
    pub center_line: Vec<PointRecord>,
}

/// A saved layout. `road_edges` is absent in documents that predate edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRecord {
    pub buildings: Vec<BuildingRecord>,
    pub roads: Vec<RoadNodeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_edges: Option<Vec<RoadEdgeRecord>>,
}

impl LayoutRecord {
    /// Parse a document. Blank input and `null` are [`LoadError::EmptyDocument`].
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(LoadError::EmptyDocument);
        }
        Ok(serde_json::from_str(trimmed)?)
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string(self)?)
    }
}
