//! Core data structures for the road network.

use std::collections::BTreeMap;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::geometry::Direction;

/// Integer grid cell. Road centerlines and drag endpoints live on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    #[serde(rename = "gridX")]
    pub x: i32,
    #[serde(rename = "gridY")]
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Center of the cell.
    pub fn center(self) -> Vec2 {
        self.as_vec2() + Vec2::splat(0.5)
    }

    pub fn step(self, direction: Direction, count: i32) -> GridPoint {
        let v = direction.vector() * count;
        GridPoint::new(self.x + v.x, self.y + v.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadType {
    #[default]
    Dirt,
    Stone,
    Marble,
}

/// Shape of the road network at a node, derived from its connection count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JunctionType {
    /// Road ends here.
    #[default]
    #[serde(rename = "endpoint")]
    Endpoint,
    /// Two connections.
    #[serde(rename = "straight")]
    Straight,
    /// Two connections that turn. Never produced by classification.
    #[serde(rename = "elbow")]
    Elbow,
    #[serde(rename = "T")]
    T,
    #[serde(rename = "cross")]
    Cross,
    /// Five or more connections.
    #[serde(rename = "multi")]
    Multi,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        EdgeId(id.to_string())
    }
}

/// Left and right ribbon boundaries of an edge, in grid units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonOffsets {
    pub left: Vec<Vec2>,
    pub right: Vec<Vec2>,
}

/// An intersection or road end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadNode {
    pub id: NodeId,
    pub grid_x: i32,
    pub grid_y: i32,
    pub connected_edges: Vec<EdgeId>,
    pub junction_type: JunctionType,
}

impl RoadNode {
    pub fn position(&self) -> GridPoint {
        GridPoint::new(self.grid_x, self.grid_y)
    }
}

/// A straight run of road between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadEdge {
    pub id: EdgeId,
    pub road_type: RoadType,
    pub start_node_id: NodeId,
    pub end_node_id: NodeId,
    /// Ordered tiles from start to end, all along `direction`.
    pub center_line: Vec<GridPoint>,
    pub direction: Direction,
    pub polygon_offsets: PolygonOffsets,
}

/// Road graph owned by the caller.
///
/// Edits go through the functions in [`super::network`], which keep node
/// connection lists and junction types consistent.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadNetwork {
    pub nodes: BTreeMap<NodeId, RoadNode>,
    pub edges: BTreeMap<EdgeId, RoadEdge>,
    #[serde(skip)]
    pub(crate) next_node_id: u64,
    #[serde(skip)]
    pub(crate) next_edge_id: u64,
}

// Id counters are bookkeeping, not content.
impl PartialEq for RoadNetwork {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

/// One straight run of a road preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewEdge {
    pub start_point: GridPoint,
    pub end_point: GridPoint,
    pub direction: Direction,
    pub center_line: Vec<GridPoint>,
    pub is_valid: bool,
}

/// Proposed road while the user drags. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadPreview {
    pub waypoints: Vec<GridPoint>,
    pub edges: Vec<PreviewEdge>,
    pub is_valid: bool,
    pub total_length: i32,
}
