//! Core data structures for placed buildings.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::geometry::Rotation;

/// Width and height in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingSize {
    pub width: f32,
    pub height: f32,
}

impl BuildingSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A building instance on the layout.
///
/// `width`/`height` are always the rotation-adjusted size (see
/// [`adjusted_size`](super::adjusted_size)), never the catalog's base size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedBuilding {
    pub id: String,
    /// Catalog reference.
    pub building_id: u32,
    /// Top-left of the bounding box.
    pub grid_x: f32,
    pub grid_y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: Rotation,
    pub color: u32,
}

impl PlacedBuilding {
    pub fn footprint(&self) -> Footprint {
        Footprint {
            grid_x: self.grid_x,
            grid_y: self.grid_y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
        }
    }
}

/// The shape of a building without its identity: what collision tests work on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub grid_x: f32,
    pub grid_y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation: Rotation,
}

impl Footprint {
    pub fn new(grid_x: f32, grid_y: f32, width: f32, height: f32, rotation: Rotation) -> Self {
        Self {
            grid_x,
            grid_y,
            width,
            height,
            rotation,
        }
    }

    /// Side of the square that circumscribes a diagonal footprint.
    pub fn diagonal_bounding_size(&self) -> f32 {
        (self.width + self.height) / 2.0
    }
}

/// Center and extents of a footprint, as used by the overlap tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingGeometry {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    pub rotation: Rotation,
}

/// Ghost cell reported by the bulk-fill preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingPreview {
    pub grid_x: f32,
    pub grid_y: f32,
    pub width: f32,
    pub height: f32,
    pub is_valid: bool,
}
