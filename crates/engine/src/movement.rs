//! Move batches: lift a group of buildings, drag them by an anchor, and
//! re-validate every one at its new position and rotation.
//!
//! The caller holds the lifted buildings outside the placed list while the
//! drag is in progress, so they never collide with their own old footprints.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::{adjusted_size, is_valid_placement, BuildingCatalog, PlacedBuilding};
use crate::geometry::{round_half_up, Rotation};
use crate::roads::{GridPoint, RoadNetwork};

/// Buildings picked by a selection drag and the grid point they move by.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveSelection {
    pub ids: Vec<String>,
    /// Center of the selection box.
    pub anchor: Vec2,
}

/// Outcome of dropping a move batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveResult {
    pub valid: Vec<PlacedBuilding>,
    pub invalid: Vec<PlacedBuilding>,
}

impl MoveResult {
    /// Every moved building found a valid spot.
    pub fn is_complete(&self) -> bool {
        self.invalid.is_empty()
    }

    /// `placed` with the valid buildings appended. Invalid ones are dropped;
    /// whether that is acceptable is the caller's decision.
    pub fn commit(&self, placed: &[PlacedBuilding]) -> Vec<PlacedBuilding> {
        placed.iter().chain(&self.valid).cloned().collect()
    }
}

/// Split `placed` into the buildings that stay and those being lifted.
pub fn pick_up_buildings(
    ids: &[String],
    placed: &[PlacedBuilding],
) -> (Vec<PlacedBuilding>, Vec<PlacedBuilding>) {
    placed.iter().cloned().partition(|b| !ids.contains(&b.id))
}

/// Put lifted buildings back where they were.
pub fn cancel_move(placed: &[PlacedBuilding], moving: &[PlacedBuilding]) -> Vec<PlacedBuilding> {
    placed.iter().chain(moving).cloned().collect()
}

/// Buildings whose `width × height` box strictly overlaps the box spanned by
/// two grid corners. `None` if nothing is selected.
pub fn select_buildings_in_area(
    start: GridPoint,
    end: GridPoint,
    placed: &[PlacedBuilding],
) -> Option<MoveSelection> {
    let min = Vec2::new(start.x.min(end.x) as f32, start.y.min(end.y) as f32);
    let max = Vec2::new(start.x.max(end.x) as f32, start.y.max(end.y) as f32);

    let ids: Vec<String> = placed
        .iter()
        .filter(|b| {
            b.grid_x < max.x
                && b.grid_x + b.width > min.x
                && b.grid_y < max.y
                && b.grid_y + b.height > min.y
        })
        .map(|b| b.id.clone())
        .collect();

    if ids.is_empty() {
        return None;
    }
    Some(MoveSelection {
        ids,
        anchor: (min + max) / 2.0,
    })
}

/// Re-place each moving building at `round(position + cursor_grid - anchor)`
/// with its rotation advanced by `rotation_delta`.
///
/// Sizes are recomputed from the catalog's base size. Buildings are checked
/// in order against `placed`, the buildings already accepted from this batch,
/// and the road network. Buildings missing from the catalog are skipped.
pub fn validate_moved_buildings(
    moving: &[PlacedBuilding],
    anchor: Vec2,
    cursor_grid: Vec2,
    rotation_delta: Rotation,
    placed: &[PlacedBuilding],
    network: &RoadNetwork,
    catalog: &impl BuildingCatalog,
) -> MoveResult {
    let offset = cursor_grid - anchor;
    let mut occupied: Vec<PlacedBuilding> = placed.to_vec();
    let mut result = MoveResult::default();

    for building in moving {
        let Some(base) = catalog.base_size(building.building_id) else {
            warn!(
                "Skipping moved building {}: catalog id {} not found",
                building.id, building.building_id
            );
            continue;
        };

        let rotation = building.rotation.rotated_by(rotation_delta);
        let size = adjusted_size(base, rotation);
        let moved = PlacedBuilding {
            grid_x: round_half_up(building.grid_x + offset.x),
            grid_y: round_half_up(building.grid_y + offset.y),
            width: size.width,
            height: size.height,
            rotation,
            ..building.clone()
        };

        if is_valid_placement(&moved.footprint(), &occupied, None, Some(network)) {
            occupied.push(moved.clone());
            result.valid.push(moved);
        } else {
            result.invalid.push(moved);
        }
    }

    result
}
