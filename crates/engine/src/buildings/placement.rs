//! Rotation-adjusted sizing, grid snapping and placement validity.

use std::f32::consts::SQRT_2;

use bevy::prelude::*;

use crate::geometry::{round_half_up, Rotation};
use crate::roads::{building_collides_with_roads, RoadNetwork};

use super::{buildings_overlap, is_point_in_building, BuildingSize, Footprint, PlacedBuilding};

/// Footprint size of a catalog building at the given rotation.
///
/// 90° swaps the axes. Diagonal rotations scale each axis by √2 and round to
/// the nearest whole cell (never below 1), which picks the grid lines closest
/// to the rotated edges: 2x2 becomes 3x3, 3x8 becomes 4x11, 6x6 becomes 8x8.
/// The rounding is a layout convention, not a geometric identity.
pub fn adjusted_size(base: BuildingSize, rotation: Rotation) -> BuildingSize {
    match rotation {
        Rotation::R0 => base,
        Rotation::R90 => BuildingSize::new(base.height, base.width),
        Rotation::R45 | Rotation::R135 => BuildingSize::new(
            round_half_up(base.width * SQRT_2).max(1.0),
            round_half_up(base.height * SQRT_2).max(1.0),
        ),
    }
}

/// Result of snapping a cursor position to the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnappedPosition {
    pub grid_x: f32,
    pub grid_y: f32,
    pub adjusted_width: f32,
    pub adjusted_height: f32,
}

impl SnappedPosition {
    pub fn footprint(&self, rotation: Rotation) -> Footprint {
        Footprint::new(
            self.grid_x,
            self.grid_y,
            self.adjusted_width,
            self.adjusted_height,
            rotation,
        )
    }
}

/// Snap a building centered on `world` (pixels) to the grid.
///
/// Axis-aligned buildings land with their top-left on a grid line. Diagonal
/// buildings snap their leftmost corner to whichever is closer: the nearest
/// grid intersection or the nearest cell center.
pub fn calculate_snapped_position(
    world: Vec2,
    cell_size: f32,
    base: BuildingSize,
    rotation: Rotation,
) -> SnappedPosition {
    let size = adjusted_size(base, rotation);
    let center = world / cell_size;

    if !rotation.is_diagonal() {
        return SnappedPosition {
            grid_x: round_half_up(center.x - size.width / 2.0),
            grid_y: round_half_up(center.y - size.height / 2.0),
            adjusted_width: size.width,
            adjusted_height: size.height,
        };
    }

    let (w, h) = (size.width, size.height);
    // 45°: the left corner sits at (-(W+H)/4, (H-W)/4). At 135° the former
    // top corner becomes the leftmost one, mirroring the y offset.
    let left_offset = match rotation {
        Rotation::R45 => Vec2::new(-(w + h) / 4.0, (h - w) / 4.0),
        _ => Vec2::new(-(w + h) / 4.0, -(h - w) / 4.0),
    };

    let left_corner = center + left_offset;
    let nearest_intersection = Vec2::new(round_half_up(left_corner.x), round_half_up(left_corner.y));
    let nearest_cell_center = left_corner.floor() + Vec2::splat(0.5);

    let snapped_left = if left_corner.distance(nearest_intersection)
        <= left_corner.distance(nearest_cell_center)
    {
        nearest_intersection
    } else {
        nearest_cell_center
    };

    let snapped_center = snapped_left - left_offset;
    let half_box = (w + h) / 4.0;
    SnappedPosition {
        grid_x: snapped_center.x - half_box,
        grid_y: snapped_center.y - half_box,
        adjusted_width: w,
        adjusted_height: h,
    }
}

/// A candidate is valid if it overlaps no placed building (other than
/// `exclude_id`) and, when a network is given, crosses no road.
pub fn is_valid_placement(
    candidate: &Footprint,
    placed: &[PlacedBuilding],
    exclude_id: Option<&str>,
    network: Option<&RoadNetwork>,
) -> bool {
    let collides_with_buildings = placed.iter().any(|existing| {
        if exclude_id == Some(existing.id.as_str()) {
            return false;
        }
        buildings_overlap(&existing.footprint(), candidate)
    });
    if collides_with_buildings {
        return false;
    }

    match network {
        Some(network) => !building_collides_with_roads(candidate, network),
        None => true,
    }
}

/// Topmost building under a world-space point: the last drawn one wins.
pub fn get_building_at_position<'a>(
    world: Vec2,
    cell_size: f32,
    placed: &'a [PlacedBuilding],
) -> Option<&'a PlacedBuilding> {
    let point = world / cell_size;
    placed
        .iter()
        .rev()
        .find(|building| is_point_in_building(point, &building.footprint()))
}
