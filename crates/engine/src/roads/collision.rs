//! Collision between roads and buildings.
//!
//! Two separate tests guard the two directions of editing. Drawing a road
//! checks each tile center against placed buildings with an inward margin,
//! so a road may hug a building. Placing a building checks its (slightly
//! shrunk) polygon against every committed road ribbon.

use bevy::prelude::*;

use crate::buildings::collision::{diagonal_half_extents, to_uv};
use crate::buildings::{building_geometry, Footprint, PlacedBuilding};
use crate::config::{BUILDING_ROAD_MARGIN, DIAGONAL_SHRINK, ROAD_TILE_MARGIN};
use crate::geometry::{point_in_polygon, polygons_intersect};

use super::{GridPoint, RoadNetwork};

/// True if the center of `tile` lies inside any placed building, shrunk by
/// [`ROAD_TILE_MARGIN`].
pub fn tile_collides_with_building(tile: GridPoint, placed: &[PlacedBuilding]) -> bool {
    let center = tile.center();
    placed
        .iter()
        .any(|building| tile_center_in_building(center, &building.footprint()))
}

fn tile_center_in_building(point: Vec2, footprint: &Footprint) -> bool {
    let margin = ROAD_TILE_MARGIN;

    if !footprint.rotation.is_diagonal() {
        return point.x >= footprint.grid_x + margin
            && point.x < footprint.grid_x + footprint.width - margin
            && point.y >= footprint.grid_y + margin
            && point.y < footprint.grid_y + footprint.height - margin;
    }

    let geo = building_geometry(footprint);
    let uv = to_uv(point - geo.center);
    let (u_extent, v_extent) = diagonal_half_extents(&geo);
    uv.x.abs() < u_extent - margin && uv.y.abs() < v_extent - margin
}

/// A centerline is valid when none of its tiles hits a placed building.
pub fn is_edge_valid(center_line: &[GridPoint], placed: &[PlacedBuilding]) -> bool {
    !center_line
        .iter()
        .any(|&tile| tile_collides_with_building(tile, placed))
}

/// Axis-aligned footprint as a polygon, inset by [`BUILDING_ROAD_MARGIN`].
pub fn axis_aligned_building_polygon(footprint: &Footprint) -> Vec<Vec2> {
    let m = BUILDING_ROAD_MARGIN;
    let min = Vec2::new(footprint.grid_x + m, footprint.grid_y + m);
    let max = Vec2::new(
        footprint.grid_x + footprint.width - m,
        footprint.grid_y + footprint.height - m,
    );
    vec![
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
    ]
}

/// Diagonal footprint as a polygon: top, right, bottom, left corners at 45°.
///
/// The polygon is shrunk by [`DIAGONAL_SHRINK`] so a building can sit flush
/// against a road. 135° is the 45° shape turned another quarter about its
/// center.
pub fn diagonal_building_polygon(footprint: &Footprint) -> Vec<Vec2> {
    let w = footprint.width;
    let h = footprint.height;
    let center = building_geometry(footprint).center;
    let scale = 0.25 * DIAGONAL_SHRINK;

    let corners = [
        Vec2::new((h - w) * scale, -(w + h) * scale),
        Vec2::new((w + h) * scale, (w - h) * scale),
        Vec2::new((w - h) * scale, (w + h) * scale),
        Vec2::new(-(w + h) * scale, (h - w) * scale),
    ];

    let turn = (footprint.rotation.degrees() as f32 - 45.0).to_radians();
    let (sin, cos) = turn.sin_cos();

    corners
        .iter()
        .map(|c| center + Vec2::new(c.x * cos - c.y * sin, c.x * sin + c.y * cos))
        .collect()
}

/// Polygon used for building-vs-road tests at any rotation.
pub fn building_polygon(footprint: &Footprint) -> Vec<Vec2> {
    if footprint.rotation.is_diagonal() {
        diagonal_building_polygon(footprint)
    } else {
        axis_aligned_building_polygon(footprint)
    }
}

/// Quadrilateral spanning the first and last ribbon points of an edge:
/// start-left, end-left, end-right, start-right.
///
/// Empty when either side has fewer than two points.
pub fn road_collision_quad(left: &[Vec2], right: &[Vec2]) -> Vec<Vec2> {
    if left.len() < 2 || right.len() < 2 {
        return Vec::new();
    }
    vec![left[0], left[left.len() - 1], right[right.len() - 1], right[0]]
}

/// True if the footprint touches any committed road.
///
/// Per edge: the road quad intersects the building polygon, or a centerline
/// tile center lies inside the building, or a ribbon point does. The last
/// two catch long diagonal roads through large diagonal buildings, where the
/// parallel outlines never cross.
pub fn building_collides_with_roads(candidate: &Footprint, network: &RoadNetwork) -> bool {
    let polygon = building_polygon(candidate);

    network.edges.values().any(|edge| {
        let offsets = &edge.polygon_offsets;
        let quad = road_collision_quad(&offsets.left, &offsets.right);
        if quad.len() < 4 {
            return false;
        }

        polygons_intersect(&polygon, &quad)
            || edge
                .center_line
                .iter()
                .any(|tile| point_in_polygon(tile.center(), &polygon))
            || offsets
                .left
                .iter()
                .chain(offsets.right.iter())
                .any(|&point| point_in_polygon(point, &polygon))
    })
}
