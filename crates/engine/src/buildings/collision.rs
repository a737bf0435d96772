//! Overlap and hit tests between building footprints.
//!
//! Diagonal footprints are rotated rectangles inside a square bounding box of
//! side `(W + H) / 2`. They are tested in the rotated frame `u = x + y`,
//! `v = y - x`, where a 45° building extends `W / 2` along `u` and `H / 2`
//! along `v`; at 135° the two axes swap.

use bevy::prelude::*;

use crate::config::OVERLAP_EPSILON;
use crate::geometry::Rotation;

use super::{BuildingGeometry, Footprint};

/// Center and extents of a footprint.
pub fn building_geometry(footprint: &Footprint) -> BuildingGeometry {
    let offset = if footprint.rotation.is_diagonal() {
        let half = footprint.diagonal_bounding_size() / 2.0;
        Vec2::splat(half)
    } else {
        Vec2::new(footprint.width / 2.0, footprint.height / 2.0)
    };

    BuildingGeometry {
        center: Vec2::new(footprint.grid_x, footprint.grid_y) + offset,
        width: footprint.width,
        height: footprint.height,
        rotation: footprint.rotation,
    }
}

/// Half-extents of a diagonal building along the `u` and `v` axes.
pub(crate) fn diagonal_half_extents(geo: &BuildingGeometry) -> (f32, f32) {
    if geo.rotation == Rotation::R45 {
        (geo.width / 2.0, geo.height / 2.0)
    } else {
        (geo.height / 2.0, geo.width / 2.0)
    }
}

/// Rotated frame `u = x + y`, `v = y - x`.
pub(crate) fn to_uv(p: Vec2) -> Vec2 {
    Vec2::new(p.x + p.y, p.y - p.x)
}

/// True if two footprints overlap by more than [`OVERLAP_EPSILON`].
///
/// Footprints that only share an edge do not overlap.
pub fn buildings_overlap(a: &Footprint, b: &Footprint) -> bool {
    let geo_a = building_geometry(a);
    let geo_b = building_geometry(b);

    match (geo_a.rotation.is_diagonal(), geo_b.rotation.is_diagonal()) {
        (false, false) => aligned_overlap(&geo_a, &geo_b),
        (true, true) => diagonal_overlap(&geo_a, &geo_b),
        (true, false) => mixed_overlap(&geo_a, &geo_b),
        (false, true) => mixed_overlap(&geo_b, &geo_a),
    }
}

fn aligned_overlap(a: &BuildingGeometry, b: &BuildingGeometry) -> bool {
    let d = (a.center - b.center).abs();
    let half_width_sum = (a.width + b.width) / 2.0;
    let half_height_sum = (a.height + b.height) / 2.0;
    d.x < half_width_sum - OVERLAP_EPSILON && d.y < half_height_sum - OVERLAP_EPSILON
}

fn diagonal_overlap(a: &BuildingGeometry, b: &BuildingGeometry) -> bool {
    let d = (to_uv(a.center) - to_uv(b.center)).abs();
    let (a_u, a_v) = diagonal_half_extents(a);
    let (b_u, b_v) = diagonal_half_extents(b);
    d.x < a_u + b_u - OVERLAP_EPSILON && d.y < a_v + b_v - OVERLAP_EPSILON
}

/// Separating-axis check over the aligned building's x/y axes and the
/// diagonal building's u/v axes.
fn mixed_overlap(diagonal: &BuildingGeometry, aligned: &BuildingGeometry) -> bool {
    let d = (diagonal.center - aligned.center).abs();

    // The diagonal building's corners reach (W + H) / 4 from its center along x and y.
    let diag_extent_xy = (diagonal.width + diagonal.height) / 4.0;
    if d.x >= diag_extent_xy + aligned.width / 2.0 - OVERLAP_EPSILON {
        return false;
    }
    if d.y >= diag_extent_xy + aligned.height / 2.0 - OVERLAP_EPSILON {
        return false;
    }

    let duv = (to_uv(diagonal.center) - to_uv(aligned.center)).abs();
    // A W x H aligned rectangle spans (W + H) / 2 along both u and v.
    let aligned_extent_uv = (aligned.width + aligned.height) / 2.0;
    let (diag_u, diag_v) = diagonal_half_extents(diagonal);
    if duv.x >= diag_u + aligned_extent_uv - OVERLAP_EPSILON {
        return false;
    }
    if duv.y >= diag_v + aligned_extent_uv - OVERLAP_EPSILON {
        return false;
    }

    true
}

/// Hit test of a grid-space point against a footprint.
///
/// Axis-aligned footprints use a half-open box; diagonal ones a strict test
/// in the rotated frame.
pub fn is_point_in_building(point: Vec2, footprint: &Footprint) -> bool {
    if !footprint.rotation.is_diagonal() {
        return point.x >= footprint.grid_x
            && point.x < footprint.grid_x + footprint.width
            && point.y >= footprint.grid_y
            && point.y < footprint.grid_y + footprint.height;
    }

    let geo = building_geometry(footprint);
    let uv = to_uv(point - geo.center);
    let (u_extent, v_extent) = diagonal_half_extents(&geo);
    uv.x.abs() < u_extent && uv.y.abs() < v_extent
}
