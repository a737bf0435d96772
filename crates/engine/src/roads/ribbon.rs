//! Road ribbon geometry.
//!
//! A ribbon is the pair of boundary polylines offset half a road width to
//! either side of the tile centers of an edge.

use std::f32::consts::SQRT_2;

use bevy::prelude::*;

use crate::config::{ROAD_HALF_WIDTH, STRAIGHT_EXTENSION};
use crate::geometry::Direction;

use super::{GridPoint, PolygonOffsets, PreviewEdge, RoadEdge};

/// Left and right boundary points at the tile whose top-left is `point`.
///
/// Diagonal ribbons widen by √2 so they look as wide as straight ones.
pub fn edge_offset_points(point: Vec2, direction: Direction, half_width: f32) -> (Vec2, Vec2) {
    let v = direction.vector().as_vec2();
    let perp = Vec2::new(-v.y, v.x).normalize_or_zero();
    let half_width = if direction.is_diagonal() {
        half_width * SQRT_2
    } else {
        half_width
    };

    let center = point + Vec2::splat(0.5);
    (center + perp * half_width, center - perp * half_width)
}

/// Ribbon boundaries for a centerline.
///
/// Straight edges overhang half a tile at each extended end so consecutive
/// edges meet under the junction fill. Diagonal edges use no overhang, but
/// the extension point is still emitted.
pub fn compute_edge_polygon_offsets(
    center_line: &[GridPoint],
    direction: Direction,
    extend_start: bool,
    extend_end: bool,
) -> PolygonOffsets {
    let (Some(first), Some(last)) = (center_line.first(), center_line.last()) else {
        return PolygonOffsets::default();
    };

    let step = direction.vector().as_vec2();
    let extension = if direction.is_diagonal() {
        0.0
    } else {
        STRAIGHT_EXTENSION
    };

    let mut offsets = PolygonOffsets {
        left: Vec::with_capacity(center_line.len() + 2),
        right: Vec::with_capacity(center_line.len() + 2),
    };
    let mut push = |point: Vec2| {
        let (left, right) = edge_offset_points(point, direction, ROAD_HALF_WIDTH);
        offsets.left.push(left);
        offsets.right.push(right);
    };

    if extend_start {
        push(first.as_vec2() - step * extension);
    }
    for point in center_line {
        push(point.as_vec2());
    }
    if extend_end {
        push(last.as_vec2() + step * extension);
    }

    offsets
}

/// Outline of a ribbon in screen space: left side forward, right side back.
fn ribbon_outline(offsets: &PolygonOffsets, grid_to_screen: impl Fn(f32, f32) -> Vec2) -> Vec<Vec2> {
    offsets
        .left
        .iter()
        .chain(offsets.right.iter().rev())
        .map(|p| grid_to_screen(p.x, p.y))
        .collect()
}

/// Screen-space polygon of a committed edge.
pub fn edge_polygon(edge: &RoadEdge, grid_to_screen: impl Fn(f32, f32) -> Vec2) -> Vec<Vec2> {
    ribbon_outline(&edge.polygon_offsets, grid_to_screen)
}

/// Screen-space polygon of a preview edge, computed on the fly.
pub fn preview_edge_polygon(
    edge: &PreviewEdge,
    grid_to_screen: impl Fn(f32, f32) -> Vec2,
) -> Vec<Vec2> {
    let offsets = compute_edge_polygon_offsets(&edge.center_line, edge.direction, true, true);
    ribbon_outline(&offsets, grid_to_screen)
}
