//! Junction fill polygons.
//!
//! Where edges meet, the ribbons leave ragged gaps. The fill walks the
//! connected edge ends in angle order, bridging each gap with a quadratic
//! Bézier bent toward the node center.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::config::{JUNCTION_CURVE_SEGMENTS, JUNCTION_MAX_GAP, JUNCTION_MIN_GAP};
use crate::geometry::quadratic_bezier_points;

use super::{RoadEdge, RoadNetwork, RoadNode};

/// Screen-space ribbon end of an edge at one of its nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeEndpoint {
    pub left: Vec2,
    pub right: Vec2,
    /// Direction pointing away from the node, radians.
    pub angle: f32,
}

/// The ribbon end of `edge` that touches `node`.
///
/// `None` when the edge has no ribbon.
pub fn edge_endpoint_at_node(
    edge: &RoadEdge,
    node: &RoadNode,
    grid_to_screen: impl Fn(f32, f32) -> Vec2,
) -> Option<EdgeEndpoint> {
    let is_start = edge.start_node_id == node.id;
    let offsets = &edge.polygon_offsets;

    let (left, right) = if is_start {
        (offsets.left.first()?, offsets.right.first()?)
    } else {
        (offsets.left.last()?, offsets.right.last()?)
    };

    let direction = if is_start {
        edge.direction
    } else {
        edge.direction.opposite()
    };

    Some(EdgeEndpoint {
        left: grid_to_screen(left.x, left.y),
        right: grid_to_screen(right.x, right.y),
        angle: direction.angle(),
    })
}

/// Fill polygon for a node joining two or more edges, in screen space.
pub fn compute_junction_polygon(
    node: &RoadNode,
    network: &RoadNetwork,
    grid_to_screen: impl Fn(f32, f32) -> Vec2,
) -> Option<Vec<Vec2>> {
    if node.connected_edges.len() < 2 {
        return None;
    }

    let center = grid_to_screen(node.grid_x as f32 + 0.5, node.grid_y as f32 + 0.5);

    let mut endpoints: Vec<EdgeEndpoint> = node
        .connected_edges
        .iter()
        .filter_map(|id| network.edges.get(id))
        .filter_map(|edge| edge_endpoint_at_node(edge, node, &grid_to_screen))
        .collect();

    if endpoints.len() < 2 {
        return None;
    }
    endpoints.sort_by(|a, b| a.angle.total_cmp(&b.angle));

    let mut polygon = Vec::new();
    for (i, current) in endpoints.iter().enumerate() {
        let next = &endpoints[(i + 1) % endpoints.len()];

        polygon.push(current.right);

        let mut gap = next.angle - current.angle;
        if gap < 0.0 {
            gap += TAU;
        }
        if gap > JUNCTION_MIN_GAP && gap < JUNCTION_MAX_GAP {
            let curve = quadratic_bezier_points(
                current.right,
                center,
                next.left,
                JUNCTION_CURVE_SEGMENTS,
            );
            polygon.extend_from_slice(&curve[1..curve.len() - 1]);
        }

        polygon.push(next.left);
    }

    (polygon.len() >= 3).then_some(polygon)
}
