use bevy::prelude::*;

use crate::config::SEGMENT_EPSILON;

/// Signed area of the triangle (p1, p2, p3), doubled.
///
/// The sign tells which side of the line p1→p2 the point p3 lies on.
pub fn orientation(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    (p3.x - p1.x) * (p2.y - p1.y) - (p2.x - p1.x) * (p3.y - p1.y)
}

/// Even-odd ray casting. Fewer than three vertices never contain a point.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Proper crossing test between segments p1-p2 and p3-p4.
///
/// Touching, collinear and near-collinear configurations (orientation within
/// [`SEGMENT_EPSILON`]) are not crossings, so flush-adjacent shapes never
/// register as colliding.
pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);

    straddles(d1, d2) && straddles(d3, d4)
}

fn straddles(a: f32, b: f32) -> bool {
    (a > SEGMENT_EPSILON && b < -SEGMENT_EPSILON) || (a < -SEGMENT_EPSILON && b > SEGMENT_EPSILON)
}

/// True if any pair of edges crosses or either polygon has a vertex inside the other.
///
/// The containment checks catch the case where one polygon sits wholly
/// inside the other and no edges cross.
pub fn polygons_intersect(a: &[Vec2], b: &[Vec2]) -> bool {
    for i in 0..a.len() {
        let p1 = a[i];
        let p2 = a[(i + 1) % a.len()];
        for j in 0..b.len() {
            let p3 = b[j];
            let p4 = b[(j + 1) % b.len()];
            if segments_intersect(p1, p2, p3, p4) {
                return true;
            }
        }
    }

    a.iter().any(|&p| point_in_polygon(p, b)) || b.iter().any(|&p| point_in_polygon(p, a))
}

/// Sample a quadratic Bezier curve at `segments + 1` evenly spaced parameters.
pub fn quadratic_bezier_points(p0: Vec2, p1: Vec2, p2: Vec2, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let mt = 1.0 - t;
            mt * mt * p0 + 2.0 * mt * t * p1 + t * t * p2
        })
        .collect()
}
