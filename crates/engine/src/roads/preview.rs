//! Drag-to-place road pathfinding.
//!
//! A drag from `start` to `end` becomes at most two straight runs: one
//! axis-aligned and one diagonal. Three shapes are tried in order and the
//! first whose every tile avoids placed buildings wins.

use bevy::prelude::*;

use crate::buildings::PlacedBuilding;
use crate::config::MIN_ROAD_LENGTH;
use crate::geometry::Direction;

use super::{is_edge_valid, GridPoint, PreviewEdge, RoadNetwork, RoadPreview};

/// Sign of a delta, with zero counted as positive.
fn sign(delta: i32) -> i32 {
    if delta < 0 {
        -1
    } else {
        1
    }
}

/// Accumulates runs into a preview.
struct PathBuilder<'a> {
    placed: &'a [PlacedBuilding],
    cursor: GridPoint,
    waypoints: Vec<GridPoint>,
    edges: Vec<PreviewEdge>,
}

impl<'a> PathBuilder<'a> {
    fn new(start: GridPoint, placed: &'a [PlacedBuilding]) -> Self {
        Self {
            placed,
            cursor: start,
            waypoints: vec![start],
            edges: Vec::new(),
        }
    }

    /// Append `steps` tiles along `direction`. Zero steps adds nothing.
    fn run(&mut self, direction: Direction, steps: i32) {
        if steps <= 0 {
            return;
        }

        let start = self.cursor;
        let center_line: Vec<GridPoint> = (0..=steps).map(|i| start.step(direction, i)).collect();
        let end = start.step(direction, steps);

        self.waypoints.extend_from_slice(&center_line[1..]);
        self.edges.push(PreviewEdge {
            start_point: start,
            end_point: end,
            direction,
            is_valid: is_edge_valid(&center_line, self.placed),
            center_line,
        });
        self.cursor = end;
    }

    fn finish(self) -> RoadPreview {
        let is_valid = !self.edges.is_empty() && self.edges.iter().all(|e| e.is_valid);
        RoadPreview {
            total_length: self.waypoints.len() as i32 - 1,
            waypoints: self.waypoints,
            edges: self.edges,
            is_valid,
        }
    }
}

/// Deltas shared by the strategies: diagonal direction, diagonal step count
/// and the straight remainder on each axis.
struct Split {
    dx: i32,
    dy: i32,
    diagonal: Direction,
    diagonal_steps: i32,
    remaining_x: i32,
    remaining_y: i32,
}

impl Split {
    fn new(start: GridPoint, end: GridPoint) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let diagonal_steps = dx.abs().min(dy.abs());
        let diagonal = Direction::from_delta(sign(dx), sign(dy)).unwrap_or(Direction::SE);
        Self {
            dx,
            dy,
            diagonal,
            diagonal_steps,
            remaining_x: dx.abs() - diagonal_steps,
            remaining_y: dy.abs() - diagonal_steps,
        }
    }

    /// The axis-aligned remainder, horizontal first.
    fn straight(&self) -> (Direction, i32) {
        if self.remaining_x > 0 {
            (Direction::straight(true, sign(self.dx)), self.remaining_x)
        } else {
            (Direction::straight(false, sign(self.dy)), self.remaining_y)
        }
    }
}

/// One diagonal run of `|dx|` steps. Meant for `|dx| == |dy|`.
pub fn pure_diagonal_path(start: GridPoint, end: GridPoint, placed: &[PlacedBuilding]) -> RoadPreview {
    let split = Split::new(start, end);
    let mut path = PathBuilder::new(start, placed);
    path.run(split.diagonal, split.dx.abs());
    path.finish()
}

/// Axis-aligned run first, then the diagonal from the corner.
pub fn straight_first_path(
    start: GridPoint,
    end: GridPoint,
    placed: &[PlacedBuilding],
) -> RoadPreview {
    let split = Split::new(start, end);
    let (straight, straight_steps) = split.straight();

    let mut path = PathBuilder::new(start, placed);
    path.run(straight, straight_steps);
    path.run(split.diagonal, split.diagonal_steps);
    path.finish()
}

/// Diagonal run first, then the axis-aligned remainder.
pub fn diagonal_first_path(
    start: GridPoint,
    end: GridPoint,
    placed: &[PlacedBuilding],
) -> RoadPreview {
    let split = Split::new(start, end);
    let (straight, straight_steps) = split.straight();

    let mut path = PathBuilder::new(start, placed);
    path.run(split.diagonal, split.diagonal_steps);
    path.run(straight, straight_steps);
    path.finish()
}

/// Road preview for a drag from `start` to `end`.
///
/// Drags shorter than [`MIN_ROAD_LENGTH`] (Manhattan) give an invalid
/// preview with no edges. Otherwise the first fully valid of pure diagonal
/// (only when `|dx| == |dy|`), straight-first and diagonal-first is
/// returned, falling back to the invalid straight-first shape.
///
/// The network is accepted for future road-on-road rules; existing roads do
/// not block a preview.
pub fn calculate_road_preview(
    start: GridPoint,
    end: GridPoint,
    _network: &RoadNetwork,
    placed: &[PlacedBuilding],
) -> RoadPreview {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let distance = dx.abs() + dy.abs();

    if distance < MIN_ROAD_LENGTH {
        return RoadPreview {
            waypoints: vec![start, end],
            edges: Vec::new(),
            is_valid: false,
            total_length: distance,
        };
    }

    if dx.abs() == dy.abs() {
        let diagonal = pure_diagonal_path(start, end, placed);
        if diagonal.is_valid {
            return diagonal;
        }
    }

    let straight_first = straight_first_path(start, end, placed);
    if straight_first.is_valid {
        return straight_first;
    }

    let diagonal_first = diagonal_first_path(start, end, placed);
    if diagonal_first.is_valid {
        return diagonal_first;
    }

    debug!(
        "No clear road path from ({}, {}) to ({}, {}), keeping blocked straight-first preview",
        start.x, start.y, end.x, end.y
    );
    straight_first
}
