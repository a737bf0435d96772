use std::f32::consts::PI;

/// World pixels per grid cell at zoom 1.
pub const CELL_SIZE: f32 = 40.0;

pub const ROAD_WIDTH: f32 = 1.0;
pub const ROAD_HALF_WIDTH: f32 = ROAD_WIDTH / 2.0;

/// Shortest road drag accepted, as Manhattan distance in cells.
pub const MIN_ROAD_LENGTH: i32 = 2;

/// Subtracted from half-extent sums so buildings may sit flush against each other.
pub const OVERLAP_EPSILON: f32 = 0.01;

/// Orientation magnitude below which two segments count as touching, not crossing.
pub const SEGMENT_EPSILON: f32 = 0.01;

/// Inset applied to buildings when testing road tile centers against them.
/// Smaller than a cell so a road can run directly along a building edge.
pub const ROAD_TILE_MARGIN: f32 = 0.25;

/// Inset of the axis-aligned building polygon used against road ribbons.
pub const BUILDING_ROAD_MARGIN: f32 = 0.05;

/// Shrink factor of the diagonal building polygon used against road ribbons.
pub const DIAGONAL_SHRINK: f32 = 0.97;

/// Ribbon overhang past the first/last tile of a straight edge. Diagonal edges use 0.
pub const STRAIGHT_EXTENSION: f32 = 0.5;

/// Bezier subdivisions of a junction fillet.
pub const JUNCTION_CURVE_SEGMENTS: usize = 6;

/// Angular gap (radians) below which two junction arms count as straight-through.
pub const JUNCTION_MIN_GAP: f32 = 0.1;

/// Angular gap (radians) above which two junction arms count as folded back.
pub const JUNCTION_MAX_GAP: f32 = PI * 1.9;

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 5.0;
