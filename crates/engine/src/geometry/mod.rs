//! Geometry primitives shared by the building and road modules.
//!
//! Grid space has `x` growing to the right and `y` growing downward, so
//! `Direction::N` steps towards negative `y`.

pub mod direction;
pub mod polygon;
pub mod rotation;


pub use direction::*;
pub use polygon::*;
pub use rotation::*;

/// Round half-way values towards positive infinity.
///
/// `f32::round` rounds half away from zero, which shifts negative half-cell
/// positions one cell further left/up than the planner front-end does. The
/// grid is unbounded, so negative coordinates are ordinary input.
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}
