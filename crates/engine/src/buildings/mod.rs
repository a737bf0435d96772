//! Building footprints: rotation-adjusted sizes, overlap tests, snapping,
//! placement validity and bulk fill.

pub mod bulk;
pub mod catalog;
pub mod collision;
pub mod ids;
pub mod placement;
pub mod types;

#[cfg(test)]
mod tests;

pub use bulk::*;
pub use catalog::*;
pub use collision::*;
pub use ids::*;
pub use placement::*;
pub use types::*;

pub use crate::geometry::Rotation;
