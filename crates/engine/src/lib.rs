//! Grid geometry and road-network engine for the layout planner.
//!
//! Everything in this crate is a pure function over caller-owned data: the
//! building list and the road network are passed in by reference and edits
//! hand back new values. The Bevy integration in [`plugin`] only registers the
//! shared resources so an app can hold them.

pub mod buildings;
pub mod config;
pub mod geometry;
pub mod movement;
pub mod plugin;
pub mod roads;
pub mod view;

pub use buildings::{
    BuildingCatalog, BuildingPreview, BuildingSize, CatalogEntry, PlacedBuilding, PlannerRng,
    Rotation,
};
pub use geometry::Direction;
pub use plugin::PlannerEnginePlugin;
pub use roads::{
    EdgeId, GridPoint, JunctionType, NodeId, PolygonOffsets, PreviewEdge, RoadEdge, RoadNetwork,
    RoadNode, RoadPreview, RoadType,
};
pub use view::ViewTransform;
