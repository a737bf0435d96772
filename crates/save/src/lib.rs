//! Persisted layout documents: the camelCase JSON record the planner stores,
//! and the conversions between it and the engine's editor state.

mod export;
mod layout_record;
mod load_error;
mod restore;

pub use export::export_layout;
pub use layout_record::{BuildingRecord, LayoutRecord, PointRecord, RoadEdgeRecord, RoadNodeRecord};
pub use load_error::LoadError;
pub use restore::{restore_layout, restore_layout_json, RestoredLayout};
