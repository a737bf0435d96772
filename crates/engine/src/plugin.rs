use bevy::prelude::*;

use crate::buildings::PlannerRng;
use crate::roads::RoadNetwork;
use crate::view::ViewTransform;

/// Registers the engine's shared resources. Adds no systems: the engine is a
/// set of pure functions the app calls from its own systems.
pub struct PlannerEnginePlugin;

impl Plugin for PlannerEnginePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoadNetwork>()
            .init_resource::<ViewTransform>()
            .init_resource::<PlannerRng>();
    }
}
