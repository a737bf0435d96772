use engine::buildings::PlacedBuilding;
use engine::roads::RoadNetwork;

use crate::{BuildingRecord, LayoutRecord, PointRecord, RoadEdgeRecord, RoadNodeRecord};

/// Map editor state to the persisted record. Derived fields are dropped.
pub fn export_layout(buildings: &[PlacedBuilding], network: &RoadNetwork) -> LayoutRecord {
    let buildings = buildings
        .iter()
        .map(|b| BuildingRecord {
            id: b.id.clone(),
            building_id: b.building_id,
            x: b.grid_x,
            y: b.grid_y,
            rotation: b.rotation.degrees(),
            color: b.color,
        })
        .collect();

    let roads = network
        .nodes
        .values()
        .map(|node| RoadNodeRecord {
            id: node.id.0.clone(),
            x: node.grid_x,
            y: node.grid_y,
        })
        .collect();

    let road_edges = network
        .edges
        .values()
        .map(|edge| RoadEdgeRecord {
            id: edge.id.0.clone(),
            start_node_id: edge.start_node_id.0.clone(),
            end_node_id: edge.end_node_id.0.clone(),
            road_type: edge.road_type,
            center_line: edge
                .center_line
                .iter()
                .map(|p| PointRecord { x: p.x, y: p.y })
                .collect(),
        })
        .collect();

    LayoutRecord {
        buildings,
        roads,
        road_edges: Some(road_edges),
    }
}
