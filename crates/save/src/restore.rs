//! Rebuild the editor state from a persisted layout.

use bevy::prelude::*;

use engine::buildings::{adjusted_size, BuildingCatalog, PlacedBuilding};
use engine::roads::{compute_edge_polygon_offsets, RoadEdge, RoadNetwork, RoadNode};
use engine::{Direction, EdgeId, GridPoint, JunctionType, NodeId, Rotation};

use crate::{BuildingRecord, LayoutRecord, LoadError, RoadEdgeRecord, RoadNodeRecord};

/// Buildings and road network recovered from a [`LayoutRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestoredLayout {
    pub buildings: Vec<PlacedBuilding>,
    pub network: RoadNetwork,
}

fn restore_building(
    record: &BuildingRecord,
    catalog: &impl BuildingCatalog,
) -> Result<Option<PlacedBuilding>, LoadError> {
    let rotation =
        Rotation::try_from(record.rotation).map_err(|e| LoadError::UnsupportedRotation {
            building: record.id.clone(),
            degrees: e.0,
        })?;

    let Some(base) = catalog.base_size(record.building_id) else {
        warn!(
            "Skipping building {}: catalog id {} not found",
            record.id, record.building_id
        );
        return Ok(None);
    };

    let size = adjusted_size(base, rotation);
    Ok(Some(PlacedBuilding {
        id: record.id.clone(),
        building_id: record.building_id,
        grid_x: record.x,
        grid_y: record.y,
        width: size.width,
        height: size.height,
        rotation,
        color: record.color,
    }))
}

fn restore_node(record: &RoadNodeRecord) -> RoadNode {
    RoadNode {
        id: NodeId(record.id.clone()),
        grid_x: record.x,
        grid_y: record.y,
        connected_edges: Vec::new(),
        junction_type: JunctionType::Endpoint,
    }
}

/// Direction from the first to the last centerline tile, `E` when they
/// coincide.
fn centerline_direction(center_line: &[GridPoint]) -> Direction {
    match (center_line.first(), center_line.last()) {
        (Some(first), Some(last)) => {
            Direction::from_delta(last.x - first.x, last.y - first.y).unwrap_or(Direction::E)
        }
        _ => Direction::E,
    }
}

fn restore_edge(record: &RoadEdgeRecord) -> RoadEdge {
    let center_line: Vec<GridPoint> = record
        .center_line
        .iter()
        .map(|p| GridPoint::new(p.x, p.y))
        .collect();
    let direction = centerline_direction(&center_line);

    RoadEdge {
        id: EdgeId(record.id.clone()),
        road_type: record.road_type,
        start_node_id: NodeId(record.start_node_id.clone()),
        end_node_id: NodeId(record.end_node_id.clone()),
        polygon_offsets: compute_edge_polygon_offsets(&center_line, direction, true, true),
        center_line,
        direction,
    }
}

/// Rebuild buildings and the road network from a record.
///
/// Building sizes come from the catalog; unknown catalog ids are skipped.
/// Edge directions and ribbons are recomputed from the centerlines, and the
/// network drops dangling edges and unconnected nodes (see
/// [`RoadNetwork::from_parts`]). Fails only on an unsupported rotation.
pub fn restore_layout(
    record: &LayoutRecord,
    catalog: &impl BuildingCatalog,
) -> Result<RestoredLayout, LoadError> {
    let mut buildings = Vec::with_capacity(record.buildings.len());
    for building in &record.buildings {
        if let Some(placed) = restore_building(building, catalog)? {
            buildings.push(placed);
        }
    }

    let nodes = record.roads.iter().map(restore_node).collect();
    let edges = record
        .road_edges
        .iter()
        .flatten()
        .map(restore_edge)
        .collect();
    let network = RoadNetwork::from_parts(nodes, edges);

    debug!(
        "Restored layout: {} buildings, {} road nodes, {} road edges",
        buildings.len(),
        network.nodes.len(),
        network.edges.len()
    );

    Ok(RestoredLayout { buildings, network })
}

/// Parse and restore a JSON document. A blank or `null` document restores an
/// empty layout.
pub fn restore_layout_json(
    json: &str,
    catalog: &impl BuildingCatalog,
) -> Result<RestoredLayout, LoadError> {
    match LayoutRecord::from_json(json) {
        Ok(record) => restore_layout(&record, catalog),
        Err(LoadError::EmptyDocument) => Ok(RestoredLayout::default()),
        Err(e) => Err(e),
    }
}
