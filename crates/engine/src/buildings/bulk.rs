//! Bulk fill: tile a dragged rectangle with copies of one footprint.
//!
//! Cells are visited row-major from the region's min corner. Each cell is
//! checked against the existing layout, the cells already accepted in the
//! same fill, and the road network.

use std::collections::HashSet;

use rand::Rng;

use crate::geometry::Rotation;
use crate::roads::{building_collides_with_roads, GridPoint, RoadNetwork};

use super::{
    buildings_overlap, generate_unique_building_id, BuildingPreview, Footprint, PlacedBuilding,
};

/// Rectangle spanned by two dragged grid corners (in any order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkRegion {
    pub start: GridPoint,
    pub end: GridPoint,
}

impl BulkRegion {
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }

    /// Top-left cell of every candidate, row-major.
    pub(super) fn cells(
        &self,
        unit_width: f32,
        unit_height: f32,
    ) -> impl Iterator<Item = (f32, f32)> {
        let min_x = self.start.x.min(self.end.x) as f32;
        let max_x = self.start.x.max(self.end.x) as f32;
        let min_y = self.start.y.min(self.end.y) as f32;
        let max_y = self.start.y.max(self.end.y) as f32;

        let cols = (((max_x - min_x) / unit_width).floor() as usize).saturating_add(1);
        let rows = (((max_y - min_y) / unit_height).floor() as usize).saturating_add(1);

        (0..rows).flat_map(move |row| {
            (0..cols).map(move |col| {
                (
                    min_x + col as f32 * unit_width,
                    min_y + row as f32 * unit_height,
                )
            })
        })
    }
}

/// The repeated footprint of a bulk fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulkUnit {
    pub building_id: u32,
    pub color: u32,
    /// Rotation-adjusted size.
    pub width: f32,
    pub height: f32,
    pub rotation: Rotation,
}

impl BulkUnit {
    fn footprint_at(&self, grid_x: f32, grid_y: f32) -> Footprint {
        Footprint::new(grid_x, grid_y, self.width, self.height, self.rotation)
    }
}

fn cell_is_free(
    candidate: &Footprint,
    occupied: &[Footprint],
    network: Option<&RoadNetwork>,
) -> bool {
    let hits_building = occupied
        .iter()
        .any(|existing| buildings_overlap(existing, candidate));
    let hits_road = network.is_some_and(|network| building_collides_with_roads(candidate, network));
    !hits_building && !hits_road
}

/// Buildings a bulk fill would place. Blocked cells are left out.
///
/// New ids are unique among `existing` and each other.
///
/// Zero or negative unit sizes produce no buildings.
pub fn calculate_bulk_buildings<R: Rng + ?Sized>(
    region: BulkRegion,
    unit: &BulkUnit,
    existing: &[PlacedBuilding],
    network: Option<&RoadNetwork>,
    rng: &mut R,
) -> Vec<PlacedBuilding> {
    if unit.width <= 0.0 || unit.height <= 0.0 {
        return Vec::new();
    }

    let mut occupied: Vec<Footprint> = existing.iter().map(PlacedBuilding::footprint).collect();
    let mut taken: HashSet<String> = existing.iter().map(|b| b.id.clone()).collect();
    let mut placed = Vec::new();

    for (grid_x, grid_y) in region.cells(unit.width, unit.height) {
        let candidate = unit.footprint_at(grid_x, grid_y);
        if !cell_is_free(&candidate, &occupied, network) {
            continue;
        }
        let id = generate_unique_building_id(rng, &taken);
        taken.insert(id.clone());
        occupied.push(candidate);
        placed.push(PlacedBuilding {
            id,
            building_id: unit.building_id,
            grid_x,
            grid_y,
            width: unit.width,
            height: unit.height,
            rotation: unit.rotation,
            color: unit.color,
        });
    }

    placed
}

/// Ghost cells for a bulk drag in progress, valid and invalid alike.
///
/// Only valid cells block later cells. Returns nothing until both corners
/// are known.
pub fn bulk_preview_buildings(
    region: Option<BulkRegion>,
    unit: &BulkUnit,
    existing: &[PlacedBuilding],
    network: Option<&RoadNetwork>,
) -> Vec<BuildingPreview> {
    let Some(region) = region else {
        return Vec::new();
    };
    if unit.width <= 0.0 || unit.height <= 0.0 {
        return Vec::new();
    }

    let mut occupied: Vec<Footprint> = existing.iter().map(PlacedBuilding::footprint).collect();
    let mut previews = Vec::new();

    for (grid_x, grid_y) in region.cells(unit.width, unit.height) {
        let candidate = unit.footprint_at(grid_x, grid_y);
        let is_valid = cell_is_free(&candidate, &occupied, network);
        previews.push(BuildingPreview {
            grid_x,
            grid_y,
            width: unit.width,
            height: unit.height,
            is_valid,
        });
        if is_valid {
            occupied.push(candidate);
        }
    }

    previews
}
