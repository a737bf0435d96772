//! Unit tests for building sizing, overlap, snapping, placement and bulk fill.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::roads::{calculate_road_preview, create_road_edges_from_preview, GridPoint, RoadNetwork, RoadType};

fn fp(x: f32, y: f32, w: f32, h: f32, rotation: Rotation) -> Footprint {
    Footprint::new(x, y, w, h, rotation)
}

fn placed(id: &str, x: f32, y: f32, w: f32, h: f32, rotation: Rotation) -> PlacedBuilding {
    PlacedBuilding {
        id: id.to_string(),
        building_id: 7,
        grid_x: x,
        grid_y: y,
        width: w,
        height: h,
        rotation,
        color: 0xaabbcc,
    }
}

fn east_road(y: i32, from: i32, to: i32) -> RoadNetwork {
    let network = RoadNetwork::new();
    let preview = calculate_road_preview(
        GridPoint::new(from, y),
        GridPoint::new(to, y),
        &network,
        &[],
    );
    create_road_edges_from_preview(&preview, RoadType::Dirt, &network)
}

// ---------------------------------------------------------------------------
// Sizing
// ---------------------------------------------------------------------------

#[test]
fn test_adjusted_size_examples() {
    let cases = [
        ((1.0, 1.0), (1.0, 1.0)),
        ((2.0, 2.0), (3.0, 3.0)),
        ((3.0, 8.0), (4.0, 11.0)),
        ((5.0, 6.0), (7.0, 8.0)),
        ((6.0, 6.0), (8.0, 8.0)),
    ];
    for ((w, h), (ew, eh)) in cases {
        for rotation in [Rotation::R45, Rotation::R135] {
            let size = adjusted_size(BuildingSize::new(w, h), rotation);
            assert_eq!(size, BuildingSize::new(ew, eh), "{w}x{h} at {rotation:?}");
        }
    }
}

#[test]
fn test_adjusted_size_axis_aligned() {
    let base = BuildingSize::new(3.0, 8.0);
    assert_eq!(adjusted_size(base, Rotation::R0), base);
    assert_eq!(adjusted_size(base, Rotation::R90), BuildingSize::new(8.0, 3.0));
}

#[test]
fn test_adjusted_size_quarter_cycle_returns_to_base() {
    let base = BuildingSize::new(4.0, 9.0);
    let swapped = adjusted_size(base, Rotation::R90);
    assert_eq!(adjusted_size(swapped, Rotation::R90), base);
}

#[test]
fn test_diagonal_geometry_center() {
    let geo = building_geometry(&fp(2.0, 4.0, 3.0, 5.0, Rotation::R45));
    // Bounding square of side (3 + 5) / 2 = 4.
    assert_eq!(geo.center, Vec2::new(4.0, 6.0));

    let geo = building_geometry(&fp(2.0, 4.0, 3.0, 5.0, Rotation::R90));
    assert_eq!(geo.center, Vec2::new(3.5, 6.5));
}

// ---------------------------------------------------------------------------
// Overlap
// ---------------------------------------------------------------------------

#[test]
fn test_building_overlaps_itself() {
    for rotation in Rotation::ALL {
        let b = fp(3.0, 2.0, 2.0, 4.0, rotation);
        assert!(buildings_overlap(&b, &b), "{rotation:?}");
    }
}

#[test]
fn test_aligned_neighbors_do_not_overlap() {
    let a = fp(0.0, 0.0, 2.0, 3.0, Rotation::R0);
    let right = fp(2.0, 0.0, 3.0, 3.0, Rotation::R90);
    let below = fp(0.0, 3.0, 2.0, 2.0, Rotation::R0);
    assert!(!buildings_overlap(&a, &right));
    assert!(!buildings_overlap(&a, &below));
    assert!(buildings_overlap(&a, &fp(1.5, 0.0, 3.0, 3.0, Rotation::R0)));
}

#[test]
fn test_diagonal_neighbors_do_not_overlap() {
    // Shifting by (1, 1) moves two units along u, the combined half extents.
    let a = fp(0.0, 0.0, 2.0, 2.0, Rotation::R45);
    let along_u = fp(1.0, 1.0, 2.0, 2.0, Rotation::R45);
    assert!(!buildings_overlap(&a, &along_u));
    assert!(buildings_overlap(&a, &fp(0.5, 0.5, 2.0, 2.0, Rotation::R45)));
}

#[test]
fn test_diagonal_cross_rotation_neighbors() {
    // 4x2 at 45° and 2x4 at 135° have the same u/v extents (2, 1).
    let a = fp(0.0, 0.0, 4.0, 2.0, Rotation::R45);
    let along_v = fp(-1.0, 1.0, 2.0, 4.0, Rotation::R135);
    assert!(!buildings_overlap(&a, &along_v));
    assert!(buildings_overlap(&a, &fp(0.0, 0.0, 2.0, 4.0, Rotation::R135)));
}

#[test]
fn test_mixed_rotation_touching_corner() {
    let diamond = fp(0.0, 0.0, 2.0, 2.0, Rotation::R45);
    let square = fp(2.0, 0.0, 2.0, 2.0, Rotation::R0);
    assert!(!buildings_overlap(&diamond, &square));
    assert!(!buildings_overlap(&square, &diamond));

    let inside = fp(0.5, 0.5, 1.0, 1.0, Rotation::R90);
    assert!(buildings_overlap(&diamond, &inside));
    assert!(buildings_overlap(&inside, &diamond));
}

#[test]
fn test_mixed_rotation_separated_on_diagonal_axis() {
    // The square sits in the diamond's bounding-box corner but beyond its
    // slanted edge.
    let diamond = fp(0.0, 0.0, 4.0, 4.0, Rotation::R45);
    let corner = fp(0.0, 0.0, 0.5, 0.5, Rotation::R0);
    assert!(!buildings_overlap(&diamond, &corner));
}

#[test]
fn test_overlap_is_symmetric() {
    let shapes = [
        (2.0, 3.0),
        (1.0, 1.0),
        (3.0, 5.0),
    ];
    for ra in Rotation::ALL {
        for rb in Rotation::ALL {
            for &(w, h) in &shapes {
                for step in 0..12 {
                    let offset = step as f32 * 0.5 - 3.0;
                    let a = fp(0.0, 0.0, w, h, ra);
                    let b = fp(offset, offset * 0.5, h, w, rb);
                    assert_eq!(
                        buildings_overlap(&a, &b),
                        buildings_overlap(&b, &a),
                        "{ra:?} vs {rb:?} at {offset}"
                    );
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Hit testing
// ---------------------------------------------------------------------------

#[test]
fn test_point_in_aligned_building_half_open() {
    let b = fp(0.0, 0.0, 2.0, 2.0, Rotation::R0);
    assert!(is_point_in_building(Vec2::new(0.0, 0.0), &b));
    assert!(is_point_in_building(Vec2::new(1.99, 1.99), &b));
    assert!(!is_point_in_building(Vec2::new(2.0, 1.0), &b));
    assert!(!is_point_in_building(Vec2::new(1.0, 2.0), &b));
}

#[test]
fn test_point_in_diagonal_building() {
    let b = fp(0.0, 0.0, 2.0, 2.0, Rotation::R45);
    assert!(is_point_in_building(Vec2::new(1.0, 1.0), &b));
    assert!(!is_point_in_building(Vec2::new(0.1, 0.1), &b));
    // Exactly on the boundary is outside.
    assert!(!is_point_in_building(Vec2::new(1.5, 1.5), &b));
}

#[test]
fn test_building_at_position_prefers_last() {
    let list = vec![
        placed("under", 0.0, 0.0, 4.0, 4.0, Rotation::R0),
        placed("over", 1.0, 1.0, 2.0, 2.0, Rotation::R0),
    ];
    let hit = get_building_at_position(Vec2::new(60.0, 60.0), 40.0, &list);
    assert_eq!(hit.map(|b| b.id.as_str()), Some("over"));

    let hit = get_building_at_position(Vec2::new(10.0, 150.0), 40.0, &list);
    assert_eq!(hit.map(|b| b.id.as_str()), Some("under"));

    assert!(get_building_at_position(Vec2::new(200.0, 10.0), 40.0, &list).is_none());
}

// ---------------------------------------------------------------------------
// Snapping
// ---------------------------------------------------------------------------

#[test]
fn test_snap_axis_aligned() {
    let snapped = calculate_snapped_position(
        Vec2::new(100.0, 100.0),
        40.0,
        BuildingSize::new(2.0, 3.0),
        Rotation::R0,
    );
    assert_eq!(snapped.grid_x, 2.0);
    assert_eq!(snapped.grid_y, 1.0);
    assert_eq!(snapped.adjusted_width, 2.0);
    assert_eq!(snapped.adjusted_height, 3.0);
}

#[test]
fn test_snap_rounds_negative_halves_up() {
    let snapped = calculate_snapped_position(
        Vec2::new(-20.0, -20.0),
        40.0,
        BuildingSize::new(1.0, 1.0),
        Rotation::R0,
    );
    // Center -0.5 minus half width lands on -1.0 exactly.
    assert_eq!(snapped.grid_x, -1.0);

    let snapped = calculate_snapped_position(
        Vec2::new(0.0, 0.0),
        40.0,
        BuildingSize::new(1.0, 1.0),
        Rotation::R0,
    );
    // -0.5 rounds toward +inf.
    assert_eq!(snapped.grid_x, 0.0);
}

#[test]
fn test_snap_diagonal_tie_prefers_intersection() {
    let snapped = calculate_snapped_position(
        Vec2::new(200.0, 200.0),
        40.0,
        BuildingSize::new(2.0, 2.0),
        Rotation::R45,
    );
    assert_eq!(snapped.adjusted_width, 3.0);
    assert_eq!(snapped.grid_x, 4.0);
    assert_eq!(snapped.grid_y, 3.5);
}

#[test]
fn test_snap_diagonal_to_cell_center() {
    // Left corner at (3.4, 5.4) is closer to the cell center (3.5, 5.5).
    let snapped = calculate_snapped_position(
        Vec2::new(4.9 * 40.0, 5.4 * 40.0),
        40.0,
        BuildingSize::new(2.0, 2.0),
        Rotation::R45,
    );
    assert!((snapped.grid_x - 3.5).abs() < 1e-4);
    assert!((snapped.grid_y - 4.0).abs() < 1e-4);
}

#[test]
fn test_snapping_is_idempotent() {
    let bases = [
        BuildingSize::new(2.0, 2.0),
        BuildingSize::new(3.0, 8.0),
        BuildingSize::new(5.0, 6.0),
        BuildingSize::new(1.0, 4.0),
    ];
    let cursors = [
        Vec2::new(37.0, 91.0),
        Vec2::new(-133.0, 12.5),
        Vec2::new(402.0, -275.0),
        Vec2::new(0.0, 0.0),
    ];

    for base in bases {
        for rotation in Rotation::ALL {
            for cursor in cursors {
                let first = calculate_snapped_position(cursor, 40.0, base, rotation);
                let geo = building_geometry(&first.footprint(rotation));
                let again = calculate_snapped_position(geo.center * 40.0, 40.0, base, rotation);
                assert_eq!(first, again, "{base:?} {rotation:?} {cursor:?}");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

#[test]
fn test_valid_placement_against_buildings() {
    let list = vec![placed("a", 0.0, 0.0, 2.0, 2.0, Rotation::R0)];
    assert!(is_valid_placement(&fp(2.0, 0.0, 2.0, 2.0, Rotation::R0), &list, None, None));
    assert!(!is_valid_placement(&fp(1.0, 1.0, 2.0, 2.0, Rotation::R0), &list, None, None));
    assert!(is_valid_placement(
        &fp(1.0, 1.0, 2.0, 2.0, Rotation::R0),
        &list,
        Some("a"),
        None
    ));
}

#[test]
fn test_valid_placement_against_roads() {
    let network = east_road(5, 0, 6);
    let list: Vec<PlacedBuilding> = Vec::new();
    assert!(!is_valid_placement(
        &fp(1.0, 4.0, 2.0, 2.0, Rotation::R0),
        &list,
        None,
        Some(&network)
    ));
    assert!(is_valid_placement(
        &fp(1.0, 3.0, 2.0, 2.0, Rotation::R0),
        &list,
        None,
        Some(&network)
    ));
    assert!(is_valid_placement(
        &fp(1.0, 4.0, 2.0, 2.0, Rotation::R0),
        &list,
        None,
        None
    ));
}

// ---------------------------------------------------------------------------
// Catalog and ids
// ---------------------------------------------------------------------------

#[test]
fn test_catalog_lookup() {
    let mut catalog: HashMap<u32, CatalogEntry> = HashMap::new();
    catalog.insert(
        3,
        CatalogEntry {
            size: BuildingSize::new(2.0, 5.0),
            color: 0x112233,
            icon: None,
        },
    );
    assert_eq!(catalog.base_size(3), Some(BuildingSize::new(2.0, 5.0)));
    assert!(catalog.lookup(4).is_none());
}

#[test]
fn test_catalog_entry_icon_optional() {
    let entry: CatalogEntry =
        serde_json::from_str(r#"{"size":{"width":2.0,"height":3.0},"color":255}"#)
            .expect("parse");
    assert_eq!(entry.icon, None);
    assert_eq!(entry.size, BuildingSize::new(2.0, 3.0));
}

#[test]
fn test_building_id_format() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let id = generate_building_id(&mut rng);
    assert!(id.starts_with("building-"));
    let suffix = &id["building-".len()..];
    assert_eq!(suffix.len(), 7);
    assert!(suffix
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn test_building_ids_deterministic_per_seed() {
    let mut a = PlannerRng::from_seed(9);
    let mut b = PlannerRng::from_seed(9);
    let ids_a: Vec<String> = (0..5).map(|_| generate_building_id(&mut a.0)).collect();
    let ids_b: Vec<String> = (0..5).map(|_| generate_building_id(&mut b.0)).collect();
    assert_eq!(ids_a, ids_b);

    let mut default_rng = PlannerRng::default();
    let mut seeded = PlannerRng::from_seed(42);
    assert_eq!(
        generate_building_id(&mut default_rng.0),
        generate_building_id(&mut seeded.0)
    );
}

#[test]
fn test_unique_building_id_skips_taken() {
    let mut stream = PlannerRng::default();
    let first = generate_building_id(&mut stream.0);
    let second = generate_building_id(&mut stream.0);

    let taken: HashSet<String> = [first.clone()].into_iter().collect();
    let mut fresh = PlannerRng::default();
    let id = generate_unique_building_id(&mut fresh.0, &taken);
    assert_ne!(id, first);
    assert_eq!(id, second);
}

#[test]
fn test_placed_building_json_shape() {
    let b = placed("building-abc1234", 1.0, 2.0, 3.0, 3.0, Rotation::R45);
    let value = serde_json::to_value(&b).expect("serialize");
    assert_eq!(value["buildingId"], 7);
    assert_eq!(value["gridX"], 1.0);
    assert_eq!(value["rotation"], 45);
}

// ---------------------------------------------------------------------------
// Bulk fill
// ---------------------------------------------------------------------------

fn unit_2x2() -> BulkUnit {
    BulkUnit {
        building_id: 7,
        color: 0xaabbcc,
        width: 2.0,
        height: 2.0,
        rotation: Rotation::R0,
    }
}

#[test]
fn test_bulk_fills_grid_row_major() {
    let region = BulkRegion::new(GridPoint::new(0, 0), GridPoint::new(5, 3));
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let result = calculate_bulk_buildings(region, &unit_2x2(), &[], None, &mut rng);

    assert_eq!(result.len(), 6);
    let positions: Vec<(f32, f32)> = result.iter().map(|b| (b.grid_x, b.grid_y)).collect();
    assert_eq!(
        positions,
        vec![(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (0.0, 2.0), (2.0, 2.0), (4.0, 2.0)]
    );

    let mut ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn test_bulk_region_corners_in_any_order() {
    let forward = BulkRegion::new(GridPoint::new(0, 0), GridPoint::new(5, 3));
    let backward = BulkRegion::new(GridPoint::new(5, 3), GridPoint::new(0, 0));
    let a = bulk_preview_buildings(Some(forward), &unit_2x2(), &[], None);
    let b = bulk_preview_buildings(Some(backward), &unit_2x2(), &[], None);
    assert_eq!(a, b);
}

#[test]
fn test_bulk_skips_occupied_cells() {
    let region = BulkRegion::new(GridPoint::new(0, 0), GridPoint::new(5, 3));
    let existing = vec![placed("x", 2.0, 0.0, 2.0, 2.0, Rotation::R0)];
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let result = calculate_bulk_buildings(region, &unit_2x2(), &existing, None, &mut rng);
    assert_eq!(result.len(), 5);
    assert!(!result.iter().any(|b| b.grid_x == 2.0 && b.grid_y == 0.0));
}

#[test]
fn test_bulk_skips_road_cells() {
    let region = BulkRegion::new(GridPoint::new(0, 0), GridPoint::new(5, 3));
    let network = east_road(3, 0, 6);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let result = calculate_bulk_buildings(region, &unit_2x2(), &[], Some(&network), &mut rng);
    // Second row straddles the road.
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|b| b.grid_y == 0.0));
}

#[test]
fn test_bulk_preview_reports_every_cell() {
    let region = BulkRegion::new(GridPoint::new(0, 0), GridPoint::new(5, 3));
    let existing = vec![placed("x", 2.0, 0.0, 2.0, 2.0, Rotation::R0)];
    let previews = bulk_preview_buildings(Some(region), &unit_2x2(), &existing, None);
    assert_eq!(previews.len(), 6);
    assert_eq!(previews.iter().filter(|p| !p.is_valid).count(), 1);
    assert!(!previews[1].is_valid);
}

#[test]
fn test_bulk_preview_without_region_is_empty() {
    assert!(bulk_preview_buildings(None, &unit_2x2(), &[], None).is_empty());
}

#[test]
fn test_bulk_rejects_empty_unit() {
    let region = BulkRegion::new(GridPoint::new(0, 0), GridPoint::new(5, 3));
    let unit = BulkUnit {
        width: 0.0,
        ..unit_2x2()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    assert!(calculate_bulk_buildings(region, &unit, &[], None, &mut rng).is_empty());
}

#[test]
fn test_bulk_ids_avoid_existing_ids() {
    // A layout restored in a new session holds ids from the same seed.
    let mut earlier = PlannerRng::default();
    let reused = generate_building_id(&mut earlier.0);
    let existing = vec![placed(&reused, 100.0, 100.0, 2.0, 2.0, Rotation::R0)];

    let region = BulkRegion::new(GridPoint::new(0, 0), GridPoint::new(3, 0));
    let mut rng = PlannerRng::default();
    let result = calculate_bulk_buildings(region, &unit_2x2(), &existing, None, &mut rng.0);

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|b| b.id != reused));
    assert_ne!(result[0].id, result[1].id);
}

#[test]
fn test_bulk_cells_are_lazy_over_huge_regions() {
    let region = BulkRegion::new(
        GridPoint::new(-1_000_000, -1_000_000),
        GridPoint::new(1_000_000, 1_000_000),
    );
    let first: Vec<(f32, f32)> = region.cells(1.0, 1.0).take(3).collect();
    assert_eq!(
        first,
        vec![
            (-1_000_000.0, -1_000_000.0),
            (-999_999.0, -1_000_000.0),
            (-999_998.0, -1_000_000.0),
        ]
    );
}

#[test]
fn test_bulk_cells_row_major_count() {
    let region = BulkRegion::new(GridPoint::new(2, 1), GridPoint::new(0, 0));
    let cells: Vec<(f32, f32)> = region.cells(1.0, 1.0).collect();
    assert_eq!(cells.len(), 6);
    assert_eq!(cells[3], (0.0, 1.0));
}
