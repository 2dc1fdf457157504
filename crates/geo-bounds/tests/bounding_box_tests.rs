// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Integration tests for geo-bounds growth and predicates.

use geo_bounds::{BoundingBox, BoundsError, Point2d, ROUGH_TOLERANCE};
use serde_json::json;

#[test]
fn grow_then_query_scenario() {
    let mut bb = BoundingBox::new(0.0, 10.0, 0.0, 5.0);

    assert!(bb.add_point(&Point2d::new(12.0, 3.0)));
    assert_eq!(bb, BoundingBox::new(0.0, 12.0, 0.0, 5.0));

    assert!(!bb.add_point(&Point2d::new(5.0, 2.0)));
    assert_eq!(bb, BoundingBox::new(0.0, 12.0, 0.0, 5.0));

    assert!(bb.contains(&Point2d::new(5.0, 2.0)));
    assert!(!bb.intersects(&BoundingBox::new(20.0, 30.0, 20.0, 30.0)));
}

#[test]
fn extent_of_a_track_accumulates_from_empty() {
    // A GPS track in lon/lat; the empty box must not leak its infinities.
    let track = [
        Point2d::new(17.10, 48.14),
        Point2d::new(17.25, 48.20),
        Point2d::new(17.05, 48.31),
        Point2d::new(17.30, 48.09),
    ];
    let mut extent = BoundingBox::default();
    assert!(extent.add_points(&track));
    assert_eq!(extent, BoundingBox::new(17.05, 17.30, 48.09, 48.31));
    assert!(extent.valid());
    assert!(track.iter().all(|p| extent.contains(p)));
}

#[test]
fn tiles_merge_with_add_assign() {
    let tiles = [
        BoundingBox::new(0.0, 1.0, 0.0, 1.0),
        BoundingBox::new(1.0, 2.0, 0.0, 1.0),
        BoundingBox::new(0.0, 1.0, 1.0, 2.0),
    ];
    let mut cover = BoundingBox::empty();
    for tile in &tiles {
        cover += tile;
    }
    assert_eq!(cover, BoundingBox::new(0.0, 2.0, 0.0, 2.0));
    assert!(tiles.iter().all(|t| cover.contains_box(t) && cover.intersects(t)));
    assert_eq!(cover.center(), Point2d::new(1.0, 1.0));
}

#[test]
fn reprojected_corner_passes_rough_test_only() {
    let bb = BoundingBox::new(-100.0, 100.0, -50.0, 50.0);
    let drifted = Point2d::new(100.0 + ROUGH_TOLERANCE / 2.0, -50.0 - ROUGH_TOLERANCE / 2.0);
    assert!(!bb.contains(&drifted));
    assert!(bb.rough_contains(&drifted));
}

#[test]
fn zoom_out_and_back() {
    let view = BoundingBox::new(10.0, 30.0, 20.0, 28.0);
    let zoomed = view * 4.0;
    assert_eq!(zoomed, BoundingBox::new(-20.0, 60.0, 8.0, 40.0));
    assert_eq!(zoomed / 4.0, view);
    assert!(zoomed.contains_box(&view));
}

#[test]
fn index_out_of_range_describes_mapping() {
    let bb = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
    let values: Vec<f64> = (0..4).filter_map(|i| bb.get(i).ok()).collect();
    assert_eq!(values, vec![1.0, 3.0, 2.0, 4.0]);

    let err = bb.get(4).err().map(|e| e.to_string());
    assert_eq!(
        err.as_deref(),
        Some("index 4 out of range, index 0: min_x, index 1: min_y, index 2: max_x, index 3: max_y")
    );
}

#[test]
fn hydrates_from_nested_config_node() {
    let config = json!({
        "render": {
            "extent": { "minX": 16.8, "maxX": 22.6, "minY": 47.7, "maxY": 49.6 }
        }
    });
    let node = &config["render"]["extent"];
    let bb = BoundingBox::from_tree(node);
    assert!(matches!(bb, Ok(b) if b == BoundingBox::new(16.8, 22.6, 47.7, 49.6)));

    let err = BoundingBox::from_tree(&config["render"]);
    assert!(matches!(err, Err(BoundsError::Load(_))));
}

#[test]
fn deserializes_either_schema() {
    let from_extents: Result<BoundingBox, _> =
        serde_json::from_str(r#"{"minx": 0, "maxx": 4, "miny": 0, "maxy": 2}"#);
    let from_corners: Result<BoundingBox, _> = serde_json::from_str(
        r#"{"left_bottom": {"x": 0, "y": 0}, "right_top": {"x": 4, "y": 2}}"#,
    );
    match (from_extents, from_corners) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b);
            assert_eq!(a, BoundingBox::new(0.0, 4.0, 0.0, 2.0));
        }
        other => panic!("deserialization failed: {other:?}"),
    }
}
