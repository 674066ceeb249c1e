//! Test for exporting a BatchReport to JSON
//!
//! Classifies an in-memory batch and writes the report next to a temp dir

use std::fs;
use triangle_core::*;

#[test]
fn test_export_batch_report() {
    let problems = vec![
        TriangleProblem::new("right", [3.0, 4.0, 5.0]).with_expected(TriangleKind::Scalene),
        TriangleProblem::new("needle", [1.0, 2.0, 10.0]),
    ];

    let report = classify_batch(&problems);
    assert_eq!(report.valid, 1);
    assert_eq!(report.invalid, 1);

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("batch.report.json");
    report.to_json_file(&output_path).expect("Failed to write JSON");

    let json_content = fs::read_to_string(&output_path).expect("Failed to read JSON file");
    let parsed: serde_json::Value = serde_json::from_str(&json_content)
        .expect("Failed to parse JSON");

    assert_eq!(parsed["valid"], 1);
    assert_eq!(parsed["invalid"], 1);
    assert_eq!(parsed["mismatches"], 0);
    assert_eq!(parsed["reports"][0]["kind"], "scalene");
    assert_eq!(parsed["reports"][0]["matches_expected"], true);
    assert!(parsed["reports"][1]["kind"].is_null());
    assert!(parsed["reports"][1]["error"]
        .as_str()
        .unwrap()
        .contains("longest side"));

    let reloaded = BatchReport::from_json(&json_content).expect("Failed to reload report");
    assert_eq!(reloaded, report);
}

#[test]
fn test_triangle_from_points_measures() {
    let triangle = Triangle::from_points(
        Point2D::new(1.0, 1.0),
        Point2D::new(4.0, 1.0),
        Point2D::new(1.0, 5.0),
    )
    .expect("Right triangle should be valid");

    assert_eq!(triangle.kind(), TriangleKind::Scalene);
    assert!(triangle.is_right());
    assert!((triangle.area() - 6.0).abs() < 1e-9);
    assert!((triangle.perimeter() - 12.0).abs() < 1e-9);
}
