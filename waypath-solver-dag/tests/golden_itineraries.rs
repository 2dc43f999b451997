#![expect(
    clippy::expect_used,
    reason = "regression tests use expect for readable failures"
)]

//! Golden itinerary regression tests for the DAG solver.
//!
//! Each test loads a course from JSON, solves it with the default cost
//! model, and verifies the reported time and the chosen stops match the
//! recorded values exactly.
//!
//! These tests guard against regressions in the relaxation sweep by
//! pinning small, well-understood courses to known-good results.

use std::fs;
use std::path::PathBuf;

use rstest::rstest;
use serde::Deserialize;
use waypath_core::test_support::waypoint;
use waypath_core::{Course, Solver};
use waypath_solver_dag::DagSolver;

/// Deserialised golden itinerary test case.
#[derive(Debug, Deserialize)]
struct GoldenItinerary {
    name: String,
    #[expect(dead_code, reason = "kept for documentation in JSON files")]
    description: String,
    stops: Vec<StopSpec>,
    expected: ExpectedResult,
}

/// Stop specification from JSON.
#[derive(Debug, Deserialize)]
struct StopSpec {
    x: f64,
    y: f64,
    penalty: f64,
}

/// Expected result from JSON.
#[derive(Debug, Deserialize)]
struct ExpectedResult {
    rounded_time: f64,
    stops: Vec<usize>,
}

/// Load a golden itinerary from the data directory.
fn load_golden_itinerary(filename: &str) -> GoldenItinerary {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden_itineraries/data")
        .join(filename);
    let content = fs::read_to_string(&path).expect("failed to read golden itinerary file");
    serde_json::from_str(&content).expect("failed to parse golden itinerary JSON")
}

/// Convert stop specs to a domain course.
fn build_course(specs: &[StopSpec]) -> Course {
    Course::new(specs.iter().map(|s| waypoint(s.x, s.y, s.penalty)))
        .expect("golden itinerary contains invalid stops")
}

#[rstest]
#[case("direct_corner_to_corner.json")]
#[case("single_affordable_stop.json")]
#[case("high_penalty_chain.json")]
#[case("cheap_final_detour.json")]
#[case("skip_cheap_outlier.json")]
fn golden_itinerary_regression(#[case] filename: &str) {
    let golden = load_golden_itinerary(filename);
    let fixture = build_course(&golden.stops);

    let itinerary = DagSolver::new()
        .solve(&fixture)
        .expect("golden course should solve successfully");

    assert_eq!(
        itinerary.rounded_time(),
        golden.expected.rounded_time,
        "{}: reported time mismatch",
        golden.name
    );
    assert_eq!(
        itinerary.stops, golden.expected.stops,
        "{}: chosen stops mismatch",
        golden.name
    );
}
