//! Shared helpers for the solver property tests.

use proptest::prelude::*;
use waypath_core::test_support::course;
use waypath_core::Course;

/// Raw `(x, y, penalty)` stop triple as it appears in input files.
pub type StopTriple = (f64, f64, f64);

/// Strategy producing integer-valued stop triples on the grid.
///
/// Coordinates stay within the 100×100 grid and penalties within a
/// range wide enough to make both skipping and visiting optimal on
/// different draws.
pub fn stop_strategy() -> impl Strategy<Value = StopTriple> {
    (0..=100_i32, 0..=100_i32, 0..=200_i32)
        .prop_map(|(x, y, penalty)| (f64::from(x), f64::from(y), f64::from(penalty)))
}

/// Strategy producing a whole stop list between `min` and `max` long.
pub fn stops_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<StopTriple>> {
    prop::collection::vec(stop_strategy(), min..=max)
}

/// Build a course from generated triples.
pub fn course_from(stops: &[StopTriple]) -> Course {
    course(stops)
}
