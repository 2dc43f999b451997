//! Test-only course builders shared by unit, property and benchmark
//! code.

use geo::Coord;

use crate::{course::Course, waypoint::Waypoint};

/// Construct a waypoint from raw parts.
///
/// # Examples
/// ```rust
/// use waypath_core::test_support::waypoint;
///
/// let stop = waypoint(50.0, 50.0, 20.0);
/// assert_eq!(stop.penalty, 20.0);
/// ```
#[must_use]
pub fn waypoint(x: f64, y: f64, penalty: f64) -> Waypoint {
    Waypoint::new(Coord { x, y }, penalty)
}

/// Build a course from `(x, y, penalty)` triples.
///
/// # Panics
/// Panics when a triple fails course validation; fixtures should fail
/// loudly.
///
/// # Examples
/// ```rust
/// use waypath_core::test_support::course;
///
/// let course = course(&[(50.0, 50.0, 20.0)]);
/// assert_eq!(course.len(), 3);
/// ```
#[must_use]
pub fn course(stops: &[(f64, f64, f64)]) -> Course {
    Course::new(stops.iter().map(|&(x, y, penalty)| waypoint(x, y, penalty)))
        .expect("test course stops must be valid")
}
