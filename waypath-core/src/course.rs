//! The immutable waypoint table a solve runs over.
//!
//! A course owns the ordered waypoints for one test case: a synthetic
//! start corner at index 0, the caller's intermediate stops, and a
//! synthetic end corner at the highest index. Indices are dense, so the
//! end is always `len - 1` and forward enumeration is plain range
//! iteration.

use std::ops::Range;

use geo::Coord;
use thiserror::Error;

use crate::waypoint::{Waypoint, GRID_MAX, GRID_MIN};

/// Ordered, validated waypoint table with synthetic start and end.
///
/// Courses are immutable once constructed. Penalty prefix sums are
/// precomputed so the skipped-penalty total for any forward pair is a
/// constant-time lookup.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waypath_core::{Course, Waypoint};
///
/// # fn main() -> Result<(), waypath_core::CourseError> {
/// let course = Course::new([Waypoint::new(Coord { x: 50.0, y: 50.0 }, 20.0)])?;
/// assert_eq!(course.len(), 3);
/// assert_eq!(course.end_index(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    waypoints: Vec<Waypoint>,
    penalty_prefix: Vec<f64>,
}

/// Errors returned by [`Course::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CourseError {
    /// A waypoint coordinate fell outside the traversal grid.
    #[error("waypoint {index} at ({x}, {y}) lies outside the {GRID_MIN}..={GRID_MAX} grid")]
    CoordinateOutOfGrid {
        /// Course index of the offending waypoint.
        index: usize,
        /// Offending x coordinate.
        x: f64,
        /// Offending y coordinate.
        y: f64,
    },
    /// A waypoint penalty was negative or not finite.
    #[error("waypoint {index} has invalid penalty {penalty}")]
    InvalidPenalty {
        /// Course index of the offending waypoint.
        index: usize,
        /// Offending penalty value.
        penalty: f64,
    },
}

impl Course {
    /// Validate intermediate stops and build a course around them.
    ///
    /// The start corner `(0, 0)` and end corner `(100, 100)` are attached
    /// automatically, both with zero penalty. Stops keep their given
    /// order; the first stop receives index 1.
    ///
    /// # Errors
    /// Returns [`CourseError`] when a stop lies outside the grid or
    /// carries a negative or non-finite penalty.
    pub fn new(stops: impl IntoIterator<Item = Waypoint>) -> Result<Self, CourseError> {
        let mut waypoints = vec![Waypoint::new(
            Coord {
                x: GRID_MIN,
                y: GRID_MIN,
            },
            0.0,
        )];
        for (offset, stop) in stops.into_iter().enumerate() {
            validate_stop(offset + 1, &stop)?;
            waypoints.push(stop);
        }
        waypoints.push(Waypoint::new(
            Coord {
                x: GRID_MAX,
                y: GRID_MAX,
            },
            0.0,
        ));
        Ok(Self::from_validated(waypoints))
    }

    /// Build the degenerate course with no intermediate stops.
    ///
    /// # Examples
    /// ```
    /// use waypath_core::Course;
    ///
    /// let course = Course::direct();
    /// assert_eq!(course.len(), 2);
    /// ```
    #[must_use]
    pub fn direct() -> Self {
        Self::from_validated(vec![
            Waypoint::new(
                Coord {
                    x: GRID_MIN,
                    y: GRID_MIN,
                },
                0.0,
            ),
            Waypoint::new(
                Coord {
                    x: GRID_MAX,
                    y: GRID_MAX,
                },
                0.0,
            ),
        ])
    }

    fn from_validated(waypoints: Vec<Waypoint>) -> Self {
        // penalty_prefix[i] is the penalty sum over waypoints[..i].
        let mut penalty_prefix = Vec::with_capacity(waypoints.len() + 1);
        let mut running = 0.0;
        penalty_prefix.push(running);
        for waypoint in &waypoints {
            running += waypoint.penalty;
            penalty_prefix.push(running);
        }
        Self {
            waypoints,
            penalty_prefix,
        }
    }

    /// Number of waypoints including the synthetic start and end.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the course holds no waypoints.
    ///
    /// Always `false` for constructed courses; provided for container
    /// convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Index of the end corner, the highest course index.
    #[must_use]
    pub fn end_index(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    /// Waypoint at `index`, or `None` when out of range.
    #[must_use]
    pub fn waypoint(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// All waypoints in index order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Every index strictly greater than `point`: the full forward
    /// frontier.
    ///
    /// Skipping is always permitted at the price of the accumulated
    /// penalties priced into the transition cost, so every higher-indexed
    /// waypoint is reachable in one hop — the course induces a complete
    /// DAG on indices, not a chain.
    ///
    /// # Examples
    /// ```
    /// use waypath_core::Course;
    ///
    /// let course = Course::direct();
    /// assert_eq!(course.neighbors(0).collect::<Vec<_>>(), vec![1]);
    /// assert_eq!(course.neighbors(1).count(), 0);
    /// ```
    #[must_use]
    pub fn neighbors(&self, point: usize) -> Range<usize> {
        let first = point.saturating_add(1).min(self.waypoints.len());
        first..self.waypoints.len()
    }

    /// Penalty sum over waypoints strictly between `a` and `b`.
    ///
    /// Callers must pass `a < b`, both in range; the contract is asserted
    /// in debug builds.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use waypath_core::{Course, Waypoint};
    ///
    /// # fn main() -> Result<(), waypath_core::CourseError> {
    /// let course = Course::new([Waypoint::new(Coord { x: 50.0, y: 50.0 }, 20.0)])?;
    /// assert_eq!(course.penalty_between(0, 2), 20.0);
    /// assert_eq!(course.penalty_between(0, 1), 0.0);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn penalty_between(&self, a: usize, b: usize) -> f64 {
        debug_assert!(a < b, "penalty span requires a < b (got {a} >= {b})");
        debug_assert!(b <= self.end_index(), "penalty span end {b} out of range");
        let sum_to = |index: usize| self.penalty_prefix.get(index).copied().unwrap_or_default();
        (sum_to(b) - sum_to(a + 1)).max(0.0)
    }
}

fn validate_stop(index: usize, stop: &Waypoint) -> Result<(), CourseError> {
    let in_grid = |value: f64| (GRID_MIN..=GRID_MAX).contains(&value);
    if !in_grid(stop.coord.x) || !in_grid(stop.coord.y) {
        return Err(CourseError::CoordinateOutOfGrid {
            index,
            x: stop.coord.x,
            y: stop.coord.y,
        });
    }
    if !stop.penalty.is_finite() || stop.penalty < 0.0 {
        return Err(CourseError::InvalidPenalty {
            index,
            penalty: stop.penalty,
        });
    }
    Ok(())
}
