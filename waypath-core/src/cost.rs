//! Transition pricing between course waypoints.
//!
//! A transition from `a` to `b` moves the agent in a straight line,
//! pays the skip penalty of every waypoint passed over, and charges the
//! dwell time once on arrival. Speed and dwell time are explicit
//! configuration rather than ambient constants so tests can vary them.

use thiserror::Error;

use crate::course::Course;

/// Default travel speed in grid units per second.
pub const DEFAULT_SPEED: f64 = 2.0;

/// Default dwell time charged at each visited waypoint, in seconds.
pub const DEFAULT_DWELL_TIME: f64 = 10.0;

/// Travel parameters used to price waypoint transitions.
///
/// # Examples
/// ```
/// use waypath_core::CostModel;
///
/// let model = CostModel::default();
/// assert_eq!(model.speed(), 2.0);
/// assert_eq!(model.dwell_time(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    speed: f64,
    dwell_time: f64,
}

/// Errors returned by [`CostModel::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostModelError {
    /// Speed must be positive and finite.
    #[error("speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),
    /// Dwell time must be non-negative and finite.
    #[error("dwell time must be non-negative and finite, got {0}")]
    InvalidDwellTime(f64),
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            dwell_time: DEFAULT_DWELL_TIME,
        }
    }
}

impl CostModel {
    /// Validate and construct a cost model.
    ///
    /// # Errors
    /// Returns [`CostModelError`] when `speed` is not positive and finite
    /// or `dwell_time` is negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use waypath_core::CostModel;
    ///
    /// let model = CostModel::new(4.0, 0.0)?;
    /// assert_eq!(model.speed(), 4.0);
    /// # Ok::<(), waypath_core::CostModelError>(())
    /// ```
    pub fn new(speed: f64, dwell_time: f64) -> Result<Self, CostModelError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(CostModelError::InvalidSpeed(speed));
        }
        if !dwell_time.is_finite() || dwell_time < 0.0 {
            return Err(CostModelError::InvalidDwellTime(dwell_time));
        }
        Ok(Self { speed, dwell_time })
    }

    /// Travel speed in grid units per second.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Dwell time charged at each visited waypoint, in seconds.
    #[must_use]
    pub const fn dwell_time(&self) -> f64 {
        self.dwell_time
    }

    /// Time in seconds to move directly from waypoint `a` to waypoint `b`.
    ///
    /// The total is straight-line travel at the configured speed, plus
    /// the penalty of every waypoint strictly between `a` and `b`, plus
    /// the dwell time charged once at the destination. The result is
    /// finite and non-negative for valid inputs and the computation has
    /// no side effects.
    ///
    /// Callers must enumerate forward pairs only: `a < b` with both
    /// indices in range. The contract is asserted in debug builds;
    /// release builds fall back to an infinite time that relaxation will
    /// never select.
    ///
    /// # Examples
    /// ```
    /// use waypath_core::{CostModel, Course};
    ///
    /// let model = CostModel::default();
    /// let time = model.transition_time(0, 1, &Course::direct());
    /// assert!((time - 80.710_678).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn transition_time(&self, a: usize, b: usize, course: &Course) -> f64 {
        debug_assert!(a < b, "transition requires a < b (got {a} >= {b})");
        let (Some(from), Some(to)) = (course.waypoint(a), course.waypoint(b)) else {
            debug_assert!(false, "transition endpoints out of range: {a} -> {b}");
            return f64::INFINITY;
        };
        let travel = (to.coord.x - from.coord.x).hypot(to.coord.y - from.coord.y) / self.speed;
        travel + course.penalty_between(a, b) + self.dwell_time
    }
}
