//! Core domain types for the Waypath routing engine.
//!
//! A [`Course`] is an immutable, ordered table of grid waypoints with a
//! synthetic start and end corner. The [`CostModel`] prices a direct
//! transition between any forward pair of waypoints, and a [`Solver`]
//! turns a course into the minimum-time [`Itinerary`]. Constructors
//! return `Result` to surface invalid input early; no I/O happens here.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cost;
mod course;
mod itinerary;
mod solver;
mod waypoint;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use cost::{CostModel, CostModelError, DEFAULT_DWELL_TIME, DEFAULT_SPEED};
pub use course::{Course, CourseError};
pub use itinerary::Itinerary;
pub use solver::{SolveError, Solver};
pub use waypoint::{Waypoint, GRID_MAX, GRID_MIN};
