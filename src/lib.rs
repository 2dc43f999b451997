//! Facade crate for the Waypath routing engine.
//!
//! This crate re-exports the core domain types and exposes the exact DAG
//! solver behind a feature flag.

#![forbid(unsafe_code)]

pub use waypath_core::{
    CostModel, CostModelError, Course, CourseError, Itinerary, SolveError, Solver, Waypoint,
    GRID_MAX, GRID_MIN,
};

#[cfg(feature = "solver-dag")]
pub use waypath_solver_dag::DagSolver;
