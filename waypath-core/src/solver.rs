use thiserror::Error;

use crate::{course::Course, itinerary::Itinerary};

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The end waypoint kept an infinite best time after the sweep.
    ///
    /// Full forward connectivity makes this unreachable for valid
    /// courses; the variant exists so implementations never report a
    /// non-finite time.
    #[error("end waypoint was never reached")]
    EndUnreached,
}

/// Find the minimum-time itinerary through a course.
///
/// Implementations must be deterministic: solving the same immutable
/// course twice yields the same itinerary. Solvers must be `Send + Sync`
/// so callers may solve independent courses from multiple threads.
pub trait Solver: Send + Sync {
    /// Solve a course, producing the best itinerary or an error.
    fn solve(&self, course: &Course) -> Result<Itinerary, SolveError>;
}
