//! `DagSolver` implementation: one forward relaxation sweep.

use waypath_core::{CostModel, Course, Itinerary, SolveError, Solver};

/// Best-known state for one waypoint during a sweep.
///
/// `time` stays `f64::INFINITY` until the waypoint is first relaxed;
/// `stops` holds the chosen path from the start once it is. Records are
/// scratch state owned by a single solve invocation and mutated
/// monotonically: times only ever decrease.
#[derive(Debug, Clone)]
struct PathRecord {
    time: f64,
    stops: Vec<usize>,
}

impl PathRecord {
    fn unreached() -> Self {
        Self {
            time: f64::INFINITY,
            stops: Vec::new(),
        }
    }
}

/// Exact solver relaxing course transitions in increasing index order.
///
/// All edges run from lower to higher index, so positional order is a
/// topological order: by the time a waypoint becomes a relaxation
/// source its record is final, and one sweep over O(N²) transitions
/// yields the global minimum. Interior penalty sums come from the
/// course's prefix table, keeping each transition O(1).
#[derive(Debug, Clone, Default)]
pub struct DagSolver {
    cost_model: CostModel,
}

impl DagSolver {
    /// Construct a solver with the default cost model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with an explicit cost model.
    #[must_use]
    pub const fn with_cost_model(cost_model: CostModel) -> Self {
        Self { cost_model }
    }

    /// The cost model used to price transitions.
    #[must_use]
    pub const fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// Relax every forward neighbor of `source`.
    fn relax_from(&self, source: usize, course: &Course, records: &mut [PathRecord]) {
        let Some(record) = records.get(source) else {
            return;
        };
        if !record.time.is_finite() {
            // Unreachable sources cannot improve anything. Full forward
            // connectivity means this only happens on a contract breach.
            return;
        }
        let source_time = record.time;
        let source_stops = record.stops.clone();
        for neighbor in course.neighbors(source) {
            let candidate =
                source_time + self.cost_model.transition_time(source, neighbor, course);
            let Some(target) = records.get_mut(neighbor) else {
                continue;
            };
            if candidate < target.time {
                target.time = candidate;
                target.stops.clear();
                target.stops.extend_from_slice(&source_stops);
                target.stops.push(neighbor);
            }
        }
    }
}

/// Dense record table seeded at the start corner.
fn seed_records(course: &Course) -> Vec<PathRecord> {
    let mut records = vec![PathRecord::unreached(); course.len()];
    if let Some(start) = records.first_mut() {
        start.time = 0.0;
        start.stops.push(0);
    }
    records
}

impl Solver for DagSolver {
    fn solve(&self, course: &Course) -> Result<Itinerary, SolveError> {
        let end = course.end_index();
        let mut records = seed_records(course);

        // The end is only ever a target: nothing lies beyond it.
        for source in 0..end {
            self.relax_from(source, course, &mut records);
        }

        records
            .get(end)
            .filter(|record| record.time.is_finite())
            .map_or_else(
                || {
                    log::warn!("end waypoint {end} kept an infinite best time after the sweep");
                    Err(SolveError::EndUnreached)
                },
                |record| Ok(Itinerary::new(record.stops.clone(), record.time)),
            )
    }
}
