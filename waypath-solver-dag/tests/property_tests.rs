//! Property-based tests for the DAG solver.
//!
//! These tests use `proptest` to assert invariants that must hold for
//! all valid courses, complementing the unit tests and the golden
//! regression tests.
//!
//! # Invariants tested
//!
//! - **Penalty monotonicity:** raising any one penalty never lowers the
//!   best time.
//! - **Determinism:** solving the same course twice yields identical
//!   itineraries.
//! - **Path shape:** itineraries start at 0, end at the end index, and
//!   strictly increase.
//! - **Bounds:** the best time never beats the single-dwell lower bound
//!   and never exceeds the direct start-to-end transition.

mod proptest_support;

use proptest::prelude::*;
use waypath_core::{CostModel, Solver, DEFAULT_DWELL_TIME, DEFAULT_SPEED, GRID_MAX};
use waypath_solver_dag::DagSolver;

use proptest_support::{course_from, stops_strategy, StopTriple};

/// Bump one stop's penalty by a positive delta, keeping the rest.
fn with_raised_penalty(stops: &[StopTriple], pick: usize, delta: f64) -> Vec<StopTriple> {
    let target = pick % stops.len();
    stops
        .iter()
        .enumerate()
        .map(|(index, &(x, y, penalty))| {
            if index == target {
                (x, y, penalty + delta)
            } else {
                (x, y, penalty)
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Raising a single skip penalty can only leave the best time
    /// unchanged (the stop was already visited) or raise it.
    #[test]
    fn raising_a_penalty_never_lowers_the_best_time(
        stops in stops_strategy(1, 10),
        pick in any::<usize>(),
        delta in 1..=500_i32,
    ) {
        let solver = DagSolver::new();
        let baseline = solver
            .solve(&course_from(&stops))
            .expect("baseline course solves");
        let raised = with_raised_penalty(&stops, pick, f64::from(delta));
        let bumped = solver
            .solve(&course_from(&raised))
            .expect("raised course solves");
        prop_assert!(
            bumped.total_time >= baseline.total_time - 1e-9,
            "raising a penalty lowered the best time: {} -> {}",
            baseline.total_time,
            bumped.total_time
        );
    }

    /// Solving is deterministic over an immutable course.
    #[test]
    fn solving_is_deterministic(stops in stops_strategy(0, 12)) {
        let fixture = course_from(&stops);
        let solver = DagSolver::new();
        let first = solver.solve(&fixture).expect("first solve");
        let second = solver.solve(&fixture).expect("second solve");
        prop_assert_eq!(first, second);
    }

    /// Itineraries run from the start corner to the end corner through
    /// strictly increasing indices.
    #[test]
    fn itinerary_indices_strictly_increase(stops in stops_strategy(0, 12)) {
        let fixture = course_from(&stops);
        let itinerary = DagSolver::new().solve(&fixture).expect("course solves");
        prop_assert_eq!(itinerary.stops.first().copied(), Some(0));
        prop_assert_eq!(itinerary.stops.last().copied(), Some(fixture.end_index()));
        prop_assert!(
            itinerary.stops.windows(2).all(|pair| pair[0] < pair[1]),
            "stops are not strictly increasing: {:?}",
            itinerary.stops
        );
    }

    /// The best time is bracketed by the straight-line single-transition
    /// lower bound and the skip-everything direct transition.
    #[test]
    fn best_time_is_bracketed(stops in stops_strategy(0, 12)) {
        let fixture = course_from(&stops);
        let itinerary = DagSolver::new().solve(&fixture).expect("course solves");

        let lower = GRID_MAX.hypot(GRID_MAX) / DEFAULT_SPEED + DEFAULT_DWELL_TIME;
        prop_assert!(
            itinerary.total_time >= lower - 1e-9,
            "best time {} beats the straight-line bound {}",
            itinerary.total_time,
            lower
        );

        let direct =
            CostModel::default().transition_time(0, fixture.end_index(), &fixture);
        prop_assert!(
            itinerary.total_time <= direct + 1e-9,
            "best time {} exceeds the direct transition {}",
            itinerary.total_time,
            direct
        );
    }

    /// The forward frontier is exactly the set of higher indices.
    #[test]
    fn neighbors_are_the_higher_indices(stops in stops_strategy(0, 8)) {
        let fixture = course_from(&stops);
        for point in 0..fixture.len() {
            let expected: Vec<usize> = ((point + 1)..fixture.len()).collect();
            prop_assert_eq!(fixture.neighbors(point).collect::<Vec<_>>(), expected);
        }
    }
}
