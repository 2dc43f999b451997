//! Exact minimum-time solver over the waypoint DAG.
//!
//! Every transition runs from a lower to a higher course index, so the
//! course graph is acyclic and positionally ordered: a single forward
//! relaxation sweep computes the optimum without a priority queue or
//! revisiting.

#![forbid(unsafe_code)]

mod solver;

pub use solver::DagSolver;
