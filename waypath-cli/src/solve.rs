//! Solve command implementation for the Waypath CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use serde::Serialize;
use waypath_core::{CostModel, Course, Itinerary, Solver};
use waypath_solver_dag::DagSolver;

use crate::{error::CliError, input};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    long_about = "Solve every test case in an input file. Each case is a \
                 line holding the intermediate-waypoint count followed by \
                 that many `x y penalty` lines; a zero count ends the \
                 sequence.",
    about = "Solve waypoint test cases from a file"
)]
pub(crate) struct SolveArgs {
    /// Path to the test-case input file.
    #[arg(value_name = "path")]
    pub(crate) input_path: Utf8PathBuf,
    /// Travel speed in grid units per second.
    #[arg(long, value_name = "units-per-second", default_value_t = waypath_core::DEFAULT_SPEED)]
    pub(crate) speed: f64,
    /// Dwell time charged at each visited waypoint, in seconds.
    #[arg(long, value_name = "seconds", default_value_t = waypath_core::DEFAULT_DWELL_TIME)]
    pub(crate) dwell_time: f64,
    /// Append the winning stop indices to each report.
    #[arg(long)]
    pub(crate) show_path: bool,
    /// Emit one JSON object per case instead of plain text.
    #[arg(long)]
    pub(crate) json: bool,
}

/// One reported test case in `--json` mode.
#[derive(Debug, Serialize)]
struct CaseReport<'a> {
    case: usize,
    best_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    stops: Option<&'a [usize]>,
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &mut stdout)
}

pub(super) fn run_solve_with(args: SolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let courses = load_cases(&args.input_path)?;
    let cost_model = CostModel::new(args.speed, args.dwell_time)?;
    let solver = DagSolver::with_cost_model(cost_model);
    for (index, course) in courses.iter().enumerate() {
        let case = index + 1;
        let itinerary = solve_case(&solver, case, course)?;
        write_report(writer, case, &itinerary, &args)?;
    }
    Ok(())
}

fn load_cases(path: &Utf8Path) -> Result<Vec<Course>, CliError> {
    if !path.is_file() {
        return Err(CliError::MissingInputFile {
            path: path.to_path_buf(),
        });
    }
    let text =
        std::fs::read_to_string(path.as_std_path()).map_err(|source| CliError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
    input::parse_cases(&text).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

fn solve_case(solver: &DagSolver, case: usize, course: &Course) -> Result<Itinerary, CliError> {
    solver
        .solve(course)
        .map_err(|source| CliError::Solve { case, source })
}

fn write_report(
    writer: &mut dyn Write,
    case: usize,
    itinerary: &Itinerary,
    args: &SolveArgs,
) -> Result<(), CliError> {
    if args.json {
        let report = CaseReport {
            case,
            best_time: itinerary.rounded_time(),
            stops: args.show_path.then_some(itinerary.stops.as_slice()),
        };
        let payload = serde_json::to_string(&report).map_err(CliError::SerialiseReport)?;
        writeln!(writer, "{payload}").map_err(CliError::WriteReport)
    } else if args.show_path {
        let path = itinerary
            .stops
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        writeln!(writer, "Best time: {:.3} via {path}", itinerary.total_time)
            .map_err(CliError::WriteReport)
    } else {
        writeln!(writer, "Best time: {:.3}", itinerary.total_time).map_err(CliError::WriteReport)
    }
}
