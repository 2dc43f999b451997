//! Parsing of waypoint test-case text into courses.
//!
//! The format is a sequence of cases: a line holding the
//! intermediate-waypoint count, then that many `x y penalty` lines of
//! three space-separated integers. A count of `0` terminates the
//! sequence; end of file is accepted as an implicit terminator. Blank
//! lines are ignored. Everything the core contract assumes validated is
//! rejected here, before any course is built.

use geo::Coord;
use thiserror::Error;
use waypath_core::{Course, CourseError, Waypoint, GRID_MAX, GRID_MIN};

/// Errors produced while parsing test-case text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A count line did not hold a single non-negative integer.
    #[error("line {line}: expected a waypoint count, got {text:?}")]
    InvalidCount {
        /// 1-based source line.
        line: usize,
        /// The rejected line text.
        text: String,
    },
    /// The file ended before a case's waypoint lines did.
    #[error("line {line}: case declares {expected} waypoints but only {found} lines follow")]
    TruncatedCase {
        /// 1-based line of the count.
        line: usize,
        /// Declared waypoint count.
        expected: usize,
        /// Waypoint lines actually present.
        found: usize,
    },
    /// A waypoint line did not hold exactly three fields.
    #[error("line {line}: expected `x y penalty`, got {text:?}")]
    MalformedWaypoint {
        /// 1-based source line.
        line: usize,
        /// The rejected line text.
        text: String,
    },
    /// A waypoint field was not an integer.
    #[error("line {line}: {field} value {text:?} is not an integer")]
    NonNumericField {
        /// 1-based source line.
        line: usize,
        /// Which field failed.
        field: &'static str,
        /// The rejected field text.
        text: String,
    },
    /// A coordinate fell outside the traversal grid.
    #[error("line {line}: coordinate ({x}, {y}) lies outside the {GRID_MIN}..={GRID_MAX} grid")]
    CoordinateOutOfGrid {
        /// 1-based source line.
        line: usize,
        /// Offending x coordinate.
        x: i64,
        /// Offending y coordinate.
        y: i64,
    },
    /// A penalty was negative.
    #[error("line {line}: penalty {penalty} is negative")]
    NegativePenalty {
        /// 1-based source line.
        line: usize,
        /// Offending penalty value.
        penalty: i64,
    },
    /// A parsed waypoint failed course validation.
    #[error("case starting at line {line}: {source}")]
    InvalidCase {
        /// 1-based line of the case's count.
        line: usize,
        /// Underlying course failure.
        #[source]
        source: CourseError,
    },
    /// Input continued after the terminating zero count.
    #[error("line {line}: content after the terminating zero count")]
    TrailingContent {
        /// 1-based source line.
        line: usize,
    },
}

/// Parse the full test-case text into ordered courses.
///
/// # Errors
/// Returns the first [`ParseError`] encountered, carrying the 1-based
/// source line.
pub fn parse_cases(text: &str) -> Result<Vec<Course>, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let mut courses = Vec::new();
    while let Some((count_line, count_text)) = lines.next() {
        let count = parse_count(count_line, count_text)?;
        if count == 0 {
            return match lines.next() {
                Some((trailing, _)) => Err(ParseError::TrailingContent { line: trailing }),
                None => Ok(courses),
            };
        }

        let mut stops = Vec::with_capacity(count);
        for found in 0..count {
            let Some((stop_line, stop_text)) = lines.next() else {
                return Err(ParseError::TruncatedCase {
                    line: count_line,
                    expected: count,
                    found,
                });
            };
            stops.push(parse_waypoint(stop_line, stop_text)?);
        }
        let course = Course::new(stops).map_err(|source| ParseError::InvalidCase {
            line: count_line,
            source,
        })?;
        courses.push(course);
    }
    Ok(courses)
}

fn parse_count(line: usize, text: &str) -> Result<usize, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidCount {
        line,
        text: text.to_owned(),
    })
}

fn parse_waypoint(line: usize, text: &str) -> Result<Waypoint, ParseError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [x_text, y_text, penalty_text] = fields.as_slice() else {
        return Err(ParseError::MalformedWaypoint {
            line,
            text: text.to_owned(),
        });
    };
    let x = parse_field(line, "x", x_text)?;
    let y = parse_field(line, "y", y_text)?;
    let penalty = parse_field(line, "penalty", penalty_text)?;

    let in_grid = |value: i64| (GRID_MIN..=GRID_MAX).contains(&(value as f64));
    if !in_grid(x) || !in_grid(y) {
        return Err(ParseError::CoordinateOutOfGrid { line, x, y });
    }
    if penalty < 0 {
        return Err(ParseError::NegativePenalty { line, penalty });
    }

    Ok(Waypoint::new(
        Coord {
            x: x as f64,
            y: y as f64,
        },
        penalty as f64,
    ))
}

fn parse_field(line: usize, field: &'static str, text: &str) -> Result<i64, ParseError> {
    text.parse().map_err(|_| ParseError::NonNumericField {
        line,
        field,
        text: text.to_owned(),
    })
}
