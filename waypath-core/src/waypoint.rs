use geo::Coord;

/// Lower bound of the traversal grid on both axes.
pub const GRID_MIN: f64 = 0.0;

/// Upper bound of the traversal grid on both axes.
pub const GRID_MAX: f64 = 100.0;

/// An ordered stop on the traversal grid.
///
/// A waypoint's index is its position in the owning [`Course`](crate::Course);
/// it is not stored here because course indices are contiguous by
/// construction.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waypath_core::Waypoint;
///
/// let stop = Waypoint::new(Coord { x: 50.0, y: 50.0 }, 20.0);
/// assert_eq!(stop.coord.x, 50.0);
/// assert_eq!(stop.penalty, 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Grid position, `x` and `y` in `[GRID_MIN, GRID_MAX]`.
    pub coord: Coord<f64>,
    /// Time in seconds charged for bypassing this stop.
    pub penalty: f64,
}

impl Waypoint {
    /// Construct a waypoint from a coordinate and a skip penalty.
    ///
    /// Validation happens when the waypoint joins a
    /// [`Course`](crate::Course); a bare waypoint carries its values
    /// verbatim.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use waypath_core::Waypoint;
    ///
    /// let stop = Waypoint::new(Coord { x: 10.0, y: 90.0 }, 0.0);
    /// assert_eq!(stop.penalty, 0.0);
    /// ```
    #[must_use]
    pub const fn new(coord: Coord<f64>, penalty: f64) -> Self {
        Self { coord, penalty }
    }
}
