//! The outcome of a single Qibla calculation, ready to be shown to a user.
//!
//! Invalid input never escapes as an error from here:
//! it turns into the placeholder values and an explaining hint.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    bearing::Bearing, compass::CompassPoint, coord::Coordinate, input::CoordinateInput,
    location::LocationError,
};

const COORDINATE_DIGITS: usize = 6;
const BEARING_DIGITS: usize = 2;

/// How the report came to be
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportStatus {
    /// The bearing is computed
    Ready,
    /// Some of the values entered are missing or unusable
    Invalid,
    /// Waiting for the device position
    Locating,
    /// The device position could not be obtained
    LocationFailed(LocationError),
}

/// Coordinates, the Qibla bearing and a hint for the user
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QiblaReport {
    coordinate: Option<Coordinate>,
    bearing: Option<Bearing>,
    status: ReportStatus,
}

impl QiblaReport {
    /// Shown instead of any value that cannot be computed
    pub const PLACEHOLDER: &'static str = "—";

    const INVALID_HINT: &'static str = "Enter valid coordinates (or use GPS).";
    const LOCATING_HINT: &'static str = "Requesting GPS…";

    const fn empty(status: ReportStatus) -> Self {
        Self {
            coordinate: None,
            bearing: None,
            status,
        }
    }

    /// Resolve the entered values and compute the Qibla for them.
    ///
    /// ```
    /// # use qibla::{CoordinateInput, QiblaReport};
    /// let report = QiblaReport::calculate(&CoordinateInput::Decimal {
    ///     latitude: "40.7128",
    ///     longitude: "-74.0060",
    /// });
    /// assert_eq!(report.bearing_text(), "58.48° (ENE)");
    /// assert_eq!(report.hint(), "Face ENE. Bearing is from TRUE North.");
    ///
    /// let report = QiblaReport::calculate(&CoordinateInput::Decimal {
    ///     latitude: "",
    ///     longitude: "-74.0060",
    /// });
    /// assert_eq!(report.bearing_text(), "—");
    /// ```
    pub fn calculate(input: &CoordinateInput<'_>) -> Self {
        match input.resolve() {
            Ok(point) => Self::from_coordinate(point),
            Err(err) => {
                debug!(%err, ?input, "Coordinates rejected");
                Self::invalid()
            }
        }
    }

    /// Compute the Qibla for the already known point
    pub fn from_coordinate(point: Coordinate) -> Self {
        let bearing = point.qibla();
        debug!(%point, %bearing, compass = %bearing.compass_point(), "Qibla computed");

        Self {
            coordinate: Some(point),
            bearing: Some(bearing),
            status: ReportStatus::Ready,
        }
    }

    /// Compute the Qibla for the position reported by a device.
    /// The longitude is normalized, non-finite values give an invalid report.
    pub fn from_fix(lat: f64, lon: f64) -> Self {
        match Coordinate::new(lat, lon) {
            Ok(point) => Self::from_coordinate(point),
            Err(err) => {
                debug!(%err, lat, lon, "Device fix rejected");
                Self::invalid()
            }
        }
    }

    /// Nothing usable was entered
    pub const fn invalid() -> Self {
        Self::empty(ReportStatus::Invalid)
    }

    /// The device position was requested but not yet received
    pub const fn locating() -> Self {
        Self::empty(ReportStatus::Locating)
    }

    /// The device position request failed
    pub fn location_failed(err: LocationError) -> Self {
        debug!(%err, "Location failed");
        Self::empty(ReportStatus::LocationFailed(err))
    }

    /// The observer's point, if known
    pub const fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    /// The Qibla, if computed
    pub const fn bearing(&self) -> Option<Bearing> {
        self.bearing
    }

    /// Where to face
    pub fn compass_point(&self) -> Option<CompassPoint> {
        self.bearing.map(Bearing::compass_point)
    }

    /// How the report came to be
    pub const fn status(&self) -> ReportStatus {
        self.status
    }

    /// Is the bearing available?
    pub const fn is_valid(&self) -> bool {
        self.bearing.is_some()
    }

    /// Latitude with 6 decimal digits or the placeholder
    pub fn latitude_text(&self) -> String {
        fixed(self.coordinate.map(Coordinate::latitude), COORDINATE_DIGITS)
    }

    /// Longitude with 6 decimal digits or the placeholder
    pub fn longitude_text(&self) -> String {
        fixed(self.coordinate.map(Coordinate::longitude), COORDINATE_DIGITS)
    }

    /// Bearing with 2 decimal digits and the compass label, like `58.48° (ENE)`
    pub fn bearing_text(&self) -> String {
        self.bearing.map_or_else(
            || Self::PLACEHOLDER.to_string(),
            |bearing| {
                format!(
                    "{:.*} ({})",
                    BEARING_DIGITS,
                    bearing,
                    bearing.compass_point()
                )
            },
        )
    }

    /// What the user should do next
    pub fn hint(&self) -> String {
        match (self.status, self.compass_point()) {
            (ReportStatus::Ready, Some(point)) => {
                format!("Face {point}. Bearing is from TRUE North.")
            }
            (ReportStatus::LocationFailed(err), _) => err.to_string(),
            (ReportStatus::Locating, _) => Self::LOCATING_HINT.to_string(),
            (ReportStatus::Ready | ReportStatus::Invalid, _) => Self::INVALID_HINT.to_string(),
        }
    }
}

impl Default for QiblaReport {
    fn default() -> Self {
        Self::invalid()
    }
}

impl fmt::Display for QiblaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Latitude:  {}", self.latitude_text())?;
        writeln!(f, "Longitude: {}", self.longitude_text())?;
        writeln!(f, "Qibla:     {}", self.bearing_text())?;
        write!(f, "{}", self.hint())
    }
}

fn fixed(value: Option<f64>, digits: usize) -> String {
    // `-0.000000` is not what anyone wants to read
    value.map_or_else(
        || QiblaReport::PLACEHOLDER.to_string(),
        |value| format!("{:.*}", digits, value + 0.0),
    )
}
