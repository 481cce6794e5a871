//! Initial great-circle bearing on a spherical Earth.
//! <https://www.movable-type.co.uk/scripts/latlong.html#bearing>

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{
        consts::{FULL_TURN_DEG, HALF_TURN_DEG},
        AngleComponent, Component, InvalidInput,
    },
    compass::CompassPoint,
    coord::Coordinate,
};

/// The Kaaba in Mecca, the target of every Qibla bearing
pub const KAABA: Coordinate = Coordinate::from_raw(21.4225, 39.8262);

/// Direction of travel measured clockwise from the true north, in `[0, 360)` degrees.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Bearing(f64);

impl Bearing {
    /// The true north
    pub const NORTH: Self = Self(0.0);

    /// Degrees clockwise from the north
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// The closest of the 16 compass points
    pub fn compass_point(self) -> CompassPoint {
        CompassPoint::from_bearing(self)
    }

    /// Turn to face the opposite direction
    pub fn reverse(self) -> Self {
        let half = f64::from(HALF_TURN_DEG);
        if self.0 < half {
            Self(self.0 + half)
        } else {
            Self(self.0 - half)
        }
    }
}

impl TryFrom<f64> for Bearing {
    type Error = InvalidInput;

    /// Any finite number of degrees, wrapped into a single turn
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let value = value.component_value(Component::Bearing)?;
        let full = f64::from(FULL_TURN_DEG);

        let wrapped = value.rem_euclid(full);
        // tiny negative values round up to the full turn
        if wrapped >= full {
            Ok(Self::NORTH)
        } else {
            Ok(Self(wrapped + 0.0))
        }
    }
}

impl From<Bearing> for f64 {
    fn from(bearing: Bearing) -> Self {
        bearing.0
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.*}°", precision, self.0)
    }
}

/// The initial bearing of the shortest path from one point to another.
///
/// The path along the great circle changes its direction on the way,
/// so the result is only valid at the starting point.
/// For coincident points the result is [`Bearing::NORTH`].
pub fn initial_bearing(from: Coordinate, to: Coordinate) -> Bearing {
    let lat_from = from.latitude().to_radians();
    let lat_to = to.latitude().to_radians();
    let delta_lon = to.longitude().to_radians() - from.longitude().to_radians();

    let y = delta_lon.sin() * lat_to.cos();
    let x = lat_from.cos() * lat_to.sin() - lat_from.sin() * lat_to.cos() * delta_lon.cos();

    let theta = y.atan2(x).to_degrees();
    let full = f64::from(FULL_TURN_DEG);
    Bearing((theta + full) % full)
}

/// The Qibla: initial bearing from the observer to the [`KAABA`].
///
/// ```
/// # use qibla::compute_bearing;
/// let bearing = compute_bearing(51.5074, -0.1278).unwrap();
/// assert_eq!(bearing.to_string(), "118.99°");
/// assert_eq!(bearing.compass_point().label(), "ESE");
///
/// assert!(compute_bearing(f64::NAN, 0.0).is_err());
/// ```
///
/// # Errors
/// Any of the observer's values is NaN or infinite.
pub fn compute_bearing(lat: f64, lon: f64) -> Result<Bearing, InvalidInput> {
    let observer = Coordinate::new(lat, lon)?;
    Ok(observer.qibla())
}

impl Coordinate {
    /// The Qibla as seen from this point
    pub fn qibla(self) -> Bearing {
        initial_bearing(self, KAABA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bearing(lat: f64, lon: f64, expected: f64) {
        let bearing = compute_bearing(lat, lon).unwrap();
        dbg!(bearing);
        assert!(
            (bearing.degrees() - expected).abs() < 1e-9,
            "{} is not close to {expected}",
            bearing.degrees()
        );
    }

    #[test]
    fn new_york() {
        assert_bearing(40.7128, -74.0060, 58.481_701_037_883_68);
    }

    #[test]
    fn london() {
        assert_bearing(51.5074, -0.1278, 118.987_219_496_334_43);
    }

    #[test]
    fn sydney() {
        assert_bearing(-33.8688, 151.2093, 277.499_589_120_951_5);
    }

    #[test]
    fn tokyo() {
        assert_bearing(35.6762, 139.6503, 292.998_680_186_163_9);
    }

    #[test]
    fn medina_is_almost_north_of_mecca() {
        assert_bearing(24.4672, 39.6111, 176.235_326_027_463_77);
    }

    #[test]
    fn null_island() {
        assert_bearing(0.0, 0.0, 58.508_207_113_046_92);
    }

    #[test]
    fn poles() {
        assert_bearing(90.0, 0.0, 140.1738);
        assert_bearing(-90.0, 0.0, 39.8262);
    }

    #[test]
    fn at_the_kaaba() {
        let bearing = compute_bearing(21.4225, 39.8262).unwrap();
        assert_eq!(bearing, Bearing::NORTH);
        assert_eq!(KAABA.qibla(), Bearing::NORTH);
    }

    #[test]
    fn unnormalized_longitude() {
        let plain = compute_bearing(40.7128, -74.0060).unwrap();
        let wrapped = compute_bearing(40.7128, 285.994).unwrap();
        assert!((plain.degrees() - wrapped.degrees()).abs() < 1e-9);
    }

    #[test]
    fn always_in_range() {
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(20) {
                let bearing = compute_bearing(f64::from(lat), f64::from(lon)).unwrap();
                assert!((0.0..360.0).contains(&bearing.degrees()), "{bearing:?}");
            }
        }
    }

    #[test]
    fn invalid_observer() {
        assert_eq!(
            compute_bearing(f64::NAN, 10.0),
            Err(InvalidInput::NotFinite(Component::Latitude))
        );
        assert_eq!(
            compute_bearing(10.0, f64::NEG_INFINITY),
            Err(InvalidInput::NotFinite(Component::Longitude))
        );
    }

    #[test]
    fn between_arbitrary_points() {
        let from = Coordinate::new(0.0, 0.0).unwrap();
        let east = Coordinate::new(0.0, 10.0).unwrap();
        let north = Coordinate::new(10.0, 0.0).unwrap();

        assert!((initial_bearing(from, east).degrees() - 90.0).abs() < 1e-9);
        assert_eq!(initial_bearing(from, north), Bearing::NORTH);
        assert!((initial_bearing(east, from).degrees() - 270.0).abs() < 1e-9);
        assert!((initial_bearing(north, from).degrees() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn from_number() {
        assert_eq!(Bearing::try_from(45.0).unwrap().degrees(), 45.0);
        assert_eq!(Bearing::try_from(360.0).unwrap(), Bearing::NORTH);
        assert_eq!(Bearing::try_from(-90.0).unwrap().degrees(), 270.0);
        assert_eq!(Bearing::try_from(-1e-20).unwrap(), Bearing::NORTH);
        assert_eq!(
            Bearing::try_from(f64::NAN),
            Err(InvalidInput::NotFinite(Component::Bearing))
        );
    }

    #[test]
    fn reverse() {
        assert_eq!(Bearing::try_from(10.0).unwrap().reverse().degrees(), 190.0);
        assert_eq!(Bearing::try_from(270.0).unwrap().reverse().degrees(), 90.0);
        assert_eq!(Bearing::NORTH.reverse().degrees(), 180.0);
    }

    #[test]
    fn display() {
        let bearing = Bearing::try_from(58.481_701).unwrap();
        assert_eq!(bearing.to_string(), "58.48°");
        assert_eq!(format!("{bearing:.4}"), "58.4817°");
        assert_eq!(Bearing::NORTH.to_string(), "0.00°");
    }
}
