use std::fmt;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::angle::{AngleComponent, Component, InvalidInput};

use super::lon::normalize_longitude;

/// The point on the surface of a sphere, represented as the pair (latitude, longitude)
/// in decimal degrees.
///
/// Both values are finite and the longitude is always normalized.
/// The latitude is expected in `[-90, 90]` but this is not enforced.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Bypass the checks for the values known at compile time
    pub(crate) const fn from_raw(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a point from the given latitude and longitude.
    ///
    /// # Errors
    /// Any of the values is NaN or infinite.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidInput> {
        Self::from_components(lat, lon)
    }

    /// Construct a point from the values given as numbers or as texts.
    ///
    /// # Errors
    /// The latitude is checked first, then the longitude.
    /// The first blank, non-numeric or non-finite one is reported.
    pub fn from_components<La, Lo>(lat: La, lon: Lo) -> Result<Self, InvalidInput>
    where
        La: AngleComponent,
        Lo: AngleComponent,
    {
        let lat = lat.component_value(Component::Latitude)?;
        let lon = lon.component_value(Component::Longitude)?;
        Ok(Self {
            lat,
            lon: normalize_longitude(lon),
        })
    }

    /// Construct a point from two raw decimal text fields.
    ///
    /// ```
    /// # use qibla::Coordinate;
    /// let point = Coordinate::from_text("40.7128", "285.994").unwrap();
    /// assert_eq!(point.to_string(), "(40.712800, -74.006000)");
    /// ```
    ///
    /// # Errors
    /// Some of the fields is blank, non-numeric or non-finite.
    pub fn from_text(lat: &str, lon: &str) -> Result<Self, InvalidInput> {
        Self::from_components(lat, lon)
    }

    /// Latitude in decimal degrees
    pub const fn latitude(self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees, within `[-180, 180]`
    pub const fn longitude(self) -> f64 {
        self.lon
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = InvalidInput;

    fn try_from(value: (f64, f64)) -> Result<Self, Self::Error> {
        let (lat, lon) = value;
        Self::new(lat, lon)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            lat: f64,
            lon: f64,
        }

        let Raw { lat, lon } = Raw::deserialize(deserializer)?;
        Self::new(lat, lon).map_err(de::Error::custom)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: {:.6}, Long: {:.6}", self.lat, self.lon)
        } else {
            write!(f, "({:.6}, {:.6})", self.lat, self.lon)
        }
    }
}
