//! The 16-wind compass rose.
//! <https://en.wikipedia.org/wiki/Points_of_the_compass#16-wind_compass_rose>

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bearing::Bearing;

/// One of the 16 named directions, each covering a 22.5° sector
/// centred on its own bearing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum CompassPoint {
    /// North, 0°
    N,
    /// North-northeast, 22.5°
    NNE,
    /// Northeast, 45°
    NE,
    /// East-northeast, 67.5°
    ENE,
    /// East, 90°
    E,
    /// East-southeast, 112.5°
    ESE,
    /// Southeast, 135°
    SE,
    /// South-southeast, 157.5°
    SSE,
    /// South, 180°
    S,
    /// South-southwest, 202.5°
    SSW,
    /// Southwest, 225°
    SW,
    /// West-southwest, 247.5°
    WSW,
    /// West, 270°
    W,
    /// West-northwest, 292.5°
    WNW,
    /// Northwest, 315°
    NW,
    /// North-northwest, 337.5°
    NNW,
}

impl CompassPoint {
    /// Clockwise from the north
    pub const ALL: [Self; 16] = [
        Self::N,
        Self::NNE,
        Self::NE,
        Self::ENE,
        Self::E,
        Self::ESE,
        Self::SE,
        Self::SSE,
        Self::S,
        Self::SSW,
        Self::SW,
        Self::WSW,
        Self::W,
        Self::WNW,
        Self::NW,
        Self::NNW,
    ];

    /// Angular width of a single point's sector
    pub const SECTOR_DEG: f64 = 22.5;

    /// The point whose sector holds the bearing
    pub fn from_bearing(bearing: Bearing) -> Self {
        Self::nearest(bearing.degrees()).unwrap_or(Self::N)
    }

    /// The point closest to any finite number of degrees.
    ///
    /// On the boundary between two sectors the ties round away from zero:
    /// `11.25` is `NNE`, `348.75` wraps around to `N`, `-11.25` is `NNW`.
    pub fn nearest(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }

        let count = Self::ALL.len() as f64;
        // rounds half away from zero
        let index = (degrees / Self::SECTOR_DEG).round().rem_euclid(count);
        Self::ALL.get(index as usize).copied()
    }

    /// The conventional abbreviation
    pub const fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NNE => "NNE",
            Self::NE => "NE",
            Self::ENE => "ENE",
            Self::E => "E",
            Self::ESE => "ESE",
            Self::SE => "SE",
            Self::SSE => "SSE",
            Self::S => "S",
            Self::SSW => "SSW",
            Self::SW => "SW",
            Self::WSW => "WSW",
            Self::W => "W",
            Self::WNW => "WNW",
            Self::NW => "NW",
            Self::NNW => "NNW",
        }
    }

    /// The bearing at the centre of the sector
    pub fn bearing(self) -> Bearing {
        let index = Self::ALL
            .iter()
            .position(|&point| point == self)
            .expect("Every point is listed");
        Bearing::try_from(index as f64 * Self::SECTOR_DEG)
            .expect("Sector centres are valid bearings")
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// The compass label of the bearing, one of `N`, `NNE`, ..., `NNW`.
///
/// ```
/// # use qibla::{compute_bearing, label_for_bearing};
/// let bearing = compute_bearing(40.7128, -74.0060).unwrap();
/// assert_eq!(label_for_bearing(bearing), "ENE");
/// ```
pub fn label_for_bearing(bearing: Bearing) -> &'static str {
    CompassPoint::from_bearing(bearing).label()
}
