//! Degree-Minute-Second representation of an angle.
//! <https://en.wikipedia.org/wiki/Degree_(angle)#Subdivisions>
//!
//! Only the hemisphere letter carries the sign.
//! The parts are plain magnitudes and are never range-checked,
//! so `0° 90′` is a valid way to write one and a half degrees.

use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::non_blank;

use super::{
    consts::{ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE},
    errors::{Component, InvalidInput, ParseDmsError},
    AngleComponent,
};

/// The side of the equator or of the prime meridian
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// `N`
    North,
    /// `S`, negative latitudes
    South,
    /// `E`
    East,
    /// `W`, negative longitudes
    West,
}

impl Hemisphere {
    /// Recognize a hemisphere letter in any case
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Read the hemisphere from a text field holding a single letter.
    /// Anything else (including nothing) means no hemisphere.
    pub fn from_field(text: &str) -> Option<Self> {
        let mut chars = non_blank(text)?.chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::from_letter(letter)
    }

    /// Is the angle in the hemisphere counted with the minus sign?
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }

    /// The upper-case letter
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

lazy_static! {
    static ref DMS_RE: Regex = Regex::new(
        r##"(?x)                         # enables verbose mode (to allow these comments)
        ^                                   # match the whole line from the start
        (?P<deg>\d+(?:\.\d+)?)                  # mandatory degrees VALUE, no sign allowed
        (?:
            \x20*(?:°|\*)                           # degree sign ending the angle
        |
            (?:\x20*(?:°|\*)\x20*|\x20+)            # degree sign or at least a space before minutes
            (?P<min>\d+(?:\.\d+)?)                  # minutes VALUE
            (?:
                \x20*(?:′|')                            # arcminute sign ending the angle
            |
                (?:\x20*(?:′|')\x20*|\x20+)             # arcminute sign or at least a space before seconds
                (?P<sec>\d+(?:\.\d+)?)                  # seconds VALUE with optional fraction
                (?:\x20*(?:″|"))?                       # optional arcsecond sign
            )?                                      # seconds are optional
        )?                                      # minutes and seconds are optional
        \x20*
        (?P<hem>[NSEWnsew])?                    # hemisphere letter in any case
        $                                   # match the whole line till the end
        "##
    )
    .expect("DMS regex is valid");
}

/// An angle written as degrees, minutes and seconds with an optional hemisphere letter.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmsAngle {
    degrees: f64,
    minutes: f64,
    seconds: f64,
    hemisphere: Option<Hemisphere>,
}

impl DmsAngle {
    /// Construct the angle from the parts given as numbers or as texts.
    ///
    /// # Errors
    /// The parts are checked in order (degrees, minutes, seconds)
    /// and the first blank, non-numeric or non-finite one is reported.
    pub fn from_components<D, M, S>(
        degrees: D,
        minutes: M,
        seconds: S,
        hemisphere: Option<Hemisphere>,
    ) -> Result<Self, InvalidInput>
    where
        D: AngleComponent,
        M: AngleComponent,
        S: AngleComponent,
    {
        Ok(Self {
            degrees: degrees.component_value(Component::Degrees)?,
            minutes: minutes.component_value(Component::Minutes)?,
            seconds: seconds.component_value(Component::Seconds)?,
            hemisphere,
        })
    }

    /// Construct the angle from four raw text fields.
    ///
    /// # Errors
    /// Some of the numeric fields is blank, non-numeric or non-finite.
    /// The hemisphere field is never an error.
    pub fn from_fields(
        degrees: &str,
        minutes: &str,
        seconds: &str,
        hemisphere: &str,
    ) -> Result<Self, InvalidInput> {
        Self::from_components(degrees, minutes, seconds, Hemisphere::from_field(hemisphere))
    }

    /// Degrees part as provided
    pub const fn degrees(self) -> f64 {
        self.degrees
    }

    /// Arc minutes part
    pub const fn minutes(self) -> f64 {
        self.minutes
    }

    /// Arc seconds part
    pub const fn seconds(self) -> f64 {
        self.seconds
    }

    /// The hemisphere letter, if any
    pub const fn hemisphere(self) -> Option<Hemisphere> {
        self.hemisphere
    }

    /// Unsigned size of the angle in decimal degrees
    pub fn magnitude(self) -> f64 {
        let minutes_in_degree = f64::from(MINUTES_IN_DEGREE);
        let seconds_in_degree = minutes_in_degree * f64::from(SECONDS_IN_MINUTE);

        self.degrees.abs() + self.minutes / minutes_in_degree + self.seconds / seconds_in_degree
    }

    /// Signed decimal degrees
    pub fn to_decimal(self) -> f64 {
        let magnitude = self.magnitude();
        if self.hemisphere.map_or(false, Hemisphere::is_negative) {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl FromStr for DmsAngle {
    type Err = ParseDmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = non_blank(s).ok_or(InvalidInput::Empty(Component::Degrees))?;
        let caps = DMS_RE.captures(s).ok_or(ParseDmsError::Notation)?;

        let part = |name: &str| caps.name(name).map_or("0", |m| m.as_str());
        let hemisphere = caps
            .name("hem")
            .and_then(|m| m.as_str().chars().next())
            .and_then(Hemisphere::from_letter);

        Ok(Self::from_components(
            part("deg"),
            part("min"),
            part("sec"),
            hemisphere,
        )?)
    }
}

impl fmt::Display for DmsAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (deg, min, sec) = if f.alternate() {
            ('*', '\'', '"')
        } else {
            (DEGREE_SIGN, ARC_MINUTE_SIGN, ARC_SECOND_SIGN)
        };

        write!(
            f,
            "{}{deg}{}{min}{}{sec}",
            self.degrees.abs(),
            self.minutes,
            self.seconds
        )?;
        if let Some(hemisphere) = self.hemisphere {
            write!(f, "{hemisphere}")?;
        }
        Ok(())
    }
}
