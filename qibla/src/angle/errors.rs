use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

/// The input field a numeric value was taken from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// Whole degrees of a DMS angle
    Degrees,
    /// Arc minutes of a DMS angle
    Minutes,
    /// Arc seconds of a DMS angle
    Seconds,
    /// Decimal latitude
    Latitude,
    /// Decimal longitude
    Longitude,
    /// Direction clockwise from the true north
    Bearing,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Degrees => "degrees",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Bearing => "bearing",
        };

        write!(f, "{name}")
    }
}

/// The only way a calculation can fail: some required number is missing or unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Nothing but whitespace was provided
    Empty(Component),
    /// The text is not a number
    Number(Component, ParseFloatError),
    /// The value is NaN or infinite
    NotFinite(Component),
}

impl InvalidInput {
    /// Which field was rejected
    pub const fn component(&self) -> Component {
        match self {
            Self::Empty(c) | Self::Number(c, _) | Self::NotFinite(c) => *c,
        }
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid input: ")?;
        match self {
            Self::Empty(c) => write!(f, "{c} value is missing"),
            Self::Number(c, inner) => write!(f, "{c} is not a number ({inner})"),
            Self::NotFinite(c) => write!(f, "{c} is not a finite number"),
        }
    }
}

impl Error for InvalidInput {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Number(_, inner) => Some(inner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Failure to read an angle written in Degree-Minute-Second notation
pub enum ParseDmsError {
    /// The text does not follow the notation
    Notation,
    /// Some part of the notation holds an unusable number
    Input(InvalidInput),
}

enum_trivial_from_impl!(InvalidInput => ParseDmsError:Input);

impl fmt::Display for ParseDmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Notation => write!(f, "not a Degree-Minute-Second notation"),
            Self::Input(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ParseDmsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(inner) => Some(inner),
            Self::Notation => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_is_kept() {
        let err = InvalidInput::NotFinite(Component::Seconds);
        assert_eq!(err.component(), Component::Seconds);

        let parse_err = "x".parse::<f64>().unwrap_err();
        let err = InvalidInput::Number(Component::Latitude, parse_err);
        assert_eq!(err.component(), Component::Latitude);
        assert!(err.source().is_some());
    }

    #[test]
    fn messages() {
        assert_eq!(
            InvalidInput::Empty(Component::Minutes).to_string(),
            "Invalid input: minutes value is missing"
        );
        assert_eq!(
            ParseDmsError::Notation.to_string(),
            "Cannot parse angle: not a Degree-Minute-Second notation"
        );
        assert_eq!(
            ParseDmsError::from(InvalidInput::NotFinite(Component::Degrees)).to_string(),
            "Cannot parse angle: Invalid input: degrees is not a finite number"
        );
    }
}
