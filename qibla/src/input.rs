//! Raw values entered by a user, before anything is known about their validity

use crate::{
    angle::{AngleComponent, Component, DmsAngle, InvalidInput, ParseDmsError},
    coord::Coordinate,
    utils::non_blank,
};

/// The four text fields of an angle entered in Degree-Minute-Second form
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct DmsFields<'a> {
    /// Whole degrees
    pub degrees: &'a str,
    /// Arc minutes
    pub minutes: &'a str,
    /// Arc seconds
    pub seconds: &'a str,
    /// `N`, `S`, `E` or `W`
    pub hemisphere: &'a str,
}

impl<'a> DmsFields<'a> {
    /// Collect the fields in the usual order
    pub const fn new(
        degrees: &'a str,
        minutes: &'a str,
        seconds: &'a str,
        hemisphere: &'a str,
    ) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }

    /// Signed decimal degrees.
    ///
    /// # Errors
    /// Some of the numeric fields is blank, non-numeric or non-finite.
    pub fn to_decimal(&self) -> Result<f64, InvalidInput> {
        DmsAngle::from_fields(self.degrees, self.minutes, self.seconds, self.hemisphere)
            .map(DmsAngle::to_decimal)
    }
}

/// Coordinates as entered in one of the input modes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordinateInput<'a> {
    /// Two decimal-degree fields
    Decimal {
        /// Signed latitude text
        latitude: &'a str,
        /// Signed longitude text
        longitude: &'a str,
    },
    /// Separate degree, minute, second and hemisphere fields
    Dms {
        /// Latitude fields
        latitude: DmsFields<'a>,
        /// Longitude fields
        longitude: DmsFields<'a>,
    },
    /// Each angle written in a single line, like `21°25′21″N`
    Notation {
        /// Latitude text
        latitude: &'a str,
        /// Longitude text
        longitude: &'a str,
    },
}

impl CoordinateInput<'_> {
    /// Turn the raw values into a usable point, normalizing the longitude.
    ///
    /// ```
    /// # use qibla::{CoordinateInput, DmsFields};
    /// let input = CoordinateInput::Dms {
    ///     latitude: DmsFields::new("21", "25", "21", "N"),
    ///     longitude: DmsFields::new("39", "49", "34.32", "E"),
    /// };
    /// let point = input.resolve().unwrap();
    /// assert_eq!(point.to_string(), "(21.422500, 39.826200)");
    /// ```
    ///
    /// # Errors
    /// Some of the required values is missing or unusable.
    pub fn resolve(&self) -> Result<Coordinate, InvalidInput> {
        match *self {
            Self::Decimal {
                latitude,
                longitude,
            } => Coordinate::from_text(latitude, longitude),
            Self::Dms {
                latitude,
                longitude,
            } => Coordinate::new(latitude.to_decimal()?, longitude.to_decimal()?),
            Self::Notation {
                latitude,
                longitude,
            } => {
                let lat = notation(latitude, Component::Latitude)?;
                let lon = notation(longitude, Component::Longitude)?;
                Coordinate::new(lat, lon)
            }
        }
    }
}

fn notation(text: &str, component: Component) -> Result<f64, InvalidInput> {
    if non_blank(text).is_none() {
        return Err(InvalidInput::Empty(component));
    }

    match text.parse::<DmsAngle>() {
        Ok(angle) => Ok(angle.to_decimal()),
        Err(ParseDmsError::Input(err)) => Err(err),
        // signed decimals are not a notation but are still welcome
        Err(ParseDmsError::Notation) => text.component_value(component),
    }
}
