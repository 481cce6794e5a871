//! Angles given as degrees, minutes and seconds with a hemisphere letter

use crate::utils::non_blank;

pub(crate) mod consts;
mod dms;
mod errors;

pub use dms::{DmsAngle, Hemisphere};
pub use errors::{Component, InvalidInput, ParseDmsError};

/// A part of an angle that can arrive either as a number or as a raw text field.
pub trait AngleComponent {
    /// Produce the finite number held by the value.
    ///
    /// # Errors
    /// The text is blank or not a number, or the value is NaN or infinite.
    fn component_value(&self, component: Component) -> Result<f64, InvalidInput>;
}

impl AngleComponent for str {
    fn component_value(&self, component: Component) -> Result<f64, InvalidInput> {
        let text = non_blank(self).ok_or(InvalidInput::Empty(component))?;
        let value: f64 = text
            .parse()
            .map_err(|err| InvalidInput::Number(component, err))?;
        value.component_value(component)
    }
}

impl AngleComponent for String {
    fn component_value(&self, component: Component) -> Result<f64, InvalidInput> {
        self.as_str().component_value(component)
    }
}

impl<T: AngleComponent + ?Sized> AngleComponent for &T {
    fn component_value(&self, component: Component) -> Result<f64, InvalidInput> {
        (**self).component_value(component)
    }
}

impl AngleComponent for f64 {
    fn component_value(&self, component: Component) -> Result<f64, InvalidInput> {
        if self.is_finite() {
            Ok(*self)
        } else {
            Err(InvalidInput::NotFinite(component))
        }
    }
}

impl AngleComponent for f32 {
    fn component_value(&self, component: Component) -> Result<f64, InvalidInput> {
        f64::from(*self).component_value(component)
    }
}

macro_rules! impl_integer_component {
    ($($t:ty),+) => {
        $(
            impl AngleComponent for $t {
                fn component_value(&self, _component: Component) -> Result<f64, InvalidInput> {
                    Ok(f64::from(*self))
                }
            }
        )+
    };
}

impl_integer_component!(i8, i16, i32, u8, u16, u32);

/// Convert degrees, minutes and seconds into signed decimal degrees.
///
/// The sign of `degrees` is ignored, only the `hemisphere` letter
/// (`S` or `W`, case-insensitive) makes the result negative.
/// Any other hemisphere text, including the empty one, keeps it positive.
///
/// ```
/// # use qibla::convert_dms;
/// let lat = convert_dms("21", "25", "21", "N").unwrap();
/// assert!((lat - 21.4225).abs() < 1e-9);
///
/// assert!(convert_dms("21", "", "21", "N").is_err());
/// ```
///
/// # Errors
/// Any of the magnitude parts is blank, not a number or not finite.
pub fn convert_dms<D, M, S>(
    degrees: D,
    minutes: M,
    seconds: S,
    hemisphere: &str,
) -> Result<f64, InvalidInput>
where
    D: AngleComponent,
    M: AngleComponent,
    S: AngleComponent,
{
    let angle =
        DmsAngle::from_components(degrees, minutes, seconds, Hemisphere::from_field(hemisphere))?;
    angle.to_decimal().component_value(Component::Degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn kaaba_latitude() {
        assert_close(convert_dms(21, 25, 21, "N").unwrap(), 21.4225);
    }

    #[test]
    fn kaaba_longitude() {
        let lon = convert_dms(39, 49, 34.32, "E").unwrap();
        assert_close(lon, 39.8262);
        assert!((lon - 39.8262).abs() < 1e-9);
    }

    #[test]
    fn southern_and_western_are_negative() {
        assert_close(convert_dms("33", "52", "7.68", "S").unwrap(), -33.8688);
        assert_close(convert_dms("74", "0", "21.6", "W").unwrap(), -74.006);
        assert_close(convert_dms("74", "0", "21.6", "w").unwrap(), -74.006);
        assert_close(convert_dms("33", "52", "7.68", "s").unwrap(), -33.8688);
    }

    #[test]
    fn missing_hemisphere_is_positive() {
        assert_close(convert_dms("10", "30", "0", "").unwrap(), 10.5);
        assert_close(convert_dms("10", "30", "0", "x").unwrap(), 10.5);
        assert_close(convert_dms("10", "30", "0", "South").unwrap(), 10.5);
        assert_close(convert_dms("10", "30", "0", "E").unwrap(), 10.5);
    }

    #[test]
    fn degrees_sign_is_ignored() {
        assert_close(convert_dms(-10, 30, 0, "N").unwrap(), 10.5);
        assert_close(convert_dms("-10", "30", "0", "S").unwrap(), -10.5);
    }

    #[test]
    fn out_of_range_minutes_are_accepted() {
        assert_close(convert_dms(0, 90, 0, "E").unwrap(), 1.5);
        assert_close(convert_dms(0, 0, 7200, "E").unwrap(), 2.0);
    }

    #[test]
    fn whitespace_around_numbers() {
        assert_close(convert_dms(" 21 ", "\t25", "21\n", " n ").unwrap(), 21.4225);
    }

    #[test]
    fn blank_field_is_invalid() {
        assert_eq!(
            convert_dms("21", "25", "  ", "N"),
            Err(InvalidInput::Empty(Component::Seconds))
        );
        assert_eq!(
            convert_dms("", "25", "21", "N"),
            Err(InvalidInput::Empty(Component::Degrees))
        );
    }

    #[test]
    fn garbage_is_invalid() {
        let err = convert_dms("21", "abc", "21", "N").unwrap_err();
        dbg!(&err);
        assert!(matches!(err, InvalidInput::Number(Component::Minutes, _)));
    }

    #[test]
    fn non_finite_is_invalid() {
        assert_eq!(
            convert_dms("NaN", "0", "0", "N"),
            Err(InvalidInput::NotFinite(Component::Degrees))
        );
        assert_eq!(
            convert_dms(1.0, f64::INFINITY, 0.0, "N"),
            Err(InvalidInput::NotFinite(Component::Minutes))
        );
        assert_eq!(
            convert_dms(1.0, 0.0, "-inf", "N"),
            Err(InvalidInput::NotFinite(Component::Seconds))
        );
    }

    #[test]
    fn owned_and_borrowed_text() {
        let deg = String::from("21");
        let min = "25".to_string();
        assert_close(convert_dms(&deg, min, 21_u8, "N").unwrap(), 21.4225);
    }

    #[test]
    fn single_precision() {
        assert_close(convert_dms(21.0_f32, 25.0_f32, 21.0_f32, "N").unwrap(), 21.4225);
    }
}
