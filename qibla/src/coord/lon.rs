use num_traits::{cast, Float};

use crate::angle::consts::{FULL_TURN_DEG, HALF_TURN_DEG};

fn turn<F: Float>(degrees: u16) -> F {
    cast(degrees).expect("A turn in degrees fits into any float")
}

/// Wrap the longitude into the canonical range by whole turns.
///
/// Values above 180° are brought down into `(-180, 180]`,
/// values below -180° are brought up into `[-180, 180)`,
/// everything else (including -180° itself) is left untouched.
/// NaN and infinities are returned unchanged.
///
/// The result is the same as repeatedly adding or subtracting 360°,
/// but it is computed from the exact remainder,
/// so it terminates for any magnitude.
///
/// ```
/// # use qibla::normalize_longitude;
/// assert_eq!(normalize_longitude(190.0), -170.0);
/// assert_eq!(normalize_longitude(180.0), 180.0);
/// assert_eq!(normalize_longitude(-180.0), -180.0);
/// assert_eq!(normalize_longitude(-540.0_f32), -180.0);
/// ```
pub fn normalize_longitude<F: Float>(lon: F) -> F {
    if !lon.is_finite() {
        return lon;
    }

    let full: F = turn(FULL_TURN_DEG);
    let half: F = turn(HALF_TURN_DEG);

    if lon > half {
        // the remainder of the positive value is in [0, 360)
        let rem = lon % full;
        if rem > half {
            rem - full
        } else {
            rem
        }
    } else if lon < -half {
        // the remainder of the negative value is in (-360, -0]
        let rem = lon % full;
        if rem < -half {
            rem + full
        } else {
            // -0 becomes +0 as the repeated addition would give
            rem + F::zero()
        }
    } else {
        lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The literal algorithm for moderate values
    fn by_steps(mut lon: f64) -> f64 {
        while lon > 180.0 {
            lon -= 360.0;
        }
        while lon < -180.0 {
            lon += 360.0;
        }
        lon
    }

    #[test]
    fn canonical_values_are_kept() {
        for lon in [0.0, -0.0, 1.5, -74.006, 39.8262, 179.999_999, -179.999_999, 180.0] {
            assert_eq!(normalize_longitude(lon), lon);
        }
    }

    #[test]
    fn minus_half_turn_is_kept() {
        assert_eq!(normalize_longitude(-180.0), -180.0);
    }

    #[test]
    fn eastern_overflow() {
        assert_eq!(normalize_longitude(181.0), -179.0);
        assert_eq!(normalize_longitude(360.0), 0.0);
        assert_eq!(normalize_longitude(540.0), 180.0);
        assert_eq!(normalize_longitude(900.0), 180.0);
        assert_eq!(normalize_longitude(719.5), -0.5);
    }

    #[test]
    fn western_overflow() {
        assert_eq!(normalize_longitude(-181.0), 179.0);
        assert_eq!(normalize_longitude(-540.0), -180.0);
        assert_eq!(normalize_longitude(-900.0), -180.0);
        assert_eq!(normalize_longitude(-719.5), 0.5);
    }

    #[test]
    fn no_negative_zero() {
        let lon = normalize_longitude(-720.0);
        assert_eq!(lon, 0.0);
        assert!(lon.is_sign_positive());

        let lon = normalize_longitude(720.0);
        assert!(lon.is_sign_positive());
    }

    #[test]
    fn same_as_stepping() {
        let mut lon = -2000.0;
        while lon <= 2000.0 {
            let expected = by_steps(lon);
            let actual = normalize_longitude(lon);
            assert_eq!(actual, expected, "normalizing {lon}");
            assert_eq!(actual.is_sign_negative(), expected.is_sign_negative());
            lon += 0.37;
        }
    }

    #[test]
    fn idempotent() {
        for lon in [-1e6, -12_345.678, -540.0, -361.0, 181.0, 359.0, 1e6] {
            let once = normalize_longitude(lon);
            assert!(once >= -180.0);
            assert!(once <= 180.0);
            assert_eq!(normalize_longitude(once), once);
        }
    }

    #[test]
    fn huge_values_terminate() {
        let lon = normalize_longitude(1e300);
        assert!((-180.0..=180.0).contains(&lon));

        let lon = normalize_longitude(-f64::MAX);
        assert!((-180.0..=180.0).contains(&lon));
    }

    #[test]
    fn non_finite_pass_through() {
        assert!(normalize_longitude(f64::NAN).is_nan());
        assert_eq!(normalize_longitude(f64::INFINITY), f64::INFINITY);
        assert_eq!(normalize_longitude(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn single_precision() {
        assert_eq!(normalize_longitude(270.0_f32), -90.0);
        assert!(normalize_longitude(f32::NAN).is_nan());
    }
}
