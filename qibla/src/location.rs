//! What is expected from (and reported back by) a device location service.
//!
//! The service itself lives outside of this crate: it is asked once with
//! the [`LocationRequest`] options and answers either with a fix
//! (see [`QiblaReport::from_fix`](crate::QiblaReport::from_fix))
//! or with a [`LocationError`].

use std::{error::Error, fmt, time::Duration};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for a single position request
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LocationRequest {
    /// Prefer the satellite fix over the network guess
    pub high_accuracy: bool,
    /// Give up waiting for the fix after this time
    pub timeout: Duration,
    /// Accept a cached fix not older than this
    pub maximum_age: Duration,
}

impl LocationRequest {
    const TIMEOUT: Duration = Duration::from_secs(12);
    const MAXIMUM_AGE: Duration = Duration::from_secs(15);
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Self::TIMEOUT,
            maximum_age: Self::MAXIMUM_AGE,
        }
    }
}

/// Why the device position is not available
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LocationError {
    /// There is no location service at all
    Unsupported,
    /// The user has not allowed to share the position
    PermissionDenied,
    /// The position cannot be determined right now
    Unavailable,
    /// No fix in the time given by [`LocationRequest::timeout`]
    Timeout,
    /// Any other failure
    Unknown,
}

impl LocationError {
    /// Interpret the numeric error code of the W3C Geolocation API.
    /// <https://www.w3.org/TR/geolocation/#position_error_interface>
    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::Unavailable,
            3 => Self::Timeout,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Unsupported => "Geolocation is not supported on this device/browser.",
            Self::PermissionDenied => {
                "Location permission denied. Enable it in the device location settings."
            }
            Self::Unavailable => "Location unavailable. Try moving to a clearer area.",
            Self::Timeout => "Location request timed out. Try again.",
            Self::Unknown => "Could not get location.",
        };

        write!(f, "{msg}")
    }
}

impl Error for LocationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request() {
        let request = LocationRequest::default();
        assert!(request.high_accuracy);
        assert_eq!(request.timeout, Duration::from_millis(12_000));
        assert_eq!(request.maximum_age, Duration::from_millis(15_000));
    }

    #[test]
    fn codes() {
        assert_eq!(LocationError::from_code(1), LocationError::PermissionDenied);
        assert_eq!(LocationError::from_code(2), LocationError::Unavailable);
        assert_eq!(LocationError::from_code(3), LocationError::Timeout);
        assert_eq!(LocationError::from_code(0), LocationError::Unknown);
        assert_eq!(LocationError::from_code(42), LocationError::Unknown);
    }

    #[test]
    fn messages() {
        assert_eq!(
            LocationError::Timeout.to_string(),
            "Location request timed out. Try again."
        );
        assert_eq!(LocationError::Unknown.to_string(), "Could not get location.");
    }
}
