//! Qibla direction primitives: the initial great-circle bearing
//! from an observer to the Kaaba, with the coordinate plumbing around it.
//!
//! ```
//! use qibla::{compute_bearing, convert_dms, label_for_bearing, normalize_longitude};
//!
//! let lat = convert_dms("40", "42", "46.08", "n").unwrap();
//! let lon = normalize_longitude(convert_dms(74, 0, 21.6, "W").unwrap());
//!
//! let bearing = compute_bearing(lat, lon).unwrap();
//! assert_eq!(format!("{bearing}"), "58.48°");
//! assert_eq!(label_for_bearing(bearing), "ENE");
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// the compass index is always in 0..16
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    convert_dms, AngleComponent, Component, DmsAngle, Hemisphere, InvalidInput, ParseDmsError,
};
pub use bearing::{compute_bearing, initial_bearing, Bearing, KAABA};
pub use compass::{label_for_bearing, CompassPoint};
pub use coord::{normalize_longitude, Coordinate};
pub use input::{CoordinateInput, DmsFields};
pub use location::{LocationError, LocationRequest};
pub use report::{QiblaReport, ReportStatus};

mod angle;
mod bearing;
mod compass;
mod coord;
mod input;
mod location;
mod report;
mod utils;
