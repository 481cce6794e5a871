pub use self::{lon::normalize_longitude, point::Coordinate};

mod lon;
mod point;
