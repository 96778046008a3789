pub mod finder;
pub mod request;
pub mod shared;

pub mod prelude {
    pub use crate::finder::{Error, Finder, nearest, solve};
    pub use crate::request::{Config, FieldPolicy, Marker, RawMarker, Request};
    pub use crate::shared::geo::{Coordinate, CoordinateError, Distance, EARTH_RADIUS_KM};
}
