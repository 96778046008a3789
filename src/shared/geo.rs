use std::{
    cmp,
    fmt::Display,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

const LATITUDE_LIMIT: f64 = 90.0;
const LONGITUDE_LIMIT: f64 = 180.0;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("Latitude {0} is outside -90 < latitude < 90")]
    Latitude(f64),
    #[error("Longitude {0} is outside -180 < longitude < 180")]
    Longitude(f64),
}

/// Great-circle distance, stored in kilometers.
///
/// Equality and ordering compare the raw `f64` exactly, there is no tolerance.
/// Two distances computed along different paths may differ in the last bit;
/// callers that need a tolerance have to compare `as_kilometers` themselves.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Distance {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} km", self.0))
    }
}

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance)
    }

    /// Haversine distance between `a` and `b` on a sphere of radius
    /// [`EARTH_RADIUS_KM`].
    pub fn between(a: &Coordinate, b: &Coordinate) -> Self {
        let dist_lat = a.latitude - b.latitude;
        let dist_lon = a.longitude - b.longitude;
        let h = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(a.latitude)
                * f64::cos(b.latitude)
                * f64::powi(f64::sin(dist_lon / 2.0), 2);
        let central_angle = 2.0 * f64::asin(f64::sqrt(h));
        Self(central_angle * EARTH_RADIUS_KM)
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0
    }

    pub const fn as_meters(&self) -> f64 {
        self.0 * 1000.0
    }

    /// Total order over the magnitude, for sorting.
    pub fn total_cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A validated point on the globe, held in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}, {}",
            self.latitude_degrees(),
            self.longitude_degrees()
        ))
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(latitude, longitude)
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = CoordinateError;

    fn try_from([latitude, longitude]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(latitude, longitude)
    }
}

impl Coordinate {
    /// Both bounds are exclusive, so the poles and the antimeridian are rejected.
    /// NaN fails the range check as well.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(latitude > -LATITUDE_LIMIT && latitude < LATITUDE_LIMIT) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !(longitude > -LONGITUDE_LIMIT && longitude < LONGITUDE_LIMIT) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self {
            latitude: latitude.to_radians(),
            longitude: longitude.to_radians(),
        })
    }

    pub const fn latitude_radians(&self) -> f64 {
        self.latitude
    }

    pub const fn longitude_radians(&self) -> f64 {
        self.longitude
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_degrees()
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_degrees()
    }

    pub fn distance(&self, coord: &Self) -> Distance {
        Distance::between(self, coord)
    }
}

#[test]
fn distance_test() {
    let coord_a = Coordinate::new(48.85800943005911, 2.3514350059357927).unwrap();
    let coord_b = Coordinate::new(51.5052389927712, -0.12495407345099824).unwrap();
    let d = coord_a.distance(&coord_b);
    assert!((d.as_kilometers() - 343.1).abs() < 1.0);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_kilometers(1.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_kilometers(1.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn boundary_test() {
    assert_eq!(
        Coordinate::new(90.0, 0.0),
        Err(CoordinateError::Latitude(90.0))
    );
    assert_eq!(
        Coordinate::new(0.0, -180.0),
        Err(CoordinateError::Longitude(-180.0))
    );
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
}
