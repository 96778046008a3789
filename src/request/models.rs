use serde::{Deserialize, Serialize};

use super::{Error, FieldPolicy};
use crate::shared::geo::{Coordinate, CoordinateError};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMarker {
    pub name: Option<String>,
    pub position: Option<[f64; 2]>,
}

impl RawMarker {
    pub fn new(name: impl Into<String>, position: [f64; 2]) -> Self {
        Self {
            name: Some(name.into()),
            position: Some(position),
        }
    }

    /// Applies `policy` to the missing fields. The returned position is still
    /// unvalidated degrees.
    pub fn resolve(&self, policy: FieldPolicy, index: usize) -> Result<(String, [f64; 2]), Error> {
        let position = policy.position(self.position, index)?;
        let name = policy.name(self.name.as_deref(), index)?;
        Ok((name, position))
    }
}

/// A named candidate with a validated coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: String,
    pub coordinate: Coordinate,
}

impl Marker {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }

    pub fn from_degrees(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, CoordinateError> {
        Ok(Self::new(name, Coordinate::new(latitude, longitude)?))
    }
}
