use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

mod config;
pub mod models;
pub use config::*;
pub use models::*;

pub(crate) const DEFAULT_POSITION: [f64; 2] = [0.0, 0.0];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Marker {index} is missing field {field}")]
    MissingField { index: usize, field: &'static str },
    #[error("Request is missing field {0}")]
    MissingRequestField(&'static str),
}

/// What to do with a record that lacks `name` or `position`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldPolicy {
    /// Fill in `[0, 0]` and `""`.
    #[default]
    Permissive,
    /// Reject the request.
    Strict,
}

impl FieldPolicy {
    pub fn position(&self, position: Option<[f64; 2]>, index: usize) -> Result<[f64; 2], Error> {
        match (self, position) {
            (_, Some(position)) => Ok(position),
            (FieldPolicy::Permissive, None) => {
                warn!("Marker {index} has no position, using {DEFAULT_POSITION:?}");
                Ok(DEFAULT_POSITION)
            }
            (FieldPolicy::Strict, None) => Err(Error::MissingField {
                index,
                field: "position",
            }),
        }
    }

    pub fn name(&self, name: Option<&str>, index: usize) -> Result<String, Error> {
        match (self, name) {
            (_, Some(name)) => Ok(name.to_string()),
            (FieldPolicy::Permissive, None) => {
                warn!("Marker {index} has no name, using an empty name");
                Ok(String::new())
            }
            (FieldPolicy::Strict, None) => Err(Error::MissingField {
                index,
                field: "name",
            }),
        }
    }
}

/// Incoming request as it arrives on the wire, every field optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub position: Option<[f64; 2]>,
    pub markers: Option<Vec<RawMarker>>,
}

impl Request {
    pub fn new(position: [f64; 2]) -> Self {
        Self {
            position: Some(position),
            markers: Some(Vec::new()),
        }
    }

    pub fn with_marker(mut self, name: impl Into<String>, position: [f64; 2]) -> Self {
        self.markers
            .get_or_insert_with(Vec::new)
            .push(RawMarker::new(name, position));
        self
    }

    /// Missing `markers` counts as an empty list.
    pub fn markers(&self) -> &[RawMarker] {
        self.markers.as_deref().unwrap_or_default()
    }

    pub fn marker_count(&self) -> usize {
        self.markers().len()
    }

    pub fn reference_position(&self, policy: FieldPolicy) -> Result<[f64; 2], Error> {
        match (policy, self.position) {
            (_, Some(position)) => Ok(position),
            (FieldPolicy::Permissive, None) => {
                warn!("Request has no position, using {DEFAULT_POSITION:?}");
                Ok(DEFAULT_POSITION)
            }
            (FieldPolicy::Strict, None) => Err(Error::MissingRequestField("position")),
        }
    }
}
