use thiserror::Error;
use tracing::debug;

use crate::{
    request::{self, Config, Marker, Request},
    shared::geo::{Coordinate, CoordinateError, Distance},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),
    #[error("Incorrect markers amount: {count}")]
    InvalidInput { count: usize },
    #[error("Malformed request: {0}")]
    Request(#[from] request::Error),
}

/// Scans `markers` for the one closest to `reference`.
/// On equal distances the earlier marker is kept.
pub fn nearest<'a>(
    reference: &Coordinate,
    markers: &'a [Marker],
) -> Option<(&'a Marker, Distance)> {
    let mut best: Option<(&Marker, Distance)> = None;
    for marker in markers {
        let distance = reference.distance(&marker.coordinate);
        if best.is_none_or(|(_, current)| distance < current) {
            best = Some((marker, distance));
        }
    }
    best
}

/// Solves `request` with the default [`Config`].
pub fn solve(request: &Request) -> Result<String, Error> {
    Finder::default().solve(request)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Finder {
    config: Config,
}

impl Finder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the name of the marker nearest to the request position.
    ///
    /// The reference coordinate is validated first, then the marker count,
    /// both before any distance is computed. The first invalid coordinate
    /// aborts the whole scan.
    pub fn solve(&self, request: &Request) -> Result<String, Error> {
        let reference: Coordinate = request
            .reference_position(self.config.policy)?
            .try_into()?;

        let count = request.marker_count();
        if !self.config.accepts(count) {
            return Err(Error::InvalidInput { count });
        }
        debug!("Searching {count} markers around {reference}");

        let markers = request
            .markers()
            .iter()
            .enumerate()
            .map(|(index, raw)| -> Result<Marker, Error> {
                let (name, position) = raw.resolve(self.config.policy, index)?;
                Ok(Marker::new(name, Coordinate::try_from(position)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Only empty when the config admits zero markers.
        let Some((marker, distance)) = nearest(&reference, &markers) else {
            return Ok(String::new());
        };
        debug!("Nearest marker is {:?} at {distance}", marker.name);
        Ok(marker.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_keeps_first_on_tie() {
        let reference = Coordinate::new(0.0, 0.0).unwrap();
        let markers = vec![
            Marker::from_degrees("east", 0.0, 10.0).unwrap(),
            Marker::from_degrees("west", 0.0, -10.0).unwrap(),
        ];
        let (marker, _) = nearest(&reference, &markers).unwrap();
        assert_eq!(marker.name, "east");
    }

    #[test]
    fn nearest_of_nothing() {
        let reference = Coordinate::new(0.0, 0.0).unwrap();
        assert!(nearest(&reference, &[]).is_none());
    }

    #[test]
    fn zero_markers_allowed_by_config() {
        let config = Config {
            min_markers: 0,
            ..Default::default()
        };
        let request = Request::new([0.0, 0.0]);
        assert_eq!(Finder::new(config).solve(&request), Ok(String::new()));
    }
}
