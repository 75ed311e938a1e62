//! Fixed observation site derived from the mission's track geometry.

use chrono::{DateTime, Utc};
use thiserror::Error;

use geosar_core::geo::{GeoPoint, median_position};

/// The single reference location used for every solar event query.
///
/// Coordinates are the coordinate-wise median of all track points, so a
/// stray track recorded before GPS lock stabilized, or a waypoint far from
/// the area of operations, cannot drag the site off the search area. The
/// value is immutable: per-query horizon and date are passed explicitly to
/// the event generator, so one observer can be shared freely across
/// sequential or parallel queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub latitude: f64,
    pub longitude: f64,
    /// Mission reference epoch: the earliest timestamp across all points.
    pub reference: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ObserverError {
    #[error("no track points with valid coordinates; cannot derive an observer location")]
    InsufficientData,
}

/// Derive the mission observer from the full point set.
pub fn locate(
    positions: &[GeoPoint],
    reference: DateTime<Utc>,
) -> Result<Observer, ObserverError> {
    let site = median_position(positions).ok_or(ObserverError::InsufficientData)?;
    Ok(Observer {
        latitude: site.latitude,
        longitude: site.longitude,
        reference,
    })
}
