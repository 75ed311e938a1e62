//! GPX import and the mission facade consumed by the analysis engine.
//!
//! Parsing is delegated to the `gpx` crate; this module exposes only what
//! the engine needs: tracks with their segments and points, the top-level
//! named waypoints, and the overall time bounds. Nothing else from the
//! parsed document leaks through.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;

use geosar_core::geo::GeoPoint;

/// Errors raised at the import boundary. Malformed input fails fast here;
/// nothing downstream sees a partially parsed mission.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("failed to read track file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse GPX data: {0}")]
    Gpx(#[from] gpx::errors::GpxError),
}

/// A single recorded position, timestamp optional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub utc: Option<DateTime<Utc>>,
}

/// A contiguous run of points within a track.
#[derive(Debug, Clone, Default)]
pub struct Segment {
    pub points: Vec<RawPoint>,
}

/// One continuous recorded path with its metadata.
#[derive(Debug, Clone)]
pub struct Track {
    pub name: String,
    pub description: String,
    pub segments: Vec<Segment>,
}

/// A named top-level waypoint, used for bounding checks only.
#[derive(Debug, Clone)]
pub struct Waypoint {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The parsed mission: everything the twilight engine consumes.
#[derive(Debug, Clone, Default)]
pub struct Mission {
    pub tracks: Vec<Track>,
    pub waypoints: Vec<Waypoint>,
}

impl Mission {
    /// Read and parse a GPX file from disk.
    pub fn from_path(path: &Path) -> Result<Self, TrackError> {
        let file = File::open(path)?;
        Mission::from_reader(BufReader::new(file))
    }

    /// Parse GPX data from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TrackError> {
        let data = gpx::read(reader)?;

        let waypoints = data
            .waypoints
            .into_iter()
            .map(|wpt| {
                let position = wpt.point();
                Waypoint {
                    name: wpt.name.unwrap_or_default(),
                    latitude: position.y(),
                    longitude: position.x(),
                }
            })
            .collect();

        let tracks = data
            .tracks
            .into_iter()
            .map(|track| Track {
                name: track.name.unwrap_or_default(),
                description: track.description.unwrap_or_default(),
                segments: track
                    .segments
                    .into_iter()
                    .map(|segment| Segment {
                        points: segment
                            .points
                            .into_iter()
                            .map(|point| {
                                let utc = point_time(&point);
                                let position = point.point();
                                RawPoint {
                                    latitude: position.y(),
                                    longitude: position.x(),
                                    utc,
                                }
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Mission {
            tracks,
            waypoints,
        })
    }

    /// Every track-point position across the mission, in traversal order.
    pub fn positions(&self) -> Vec<GeoPoint> {
        self.tracks
            .iter()
            .flat_map(|track| track.segments.iter())
            .flat_map(|segment| segment.points.iter())
            .map(|point| GeoPoint {
                latitude: point.latitude,
                longitude: point.longitude,
            })
            .collect()
    }

    /// Earliest and latest timestamp across all points, if any are timed.
    pub fn time_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let mut bounds: Option<(DateTime<Utc>, DateTime<Utc>)> = None;
        for track in &self.tracks {
            for segment in &track.segments {
                for point in &segment.points {
                    if let Some(utc) = point.utc {
                        bounds = Some(match bounds {
                            Some((start, end)) => (start.min(utc), end.max(utc)),
                            None => (utc, utc),
                        });
                    }
                }
            }
        }
        bounds
    }
}

/// Parse an RFC 3339 timestamp into UTC, coercing failures to `None`.
///
/// Absent or malformed per-point times are significant: they mark planned
/// legs without a live GPS fix and must survive to classification rather
/// than raise an error.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn point_time(point: &gpx::Waypoint) -> Option<DateTime<Utc>> {
    let iso = point.time.as_ref()?.format().ok()?;
    parse_timestamp(&iso)
}
