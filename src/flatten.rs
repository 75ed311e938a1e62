//! Flattening of the track/segment/point hierarchy into uniform records.

use chrono::{DateTime, Utc};

use geosar_track::Mission;

/// One flat record per raw track point.
///
/// `track_id` is assigned sequentially in traversal order and never reused,
/// so two tracks sharing a name stay distinct. Untimestamped points are
/// kept as explicit `None` rows; they mark planned legs and must reach the
/// classifier rather than be dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatPoint {
    pub track_id: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub utc: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
}

/// Flatten every track into per-point records, in traversal order.
pub fn flatten(mission: &Mission) -> Vec<FlatPoint> {
    let mut records = Vec::new();
    for (track_id, track) in mission.tracks.iter().enumerate() {
        for segment in &track.segments {
            for point in &segment.points {
                records.push(FlatPoint {
                    track_id,
                    latitude: point.latitude,
                    longitude: point.longitude,
                    utc: point.utc,
                    name: track.name.clone(),
                    description: track.description.clone(),
                });
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use geosar_track::{RawPoint, Segment, Track};

    use super::*;

    fn track(name: &str, points: Vec<RawPoint>) -> Track {
        Track {
            name: name.to_string(),
            description: String::new(),
            segments: vec![Segment { points }],
        }
    }

    fn point(latitude: f64) -> RawPoint {
        RawPoint {
            latitude,
            longitude: -77.4,
            utc: None,
        }
    }

    #[test]
    fn ids_are_sequential_even_when_names_repeat() {
        let mission = Mission {
            tracks: vec![
                track("Sweep", vec![point(37.50)]),
                track("Sweep", vec![point(37.51), point(37.52)]),
            ],
            waypoints: Vec::new(),
        };
        let records = flatten(&mission);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].track_id, 0);
        assert_eq!(records[1].track_id, 1);
        assert_eq!(records[2].track_id, 1);
        assert!(records.iter().all(|r| r.name == "Sweep"));
    }

    #[test]
    fn untimestamped_points_survive_flattening() {
        let mission = Mission {
            tracks: vec![track("Planning leg", vec![point(37.50), point(37.51)])],
            waypoints: Vec::new(),
        };
        let records = flatten(&mission);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.utc.is_none()));
    }
}
