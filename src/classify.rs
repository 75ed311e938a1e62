//! Phase assignment for flattened records and per-track summaries.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use geosar_core::phase::Phase;

use crate::flatten::FlatPoint;
use crate::timeline::PhaseTimeline;

/// A classified track point with its derived time projections.
///
/// `utc_date`/`utc_time` and the local `date`/`time` columns are read-only
/// display projections; phase logic uses only the UTC instant.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    pub track_id: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub utc: Option<DateTime<Utc>>,
    pub utc_date: Option<NaiveDate>,
    pub utc_time: Option<NaiveTime>,
    pub local: Option<DateTime<Tz>>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub phase: Phase,
    pub start_phase: Phase,
    pub end_phase: Phase,
    pub name: String,
    pub description: String,
}

/// First and last phase observed on one track, in original record order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSummary {
    pub track_id: usize,
    pub name: String,
    pub description: String,
    pub start_phase: Phase,
    pub end_phase: Phase,
}

/// Assign a phase to every record and derive per-track summaries.
///
/// Untimestamped records stay `Planning`; timestamped records take the
/// phase of the latest timeline breakpoint at or before their instant. The
/// summary uses the first and last record per track in original order, not
/// time-sorted order, since untimed points can legitimately lead a track.
/// No records are dropped.
pub fn classify(
    points: Vec<FlatPoint>,
    timeline: &PhaseTimeline,
    timezone: Tz,
) -> (Vec<PointRecord>, Vec<TrackSummary>) {
    let mut records: Vec<PointRecord> = points
        .into_iter()
        .map(|point| {
            let phase = match point.utc {
                Some(instant) => timeline.phase_at(instant),
                None => Phase::Planning,
            };
            let local = point.utc.map(|instant| instant.with_timezone(&timezone));
            PointRecord {
                track_id: point.track_id,
                latitude: point.latitude,
                longitude: point.longitude,
                utc: point.utc,
                utc_date: point.utc.map(|instant| instant.date_naive()),
                utc_time: point.utc.map(|instant| instant.time()),
                local,
                date: local.map(|instant| instant.date_naive()),
                time: local.map(|instant| instant.time()),
                phase,
                start_phase: phase,
                end_phase: phase,
                name: point.name,
                description: point.description,
            }
        })
        .collect();

    let mut summaries: Vec<TrackSummary> = Vec::new();
    for record in &records {
        match summaries.iter_mut().find(|s| s.track_id == record.track_id) {
            Some(summary) => summary.end_phase = record.phase,
            None => summaries.push(TrackSummary {
                track_id: record.track_id,
                name: record.name.clone(),
                description: record.description.clone(),
                start_phase: record.phase,
                end_phase: record.phase,
            }),
        }
    }

    for record in &mut records {
        if let Some(summary) = summaries.iter().find(|s| s.track_id == record.track_id) {
            record.start_phase = summary.start_phase;
            record.end_phase = summary.end_phase;
        }
    }

    (records, summaries)
}
