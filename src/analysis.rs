//! End-to-end orchestration: mission in, classified table out.

use chrono::SecondsFormat;
use thiserror::Error;

use geosar_config::TwilightConfig;
use geosar_export::table::Row;
use geosar_track::Mission;

use crate::classify::{self, PointRecord, TrackSummary};
use crate::events::{self, EventError};
use crate::flatten;
use crate::observer::{self, Observer, ObserverError};
use crate::timeline::PhaseTimeline;

/// Result of a full mission analysis.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub observer: Observer,
    pub timeline: PhaseTimeline,
    pub records: Vec<PointRecord>,
    pub summaries: Vec<TrackSummary>,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Observer(#[from] ObserverError),
    #[error(transparent)]
    Events(#[from] EventError),
}

/// Run the full pipeline over a parsed mission.
///
/// Derives the observer from the median track position, generates solar
/// events spanning the mission's UTC date range, builds the phase timeline,
/// then flattens and classifies every point. A mission with no timestamped
/// points has no date range to query and is rejected as insufficient data.
pub fn analyze(mission: &Mission, config: &TwilightConfig) -> Result<Analysis, AnalysisError> {
    let (earliest, latest) = mission
        .time_bounds()
        .ok_or(ObserverError::InsufficientData)?;
    let observer = observer::locate(&mission.positions(), earliest)?;
    let events = events::sun_events(
        &observer,
        earliest.date_naive(),
        latest.date_naive(),
        config,
    )?;
    let timeline = PhaseTimeline::from_events(events);
    let points = flatten::flatten(mission);
    let (records, summaries) = classify::classify(points, &timeline, config.timezone);
    Ok(Analysis {
        observer,
        timeline,
        records,
        summaries,
    })
}

impl Analysis {
    /// Project the classified records onto the exported column contract.
    pub fn export_rows(&self) -> Vec<Row> {
        self.records
            .iter()
            .map(|record| Row {
                track_id: record.track_id,
                latitude: record.latitude,
                longitude: record.longitude,
                utc: record
                    .utc
                    .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
                utc_date: record.utc_date.map(|d| d.to_string()),
                utc_time: record.utc_time.map(|t| t.format("%H:%M:%S").to_string()),
                local: record
                    .local
                    .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, false)),
                date: record.date.map(|d| d.to_string()),
                time: record.time.map(|t| t.format("%H:%M:%S").to_string()),
                phase: record.phase.label().to_string(),
                start_phase: record.start_phase.label().to_string(),
                end_phase: record.end_phase.label().to_string(),
                name: record.name.clone(),
                description: record.description.clone(),
            })
            .collect()
    }
}
