//! Solar rise/set event generation across the mission's date span.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use geosar_config::TwilightConfig;
use geosar_core::phase::Phase;
use solar_positioning::{Horizon, spa, time::DeltaT, types::SunriseResult};

use crate::observer::Observer;

/// Whether the sun crossed the horizon upward or downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rise,
    Set,
}

/// A single horizon crossing, tagged with the twilight band it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEvent {
    pub phase: Phase,
    pub direction: Direction,
    pub instant: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum EventError {
    /// Polar day or night at the queried horizon. Out of scope for this
    /// tool; fail loudly rather than emit a wrong timeline.
    #[error("sun never crosses the {phase} horizon near {date} at this latitude")]
    NoRiseOrSet { phase: Phase, date: NaiveDate },
    #[error("solar position computation failed: {0}")]
    Spa(#[from] solar_positioning::Error),
}

/// Rise and set events bracketing local noon, for every mission day and
/// every horizon band.
///
/// Each day from `start` to `end` inclusive contributes eight events: the
/// most recent rising at or before 12:00 civil time in the configured zone,
/// and the next setting at or after it, for each of the four horizons.
/// Anchoring at local noon keeps the search unambiguous near midnight.
pub fn sun_events(
    observer: &Observer,
    start: NaiveDate,
    end: NaiveDate,
    config: &TwilightConfig,
) -> Result<Vec<SolarEvent>, EventError> {
    let mut events = Vec::new();
    let mut day = start;
    while day <= end {
        let anchor = local_noon(day, config.timezone);
        for (phase, horizon_deg) in config.horizon_bands() {
            let rise = previous_rising(observer, anchor, horizon_deg)?
                .ok_or(EventError::NoRiseOrSet { phase, date: day })?;
            let set = next_setting(observer, anchor, horizon_deg)?
                .ok_or(EventError::NoRiseOrSet { phase, date: day })?;
            events.push(SolarEvent {
                phase,
                direction: Direction::Rise,
                instant: rise,
            });
            events.push(SolarEvent {
                phase,
                direction: Direction::Set,
                instant: set,
            });
        }
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    Ok(events)
}

/// 12:00 wall-clock time of `day` in `tz`, as a UTC instant. Falls back to
/// 12:00 UTC if the wall-clock time does not exist (DST gap).
fn local_noon(day: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let noon = day.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default());
    match tz.from_local_datetime(&noon) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
            instant.with_timezone(&Utc)
        }
        LocalResult::None => Utc.from_utc_datetime(&noon),
    }
}

/// Most recent rising at or before `anchor`, searching at most one day back.
/// `None` means the sun never crosses this horizon (polar conditions).
fn previous_rising(
    observer: &Observer,
    anchor: DateTime<Utc>,
    horizon_deg: f64,
) -> Result<Option<DateTime<Utc>>, EventError> {
    for days_back in 0..=1 {
        match day_crossings(observer, anchor - Duration::days(days_back), horizon_deg)? {
            Some((rise, _)) if rise <= anchor => return Ok(Some(rise)),
            Some(_) => continue,
            None => return Ok(None),
        }
    }
    Ok(None)
}

/// Next setting at or after `anchor`, searching at most one day forward.
fn next_setting(
    observer: &Observer,
    anchor: DateTime<Utc>,
    horizon_deg: f64,
) -> Result<Option<DateTime<Utc>>, EventError> {
    for days_forward in 0..=1 {
        match day_crossings(observer, anchor + Duration::days(days_forward), horizon_deg)? {
            Some((_, set)) if set >= anchor => return Ok(Some(set)),
            Some(_) => continue,
            None => return Ok(None),
        }
    }
    Ok(None)
}

/// The (rise, set) pair for the UTC day of `at`, or `None` under polar
/// day/night. Refraction and position math live in the SPA crate; this is
/// purely the search policy.
fn day_crossings(
    observer: &Observer,
    at: DateTime<Utc>,
    horizon_deg: f64,
) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>, EventError> {
    let delta_t = DeltaT::estimate_from_date(at.year(), at.month())?;
    let result = spa::sunrise_sunset_for_horizon(
        at,
        observer.latitude,
        observer.longitude,
        delta_t,
        Horizon::Custom(horizon_deg),
    )?;
    match result {
        SunriseResult::RegularDay {
            sunrise, sunset, ..
        } => Ok(Some((sunrise, sunset))),
        SunriseResult::AllDay { .. } | SunriseResult::AllNight { .. } => Ok(None),
    }
}
