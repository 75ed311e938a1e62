//! Configuration models and loaders for the geosar analysis.
//!
//! Settings form an explicit value passed to the event generator and
//! classifier; nothing reads process-wide state. Defaults match the
//! conventional twilight horizon angles and the US-East operating zone.

use std::fs::File;
use std::path::Path;

use chrono_tz::Tz;
use serde::Deserialize;
use thiserror::Error;

use geosar_core::phase::Phase;

/// Display time zone used for the local-time projection of each record.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Horizon angles (degrees of solar elevation) defining the twilight bands.
pub const ASTRONOMICAL_HORIZON_DEG: f64 = -18.0;
pub const NAUTICAL_HORIZON_DEG: f64 = -12.0;
pub const CIVIL_HORIZON_DEG: f64 = -6.0;
pub const DAYTIME_HORIZON_DEG: f64 = 0.0;

/// Settings consumed by the event generator and the classifier.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TwilightConfig {
    /// IANA time zone for the display projection (phase logic stays in UTC).
    pub timezone: Tz,
    pub astronomical_horizon_deg: f64,
    pub nautical_horizon_deg: f64,
    pub civil_horizon_deg: f64,
    pub daytime_horizon_deg: f64,
}

impl Default for TwilightConfig {
    fn default() -> Self {
        TwilightConfig {
            timezone: DEFAULT_TIMEZONE,
            astronomical_horizon_deg: ASTRONOMICAL_HORIZON_DEG,
            nautical_horizon_deg: NAUTICAL_HORIZON_DEG,
            civil_horizon_deg: CIVIL_HORIZON_DEG,
            daytime_horizon_deg: DAYTIME_HORIZON_DEG,
        }
    }
}

impl TwilightConfig {
    /// The four horizon bands, dawn-first, each paired with the phase that
    /// begins at the corresponding rising.
    pub fn horizon_bands(&self) -> [(Phase, f64); 4] {
        [
            (Phase::AstronomicalTwilight, self.astronomical_horizon_deg),
            (Phase::NauticalTwilight, self.nautical_horizon_deg),
            (Phase::CivilTwilight, self.civil_horizon_deg),
            (Phase::Daytime, self.daytime_horizon_deg),
        ]
    }
}

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a configuration file, dispatching on extension (`.toml` vs YAML).
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TwilightConfig, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Display colors for the six phases, consumed by downstream reporting.
/// Not used by the analysis itself.
pub mod colors {
    use geosar_core::phase::Phase;

    pub const NIGHT: &str = "#01084f";
    pub const ASTRONOMICAL: &str = "#391954";
    pub const NAUTICAL: &str = "#631e50";
    pub const CIVIL: &str = "#a73c5a";
    pub const DAYTIME: &str = "#ff7954";
    pub const PLANNING: &str = "#aaaaaa";

    /// Color associated with a phase in downstream maps and charts.
    pub fn for_phase(phase: Phase) -> &'static str {
        match phase {
            Phase::Night => NIGHT,
            Phase::AstronomicalTwilight => ASTRONOMICAL,
            Phase::NauticalTwilight => NAUTICAL,
            Phase::CivilTwilight => CIVIL,
            Phase::Daytime => DAYTIME,
            Phase::Planning => PLANNING,
        }
    }
}
