//! The labeled phase timeline built from raw rise/set events.

use chrono::{DateTime, Utc};

use geosar_core::phase::Phase;

use crate::events::{Direction, SolarEvent};

/// A single phase-transition instant: at `instant`, `phase` begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub instant: DateTime<Utc>,
    pub phase: Phase,
}

/// Chronologically ordered phase transitions covering the mission span.
///
/// Built by sorting all solar events and relabeling the settings: a setting
/// at horizon H does not end the band tagged H, it begins the next darker
/// one (the sky darkens from civil twilight *into* nautical twilight when
/// the sun sets through -6 degrees). Risings keep their own label, since at
/// dawn the tagged band is the one beginning. Repeated identical labels
/// from adjacent days are harmless for lookup and kept as-is.
#[derive(Debug, Clone, Default)]
pub struct PhaseTimeline {
    breakpoints: Vec<Breakpoint>,
}

impl PhaseTimeline {
    pub fn from_events(events: Vec<SolarEvent>) -> Self {
        let mut breakpoints: Vec<Breakpoint> = events
            .into_iter()
            .map(|event| Breakpoint {
                instant: event.instant,
                phase: match event.direction {
                    Direction::Rise => event.phase,
                    Direction::Set => dusk_phase(event.phase),
                },
            })
            .collect();
        breakpoints.sort_by_key(|breakpoint| breakpoint.instant);
        PhaseTimeline { breakpoints }
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Phase in effect at `instant`: the latest breakpoint at or before it,
    /// closed at the breakpoint itself.
    ///
    /// Instants before the first breakpoint are night. The earliest
    /// breakpoint of any mission day is astronomical dawn, so anything
    /// earlier than the whole timeline sits in the preceding night.
    pub fn phase_at(&self, instant: DateTime<Utc>) -> Phase {
        let upcoming = self
            .breakpoints
            .partition_point(|breakpoint| breakpoint.instant <= instant);
        if upcoming == 0 {
            Phase::Night
        } else {
            self.breakpoints[upcoming - 1].phase
        }
    }
}

/// The phase entered when the sun sets through the horizon tagged `phase`.
fn dusk_phase(phase: Phase) -> Phase {
    match phase {
        Phase::Daytime => Phase::CivilTwilight,
        Phase::CivilTwilight => Phase::NauticalTwilight,
        Phase::NauticalTwilight => Phase::AstronomicalTwilight,
        Phase::AstronomicalTwilight => Phase::Night,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 3, 28, hour, minute, 0).unwrap()
    }

    fn event(phase: Phase, direction: Direction, instant: DateTime<Utc>) -> SolarEvent {
        SolarEvent {
            phase,
            direction,
            instant,
        }
    }

    fn dawn_events() -> Vec<SolarEvent> {
        // Deliberately unsorted input.
        vec![
            event(Phase::Daytime, Direction::Rise, at(11, 5)),
            event(Phase::AstronomicalTwilight, Direction::Rise, at(9, 32)),
            event(Phase::CivilTwilight, Direction::Rise, at(10, 35)),
            event(Phase::NauticalTwilight, Direction::Rise, at(10, 4)),
        ]
    }

    #[test]
    fn breakpoints_are_sorted_ascending() {
        let timeline = PhaseTimeline::from_events(dawn_events());
        let instants: Vec<_> = timeline.breakpoints().iter().map(|b| b.instant).collect();
        let mut sorted = instants.clone();
        sorted.sort();
        assert_eq!(instants, sorted);
    }

    #[test]
    fn settings_relabel_to_the_next_darker_phase() {
        let events = vec![
            event(Phase::Daytime, Direction::Set, at(23, 24)),
            event(Phase::CivilTwilight, Direction::Set, at(23, 54)),
        ];
        let timeline = PhaseTimeline::from_events(events);
        assert_eq!(timeline.breakpoints()[0].phase, Phase::CivilTwilight);
        assert_eq!(timeline.breakpoints()[1].phase, Phase::NauticalTwilight);
    }

    #[test]
    fn risings_keep_their_own_phase() {
        let timeline = PhaseTimeline::from_events(dawn_events());
        assert_eq!(
            timeline.breakpoints()[0].phase,
            Phase::AstronomicalTwilight
        );
        assert_eq!(timeline.breakpoints()[3].phase, Phase::Daytime);
    }

    #[test]
    fn lookup_takes_latest_breakpoint_at_or_before_instant() {
        let timeline = PhaseTimeline::from_events(dawn_events());
        assert_eq!(timeline.phase_at(at(10, 10)), Phase::NauticalTwilight);
        assert_eq!(timeline.phase_at(at(12, 0)), Phase::Daytime);
    }

    #[test]
    fn instant_exactly_on_a_breakpoint_takes_that_phase() {
        let timeline = PhaseTimeline::from_events(dawn_events());
        assert_eq!(timeline.phase_at(at(10, 35)), Phase::CivilTwilight);
    }

    #[test]
    fn instants_before_the_first_breakpoint_are_night() {
        let timeline = PhaseTimeline::from_events(dawn_events());
        assert_eq!(timeline.phase_at(at(3, 0)), Phase::Night);
    }
}
