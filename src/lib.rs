//! Twilight-phase classification for search-and-rescue GPS tracks.
//!
//! Given a GPX file of mission tracks, the pipeline derives a fixed
//! observer from the median track position, computes sunrise and sunset
//! at four horizon angles for every mission day, builds a timeline of
//! phase breakpoints, and tags every track point with the illumination
//! phase it was recorded in. Untimestamped points are planned routes and
//! are tagged `Planning`.
//!
//! The usual entry point is [`analyze`] on a [`geosar_track::Mission`].

pub mod analysis;
pub mod classify;
pub mod events;
pub mod flatten;
pub mod observer;
pub mod timeline;

pub use analysis::{Analysis, AnalysisError, analyze};
