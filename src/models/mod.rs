//! Core data model types shared across the crate.

pub mod dates;
pub mod observation;

pub use observation::{RawObservation, WeeklyMetroObservation};
