//! Alert trigger system
//!
//! This module provides:
//! - **Snapshots**: the encounter state reported by the host's combat feed
//! - **Engine**: transition detection and trigger evaluation with cooldowns
//!
//! Alerts fire through an injected [`AlertSink`] so the engine itself stays
//! free of audio concerns.

mod engine;
mod snapshot;

#[cfg(test)]
mod engine_tests;

pub use engine::{AlertEngine, AlertSink};
pub use snapshot::{CombatantSnapshot, EncounterSnapshot};
