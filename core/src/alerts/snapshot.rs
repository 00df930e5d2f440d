//! Encounter state snapshots from the host's combat data feed

use serde::{Deserialize, Serialize};

/// One combatant row from the combat data feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub name: String,

    /// Cumulative death count for the encounter
    #[serde(default)]
    pub deaths: u32,
}

/// One update from the host's combat data feed
///
/// Snapshots are compared pairwise by the alert engine; a missing feed
/// (`None` where a snapshot is expected) counts as the encounter ending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    /// Encounter title as reported by the host
    #[serde(default)]
    pub title: String,

    /// Whether the encounter is currently running
    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub combatants: Vec<CombatantSnapshot>,
}

impl EncounterSnapshot {
    /// Death count for a combatant by name, if present
    pub fn deaths_of(&self, name: &str) -> Option<u32> {
        self.combatants
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.deaths)
    }
}
