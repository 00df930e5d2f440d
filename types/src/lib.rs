//! Shared configuration types for RECAST
//!
//! This crate contains the serializable settings types that are shared between
//! the engine (recast-core) and its front ends. Every field carries a serde
//! default so partially written config files deserialize cleanly.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_player_name() -> String {
    "YOU".to_string()
}
fn default_alert_cooldown_secs() -> u32 {
    10
}

// ─────────────────────────────────────────────────────────────────────────────
// Cooldown Timer Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Controls which ability casts produce cooldown timers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Master switch. When false, incoming log records are not processed and
    /// the expiry sweep does not run.
    #[serde(default)]
    pub enabled: bool,

    /// Allow-list of skill ids. Empty means every trackable skill.
    #[serde(default)]
    pub tracked_skills: Vec<u32>,

    /// Surface the local player's own casts.
    #[serde(default = "default_true")]
    pub show_own_cooldowns: bool,

    /// Surface other casters' casts.
    #[serde(default = "default_true")]
    pub show_party_cooldowns: bool,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            tracked_skills: Vec::new(),
            show_own_cooldowns: true,
            show_party_cooldowns: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Alert Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Combat events an alert trigger can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// A combatant's death count increased during an active encounter
    Death,
    /// Encounter transitioned inactive → active
    EncounterStart,
    /// Encounter transitioned active → inactive
    EncounterEnd,
}

impl TriggerKind {
    /// Get the display label for this trigger kind
    pub fn label(&self) -> &'static str {
        match self {
            Self::Death => "Death",
            Self::EncounterStart => "Encounter Start",
            Self::EncounterEnd => "Encounter End",
        }
    }
}

/// Which combatant a death trigger watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerScope {
    /// Any combatant in the encounter
    #[default]
    Any,
    /// Only the local player
    #[serde(rename = "self")]
    SelfOnly,
}

/// A single configurable alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertTrigger {
    /// Stable identifier, also the cooldown-suppression key
    pub id: String,
    pub kind: TriggerKind,
    #[serde(default)]
    pub player: PlayerScope,
    /// Spoken via TTS when `use_tts` is set
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_file: Option<String>,
    #[serde(default)]
    pub use_tts: bool,
    #[serde(default)]
    pub use_sound: bool,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Alert engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub triggers: Vec<AlertTrigger>,
    /// Minimum seconds between two firings of the same trigger.
    #[serde(default = "default_alert_cooldown_secs")]
    pub default_cooldown_secs: u32,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            triggers: Vec::new(),
            default_cooldown_secs: 10,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Config
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level persisted configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Local player name used for "own cast" classification until the host
    /// announces the real character name.
    #[serde(default = "default_player_name")]
    pub player_name: String,

    /// Directory holding ACT network log files.
    #[serde(default)]
    pub log_directory: String,

    #[serde(default)]
    pub timers: TimerSettings,

    #[serde(default)]
    pub alerts: AlertSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            log_directory: String::new(),
            timers: TimerSettings::default(),
            alerts: AlertSettings::default(),
        }
    }
}

impl AppConfig {
    /// Config with a platform-specific log directory filled in.
    pub fn with_log_directory(log_directory: String) -> Self {
        Self {
            log_directory,
            ..Default::default()
        }
    }
}
