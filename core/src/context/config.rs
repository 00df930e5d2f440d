//! Application configuration
//!
//! This module re-exports the shared types from recast-types and provides
//! platform-specific defaults and persistence for AppConfig.

use thiserror::Error;

// Re-export all shared types
pub use recast_types::{
    AlertSettings, AlertTrigger, AppConfig, PlayerScope, TimerSettings, TriggerKind,
};

/// Failure to persist the configuration file
#[derive(Debug, Error)]
#[error("failed to save configuration")]
pub struct ConfigError(#[source] confy::ConfyError);

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Defaults
// ─────────────────────────────────────────────────────────────────────────────

fn default_log_directory() -> String {
    #[cfg(target_os = "windows")]
    {
        dirs::config_dir()
            .map(|p| p.join("Advanced Combat Tracker/FFXIVLogs"))
            .and_then(|p| p.to_str().map(String::from))
            .unwrap_or_default()
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        dirs::document_dir()
            .map(|p| p.join("Advanced Combat Tracker/FFXIVLogs"))
            .and_then(|p| p.to_str().map(String::from))
            .unwrap_or_default()
    }
    #[cfg(target_os = "macos")]
    {
        String::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence
pub trait AppConfigExt {
    fn load() -> Self;
    fn load_with_defaults() -> Self;
    fn save(self) -> Result<(), ConfigError>;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        confy::load("recast", "config").unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not read configuration, using defaults");
            Self::load_with_defaults()
        })
    }

    /// Load with platform-specific defaults (used when no config file exists)
    fn load_with_defaults() -> Self {
        AppConfig::with_log_directory(default_log_directory())
    }

    fn save(self) -> Result<(), ConfigError> {
        confy::store("recast", "config", self).map_err(ConfigError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_deserializes_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.player_name, "YOU");
        assert!(!config.timers.enabled);
        assert!(config.timers.tracked_skills.is_empty());
        assert!(config.timers.show_own_cooldowns);
        assert!(config.timers.show_party_cooldowns);
        assert!(!config.alerts.enabled);
        assert_eq!(config.alerts.default_cooldown_secs, 10);
    }

    #[test]
    fn partial_timer_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            "[timers]\n\
             enabled = true\n\
             tracked_skills = [158, 3573]\n",
        )
        .unwrap();

        assert!(config.timers.enabled);
        assert_eq!(config.timers.tracked_skills, vec![158, 3573]);
        assert!(config.timers.show_own_cooldowns, "unset flags keep their defaults");
        assert!(config.timers.show_party_cooldowns);
    }

    #[test]
    fn trigger_vocabulary_round_trips() {
        let config: AppConfig = toml::from_str(
            r#"
            [alerts]
            enabled = true

            [[alerts.triggers]]
            id = "my-death"
            kind = "death"
            player = "self"
            message = "You died"
            use_tts = true

            [[alerts.triggers]]
            id = "pull"
            kind = "encounter_start"
            "#,
        )
        .unwrap();

        let death = &config.alerts.triggers[0];
        assert_eq!(death.kind, TriggerKind::Death);
        assert_eq!(death.player, PlayerScope::SelfOnly);
        assert!(death.use_tts);
        assert!(death.enabled, "triggers are enabled unless switched off");

        let pull = &config.alerts.triggers[1];
        assert_eq!(pull.kind, TriggerKind::EncounterStart);
        assert_eq!(pull.player, PlayerScope::Any);
        assert!(!pull.use_tts);

        let serialized = toml::to_string(&config).unwrap();
        let reparsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(config, reparsed);
    }
}
