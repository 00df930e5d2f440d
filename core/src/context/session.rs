//! Live overlay session state
//!
//! One `OverlaySession` holds everything mutable for a running overlay:
//! settings, the detected local player, the cooldown tracker, and the alert
//! engine. It is shared behind a single lock; arming, sweeping, and alert
//! processing all serialize on it, so events observed on the same tick are
//! applied in arrival order.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use tokio::sync::RwLock;

use recast_types::AppConfig;

use crate::alerts::{AlertEngine, AlertSink, EncounterSnapshot};
use crate::log_line::{parse_primary_player, parse_skill_usage};
use crate::timers::CooldownTracker;

/// Shared handle to a live session, cloned into readers and the sweep task
pub type SessionHandle = Arc<RwLock<OverlaySession>>;

pub struct OverlaySession {
    pub config: AppConfig,

    /// Character name announced by the log stream; None until seen
    local_player: Option<String>,

    pub tracker: CooldownTracker,
    pub alerts: AlertEngine,
}

impl OverlaySession {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            local_player: None,
            tracker: CooldownTracker::new(),
            alerts: AlertEngine::new(),
        }
    }

    pub fn into_handle(self) -> SessionHandle {
        Arc::new(RwLock::new(self))
    }

    /// Name used for "own cast" classification: the announced character if
    /// one was seen, otherwise the configured fallback
    pub fn effective_player_name(&self) -> &str {
        self.local_player
            .as_deref()
            .unwrap_or(&self.config.player_name)
    }

    pub fn set_local_player(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        if self.local_player.as_deref() != Some(name) {
            tracing::info!(player = name, "Primary player detected");
        }
        self.local_player = Some(name.to_string());
    }

    /// Feed one tokenized log record
    ///
    /// Returns true when a cooldown timer was armed, so the caller knows to
    /// make sure the sweep task is running.
    pub fn handle_log_line(&mut self, fields: &[&str], observed_at: NaiveDateTime) -> bool {
        // Player announcements apply even while timers are disabled
        if let Some(name) = parse_primary_player(fields) {
            self.set_local_player(name);
            return false;
        }

        if !self.config.timers.enabled {
            return false;
        }

        let Some(event) = parse_skill_usage(fields, observed_at) else {
            return false;
        };

        let player = self.effective_player_name().to_string();
        self.tracker.handle_event(&event, &self.config.timers, &player)
    }

    /// Feed one combat-data update to the alert engine
    pub fn handle_encounter_update(
        &mut self,
        snapshot: Option<EncounterSnapshot>,
        now: NaiveDateTime,
        sink: &dyn AlertSink,
    ) {
        let player = self.effective_player_name().to_string();
        self.alerts
            .process(&self.config.alerts, snapshot, &player, now, sink);
    }

    /// Drop every active timer (encounter reset)
    pub fn clear_timers(&mut self) {
        self.tracker.clear();
    }
}

/// Resolve a log file path, joining with the configured directory if relative
pub fn resolve_log_path(config: &AppConfig, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(&config.log_directory).join(path)
    }
}
