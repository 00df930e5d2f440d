//! Cooldown tracking
//!
//! Maintains the live set of active cooldown timers. The tracker owns the
//! admission policy for incoming skill usage events, the replace-on-recast
//! rule, and the expiry sweep that retires finished timers.

use std::time::Duration;

use chrono::NaiveDateTime;
use hashbrown::HashMap;

use recast_types::TimerSettings;

use crate::game_data::get_skill_by_id;
use crate::log_line::SkillUsageEvent;

use super::{ActiveTimer, TimerKey};

/// Literal caster marker some hosts report for the local player
const SELF_MARKER: &str = "you";

/// Tracks active cooldown timers for overlay display
#[derive(Debug, Default)]
pub struct CooldownTracker {
    active: HashMap<TimerKey, ActiveTimer>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one skill usage event under the current settings
    ///
    /// Returns true when a timer was armed; callers use this to make sure
    /// the sweep task is running. Every rejection path is a silent no-op:
    /// the record stream is best effort and filtering is not an error.
    pub fn handle_event(
        &mut self,
        event: &SkillUsageEvent,
        settings: &TimerSettings,
        local_player: &str,
    ) -> bool {
        if !settings.enabled {
            return false;
        }

        // The parser already drops unknown skills; resolve again anyway
        // since the cooldown length lives in the database, not the event.
        let Some(skill) = get_skill_by_id(event.skill_id) else {
            return false;
        };

        if !settings.tracked_skills.is_empty() && !settings.tracked_skills.contains(&event.skill_id)
        {
            return false;
        }

        let is_own = is_own_cast(&event.caster_name, local_player);

        if !settings.show_party_cooldowns && !is_own {
            return false;
        }
        if !settings.show_own_cooldowns && is_own {
            return false;
        }

        let timer = ActiveTimer::new(
            event.skill_id,
            event.skill_name.clone(),
            event.caster_name.clone(),
            event.observed_at,
            Duration::from_secs(u64::from(skill.cooldown_secs)),
        );

        tracing::debug!(
            skill = %timer.skill_name,
            caster = %timer.caster_name,
            "Cooldown timer armed"
        );

        // Replaces any running timer in the same (skill, caster) slot
        let key = TimerKey::new(timer.skill_id, &timer.caster_name);
        self.active.insert(key, timer);
        true
    }

    /// Sweep out timers whose full cooldown has elapsed
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.active.retain(|_, timer| !timer.has_expired(now));
    }

    /// Drop every timer unconditionally (encounter reset)
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Look up a timer by its slot
    pub fn get(&self, key: &TimerKey) -> Option<&ActiveTimer> {
        self.active.get(key)
    }

    /// All active timers, unordered
    pub fn timers(&self) -> impl Iterator<Item = &ActiveTimer> {
        self.active.values()
    }

    /// Sorted copy for rendering: shortest remaining cooldown first
    pub fn snapshot(&self, now: NaiveDateTime) -> Vec<ActiveTimer> {
        let mut timers: Vec<ActiveTimer> = self.active.values().cloned().collect();
        timers.sort_by_key(|timer| timer.remaining_ms(now));
        timers
    }
}

/// A cast is "own" when the caster matches the configured player name or
/// the literal self marker, case-insensitively
fn is_own_cast(caster_name: &str, local_player: &str) -> bool {
    let caster = caster_name.to_lowercase();
    caster == local_player.to_lowercase() || caster == SELF_MARKER
}
