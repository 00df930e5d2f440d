//! Active cooldown timer instances (runtime state)
//!
//! An `ActiveTimer` represents one running cooldown countdown. Timers are
//! armed by qualifying ability records and count down to zero; re-casting
//! the same skill replaces the running instance rather than stacking a
//! second bar.

use std::time::Duration;

use chrono::NaiveDateTime;

/// An active cooldown timer
///
/// Created when a skill usage event passes the tracker's admission policy.
/// The renderer receives these to display countdown bars.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTimer {
    /// Action id of the skill on cooldown
    pub skill_id: u32,

    /// Display name (record name, or database name when the record omits it)
    pub skill_name: String,

    /// Who used the ability
    pub caster_name: String,

    /// When the timer was (re)armed
    pub started_at: NaiveDateTime,

    /// When the cooldown will have recharged
    pub expires_at: NaiveDateTime,

    /// Total cooldown length
    pub duration: Duration,
}

impl ActiveTimer {
    /// Arm a new timer
    pub fn new(
        skill_id: u32,
        skill_name: String,
        caster_name: String,
        started_at: NaiveDateTime,
        duration: Duration,
    ) -> Self {
        let expires_at = started_at + chrono::Duration::milliseconds(duration.as_millis() as i64);

        Self {
            skill_id,
            skill_name,
            caster_name,
            started_at,
            expires_at,
            duration,
        }
    }

    /// Check if the full cooldown has elapsed
    pub fn has_expired(&self, now: NaiveDateTime) -> bool {
        now >= self.expires_at
    }

    /// Remaining cooldown in milliseconds (0 once elapsed)
    pub fn remaining_ms(&self, now: NaiveDateTime) -> u64 {
        self.expires_at
            .signed_duration_since(now)
            .num_milliseconds()
            .max(0) as u64
    }

    /// Fraction of the cooldown already elapsed, in [0, 1]
    ///
    /// Drives a filling bar: 0.0 right after arming, 1.0 once recharged.
    /// Zero-duration timers report 1.0.
    pub fn progress(&self, now: NaiveDateTime) -> f32 {
        let duration_ms = self.duration.as_millis() as f32;

        if duration_ms > 0.0 {
            let remaining_ms = self.remaining_ms(now) as f32;
            (1.0 - remaining_ms / duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Render the remaining time, `M:SS` from one minute up, else `Ns`
    ///
    /// Seconds are ceiling-rounded so a timer that is still running never
    /// displays zero: 400 ms left renders as `1s`.
    pub fn format_remaining(&self, now: NaiveDateTime) -> String {
        let seconds = self.remaining_ms(now).div_ceil(1000);
        let minutes = seconds / 60;
        let secs = seconds % 60;

        if minutes > 0 {
            format!("{minutes}:{secs:02}")
        } else {
            format!("{secs}s")
        }
    }
}

/// Key identifying a unique timer slot
///
/// At most one timer exists per (skill, caster) pair; re-arming the pair
/// replaces the previous instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub skill_id: u32,
    pub caster_name: String,
}

impl TimerKey {
    pub fn new(skill_id: u32, caster_name: &str) -> Self {
        Self {
            skill_id,
            caster_name: caster_name.to_string(),
        }
    }
}
