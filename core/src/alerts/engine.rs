//! Alert trigger evaluation
//!
//! Consumes encounter snapshots from the host's combat data feed, derives
//! start/end/death transitions against the previous snapshot, and fires
//! matching triggers through an injected sink. Each trigger is suppressed
//! for a configurable cooldown after firing so a burst of updates cannot
//! spam audio.

use chrono::NaiveDateTime;
use hashbrown::HashMap;

use recast_types::{AlertSettings, AlertTrigger, PlayerScope, TriggerKind};

use super::EncounterSnapshot;

/// Side-effect capability for firing alerts (TTS and sound playback)
///
/// Implementations are fire-and-forget; the engine never waits on them.
pub trait AlertSink {
    fn say(&self, text: &str);
    fn play_sound(&self, file: &str);
}

/// Evaluates alert triggers against the combat data feed
#[derive(Debug, Default)]
pub struct AlertEngine {
    /// Last firing time per trigger id, for cooldown suppression
    fired: HashMap<String, NaiveDateTime>,

    /// Snapshot from the previous update, for transition and death deltas
    previous: Option<EncounterSnapshot>,
}

impl AlertEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one combat-data update
    ///
    /// `snapshot` is `None` when the feed dropped; after real data that
    /// counts as the encounter ending.
    pub fn process(
        &mut self,
        settings: &AlertSettings,
        snapshot: Option<EncounterSnapshot>,
        player_name: &str,
        now: NaiveDateTime,
        sink: &dyn AlertSink,
    ) {
        let Some(current) = snapshot else {
            if let Some(previous) = self.previous.take() {
                self.evaluate(
                    settings,
                    &previous,
                    Some(&previous),
                    player_name,
                    false,
                    true,
                    now,
                    sink,
                );
            }
            return;
        };

        let was_active = self.previous.as_ref().is_some_and(|p| p.is_active);
        let is_start = !was_active && current.is_active;
        let is_end = was_active && !current.is_active;

        let previous = self.previous.take();
        self.evaluate(
            settings,
            &current,
            previous.as_ref(),
            player_name,
            is_start,
            is_end,
            now,
            sink,
        );
        self.previous = Some(current);
    }

    /// Forget every suppression window (settings reload)
    pub fn clear_cooldowns(&mut self) {
        self.fired.clear();
    }

    fn evaluate(
        &mut self,
        settings: &AlertSettings,
        current: &EncounterSnapshot,
        previous: Option<&EncounterSnapshot>,
        player_name: &str,
        is_start: bool,
        is_end: bool,
        now: NaiveDateTime,
        sink: &dyn AlertSink,
    ) {
        if !settings.enabled {
            return;
        }

        let cooldown = chrono::Duration::seconds(i64::from(settings.default_cooldown_secs));

        for trigger in &settings.triggers {
            if !trigger.enabled {
                continue;
            }
            if self.is_on_cooldown(&trigger.id, cooldown, now) {
                continue;
            }

            let should_fire = match trigger.kind {
                // Deaths outside an active encounter are stale data
                TriggerKind::Death => {
                    current.is_active && check_death(trigger, current, previous, player_name)
                }
                TriggerKind::EncounterStart => is_start,
                TriggerKind::EncounterEnd => is_end,
            };

            if should_fire {
                // Marked before firing so a sink that re-enters the feed
                // cannot double-fire the same trigger
                self.fired.insert(trigger.id.clone(), now);
                fire(trigger, sink);
                tracing::info!(trigger = %trigger.id, kind = trigger.kind.label(), "Alert fired");
            }
        }
    }

    fn is_on_cooldown(&self, trigger_id: &str, cooldown: chrono::Duration, now: NaiveDateTime) -> bool {
        self.fired
            .get(trigger_id)
            .map(|last| now.signed_duration_since(*last) < cooldown)
            .unwrap_or(false)
    }
}

fn fire(trigger: &AlertTrigger, sink: &dyn AlertSink) {
    if trigger.use_tts && !trigger.message.is_empty() {
        sink.say(&trigger.message);
    }
    if trigger.use_sound {
        if let Some(file) = &trigger.sound_file {
            sink.play_sound(file);
        }
    }
}

/// True when a watched combatant's death count increased since the
/// previous snapshot
fn check_death(
    trigger: &AlertTrigger,
    current: &EncounterSnapshot,
    previous: Option<&EncounterSnapshot>,
    player_name: &str,
) -> bool {
    // No baseline yet, so nothing can have increased
    let Some(previous) = previous else {
        return false;
    };

    for combatant in &current.combatants {
        let prev_deaths = previous.deaths_of(&combatant.name).unwrap_or(0);
        if combatant.deaths <= prev_deaths {
            continue;
        }

        match trigger.player {
            PlayerScope::SelfOnly => {
                if is_player_match(&combatant.name, player_name) {
                    return true;
                }
            }
            PlayerScope::Any => return true,
        }
    }

    false
}

/// Check whether a combatant name refers to the local player
///
/// Combat feeds report the player under several spellings: the literal
/// "YOU" marker, the full character name, or a truncated first name.
/// Matching is case-insensitive and tolerant in both directions.
fn is_player_match(combatant_name: &str, player_name: &str) -> bool {
    if combatant_name.is_empty() {
        return false;
    }

    let name = combatant_name.to_lowercase();
    let player = player_name.to_lowercase();

    if name == "you" || name == player {
        return true;
    }

    // "Alma" against player "Alma Seren"
    if player.starts_with(&format!("{name} ")) {
        return true;
    }

    // "Alma S." against first name "alma"
    let player_first = player.split(' ').next().unwrap_or_default();
    if !player_first.is_empty() && name.starts_with(player_first) {
        return true;
    }

    player.contains(&name)
}
