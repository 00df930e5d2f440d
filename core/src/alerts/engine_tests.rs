//! Tests for alert transition detection and trigger firing

use std::cell::RefCell;

use chrono::NaiveDateTime;

use recast_types::{AlertSettings, AlertTrigger, PlayerScope, TriggerKind};

use super::*;

const PLAYER: &str = "Alma Seren";

/// Sink that records what would have been spoken or played
#[derive(Default)]
struct RecordingSink {
    spoken: RefCell<Vec<String>>,
    sounds: RefCell<Vec<String>>,
}

impl AlertSink for RecordingSink {
    fn say(&self, text: &str) {
        self.spoken.borrow_mut().push(text.to_string());
    }

    fn play_sound(&self, file: &str) {
        self.sounds.borrow_mut().push(file.to_string());
    }
}

fn base_time() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2024-06-15 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}

fn at(offset_secs: i64) -> NaiveDateTime {
    base_time() + chrono::Duration::seconds(offset_secs)
}

fn make_trigger(id: &str, kind: TriggerKind) -> AlertTrigger {
    AlertTrigger {
        id: id.to_string(),
        kind,
        player: PlayerScope::Any,
        message: format!("{id} fired"),
        sound_file: None,
        use_tts: true,
        use_sound: false,
        enabled: true,
    }
}

fn make_settings(triggers: Vec<AlertTrigger>) -> AlertSettings {
    AlertSettings {
        enabled: true,
        triggers,
        default_cooldown_secs: 10,
    }
}

fn snapshot(is_active: bool, combatants: &[(&str, u32)]) -> EncounterSnapshot {
    EncounterSnapshot {
        title: "Test Encounter".to_string(),
        is_active,
        combatants: combatants
            .iter()
            .map(|(name, deaths)| CombatantSnapshot {
                name: name.to_string(),
                deaths: *deaths,
            })
            .collect(),
    }
}

// ─── Encounter Transitions ──────────────────────────────────────────────────

#[test]
fn test_start_fires_on_inactive_to_active() {
    let mut engine = AlertEngine::new();
    let settings = make_settings(vec![make_trigger("pull", TriggerKind::EncounterStart)]);
    let sink = RecordingSink::default();

    engine.process(&settings, Some(snapshot(false, &[])), PLAYER, at(0), &sink);
    assert!(sink.spoken.borrow().is_empty(), "no transition yet");

    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(1), &sink);
    assert_eq!(*sink.spoken.borrow(), vec!["pull fired"]);
}

#[test]
fn test_first_snapshot_active_counts_as_start() {
    let mut engine = AlertEngine::new();
    let settings = make_settings(vec![make_trigger("pull", TriggerKind::EncounterStart)]);
    let sink = RecordingSink::default();

    // No previous snapshot means "was not active"
    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(0), &sink);
    assert_eq!(sink.spoken.borrow().len(), 1);
}

#[test]
fn test_sustained_active_fires_start_once() {
    let mut engine = AlertEngine::new();
    let settings = make_settings(vec![make_trigger("pull", TriggerKind::EncounterStart)]);
    let sink = RecordingSink::default();

    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(0), &sink);
    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(30), &sink);
    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(60), &sink);

    assert_eq!(sink.spoken.borrow().len(), 1, "no repeated start alerts");
}

#[test]
fn test_end_fires_on_active_to_inactive() {
    let mut engine = AlertEngine::new();
    let settings = make_settings(vec![make_trigger("wipe", TriggerKind::EncounterEnd)]);
    let sink = RecordingSink::default();

    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(0), &sink);
    engine.process(&settings, Some(snapshot(false, &[])), PLAYER, at(90), &sink);

    assert_eq!(*sink.spoken.borrow(), vec!["wipe fired"]);
}

#[test]
fn test_feed_loss_after_data_counts_as_end() {
    let mut engine = AlertEngine::new();
    let settings = make_settings(vec![make_trigger("wipe", TriggerKind::EncounterEnd)]);
    let sink = RecordingSink::default();

    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(0), &sink);
    engine.process(&settings, None, PLAYER, at(90), &sink);

    assert_eq!(sink.spoken.borrow().len(), 1);

    // A second feed loss has no baseline left and stays silent
    engine.process(&settings, None, PLAYER, at(180), &sink);
    assert_eq!(sink.spoken.borrow().len(), 1);
}

#[test]
fn test_feed_loss_without_data_is_silent() {
    let mut engine = AlertEngine::new();
    let settings = make_settings(vec![make_trigger("wipe", TriggerKind::EncounterEnd)]);
    let sink = RecordingSink::default();

    engine.process(&settings, None, PLAYER, at(0), &sink);
    assert!(sink.spoken.borrow().is_empty());
}

// ─── Death Detection ────────────────────────────────────────────────────────

#[test]
fn test_death_fires_on_count_increase() {
    let mut engine = AlertEngine::new();
    let settings = make_settings(vec![make_trigger("death", TriggerKind::Death)]);
    let sink = RecordingSink::default();

    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 0)])),
        PLAYER,
        at(0),
        &sink,
    );
    assert!(sink.spoken.borrow().is_empty(), "baseline snapshot");

    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 1)])),
        PLAYER,
        at(20),
        &sink,
    );
    assert_eq!(sink.spoken.borrow().len(), 1);
}

#[test]
fn test_death_requires_active_encounter() {
    let mut engine = AlertEngine::new();
    let settings = make_settings(vec![make_trigger("death", TriggerKind::Death)]);
    let sink = RecordingSink::default();

    engine.process(
        &settings,
        Some(snapshot(false, &[("Runa Borel", 0)])),
        PLAYER,
        at(0),
        &sink,
    );
    engine.process(
        &settings,
        Some(snapshot(false, &[("Runa Borel", 1)])),
        PLAYER,
        at(20),
        &sink,
    );

    assert!(sink.spoken.borrow().is_empty());
}

#[test]
fn test_new_combatant_deaths_count_from_zero() {
    let mut engine = AlertEngine::new();
    let settings = make_settings(vec![make_trigger("death", TriggerKind::Death)]);
    let sink = RecordingSink::default();

    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(0), &sink);

    // Combatant absent from the baseline joins with a death already recorded
    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 1)])),
        PLAYER,
        at(20),
        &sink,
    );
    assert_eq!(sink.spoken.borrow().len(), 1);
}

#[test]
fn test_self_scope_ignores_party_deaths() {
    let mut engine = AlertEngine::new();
    let mut trigger = make_trigger("death", TriggerKind::Death);
    trigger.player = PlayerScope::SelfOnly;
    let settings = make_settings(vec![trigger]);
    let sink = RecordingSink::default();

    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 0), ("YOU", 0)])),
        PLAYER,
        at(0),
        &sink,
    );
    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 1), ("YOU", 0)])),
        PLAYER,
        at(20),
        &sink,
    );
    assert!(sink.spoken.borrow().is_empty(), "party death must not match self scope");

    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 1), ("YOU", 1)])),
        PLAYER,
        at(40),
        &sink,
    );
    assert_eq!(sink.spoken.borrow().len(), 1);
}

// ─── Suppression and Routing ────────────────────────────────────────────────

#[test]
fn test_trigger_cooldown_suppresses_refire() {
    let mut engine = AlertEngine::new();
    let settings = make_settings(vec![make_trigger("death", TriggerKind::Death)]);
    let sink = RecordingSink::default();

    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 0)])),
        PLAYER,
        at(0),
        &sink,
    );
    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 1)])),
        PLAYER,
        at(5),
        &sink,
    );
    // Second death lands inside the 10s window
    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 2)])),
        PLAYER,
        at(9),
        &sink,
    );
    assert_eq!(sink.spoken.borrow().len(), 1, "suppressed inside cooldown");

    // And a third one after it
    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 3)])),
        PLAYER,
        at(16),
        &sink,
    );
    assert_eq!(sink.spoken.borrow().len(), 2);
}

#[test]
fn test_clear_cooldowns_allows_immediate_refire() {
    let mut engine = AlertEngine::new();
    let settings = make_settings(vec![make_trigger("death", TriggerKind::Death)]);
    let sink = RecordingSink::default();

    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 0)])),
        PLAYER,
        at(0),
        &sink,
    );
    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 1)])),
        PLAYER,
        at(5),
        &sink,
    );

    engine.clear_cooldowns();

    engine.process(
        &settings,
        Some(snapshot(true, &[("Runa Borel", 2)])),
        PLAYER,
        at(6),
        &sink,
    );
    assert_eq!(sink.spoken.borrow().len(), 2);
}

#[test]
fn test_disabled_settings_and_triggers_stay_silent() {
    let mut engine = AlertEngine::new();

    let mut settings = make_settings(vec![make_trigger("pull", TriggerKind::EncounterStart)]);
    settings.enabled = false;
    let sink = RecordingSink::default();

    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(0), &sink);
    assert!(sink.spoken.borrow().is_empty());

    let mut engine = AlertEngine::new();
    let mut trigger = make_trigger("pull", TriggerKind::EncounterStart);
    trigger.enabled = false;
    let settings = make_settings(vec![trigger]);

    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(0), &sink);
    assert!(sink.spoken.borrow().is_empty());
}

#[test]
fn test_audio_routing_follows_trigger_flags() {
    let mut engine = AlertEngine::new();

    let mut trigger = make_trigger("pull", TriggerKind::EncounterStart);
    trigger.use_tts = false;
    trigger.use_sound = true;
    trigger.sound_file = Some("pull.wav".to_string());
    let settings = make_settings(vec![trigger]);
    let sink = RecordingSink::default();

    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(0), &sink);

    assert!(sink.spoken.borrow().is_empty());
    assert_eq!(*sink.sounds.borrow(), vec!["pull.wav"]);
}

#[test]
fn test_tts_skipped_for_empty_message() {
    let mut engine = AlertEngine::new();

    let mut trigger = make_trigger("pull", TriggerKind::EncounterStart);
    trigger.message = String::new();
    let settings = make_settings(vec![trigger]);
    let sink = RecordingSink::default();

    engine.process(&settings, Some(snapshot(true, &[])), PLAYER, at(0), &sink);
    assert!(sink.spoken.borrow().is_empty());
}
