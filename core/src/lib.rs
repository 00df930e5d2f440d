pub mod alerts;
pub mod context;
pub mod game_data;
pub mod log_line;
pub mod timers;

// Re-exports for convenience
pub use alerts::{AlertEngine, AlertSink, CombatantSnapshot, EncounterSnapshot};
pub use context::watcher as directory_watcher;
pub use context::{
    AppConfig, AppConfigExt, BackgroundTasks, ConfigError, OverlaySession, SessionHandle,
    ensure_sweep, resolve_log_path,
};
pub use game_data::*;
pub use log_line::{
    LineReader, ReaderError, ReplaySummary, SkillUsageEvent, line_type, parse_primary_player,
    parse_skill_usage, tokenize,
};
pub use timers::{ActiveTimer, CooldownTracker, TimerKey};
