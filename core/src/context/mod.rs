mod background_tasks;
mod config;
mod session;
mod sweep;
pub mod watcher;


pub use background_tasks::BackgroundTasks;
pub use config::{
    AlertSettings, AlertTrigger, AppConfig, AppConfigExt, ConfigError, PlayerScope, TimerSettings,
    TriggerKind,
};
pub use session::{OverlaySession, SessionHandle, resolve_log_path};
pub use sweep::ensure_sweep;
