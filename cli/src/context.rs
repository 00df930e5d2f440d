use std::path::PathBuf;

use recast_core::context::{
    AppConfig, AppConfigExt, BackgroundTasks, OverlaySession, SessionHandle,
};

/// State a command invocation carries: the loaded configuration, handles to
/// any background tasks, and the file currently tailed.
pub struct CliContext {
    pub config: AppConfig,
    pub tasks: BackgroundTasks,
    /// File currently being tailed, if any
    pub active_file: Option<PathBuf>,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            config: AppConfig::load(),
            tasks: BackgroundTasks::default(),
            active_file: None,
        }
    }

    /// Start an overlay session using the current configuration
    pub fn start_session(&self) -> SessionHandle {
        OverlaySession::new(self.config.clone()).into_handle()
    }
}
