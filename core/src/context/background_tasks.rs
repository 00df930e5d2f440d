use tokio::task::JoinHandle;

/// Handles for the long-running tasks a session host may spawn: the
/// directory watcher, the active log tail, and the cooldown sweep.
#[derive(Default)]
pub struct BackgroundTasks {
    pub watcher: Option<JoinHandle<()>>,
    pub log_tail: Option<JoinHandle<()>>,
    pub sweep: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    /// Stops the current tail, leaving the watcher and sweep untouched.
    /// Used when the watched directory rotates to a new log file.
    pub fn abort_tail(&mut self) {
        if let Some(handle) = self.log_tail.take() {
            handle.abort();
        }
    }

    pub async fn abort_all(&mut self) {
        if let Some(handle) = self.sweep.take() {
            handle.abort();
        }
        self.abort_tail();
        if let Some(handle) = self.watcher.take() {
            handle.abort();
        }
    }
}
