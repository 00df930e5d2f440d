use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc::{self, Receiver};
use tokio::time::{Instant, sleep};

pub enum DirectoryEvent {
    NewFile(PathBuf),
    FileRemoved(PathBuf),
    Message(String),
    Error(String),
}

/// Watches the ACT log directory so the overlay can follow the newest file
pub struct DirectoryWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
}

impl DirectoryWatcher {
    pub fn new(path: &Path) -> notify::Result<Self> {
        let (tx, rx) = mpsc::channel(100);

        // notify delivers on its own thread; bridge onto the tokio channel
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.blocking_send(res);
            },
            Config::default(),
        )?;

        watcher.watch(path, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Next event worth acting on. Filesystem noise that does not involve a
    /// network log is swallowed here.
    pub async fn next_event(&mut self) -> Option<DirectoryEvent> {
        loop {
            match self.rx.recv().await? {
                Ok(event) => {
                    if let Some(relevant) = self.process_event(event).await {
                        return Some(relevant);
                    }
                }
                Err(e) => return Some(DirectoryEvent::Error(format!("watch error: {e}"))),
            }
        }
    }

    async fn process_event(&self, event: Event) -> Option<DirectoryEvent> {
        match event.kind {
            EventKind::Create(_) => {
                let path = event.paths.into_iter().find(|p| is_network_log(p))?;
                Some(self.handle_new_file(path).await)
            }
            EventKind::Remove(_) => event
                .paths
                .into_iter()
                .find(|p| is_network_log(p))
                .map(DirectoryEvent::FileRemoved),
            _ => None,
        }
    }

    async fn handle_new_file(&self, path: PathBuf) -> DirectoryEvent {
        const CONTENT_TIMEOUT: Duration = Duration::from_secs(60);
        const CONTENT_POLL: Duration = Duration::from_millis(500);

        // ACT creates the file at zone-in but may not write for a while
        let deadline = Instant::now() + CONTENT_TIMEOUT;
        while path.metadata().map(|m| m.len()).unwrap_or(0) == 0 {
            if Instant::now() >= deadline {
                return DirectoryEvent::Message(format!(
                    "gave up waiting for content in {}",
                    path.display()
                ));
            }
            sleep(CONTENT_POLL).await;
        }

        DirectoryEvent::NewFile(path)
    }
}

/// ACT network logs are named like `Network_26916_20240615.log`
fn is_network_log(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with("Network_") && n.ends_with(".log"))
        .unwrap_or(false)
}

/// Most recently modified network log in a directory, if any
pub fn newest_log_file(dir: &Path) -> std::io::Result<Option<PathBuf>> {
    let mut newest: Option<(std::time::SystemTime, PathBuf)> = None;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !is_network_log(&path) {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        if newest.as_ref().map(|(t, _)| modified > *t).unwrap_or(true) {
            newest = Some((modified, path));
        }
    }

    Ok(newest.map(|(_, path)| path))
}
