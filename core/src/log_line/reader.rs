use std::io::SeekFrom;
use std::path::PathBuf;

use chrono::Local;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncSeekExt, BufReader};
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};

use crate::context::{SessionHandle, ensure_sweep};

use super::error::ReaderError;
use super::parser::tokenize;

const TAIL_SLEEP_DURATION: Duration = Duration::from_millis(100);

/// Totals from replaying a log file
#[derive(Debug, Default, Clone, Copy)]
pub struct ReplaySummary {
    pub lines: u64,
    pub timers_armed: u64,
}

/// Feeds a network log file into an overlay session
pub struct LineReader {
    path: PathBuf,
    session: SessionHandle,
}

impl LineReader {
    pub fn from(path: PathBuf, session: SessionHandle) -> Self {
        LineReader { path, session }
    }

    /// Replay a complete log file through the session
    ///
    /// Lines are observed "now": replayed casts arm timers as if they had
    /// just happened, which is what the replay diagnostics want.
    pub async fn replay(&self) -> Result<ReplaySummary, ReaderError> {
        let file = File::open(&self.path)
            .await
            .map_err(|source| ReaderError::OpenFile {
                path: self.path.clone(),
                source,
            })?;
        let mut reader = BufReader::new(file);

        let mut summary = ReplaySummary::default();
        let mut buf = Vec::new();

        // One lock for the whole file keeps the feed linear
        let mut session = self.session.write().await;

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|source| ReaderError::ReadFile {
                    path: self.path.clone(),
                    source,
                })?;
            if n == 0 {
                break;
            }
            summary.lines += 1;

            let line = String::from_utf8_lossy(&buf);
            let fields = tokenize(&line);
            if session.handle_log_line(&fields, Local::now().naive_local()) {
                summary.timers_armed += 1;
            }
        }

        Ok(summary)
    }

    /// Follow a live log file, feeding new records as they are written
    ///
    /// Starts at the current end of file; a live overlay only cares about
    /// casts from now on. `sweep` is the caller-owned slot the expiry sweep
    /// task lives in; it is filled whenever a record arms a timer. Runs
    /// until the file becomes unreadable.
    pub async fn tail(self, sweep: &mut Option<JoinHandle<()>>) -> Result<(), ReaderError> {
        let file = File::open(&self.path)
            .await
            .map_err(|source| ReaderError::OpenFile {
                path: self.path.clone(),
                source,
            })?;
        let mut reader = BufReader::new(file);

        let offset = reader
            .seek(SeekFrom::End(0))
            .await
            .map_err(|source| ReaderError::Seek {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(path = %self.path.display(), offset, "Tailing log file");

        let mut buf = Vec::new();

        loop {
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => {
                    sleep(TAIL_SLEEP_DURATION).await;
                    continue;
                }
                Ok(_) => {
                    // Only process complete lines; partial data stays in the
                    // buffer and the next read appends to it
                    if buf.ends_with(b"\n") {
                        let line = String::from_utf8_lossy(&buf);
                        let fields = tokenize(&line);
                        let armed = self
                            .session
                            .write()
                            .await
                            .handle_log_line(&fields, Local::now().naive_local());
                        if armed {
                            ensure_sweep(&self.session, sweep);
                        }
                        buf.clear();
                    }
                }
                Err(source) => {
                    return Err(ReaderError::ReadFile {
                        path: self.path.clone(),
                        source,
                    });
                }
            }
        }
    }
}
