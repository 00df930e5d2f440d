//! Periodic expiry sweep for active cooldown timers
//!
//! The sweep only runs while timers exist: it is started when a timer is
//! armed and exits on its own once the active set drains or timers are
//! switched off. Arming and sweeping serialize on the session lock, so a
//! timer armed between ticks always survives to the next tick boundary.

use std::sync::Arc;

use chrono::Local;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};

use super::SessionHandle;

const SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Make sure a sweep task occupies `slot` for this session
///
/// Call after arming a timer. Does nothing while the previous sweep is
/// still alive; a finished handle is replaced.
pub fn ensure_sweep(session: &SessionHandle, slot: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = slot {
        if !handle.is_finished() {
            return;
        }
    }
    *slot = Some(spawn_sweep(Arc::clone(session)));
}

fn spawn_sweep(session: SessionHandle) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!("Cooldown sweep started");
        loop {
            sleep(SWEEP_INTERVAL).await;

            let mut session = session.write().await;
            if !session.config.timers.enabled {
                break;
            }
            session.tracker.tick(Local::now().naive_local());
            if session.tracker.is_empty() {
                break;
            }
        }
        tracing::debug!("Cooldown sweep stopped");
    })
}
