//! Cooldown timer system
//!
//! This module provides:
//! - **Active instances**: running countdown timers with render projections
//! - **Tracker**: admission policy, replace-on-recast, and the expiry sweep
//!
//! Timers are armed by parsed skill usage events and retired by the
//! periodic sweep once their full cooldown has elapsed.

mod active;
mod tracker;


pub use active::{ActiveTimer, TimerKey};
pub use tracker::CooldownTracker;
