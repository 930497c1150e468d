//! Minimum-switch scheduler.
//!
//! Drives the greedy "latest first conflict" loop over a working window of
//! the request sequence, using the conflict index on every pass.

mod core;
mod state;

pub use self::core::{count_switches, SchedulerError, SwitchScheduler};
pub use state::{Phase, SchedulerState};
