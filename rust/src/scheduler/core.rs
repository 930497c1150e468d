//! Greedy minimum-switch scheduler.

use thiserror::Error;

use crate::config::SchedulerConfig;
use crate::conflict::OccurrenceIndex;
use crate::models::SwitchPlan;
use crate::{log_changes, log_checks, log_debug};

use super::state::{Phase, SchedulerState};

/// Errors that can occur during scheduling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// Every resource is named by the request at the head of the window,
    /// so no resource can serve it.
    #[error("request {request:?} at position {position} conflicts with every resource")]
    Unservable { request: String, position: usize },
}

/// Minimum-switch scheduler.
///
/// Each pass asks the conflict index where every resource first meets its
/// own identifier in the remaining window. If some resource never does, it
/// serves the rest and the run ends. Otherwise the resource whose conflict
/// comes latest serves up to that point, a switch is counted, and the window
/// restarts at the conflicting request.
///
/// Every resource stays a candidate on every pass, including ones that were
/// already used.
#[derive(Clone, Debug, Default)]
pub struct SwitchScheduler {
    config: SchedulerConfig,
}

impl SwitchScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Compute the minimum-switch plan for serving `requests` with `resources`.
    ///
    /// # Returns
    /// * `Ok(SwitchPlan)` with the switch count and the serving segments
    /// * `Err(SchedulerError::Unservable)` if some request names the only
    ///   distinct resource available
    pub fn schedule<R, Q>(
        &self,
        resources: &[R],
        requests: &[Q],
    ) -> Result<SwitchPlan, SchedulerError>
    where
        R: AsRef<str>,
        Q: AsRef<str>,
    {
        let verbosity = self.config.verbosity;

        if resources.is_empty() || requests.is_empty() {
            log_checks!(
                verbosity,
                "  {} resources, {} requests: nothing to switch",
                resources.len(),
                requests.len()
            );
            return Ok(SwitchPlan::empty());
        }

        let index = OccurrenceIndex::build(resources, requests);
        log_debug!(
            verbosity,
            "  Indexed {} requests against {} distinct resources",
            index.request_count(),
            index.distinct_resources()
        );

        let mut state = SchedulerState::new();
        while state.phase == Phase::Scanning {
            // A switch stops at a conflicting request, which stays in the window.
            debug_assert!(state.offset < requests.len());

            log_debug!(
                verbosity,
                "  Window at {}: {:?}",
                state.offset,
                state
                    .window(requests)
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<&str>>()
            );

            let conflicts = index.conflicts_at(state.offset);
            log_checks!(
                verbosity,
                "  First conflicts: {}",
                resources
                    .iter()
                    .zip(conflicts.as_slice())
                    .map(|(r, c)| match c {
                        Some(k) => format!("{}@{}", r.as_ref(), state.offset + k),
                        None => format!("{}@none", r.as_ref()),
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            );

            if let Some(free) = conflicts.first_conflict_free() {
                log_checks!(
                    verbosity,
                    "  {} never conflicts in the remaining window",
                    resources[free].as_ref()
                );
                state.finish(resources[free].as_ref(), free, requests.len());
                continue;
            }

            // Resources are non-empty and none is conflict-free.
            let Some((chosen, conflict)) = conflicts.latest_conflict() else {
                unreachable!("every resource has a conflict in the window");
            };

            if conflict == 0 {
                return Err(SchedulerError::Unservable {
                    request: requests[state.offset].as_ref().to_string(),
                    position: state.offset,
                });
            }

            let end = state.offset + conflict;
            log_changes!(
                verbosity,
                "  Use {} for requests {}..{}, then switch",
                resources[chosen].as_ref(),
                state.offset,
                end
            );
            state.switch_at(resources[chosen].as_ref(), chosen, end);
        }

        log_changes!(verbosity, "  Total switches: {}", state.switches);
        Ok(state.into_plan())
    }
}

/// Minimum number of switches needed to serve `requests` with `resources`.
pub fn count_switches<R, Q>(resources: &[R], requests: &[Q]) -> Result<usize, SchedulerError>
where
    R: AsRef<str>,
    Q: AsRef<str>,
{
    SwitchScheduler::default()
        .schedule(resources, requests)
        .map(|plan| plan.switches)
}
