//! Scratch state for one scheduling run.

use crate::models::{Segment, SwitchPlan};

/// Where the greedy loop currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Still looking for a resource that can finish the window.
    Scanning,
    /// No further switch is needed.
    Done,
}

/// Working window and counters for a single case.
///
/// The window is kept as an offset into the request sequence, so it is a
/// suffix by construction and can only shrink.
#[derive(Clone, Debug)]
pub struct SchedulerState {
    pub offset: usize,
    pub switches: usize,
    pub phase: Phase,
    segments: Vec<Segment>,
}

impl SchedulerState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            switches: 0,
            phase: Phase::Scanning,
            segments: Vec::new(),
        }
    }

    /// The unresolved suffix of `requests`.
    pub fn window<'a, Q>(&self, requests: &'a [Q]) -> &'a [Q] {
        &requests[self.offset..]
    }

    /// Serve up to `end` (exclusive) with the given resource and switch away.
    ///
    /// `end` must lie strictly past the current offset.
    pub fn switch_at(&mut self, resource: &str, resource_position: usize, end: usize) {
        debug_assert!(end > self.offset, "window must shrink on every switch");
        self.segments.push(Segment {
            resource: resource.to_string(),
            resource_position,
            start: self.offset,
            end,
        });
        self.offset = end;
        self.switches += 1;
    }

    /// Serve the remaining window with the given resource and stop.
    pub fn finish(&mut self, resource: &str, resource_position: usize, end: usize) {
        if end > self.offset {
            self.segments.push(Segment {
                resource: resource.to_string(),
                resource_position,
                start: self.offset,
                end,
            });
            self.offset = end;
        }
        self.phase = Phase::Done;
    }

    pub fn into_plan(self) -> SwitchPlan {
        SwitchPlan {
            switches: self.switches,
            segments: self.segments,
        }
    }
}

impl Default for SchedulerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_then_finish() {
        let requests = ["X", "Y", "X"];
        let mut state = SchedulerState::new();
        assert_eq!(state.window(&requests).len(), 3);

        state.switch_at("Y", 1, 1);
        assert_eq!(state.switches, 1);
        assert_eq!(state.window(&requests), &["Y", "X"]);
        assert_eq!(state.phase, Phase::Scanning);

        state.finish("X", 0, 3);
        assert_eq!(state.phase, Phase::Done);

        let plan = state.into_plan();
        assert_eq!(plan.switches, 1);
        assert_eq!(plan.segments.len(), 2);
        assert_eq!((plan.segments[1].start, plan.segments[1].end), (1, 3));
    }

    #[test]
    fn test_finish_on_empty_window_adds_no_segment() {
        let mut state = SchedulerState::new();
        state.finish("X", 0, 0);
        assert_eq!(state.phase, Phase::Done);
        assert!(state.into_plan().segments.is_empty());
    }
}
