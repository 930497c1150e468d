//! Core data types for the switching problem.

/// One parsed case: the resource set and the request sequence it must serve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Case {
    /// Resource identifiers in their listed order (order decides ties).
    pub resources: Vec<String>,
    /// Requests in the order they must be served.
    pub requests: Vec<String>,
}

impl Case {
    pub fn new(resources: Vec<String>, requests: Vec<String>) -> Self {
        Self {
            resources,
            requests,
        }
    }
}

/// A contiguous run of requests served by one resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Identifier of the serving resource.
    pub resource: String,
    /// Position of the serving resource in the case's resource list.
    pub resource_position: usize,
    /// First request served (absolute index into the request sequence).
    pub start: usize,
    /// One past the last request served.
    pub end: usize,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Result of scheduling one case.
///
/// `segments` is empty when there were no resources or no requests;
/// otherwise it covers every request and holds `switches + 1` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwitchPlan {
    pub switches: usize,
    pub segments: Vec<Segment>,
}

impl SwitchPlan {
    /// Plan for a case that needs no resource at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The resource active when serving starts, if any.
    pub fn initial_resource(&self) -> Option<&str> {
        self.segments.first().map(|s| s.resource.as_str())
    }
}

/// A solved case, numbered from 1 in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseResult {
    pub case_number: usize,
    pub plan: SwitchPlan,
}

impl CaseResult {
    pub fn switches(&self) -> usize {
        self.plan.switches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan() {
        let plan = SwitchPlan::empty();
        assert_eq!(plan.switches, 0);
        assert!(plan.segments.is_empty());
        assert_eq!(plan.initial_resource(), None);
    }

    #[test]
    fn test_segment_len() {
        let segment = Segment {
            resource: "NSM".to_string(),
            resource_position: 1,
            start: 8,
            end: 10,
        };
        assert_eq!(segment.len(), 2);
        assert!(!segment.is_empty());
    }
}
