//! Per-case occurrence index over the full request sequence.

use rustc_hash::FxHashMap;

use super::index::ConflictMap;

/// Sorted positions of every resource identifier in the request sequence.
///
/// Built once per case. Each distinct resource identifier gets a slot;
/// copies of the same identifier share it. Requests that name no resource
/// are not recorded.
#[derive(Debug, Clone)]
pub struct OccurrenceIndex<'a> {
    slots: FxHashMap<&'a str, usize>,
    /// Slot of each resource, in resource-list order.
    resource_slots: Vec<usize>,
    /// Ascending request positions per slot.
    positions: Vec<Vec<usize>>,
    request_count: usize,
}

impl<'a> OccurrenceIndex<'a> {
    pub fn build<R, Q>(resources: &'a [R], requests: &[Q]) -> Self
    where
        R: AsRef<str>,
        Q: AsRef<str>,
    {
        let mut slots: FxHashMap<&'a str, usize> =
            FxHashMap::with_capacity_and_hasher(resources.len(), Default::default());
        let resource_slots: Vec<usize> = resources
            .iter()
            .map(|resource| {
                let next = slots.len();
                *slots.entry(resource.as_ref()).or_insert(next)
            })
            .collect();

        let mut positions = vec![Vec::new(); slots.len()];
        for (position, request) in requests.iter().enumerate() {
            if let Some(&slot) = slots.get(request.as_ref()) {
                positions[slot].push(position);
            }
        }

        Self {
            slots,
            resource_slots,
            positions,
            request_count: requests.len(),
        }
    }

    /// Number of distinct resource identifiers.
    pub fn distinct_resources(&self) -> usize {
        self.slots.len()
    }

    pub fn request_count(&self) -> usize {
        self.request_count
    }

    /// How often `identifier` occurs among the requests (0 for non-resources).
    pub fn occurrences(&self, identifier: &str) -> usize {
        self.slots
            .get(identifier)
            .map_or(0, |&slot| self.positions[slot].len())
    }

    /// Conflict map for the window `requests[offset..]`.
    ///
    /// Indices in the result are relative to `offset`, matching what
    /// `conflict_index` reports for the same window.
    pub fn conflicts_at(&self, offset: usize) -> ConflictMap {
        ConflictMap::from_positions(
            self.resource_slots
                .iter()
                .map(|&slot| {
                    let positions = &self.positions[slot];
                    let next = positions.partition_point(|&p| p < offset);
                    positions.get(next).map(|&p| p - offset)
                })
                .collect(),
        )
    }
}
