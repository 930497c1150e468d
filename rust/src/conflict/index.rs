//! Conflict map type and the single-pass conflict scan.

use rustc_hash::FxHashMap;

/// First self-conflict of each resource within a request window.
///
/// Entries follow the enumeration order of the resource list. `None` means
/// the resource never meets its own identifier in the window and can serve
/// the rest of it without switching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConflictMap {
    conflicts: Vec<Option<usize>>,
}

impl ConflictMap {
    pub(crate) fn from_positions(conflicts: Vec<Option<usize>>) -> Self {
        Self { conflicts }
    }

    /// Number of resources covered.
    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// First conflict of the resource at `resource_position`, relative to the
    /// start of the window. `None` for conflict-free (or unknown) resources.
    pub fn get(&self, resource_position: usize) -> Option<usize> {
        self.conflicts.get(resource_position).copied().flatten()
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.conflicts
    }

    /// Position of the first-listed resource with no conflict in the window.
    pub fn first_conflict_free(&self) -> Option<usize> {
        self.conflicts.iter().position(Option::is_none)
    }

    /// The resource that can run longest before meeting its own identifier,
    /// as `(resource_position, conflict_index)`.
    ///
    /// Only resources with a conflict take part. On equal indices the
    /// first-listed resource wins.
    pub fn latest_conflict(&self) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize)> = None;
        for (position, conflict) in self.conflicts.iter().enumerate() {
            let Some(index) = *conflict else {
                continue;
            };
            match best {
                Some((_, best_index)) if best_index >= index => {}
                _ => best = Some((position, index)),
            }
        }
        best
    }
}

/// Compute the conflict map of `resources` over `window`.
///
/// The window is scanned once, left to right, recording the first position
/// of every distinct request. Each resource is then a single lookup, so a
/// resource absent from the window is detected without a scan of its own.
pub fn conflict_index<R, Q>(resources: &[R], window: &[Q]) -> ConflictMap
where
    R: AsRef<str>,
    Q: AsRef<str>,
{
    if resources.is_empty() {
        return ConflictMap::default();
    }

    let mut first_seen: FxHashMap<&str, usize> =
        FxHashMap::with_capacity_and_hasher(window.len(), Default::default());
    for (position, request) in window.iter().enumerate() {
        first_seen.entry(request.as_ref()).or_insert(position);
    }

    ConflictMap::from_positions(
        resources
            .iter()
            .map(|resource| first_seen.get(resource.as_ref()).copied())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engines() -> Vec<&'static str> {
        vec!["Yeehaw", "NSM", "Dont Ask", "B9", "Googol"]
    }

    fn queries() -> Vec<&'static str> {
        vec![
            "Yeehaw", "Yeehaw", "Googol", "B9", "Googol", "NSM", "B9", "NSM", "Dont Ask", "Googol",
        ]
    }

    #[test]
    fn test_first_occurrence_reported() {
        let map = conflict_index(&engines(), &queries());
        assert_eq!(
            map.as_slice(),
            &[Some(0), Some(5), Some(8), Some(3), Some(2)]
        );
        assert_eq!(map.first_conflict_free(), None);
        assert_eq!(map.latest_conflict(), Some((2, 8)));
    }

    #[test]
    fn test_empty_resources() {
        let map = conflict_index::<&str, &str>(&[], &["a", "b"]);
        assert!(map.is_empty());
        assert_eq!(map.latest_conflict(), None);
        assert_eq!(map.first_conflict_free(), None);
    }

    #[test]
    fn test_empty_window_is_conflict_free() {
        let map = conflict_index::<&str, &str>(&["X", "Y"], &[]);
        assert_eq!(map.as_slice(), &[None, None]);
        assert_eq!(map.first_conflict_free(), Some(0));
    }

    #[test]
    fn test_absent_resource_is_conflict_free() {
        let map = conflict_index(&["X", "Y"], &["Y", "Y"]);
        assert_eq!(map.get(0), None);
        assert_eq!(map.get(1), Some(0));
        assert_eq!(map.first_conflict_free(), Some(0));
    }

    #[test]
    fn test_tie_goes_to_first_listed() {
        // Duplicate identifiers share a conflict index; the earlier one wins.
        let map = conflict_index(&["B", "A", "B"], &["A", "B"]);
        assert_eq!(map.as_slice(), &[Some(1), Some(0), Some(1)]);
        assert_eq!(map.latest_conflict(), Some((0, 1)));
    }

    #[test]
    fn test_exact_case_sensitive_match() {
        let map = conflict_index(&["Googol"], &["googol", "Googol ", "GOOGOL"]);
        assert_eq!(map.get(0), None);
    }
}
