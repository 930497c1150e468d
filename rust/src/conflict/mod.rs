//! Conflict index: where each resource first meets a request bearing its own name.
//!
//! Two forms are provided. `conflict_index` is the direct pure function over a
//! resource list and a request window. `OccurrenceIndex` precomputes the
//! positions of every resource identifier once per case so that the conflict
//! map for any window suffix is a binary search per resource.

mod index;
mod occurrences;

pub use index::{conflict_index, ConflictMap};
pub use occurrences::OccurrenceIndex;
