use crate::domain::document::Hit;

/// In-memory holder for the most recently fetched hit list.
///
/// The index has two logical states, empty and populated, and `replace` is
/// the only transition between them. Contents are swapped wholesale on each
/// successful fetch; there are no partial updates and no merging. Callers in
/// multi-threaded environments must serialize access externally.
#[derive(Debug, Default)]
pub struct CollectionIndex {
    hits: Vec<Hit>,
}

impl CollectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards prior contents and stores the new sequence. No validation of
    /// uniqueness or ordering.
    pub fn replace(&mut self, hits: Vec<Hit>) {
        self.hits = hits;
    }

    /// Scans the stored sequence in original order and returns the first hit
    /// whose document title contains `needle` as a contiguous, case-sensitive
    /// substring. `None` if the index is empty or nothing matches.
    ///
    /// A linear scan is all the expected collection sizes warrant (a few
    /// thousand records at most).
    pub fn find_first_by_title_substring(&self, needle: &str) -> Option<&Hit> {
        self.hits.iter().find(|hit| hit.document.title.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
