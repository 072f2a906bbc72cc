use std::sync::{Arc, Mutex};

use log::{error, info};

use crate::domain::collection::{CollectionSearch, SearchCriteria, SearchError};
use crate::domain::document::Hit;
use crate::domain::host::{EditorSurface, Notifier};
use crate::domain::index::CollectionIndex;

const FETCH_FAILED_MESSAGE: &str = "Failed to fetch the comic collection.";

/// Orchestrates fetch, lookup and render for the host editor.
///
/// Holds the remote client and the in-memory index behind a mutex; the index
/// is only ever swapped wholesale. Concurrent refreshes are not coordinated:
/// whichever completes last wins, which is fine for the single-user editor
/// usage this serves.
pub struct FetcherService {
    client: Arc<dyn CollectionSearch>,
    notifier: Arc<dyn Notifier>,
    index: Mutex<CollectionIndex>,
}

impl FetcherService {
    pub fn new(client: Arc<dyn CollectionSearch>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            index: Mutex::new(CollectionIndex::new()),
        }
    }

    /// Fetches the full collection and swaps it into the index.
    ///
    /// On failure the error is logged, the user is notified once, and the
    /// index keeps its prior contents. Returns whether the refresh succeeded;
    /// no typed error reaches the initiating action.
    pub async fn refresh(&self) -> bool {
        self.apply_fetch_result(self.client.fetch_all().await)
    }

    /// Like [`refresh`](Self::refresh), but scopes the fetch to structured
    /// search criteria.
    pub async fn refresh_with(&self, criteria: &SearchCriteria) -> bool {
        self.apply_fetch_result(self.client.search(criteria).await)
    }

    fn apply_fetch_result(&self, result: Result<Vec<Hit>, SearchError>) -> bool {
        match result {
            Ok(hits) => {
                info!("Fetched {} hits, replacing index contents.", hits.len());
                self.index.lock().unwrap().replace(hits);
                true
            }
            Err(e) => {
                error!("Error fetching comic collection: {}", e);
                self.notifier.notify(FETCH_FAILED_MESSAGE);
                false
            }
        }
    }

    /// Title-substring lookup against the current index contents.
    pub fn find_comic(&self, needle: &str) -> Option<Hit> {
        self.index
            .lock()
            .unwrap()
            .find_first_by_title_substring(needle)
            .cloned()
    }

    /// Looks up the first comic matching `needle` and replaces the editor
    /// contents with an image reference to it. Writes nothing and returns
    /// false when there is no match; an empty index is a normal outcome here,
    /// not a failure.
    pub fn insert_first_match(&self, needle: &str, editor: &dyn EditorSurface) -> bool {
        match self.find_comic(needle) {
            Some(hit) => {
                editor.replace_contents(&format!("![]({})", hit.document.image_url));
                true
            }
            None => {
                info!("No comic matching '{}' in the index.", needle);
                false
            }
        }
    }

    /// Number of hits currently held by the index. Lets the host report how
    /// much of the collection the last successful fetch brought in.
    pub fn hit_count(&self) -> usize {
        self.index.lock().unwrap().len()
    }
}
