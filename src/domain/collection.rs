use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::document::Hit;

/// Failure modes of one round trip to the remote search service.
///
/// The taxonomy is exhaustive; none of these are retried automatically. The
/// caller decides whether to surface or retry.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network failure, or a response with a non-success HTTP status.
    #[error("transport failure{}: {detail}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Transport { status: Option<u16>, detail: String },
    /// A well-formed response body that is missing the `hits` field.
    #[error("no hits found in the search response")]
    EmptyResult,
    /// A response body that is not well-formed JSON of the expected shape.
    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A k-nearest-neighbour clause blended with keyword relevance.
///
/// Rendered into the remote service's string form, e.g.
/// `embedding:([], k: 30, distance_threshold: 0.1, alpha: 0.9)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorQuery {
    /// Name of the embedding field to search against.
    pub field: String,
    /// Number of nearest neighbours to request.
    pub k: u32,
    /// Maximum vector distance for a neighbour to qualify.
    pub distance_threshold: f32,
    /// Blend factor between keyword score and vector score.
    pub alpha: f32,
}

impl VectorQuery {
    pub fn to_clause(&self) -> String {
        format!(
            "{}:([], k: {}, distance_threshold: {}, alpha: {})",
            self.field, self.k, self.distance_threshold, self.alpha
        )
    }
}

/// Structured search criteria, passed through to the remote service verbatim.
///
/// Field semantics are defined by the remote service; this crate does not
/// interpret or validate them beyond shape. `num_typos` in particular may be
/// `-1` (the remote library's own default).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub q: String,
    /// Comma-separated field list to search.
    pub query_by: String,
    /// Comma-separated relative weights, matching `query_by` positionally.
    pub query_by_weights: String,
    pub num_typos: i32,
    pub exclude_fields: String,
    pub vector_query: Option<VectorQuery>,
    pub highlight_full_fields: String,
    pub facet_by: String,
    pub filter_by: String,
    pub max_facet_values: u32,
    pub page: u32,
    pub per_page: u32,
}

impl Default for SearchCriteria {
    /// Mirrors the field weighting the hosted comic index is tuned for:
    /// titles dominate, transcripts matter, topic tags barely register.
    fn default() -> Self {
        Self {
            q: String::new(),
            query_by: "title,altTitle,transcript,topics".to_string(),
            query_by_weights: "127,80,80,1".to_string(),
            num_typos: 1,
            exclude_fields: "embedding".to_string(),
            vector_query: None,
            highlight_full_fields: "title,altTitle,transcript,topics".to_string(),
            facet_by: "topics".to_string(),
            filter_by: String::new(),
            max_facet_values: 99,
            page: 1,
            per_page: 30,
        }
    }
}

/// One round trip to the remote document-search service.
///
/// Implementations perform exactly one outbound request per invocation and
/// mutate no local state. Concurrent calls are neither coordinated nor
/// deduplicated here.
#[async_trait]
pub trait CollectionSearch: Send + Sync {
    /// Requests all documents in the collection (unfiltered query).
    async fn fetch_all(&self) -> Result<Vec<Hit>, SearchError>;

    /// Requests documents matching structured criteria.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Hit>, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_query_renders_remote_clause_syntax() {
        let vq = VectorQuery {
            field: "embedding".to_string(),
            k: 30,
            distance_threshold: 0.1,
            alpha: 0.9,
        };
        assert_eq!(
            vq.to_clause(),
            "embedding:([], k: 30, distance_threshold: 0.1, alpha: 0.9)"
        );
    }

    #[test]
    fn transport_error_message_includes_status_when_known() {
        let with_status = SearchError::Transport {
            status: Some(500),
            detail: "internal server error".to_string(),
        };
        assert_eq!(
            with_status.to_string(),
            "transport failure (status 500): internal server error"
        );

        let without_status = SearchError::Transport {
            status: None,
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            without_status.to_string(),
            "transport failure: connection refused"
        );
    }
}
