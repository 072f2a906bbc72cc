use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::SearchConfig;
use crate::domain::collection::{CollectionSearch, SearchCriteria, SearchError};
use crate::domain::document::Hit;

const API_KEY_PARAM: &str = "x-typesense-api-key";

/// Client for a hosted Typesense document-search service.
///
/// Each call performs exactly one round trip: no retry, no timeout override,
/// no pagination. Endpoint, collection name and API key all come from
/// [`SearchConfig`].
pub struct TypesenseClient {
    http: reqwest::Client,
    config: SearchConfig,
}

/// One entry of the `searches` array in a structured search request. The
/// remote service defines the field semantics; values pass through verbatim.
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query_by: &'a str,
    query_by_weights: &'a str,
    num_typos: i32,
    exclude_fields: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    vector_query: Option<String>,
    highlight_full_fields: &'a str,
    collection: &'a str,
    q: &'a str,
    facet_by: &'a str,
    filter_by: &'a str,
    max_facet_values: u32,
    page: u32,
    per_page: u32,
}

#[derive(Debug, Serialize)]
struct SearchRequestBody<'a> {
    searches: Vec<SearchRequest<'a>>,
}

impl TypesenseClient {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn search_url(&self) -> String {
        format!(
            "{}/collections/{}/documents/search",
            self.config.api_url.trim_end_matches('/'),
            self.config.collection
        )
    }

    /// Extracts the hit sequence from a response, preserving wire order.
    async fn decode_hits(&self, response: reqwest::Response) -> Result<Vec<Hit>, SearchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Transport {
                status: Some(status.as_u16()),
                detail: status
                    .canonical_reason()
                    .unwrap_or("non-success status")
                    .to_string(),
            });
        }

        let body = response.text().await.map_err(|e| SearchError::Transport {
            status: None,
            detail: e.to_string(),
        })?;

        let parsed: Value = serde_json::from_str(&body)?;
        let hits_value = parsed.get("hits").cloned().ok_or(SearchError::EmptyResult)?;
        let hits: Vec<Hit> = serde_json::from_value(hits_value)?;
        log::debug!("Decoded {} hits from search response.", hits.len());
        Ok(hits)
    }
}

#[async_trait]
impl CollectionSearch for TypesenseClient {
    async fn fetch_all(&self) -> Result<Vec<Hit>, SearchError> {
        let url = self.search_url();
        log::info!(
            "Fetching full collection '{}' from {}...",
            self.config.collection,
            self.config.api_url
        );

        let mut request = self
            .http
            .get(&url)
            .query(&[("q", "*"), ("use_cache", "true")]);
        if !self.config.api_key.is_empty() {
            request = request.query(&[(API_KEY_PARAM, self.config.api_key.as_str())]);
        }

        let response = request.send().await.map_err(|e| SearchError::Transport {
            status: e.status().map(|s| s.as_u16()),
            detail: e.to_string(),
        })?;
        self.decode_hits(response).await
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Hit>, SearchError> {
        let url = self.search_url();
        log::info!(
            "Searching collection '{}' for '{}'...",
            self.config.collection,
            criteria.q
        );

        let body = SearchRequestBody {
            searches: vec![SearchRequest {
                query_by: &criteria.query_by,
                query_by_weights: &criteria.query_by_weights,
                num_typos: criteria.num_typos,
                exclude_fields: &criteria.exclude_fields,
                vector_query: criteria.vector_query.as_ref().map(|vq| vq.to_clause()),
                highlight_full_fields: &criteria.highlight_full_fields,
                collection: &self.config.collection,
                q: &criteria.q,
                facet_by: &criteria.facet_by,
                filter_by: &criteria.filter_by,
                max_facet_values: criteria.max_facet_values,
                page: criteria.page,
                per_page: criteria.per_page,
            }],
        };

        let mut request = self.http.post(&url).json(&body);
        if !self.config.api_key.is_empty() {
            request = request.query(&[(API_KEY_PARAM, self.config.api_key.as_str())]);
        }

        let response = request.send().await.map_err(|e| SearchError::Transport {
            status: e.status().map(|s| s.as_u16()),
            detail: e.to_string(),
        })?;
        self.decode_hits(response).await
    }
}
