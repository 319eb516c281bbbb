use isahc::http::{Response, StatusCode};
use isahc::{HttpClient, ReadResponseExt};
use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::encode::encode;

/// One frame matching a search query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResult {
    /// Identifier of the frame, not used for anything but diagnostics.
    pub id: i64,
    /// Episode the frame comes from, e.g. `S10E05`.
    pub episode: String,
    /// Position of the frame within the episode.
    pub timestamp: i64,
}

#[derive(Debug, Error, Diagnostic)]
pub enum SearchError {
    #[error("D'oh! I couldn't find anything for {query}")]
    NotFound { query: String },

    #[error("Could not reach the search service.")]
    Transport(#[from] isahc::Error),

    #[error("Could not read response of the search service.")]
    Body(#[source] std::io::Error),

    #[error("Search service returned unexpected data.")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can perform a single blocking GET request and hand back
/// the complete response body.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Response<String>, SearchError>;
}

impl Fetch for HttpClient {
    fn fetch(&self, url: &str) -> Result<Response<String>, SearchError> {
        let mut response = self.get(url)?;
        let body = response.text().map_err(SearchError::Body)?;

        Ok(response.map(|_| body))
    }
}

/// Address of the search endpoint for `query`.
pub fn search_url(base_url: &str, query: &str) -> String {
    format!("{base_url}/api/search?q={}", encode(query))
}

/// Search for frames matching `query`. Succeeds only with at least one result.
pub fn search<F>(fetch: &F, base_url: &str, query: &str) -> Result<Vec<SearchResult>, SearchError>
where
    F: Fetch + ?Sized,
{
    let url = search_url(base_url, query);

    debug!(%url, "Searching.");

    let response = fetch.fetch(&url)?;

    if response.status() != StatusCode::OK {
        debug!(status = %response.status(), "Search did not succeed.");
        return Err(SearchError::NotFound {
            query: query.to_string(),
        });
    }

    let results: Vec<SearchResult> = serde_json::from_str(response.body())?;

    debug!(count = results.len(), "Search finished.");

    if results.is_empty() {
        Err(SearchError::NotFound {
            query: query.to_string(),
        })
    } else {
        Ok(results)
    }
}
