//! HTTP implementation of the search API

use super::error::{ApiError, Result};
use super::{SearchApi, SearchResult};
use reqwest::{StatusCode, Url};
use reqwest::blocking::Client;

const SEARCH_PATH: &str = "api/v1/search";
const USER_AGENT: &str = concat!("blockscope/", env!("CARGO_PKG_VERSION"));

/// Search API backed by the explorer's `GET /api/v1/search` endpoint
#[derive(Debug, Clone)]
pub struct HttpSearchApi {
    client: Client,
    search_url: Url,
}

impl HttpSearchApi {
    /// Create a client for the explorer at `endpoint` (e.g. `http://localhost:8081`)
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidEndpoint` if the endpoint is not an absolute
    /// http(s) URL, or `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(endpoint: &str, user_agent: Option<&str>) -> Result<Self> {
        let search_url = Self::search_url(endpoint)?;
        let client = Client::builder()
            .user_agent(user_agent.map_or_else(|| USER_AGENT.to_owned(), ToOwned::to_owned))
            .build()?;

        Ok(Self { client, search_url })
    }

    /// Resolve the search URL for an endpoint, tolerating a trailing slash
    fn search_url(endpoint: &str) -> Result<Url> {
        let mut base = Url::parse(endpoint)
            .map_err(|e| ApiError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ApiError::InvalidEndpoint(format!(
                "{endpoint}: unsupported scheme '{}'",
                base.scheme()
            )));
        }

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base.join(SEARCH_PATH)
            .map_err(|e| ApiError::InvalidEndpoint(format!("{endpoint}: {e}")))
    }

    /// URL searches are sent to
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.search_url
    }
}

impl SearchApi for HttpSearchApi {
    fn search(&self, query: &str) -> Result<SearchResult> {
        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[("query", query)])
            .send()?;

        let status = response.status();
        let body = response.text()?;
        tracing::debug!(%status, bytes = body.len(), "search response received");

        decode(status, &body)
    }
}

/// Parse a search response body
///
/// Error statuses still carry a `wasSuccess: false` body with a message, so
/// the body is tried first whatever the status.
fn decode(status: StatusCode, body: &str) -> Result<SearchResult> {
    match serde_json::from_str::<SearchResult>(body) {
        Ok(result) => Ok(result),
        Err(_) if !status.is_success() => Err(ApiError::Status(status.as_u16())),
        Err(e) => Err(e.into()),
    }
}
