//! HTTP client for the dupe search service.
//!
//! [`DupeApi`] is the seam between the submit handler and the network; [`HttpDupeClient`]
//! is the reqwest implementation. There is no retry, timeout, or cancellation.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::FetchError;
use crate::types::{DupeParams, DupeResponse};

/// Path of the similarity search endpoint, relative to the API origin.
pub const DUPES_PATH: &str = "/dupes";
pub const NAMES_PATH: &str = "/names";
pub const HEALTH_PATH: &str = "/health";

/// What came back from `/dupes`. The body is only decoded for 2xx statuses.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: u16,
    pub body: Option<DupeResponse>,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can answer a dupe search.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait DupeApi {
    async fn fetch_dupes(&self, params: &DupeParams) -> Result<ApiReply, FetchError>;
}

/// reqwest-backed client for a dupe search service at `base_url`.
#[derive(Debug, Clone)]
pub struct HttpDupeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpDupeClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Ok(Self { http: reqwest::Client::new(), base_url: Url::parse(base_url)? })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        Ok(self.base_url.join(path)?)
    }

    /// Sorted list of every perfume name the service knows.
    pub async fn names(&self) -> Result<Vec<String>, FetchError> {
        let url = self.endpoint(NAMES_PATH)?;
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(FetchError::Transport)?;
        resp.json().await.map_err(FetchError::Decode)
    }

    /// Raw `/health` payload, normally `{"status":"ok"}`.
    pub async fn health(&self) -> Result<Value, FetchError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(FetchError::Transport)?;
        resp.json().await.map_err(FetchError::Decode)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl DupeApi for HttpDupeClient {
    async fn fetch_dupes(&self, params: &DupeParams) -> Result<ApiReply, FetchError> {
        let mut url = self.endpoint(DUPES_PATH)?;
        url.set_query(Some(&params.query_string()));
        debug!(url = url.as_str(), "GET dupes");

        let resp = self.http.get(url).send().await.map_err(FetchError::Transport)?;
        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            return Ok(ApiReply { status, body: None });
        }

        let body: DupeResponse = resp.json().await.map_err(FetchError::Decode)?;
        debug!(status, results = body.results.len(), "dupes reply");
        Ok(ApiReply { status, body: Some(body) })
    }
}
