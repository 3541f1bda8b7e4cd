//! HTTP transport for the DataBeaver REST API.
//!
//! Builds `/v1/` resource URLs, attaches bearer auth, issues GET requests,
//! maps HTTP statuses to `DbvError`, and hands the parsed envelope to the
//! normalization helpers in `response`.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use dbv_core::config::{ApiConfig, Environment};
use dbv_core::constants::{self, params};
use dbv_core::error::{DbvError, DbvResult};

use crate::query::QueryParams;
use crate::response::{Envelope, Page};

/// Low-level client for the DataBeaver REST API.
///
/// Holds only immutable configuration, so it is cheap to clone and safe to
/// share across tasks. No retries, caching, or timeouts are added on top of
/// the underlying `reqwest::Client`.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    /// Environment base URL (e.g. "https://api.developer.databeaver.co").
    base_url: Url,
    /// Bearer token sent with every request.
    api_key: String,
}

impl ApiClient {
    /// Create a new ApiClient from configuration.
    pub fn new(config: &ApiConfig) -> DbvResult<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let inner = builder
            .build()
            .map_err(|e| DbvError::Http(format!("failed to build HTTP client: {e}")))?;

        Self::with_http_client(inner, &config.api_key, &config.environment)
    }

    /// Create an ApiClient around a caller-configured `reqwest::Client`.
    pub fn with_http_client(
        inner: Client,
        api_key: impl Into<String>,
        environment: &Environment,
    ) -> DbvResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(DbvError::MissingConfig("api_key".into()));
        }

        let base_url = parse_base_url(environment.base_url())?;
        debug!("api client targeting {base_url}");

        Ok(Self {
            inner,
            base_url,
            api_key,
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/v1/{segments...}`, percent-encoding each segment.
    fn resource_url(&self, segments: &[&str]) -> DbvResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DbvError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(constants::API_VERSION)
            .extend(segments);
        Ok(url)
    }

    /// Issue a GET and parse the response envelope.
    async fn send_request(&self, url: Url, query: &QueryParams) -> DbvResult<Envelope> {
        debug!("GET {} {:?}", url.path(), query.as_pairs());

        let mut builder = self.inner.get(url).bearer_auth(&self.api_key);
        if !query.is_empty() {
            builder = builder.query(query.as_pairs());
        }

        let response = builder.send().await.map_err(Self::classify_error)?;
        let response = Self::check_status(response).await?;
        Self::parse_response(response).await
    }

    // --- Public request methods ---

    /// Fetch `{prefix}` with the given query and return the untyped envelope.
    ///
    /// Every non-success status is an error here, including 404.
    pub async fn get_envelope(&self, prefix: &str, query: &QueryParams) -> DbvResult<Envelope> {
        let url = self.resource_url(&[prefix])?;
        self.send_request(url, query).await
    }

    /// Fetch `{prefix}/{id}` as a single entity.
    ///
    /// A 404 is returned as `Ok(None)`, as is an envelope reporting failure.
    /// An empty id matches nothing and sends no request.
    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        prefix: &str,
        id: &str,
    ) -> DbvResult<Option<T>> {
        if id.is_empty() {
            debug!("{prefix} lookup with empty id");
            return Ok(None);
        }
        let url = self.resource_url(&[prefix, id])?;
        match self.send_request(url, &QueryParams::new()).await {
            Ok(envelope) => envelope.into_entity(),
            Err(e) if e.is_not_found() => {
                debug!("{prefix}/{id} not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch the first `{prefix}` record whose `key` equals `value`.
    ///
    /// A 404, a failed envelope, or an empty result are all `Ok(None)`.
    pub async fn get_one_by<T: DeserializeOwned>(
        &self,
        prefix: &str,
        key: &str,
        value: &str,
    ) -> DbvResult<Option<T>> {
        let mut query = QueryParams::new();
        query.set(key, value);
        query.set(params::PER_PAGE, "1");

        match self.get_envelope(prefix, &query).await {
            Ok(envelope) => envelope.into_first(),
            Err(e) if e.is_not_found() => {
                debug!("{prefix} with {key} not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch one page of `{prefix}` records.
    ///
    /// An envelope reporting failure yields an empty page rather than an error.
    pub async fn get_by<T: DeserializeOwned>(
        &self,
        prefix: &str,
        query: &QueryParams,
    ) -> DbvResult<Page<T>> {
        let envelope = self.get_envelope(prefix, query).await?;
        if !envelope.is_success() {
            debug!("{prefix} list reported failure, returning empty page");
        }
        envelope.into_page()
    }

    // --- Response helpers ---

    /// Deserialize a response body into an untyped envelope.
    async fn parse_response(response: Response) -> DbvResult<Envelope> {
        response
            .json::<Envelope>()
            .await
            .map_err(|e| DbvError::Serialization(format!("failed to parse response: {e}")))
    }

    /// Check the HTTP status code and convert to DbvError if needed.
    async fn check_status(response: Response) -> DbvResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let mut url = response.url().clone();
        url.set_query(None);
        let body = response.text().await.unwrap_or_default();

        Err(match status {
            StatusCode::NOT_FOUND => DbvError::NotFound {
                url: url.to_string(),
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DbvError::AuthFailed {
                status: status.as_u16(),
                message: body,
            },
            _ => DbvError::ServerError {
                status: status.as_u16(),
                message: body,
            },
        })
    }

    /// Classify a reqwest error into a DbvError variant.
    fn classify_error(e: reqwest::Error) -> DbvError {
        if e.is_timeout() {
            DbvError::Timeout(e.to_string())
        } else if e.is_connect() {
            DbvError::Http(format!("connection failed: {e}"))
        } else {
            DbvError::Http(e.to_string())
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Parse an environment base URL, rejecting URLs that cannot take a path.
fn parse_base_url(address: &str) -> DbvResult<Url> {
    let url = Url::parse(address).map_err(|e| DbvError::InvalidUrl(format!("{address}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(DbvError::InvalidUrl(address.to_string()));
    }
    Ok(url)
}
