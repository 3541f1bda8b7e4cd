//! Resource-level entry point.

use dbv_core::config::{ApiConfig, Environment};
use dbv_core::error::DbvResult;

use crate::client::ApiClient;

/// Typed client for the DataBeaver API.
///
/// Exposes one method per resource and access pattern (see the `endpoints`
/// modules). Each method is a direct delegation to [`ApiClient`].
#[derive(Debug, Clone)]
pub struct Client {
    api: ApiClient,
}

impl Client {
    /// Create a client for `environment` authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>, environment: Environment) -> DbvResult<Self> {
        Self::from_config(&ApiConfig::new(api_key, environment))
    }

    /// Create a client from a loaded configuration.
    pub fn from_config(config: &ApiConfig) -> DbvResult<Self> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }

    /// Wrap an existing transport client.
    pub fn from_api_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// The underlying transport, for raw envelope access.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}
