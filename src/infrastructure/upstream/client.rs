//! HTTP client for the upstream message API.

use async_trait::async_trait;
use reqwest::{redirect, Client as ReqwestClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Message, MessageEnvelope, UpstreamConfig};
use crate::domain::ports::MessageSource;

/// Fetches the full message collection from the upstream API.
///
/// Every call goes to the network; wrap it in
/// [`CachedMessageSource`](crate::adapters::cache::CachedMessageSource)
/// to serve repeated reads from memory.
#[derive(Debug, Clone)]
pub struct HttpMessageSource {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,

    url: String,
}

impl HttpMessageSource {
    /// Build a client from upstream configuration.
    ///
    /// # Default Configuration
    /// - Timeout: 10 seconds
    /// - Redirects: followed, up to 10 hops
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(redirect::Policy::limited(config.max_redirects))
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            http_client,
            url: config.url.clone(),
        })
    }

    /// Endpoint this source fetches from
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MessageSource for HttpMessageSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_all(&self) -> DomainResult<Arc<Vec<Message>>> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, timeout = e.is_timeout(), "upstream request failed");
                DomainError::Upstream(describe_transport_error(&e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "upstream returned non-success status");
            return Err(DomainError::Upstream(format!(
                "{status} returned by {}",
                self.url
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, "failed to read upstream body");
            DomainError::Upstream(describe_transport_error(&e))
        })?;

        let envelope: MessageEnvelope = serde_json::from_slice(&body)?;

        debug!(
            items = envelope.items.len(),
            reported_total = ?envelope.total,
            "fetched upstream messages"
        );

        Ok(Arc::new(envelope.items))
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    }
}
