//! Request dispatcher
//!
//! [`Client`] executes exactly one HTTP call per invocation: it normalizes
//! the endpoint against the configured base URL, waits for rate-gate
//! admission, issues the request with bearer authentication, and decodes the
//! JSON envelope into a caller-supplied shape. There is no retry layer — a
//! single failure surfaces immediately and the caller decides what to do.

use super::rate_limit::RateGate;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{Envelope, Page};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::RwLock;
use std::time::Duration;
use tracing::debug;

/// Client for the Kanka API
///
/// Cheap to share behind an `Arc` across many concurrent tasks: all fields
/// are read-only after construction except the rate gate's admission state
/// and the base URL, which is re-checked (and re-upgraded under force-TLS)
/// on every dispatch.
pub struct Client {
    http: reqwest::Client,
    base_url: RwLock<String>,
    force_tls: bool,
    token: String,
    timeout: Duration,
    gate: RateGate,
}

impl Client {
    /// Create a new client from a configuration
    ///
    /// Validates the base URL and, when TLS enforcement is on, upgrades an
    /// `http://` base to `https://` up front.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut base_url = config.base_url.trim_end_matches('/').to_string();
        if config.force_tls {
            base_url = upgrade_insecure(&base_url);
        }
        url::Url::parse(&base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("kanka-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let gate = RateGate::new(config.effective_max_requests(), config.rate_reset_interval);

        Ok(Self {
            http,
            base_url: RwLock::new(base_url),
            force_tls: config.force_tls,
            token: config.token,
            timeout: config.timeout,
            gate,
        })
    }

    /// Current base URL
    pub fn base_url(&self) -> String {
        self.base_url.read().expect("base URL lock poisoned").clone()
    }

    /// Replace the base URL
    ///
    /// Dispatch re-validates the stored URL on every call, so a downgraded
    /// scheme is upgraded again before the next request leaves the client.
    pub fn set_base_url(&self, base_url: impl Into<String>) {
        let mut guard = self.base_url.write().expect("base URL lock poisoned");
        *guard = base_url.into().trim_end_matches('/').to_string();
    }

    /// Handle on the rate gate
    pub fn rate_gate(&self) -> &RateGate {
        &self.gate
    }

    /// Change the rate gate's release delay (test acceleration only)
    pub fn set_rate_limit_reset_interval(&self, interval: Duration) {
        self.gate.set_reset_interval(interval);
    }

    /// Execute one HTTP call and decode the response envelope
    ///
    /// `endpoint` is either a bare path (`/campaigns`) or, when following a
    /// pagination link, an absolute URL that must share the client's base
    /// URL. Returns the decoded payload and the next-page cursor.
    /// Cancellation is cooperative: dropping the returned future aborts the
    /// request; capacity already consumed from the rate gate is still
    /// returned by its timer.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
    ) -> Result<Page<T>> {
        let path = self.normalize_endpoint(endpoint)?;

        // Defensive re-upgrade in case the stored base URL was mutated
        // between calls. Idempotent, so racing dispatchers are harmless.
        if self.force_tls {
            let mut base = self.base_url.write().expect("base URL lock poisoned");
            if base.starts_with("http://") {
                let upgraded = upgrade_insecure(&base);
                *base = upgraded;
            }
        }

        let url = format!("{}{}", self.base_url(), path);
        let request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json");

        // Admission blocks here when the per-interval quota is exhausted.
        self.gate.acquire().await;

        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();

        // Redirects are already followed by the transport; anything outside
        // [200, 400) is a failure.
        if !(200..400).contains(&status.as_u16()) {
            return Err(Error::http_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.to_lowercase().contains("application/json") {
            return Err(Error::unexpected_content_type(status.as_u16(), content_type));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;

        let next = if envelope.meta.has_more_pages() {
            envelope.links.next.filter(|n| !n.is_empty())
        } else {
            None
        };

        debug!(%method, %url, next = next.is_some(), "request succeeded");
        Ok(Page {
            data: envelope.data,
            next,
        })
    }

    /// Reduce an endpoint to a path relative to the configured base URL
    ///
    /// Absolute endpoints are scheme-upgraded under force-TLS and must be
    /// prefixed by the base URL; a foreign prefix fails before any network
    /// call is made.
    fn normalize_endpoint(&self, endpoint: &str) -> Result<String> {
        let mut endpoint = endpoint.to_string();

        if self.force_tls && endpoint.starts_with("http://") {
            endpoint = upgrade_insecure(&endpoint);
        }

        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            let base = self.base_url();
            match endpoint.strip_prefix(&base) {
                Some(rest) => endpoint = rest.to_string(),
                None => return Err(Error::base_url_mismatch(endpoint, base)),
            }
        }

        Ok(endpoint)
    }

    /// Classify a transport error, splitting out deadline expiry
    fn classify(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            Error::Http(error)
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url())
            .field("force_tls", &self.force_tls)
            .field("has_token", &!self.token.is_empty())
            .field("timeout", &self.timeout)
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

/// Rewrite an `http://` URL to `https://`
fn upgrade_insecure(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("http://") {
        format!("https://{rest}")
    } else {
        url.to_string()
    }
}
