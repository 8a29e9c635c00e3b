//! Client configuration
//!
//! Defaults mirror the public Kanka API: the 1.0 base URL, TLS enforced,
//! a 15 second request timeout, and the documented 30-requests-per-minute
//! rate limit.

use std::time::Duration;

/// Default 1.0 base URL for the Kanka API
pub const BASE_URL_V1: &str = "https://kanka.io/api/1.0";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default number of requests admitted per rate interval
pub const DEFAULT_MAX_REQUESTS_PER_INTERVAL: u32 = 30;

/// Default rate interval (the API limit is per minute)
pub const DEFAULT_RATE_RESET_INTERVAL: Duration = Duration::from_secs(60);

/// Configuration for [`Client`](crate::Client)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Upgrade `http://` URLs to `https://`
    pub force_tls: bool,
    /// Bearer token for the `Authorization` header
    pub token: String,
    /// Request timeout
    pub timeout: Duration,
    /// Requests admitted per rate interval; 0 falls back to the default of 30
    pub max_requests_per_interval: u32,
    /// Rolling interval after which each admission's capacity is returned.
    /// Changing this from one minute breaks the per-minute semantics of
    /// `max_requests_per_interval`; it exists to speed up tests.
    pub rate_reset_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL_V1.to_string(),
            force_tls: true,
            token: String::new(),
            timeout: DEFAULT_TIMEOUT,
            max_requests_per_interval: DEFAULT_MAX_REQUESTS_PER_INTERVAL,
            rate_reset_interval: DEFAULT_RATE_RESET_INTERVAL,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Requests per interval with the zero-value clamped to the default
    pub(crate) fn effective_max_requests(&self) -> u32 {
        if self.max_requests_per_interval == 0 {
            DEFAULT_MAX_REQUESTS_PER_INTERVAL
        } else {
            self.max_requests_per_interval
        }
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Enable or disable TLS enforcement
    pub fn force_tls(mut self, force: bool) -> Self {
        self.config.force_tls = force;
        self
    }

    /// Set the bearer token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = token.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the number of requests admitted per rate interval
    pub fn max_requests_per_interval(mut self, max: u32) -> Self {
        self.config.max_requests_per_interval = max;
        self
    }

    /// Set the rate interval (test acceleration only)
    pub fn rate_reset_interval(mut self, interval: Duration) -> Self {
        self.config.rate_reset_interval = interval;
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
