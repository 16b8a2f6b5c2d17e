//! Configuration for the Raindrop HTTP client

/// Public Raindrop.io API host
pub const DEFAULT_BASE_URL: &str = "https://api.raindrop.io";

/// Configuration for the Raindrop client
///
/// Requests use the transport's default timeouts and are never retried.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the API, without the `/rest/v1` prefix
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Maximum number of idle connections per host
    pub max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("raindrop-notes/{}", env!("CARGO_PKG_VERSION")),
            max_idle_per_host: 4,
        }
    }
}

impl ClientConfig {
    /// Create a new builder for client configuration
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Base URL of the REST API (`<base_url>/rest/v1`)
    pub fn api_url(&self) -> String {
        format!("{}/rest/v1", self.base_url.trim_end_matches('/'))
    }
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    max_idle_per_host: Option<usize>,
}

impl ClientConfigBuilder {
    /// Set the API base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of idle connections per host
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = Some(max);
        self
    }

    /// Build the client configuration
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            max_idle_per_host: self.max_idle_per_host.unwrap_or(defaults.max_idle_per_host),
        }
    }
}
