// ============================================================================
// Client Configuration
// Explicit configuration and session handle for the budgeting service
// ============================================================================

use std::time::Duration;
use uuid::Uuid;

/// Default API root of the budgeting service
pub const DEFAULT_BASE_URL: &str = "https://api.ynab.com/v1";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable holding the personal access token
pub const ACCESS_TOKEN_ENV: &str = "YNAB_ACCESS_TOKEN";

/// Environment variable overriding the API root
pub const BASE_URL_ENV: &str = "YNAB_BASE_URL";

// ============================================================================
// Client Configuration
// ============================================================================

/// Configuration for talking to the budgeting service
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without a trailing slash
    pub base_url: String,

    /// Personal access token
    pub access_token: String,

    /// Request timeout handed to the transport
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the default API root and timeout
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into().trim().to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the token (and optionally the API root) from the environment
    pub fn from_env() -> Result<Self, String> {
        let token = std::env::var(ACCESS_TOKEN_ENV)
            .map_err(|_| format!("{} is not set", ACCESS_TOKEN_ENV))?;

        let mut config = Self::new(token);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }

        config.validate()?;
        Ok(config)
    }

    /// Builder method: Set the API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method: Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.access_token.is_empty() {
            return Err("Access token cannot be empty".to_string());
        }

        if self.access_token.chars().any(char::is_whitespace) {
            return Err("Access token cannot contain whitespace".to_string());
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err("Base URL must use http or https".to_string());
        }

        if self.timeout.is_zero() {
            return Err("Timeout must be positive".to_string());
        }

        Ok(())
    }
}

// The token never shows up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// Session
// ============================================================================

/// A validated configuration, passed explicitly to whatever performs requests.
///
/// Builds resource URLs and the authorization header; the transport itself
/// lives outside this crate.
#[derive(Debug, Clone)]
pub struct Session {
    config: ClientConfig,
}

impl Session {
    pub fn new(config: ClientConfig) -> Result<Self, String> {
        config.validate()?;
        tracing::debug!(base_url = %config.base_url, "session configured");
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.config.access_token)
    }

    /// Endpoint used to check that the token is accepted
    pub fn user_url(&self) -> String {
        format!("{}/user", self.config.base_url)
    }

    pub fn budgets_url(&self) -> String {
        format!("{}/budgets", self.config.base_url)
    }

    pub fn accounts_url(&self, budget_id: Uuid) -> String {
        format!("{}/budgets/{}/accounts", self.config.base_url, budget_id)
    }

    pub fn categories_url(&self, budget_id: Uuid) -> String {
        format!("{}/budgets/{}/categories", self.config.base_url, budget_id)
    }
}
