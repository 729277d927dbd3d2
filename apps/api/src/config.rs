use std::collections::HashMap;
use std::fmt;

use anyhow::{Context, Result};

use crate::providers::BaseProvider;

const DEFAULT_PROVIDER: &str = "openai";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Alias used when a request does not name a provider (`AI_PROVIDER`).
    pub default_provider: String,
    /// Ceiling for every outbound vendor call.
    pub request_timeout_secs: u64,
    pub credentials: ProviderCredentials,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            default_provider: optional_env("AI_PROVIDER")
                .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
            request_timeout_secs: optional_env("AI_REQUEST_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("AI_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            credentials: ProviderCredentials::from_env(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Per-vendor credentials and endpoint overrides, keyed by base provider.
///
/// Read from `<BASE>_API_KEY` / `<BASE>_API_URL`, e.g. `OPENAI_API_KEY`.
#[derive(Clone, Default)]
pub struct ProviderCredentials {
    api_keys: HashMap<BaseProvider, String>,
    api_urls: HashMap<BaseProvider, String>,
}

impl ProviderCredentials {
    pub fn from_env() -> Self {
        let mut credentials = Self::default();
        for provider in BaseProvider::ALL {
            let prefix = provider.env_prefix();
            if let Some(key) = optional_env(&format!("{prefix}_API_KEY")) {
                credentials.api_keys.insert(provider, key);
            }
            if let Some(url) = optional_env(&format!("{prefix}_API_URL")) {
                credentials.api_urls.insert(provider, url);
            }
        }
        credentials
    }

    #[cfg(test)]
    pub fn with_api_key(mut self, provider: BaseProvider, key: impl Into<String>) -> Self {
        self.api_keys.insert(provider, key.into());
        self
    }

    #[cfg(test)]
    pub fn with_api_url(mut self, provider: BaseProvider, url: impl Into<String>) -> Self {
        self.api_urls.insert(provider, url.into());
        self
    }

    pub fn api_key(&self, provider: BaseProvider) -> Option<&str> {
        self.api_keys.get(&provider).map(String::as_str)
    }

    pub fn api_url(&self, provider: BaseProvider) -> Option<&str> {
        self.api_urls.get(&provider).map(String::as_str)
    }
}

// Keys never reach the logs.
impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keyed: Vec<&str> = self.api_keys.keys().map(|p| p.as_str()).collect();
        keyed.sort_unstable();
        f.debug_struct("ProviderCredentials")
            .field("api_keys_for", &keyed)
            .field("api_urls", &self.api_urls)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_lookup_by_base_provider() {
        let creds = ProviderCredentials::default()
            .with_api_key(BaseProvider::Claude, "sk-ant")
            .with_api_url(BaseProvider::Claude, "https://api.anthropic.com/v1/messages");

        assert_eq!(creds.api_key(BaseProvider::Claude), Some("sk-ant"));
        assert_eq!(
            creds.api_url(BaseProvider::Claude),
            Some("https://api.anthropic.com/v1/messages")
        );
        assert_eq!(creds.api_key(BaseProvider::OpenAi), None);
    }

    #[test]
    fn test_debug_output_redacts_keys() {
        let creds = ProviderCredentials::default().with_api_key(BaseProvider::Grok, "xai-secret");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("xai-secret"));
        assert!(rendered.contains("grok"));
    }
}
