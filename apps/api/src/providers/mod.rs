// Provider directory: alias → vendor mapping, loaded from the store once at
// startup and swapped wholesale on explicit reload.

pub mod directory;
pub mod handlers;
pub mod store;

use serde::{Deserialize, Serialize};

pub use directory::{DirectorySnapshot, ProviderDirectory, SnapshotSource};
pub use store::{PgProviderStore, ProviderStore};

/// Canonical vendor family an alias resolves to. Closed set: every variant has
/// a wire module in `llm_client`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseProvider {
    OpenAi,
    Claude,
    Gemini,
    Grok,
}

impl BaseProvider {
    pub const ALL: [BaseProvider; 4] = [
        BaseProvider::OpenAi,
        BaseProvider::Claude,
        BaseProvider::Gemini,
        BaseProvider::Grok,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BaseProvider::OpenAi => "openai",
            BaseProvider::Claude => "claude",
            BaseProvider::Gemini => "gemini",
            BaseProvider::Grok => "grok",
        }
    }

    /// Prefix of the `<BASE>_API_KEY` / `<BASE>_API_URL` environment variables.
    pub fn env_prefix(self) -> String {
        self.as_str().to_uppercase()
    }

    /// Parses a canonical vendor name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = normalize_alias(name);
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl std::fmt::Display for BaseProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One caller-facing provider alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMapping {
    pub alias: String,
    pub base_provider: BaseProvider,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    pub is_active: bool,
    /// Higher = preferred.
    pub priority: i32,
}

/// Directory key form of an alias.
pub fn normalize_alias(alias: &str) -> String {
    alias.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_provider_from_name_is_case_insensitive() {
        assert_eq!(BaseProvider::from_name(" OpenAI "), Some(BaseProvider::OpenAi));
        assert_eq!(BaseProvider::from_name("GROK"), Some(BaseProvider::Grok));
        assert_eq!(BaseProvider::from_name("gpt"), None);
    }

    #[test]
    fn test_env_prefix_is_upper_cased_name() {
        assert_eq!(BaseProvider::OpenAi.env_prefix(), "OPENAI");
        assert_eq!(BaseProvider::Gemini.env_prefix(), "GEMINI");
    }

    #[test]
    fn test_base_provider_serde_uses_canonical_names() {
        let json = serde_json::to_string(&BaseProvider::OpenAi).unwrap();
        assert_eq!(json, r#""openai""#);
        let parsed: BaseProvider = serde_json::from_str(r#""claude""#).unwrap();
        assert_eq!(parsed, BaseProvider::Claude);
    }

    #[test]
    fn test_mapping_serializes_camel_case_without_missing_url() {
        let mapping = ProviderMapping {
            alias: "gpt-4o".to_string(),
            base_provider: BaseProvider::OpenAi,
            display_name: "GPT-4o".to_string(),
            api_url: None,
            is_active: true,
            priority: 98,
        };
        let value = serde_json::to_value(&mapping).unwrap();
        assert_eq!(value["baseProvider"], "openai");
        assert_eq!(value["displayName"], "GPT-4o");
        assert!(value.get("apiUrl").is_none());
    }
}
