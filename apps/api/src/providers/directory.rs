//! Provider Directory: process-wide alias cache.
//!
//! Lifecycle: `load()` builds an immutable `DirectorySnapshot` (falling back to
//! the built-in alias table if the store is unreachable), lookups read the
//! current snapshot, and `reload()` replaces it with a single `Arc` swap.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::providers::store::ProviderStore;
use crate::providers::{normalize_alias, BaseProvider, ProviderMapping};

/// Built-in aliases used when the store cannot be read.
/// (alias, base provider, display name, priority)
const FALLBACK_ALIASES: &[(&str, BaseProvider, &str, i32)] = &[
    ("openai", BaseProvider::OpenAi, "OpenAI GPT", 100),
    ("gpt", BaseProvider::OpenAi, "GPT", 99),
    ("gpt-4o", BaseProvider::OpenAi, "GPT-4o", 98),
    ("claude", BaseProvider::Claude, "Claude", 90),
    ("anthropic", BaseProvider::Claude, "Anthropic Claude", 89),
    ("gemini", BaseProvider::Gemini, "Google Gemini", 80),
    ("google", BaseProvider::Gemini, "Google AI", 79),
    ("grok", BaseProvider::Grok, "Grok", 70),
    ("xai", BaseProvider::Grok, "xAI Grok", 69),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSource {
    Store,
    Fallback,
}

/// Immutable view of the directory at one point in time.
#[derive(Debug)]
pub struct DirectorySnapshot {
    mappings: HashMap<String, ProviderMapping>,
    pub source: SnapshotSource,
    pub loaded_at: DateTime<Utc>,
}

impl DirectorySnapshot {
    /// Builds a snapshot from store rows. Inactive rows are dropped; when two
    /// rows normalize to the same alias the higher-priority one is kept.
    pub fn from_mappings(mut rows: Vec<ProviderMapping>, source: SnapshotSource) -> Self {
        rows.sort_by(|a, b| b.priority.cmp(&a.priority));

        let mut mappings = HashMap::with_capacity(rows.len());
        for row in rows {
            if !row.is_active {
                debug!("Skipping inactive provider alias '{}'", row.alias);
                continue;
            }
            let key = normalize_alias(&row.alias);
            if key.is_empty() {
                warn!("Skipping provider row with blank alias");
                continue;
            }
            if mappings.contains_key(&key) {
                warn!("Duplicate provider alias '{key}'; keeping the higher-priority row");
                continue;
            }
            mappings.insert(key, row);
        }

        Self {
            mappings,
            source,
            loaded_at: Utc::now(),
        }
    }

    pub fn fallback() -> Self {
        let rows = FALLBACK_ALIASES
            .iter()
            .map(|&(alias, base_provider, display_name, priority)| ProviderMapping {
                alias: alias.to_string(),
                base_provider,
                display_name: display_name.to_string(),
                api_url: None,
                is_active: true,
                priority,
            })
            .collect();
        Self::from_mappings(rows, SnapshotSource::Fallback)
    }

    pub fn get(&self, alias: &str) -> Option<&ProviderMapping> {
        self.mappings.get(&normalize_alias(alias))
    }

    pub fn resolve_base_provider(&self, alias: &str) -> Option<BaseProvider> {
        self.get(alias).map(|m| m.base_provider)
    }

    /// Blank URLs count as unset.
    pub fn resolve_api_url(&self, alias: &str) -> Option<String> {
        self.get(alias)
            .and_then(|m| m.api_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    }

    pub fn list_active(&self) -> Vec<ProviderMapping> {
        let mut active: Vec<ProviderMapping> = self
            .mappings
            .values()
            .filter(|m| m.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| b.priority.cmp(&a.priority));
        active
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// Shared, read-mostly alias directory held in `AppState`.
pub struct ProviderDirectory {
    current: RwLock<Arc<DirectorySnapshot>>,
}

impl ProviderDirectory {
    pub fn new(snapshot: DirectorySnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    #[cfg(test)]
    pub fn fallback() -> Self {
        Self::new(DirectorySnapshot::fallback())
    }

    /// Startup load. Never fails: an unreachable store yields the fallback table.
    pub async fn load(store: &dyn ProviderStore) -> Self {
        let snapshot = match store.fetch_mappings().await {
            Ok(rows) => {
                let snapshot = DirectorySnapshot::from_mappings(rows, SnapshotSource::Store);
                if snapshot.is_empty() {
                    warn!("Provider table has no active aliases; only vendor names will resolve");
                }
                snapshot
            }
            Err(e) => {
                warn!("Provider store unavailable, using built-in aliases: {e:#}");
                DirectorySnapshot::fallback()
            }
        };
        info!(
            "Provider directory loaded: {} aliases from {:?}",
            snapshot.len(),
            snapshot.source
        );
        Self::new(snapshot)
    }

    /// Re-reads the store and swaps the snapshot in one step. On failure the
    /// current snapshot stays in place and the error is returned.
    pub async fn reload(&self, store: &dyn ProviderStore) -> Result<Arc<DirectorySnapshot>> {
        let rows = store.fetch_mappings().await?;
        let snapshot = Arc::new(DirectorySnapshot::from_mappings(rows, SnapshotSource::Store));
        *self.current.write() = Arc::clone(&snapshot);
        info!("Provider directory reloaded: {} aliases", snapshot.len());
        Ok(snapshot)
    }

    /// Current snapshot. Callers that need more than one field for an alias
    /// resolve them all against the same snapshot.
    pub fn snapshot(&self) -> Arc<DirectorySnapshot> {
        self.current.read().clone()
    }

    pub fn get(&self, alias: &str) -> Option<ProviderMapping> {
        self.snapshot().get(alias).cloned()
    }

    pub fn list_active(&self) -> Vec<ProviderMapping> {
        self.snapshot().list_active()
    }

    pub fn is_known(&self, alias: &str) -> bool {
        self.snapshot().get(alias).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubStore(Vec<ProviderMapping>);

    #[async_trait]
    impl ProviderStore for StubStore {
        async fn fetch_mappings(&self) -> Result<Vec<ProviderMapping>> {
            Ok(self.0.clone())
        }
    }

    struct DownStore;

    #[async_trait]
    impl ProviderStore for DownStore {
        async fn fetch_mappings(&self) -> Result<Vec<ProviderMapping>> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    fn mapping(alias: &str, base: BaseProvider, priority: i32, active: bool) -> ProviderMapping {
        ProviderMapping {
            alias: alias.to_string(),
            base_provider: base,
            display_name: alias.to_uppercase(),
            api_url: Some(format!("https://{alias}.example/v1")),
            is_active: active,
            priority,
        }
    }

    #[tokio::test]
    async fn test_alias_lookup_ignores_case_and_whitespace() {
        let store = StubStore(vec![mapping("gpt-4o", BaseProvider::OpenAi, 98, true)]);
        let directory = ProviderDirectory::load(&store).await;

        assert_eq!(
            directory.snapshot().resolve_base_provider("  GPT-4O "),
            directory.snapshot().resolve_base_provider("gpt-4o")
        );
        assert_eq!(
            directory.snapshot().resolve_base_provider("  GPT-4O "),
            Some(BaseProvider::OpenAi)
        );
        assert_eq!(
            directory.snapshot().resolve_api_url("Gpt-4o"),
            Some("https://gpt-4o.example/v1".to_string())
        );
        assert!(directory.is_known(" gpt-4o"));
    }

    #[tokio::test]
    async fn test_list_active_sorted_by_priority_and_excludes_inactive() {
        let store = StubStore(vec![
            mapping("grok", BaseProvider::Grok, 70, true),
            mapping("openai", BaseProvider::OpenAi, 100, true),
            mapping("legacy", BaseProvider::OpenAi, 500, false),
            mapping("claude", BaseProvider::Claude, 90, true),
        ]);
        let directory = ProviderDirectory::load(&store).await;

        let active = directory.list_active();
        let aliases: Vec<&str> = active.iter().map(|m| m.alias.as_str()).collect();
        assert_eq!(aliases, vec!["openai", "claude", "grok"]);
        assert!(active.windows(2).all(|w| w[0].priority > w[1].priority));
        assert!(!directory.is_known("legacy"));
    }

    #[tokio::test]
    async fn test_store_failure_falls_back_to_builtin_aliases() {
        let directory = ProviderDirectory::load(&DownStore).await;

        assert_eq!(directory.snapshot().source, SnapshotSource::Fallback);
        assert_eq!(directory.snapshot().resolve_base_provider("anthropic"), Some(BaseProvider::Claude));
        assert_eq!(directory.snapshot().resolve_base_provider("google"), Some(BaseProvider::Gemini));
        assert_eq!(directory.snapshot().resolve_base_provider("xai"), Some(BaseProvider::Grok));
        assert_eq!(directory.snapshot().resolve_base_provider("gpt"), Some(BaseProvider::OpenAi));
        assert_eq!(directory.snapshot().resolve_api_url("openai"), None);
        assert_eq!(directory.list_active().len(), 9);
    }

    #[tokio::test]
    async fn test_reload_swaps_entire_snapshot() {
        let directory = ProviderDirectory::fallback();
        let before = directory.snapshot();

        let store = StubStore(vec![mapping("claude-fast", BaseProvider::Claude, 10, true)]);
        let after = directory.reload(&store).await.unwrap();

        assert_eq!(after.source, SnapshotSource::Store);
        assert!(directory.is_known("claude-fast"));
        assert!(!directory.is_known("gpt"));
        // Readers holding the old snapshot still see it unchanged.
        assert!(before.get("gpt").is_some());
        assert_eq!(before.source, SnapshotSource::Fallback);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_current_snapshot() {
        let store = StubStore(vec![mapping("gemini", BaseProvider::Gemini, 80, true)]);
        let directory = ProviderDirectory::load(&store).await;

        assert!(directory.reload(&DownStore).await.is_err());
        assert!(directory.is_known("gemini"));
        assert_eq!(directory.snapshot().source, SnapshotSource::Store);
    }

    #[test]
    fn test_duplicate_alias_keeps_higher_priority() {
        let snapshot = DirectorySnapshot::from_mappings(
            vec![
                mapping("GPT", BaseProvider::Grok, 1, true),
                mapping("gpt", BaseProvider::OpenAi, 99, true),
            ],
            SnapshotSource::Store,
        );
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("gpt").unwrap().base_provider, BaseProvider::OpenAi);
    }

    #[test]
    fn test_blank_api_url_is_not_resolved() {
        let mut row = mapping("claude", BaseProvider::Claude, 90, true);
        row.api_url = Some("   ".to_string());
        let directory = ProviderDirectory::new(DirectorySnapshot::from_mappings(
            vec![row],
            SnapshotSource::Store,
        ));
        assert_eq!(directory.snapshot().resolve_api_url("claude"), None);
    }
}
