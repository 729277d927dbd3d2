use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::models::provider_config::ProviderConfigRow;
use crate::providers::{BaseProvider, ProviderMapping};

/// Backing store for the provider directory. `PgProviderStore` in production;
/// tests swap in in-memory stores.
#[async_trait]
pub trait ProviderStore: Send + Sync {
    async fn fetch_mappings(&self) -> Result<Vec<ProviderMapping>>;
}

/// Reads `ai_provider_configs` (see `migrations/`).
#[derive(Clone)]
pub struct PgProviderStore {
    pool: PgPool,
}

impl PgProviderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProviderStore for PgProviderStore {
    async fn fetch_mappings(&self) -> Result<Vec<ProviderMapping>> {
        let rows = sqlx::query_as::<_, ProviderConfigRow>(
            r#"
            SELECT provider_alias, base_provider, display_name, api_url,
                   is_active, priority, updated_at
            FROM ai_provider_configs
            ORDER BY priority DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        if let Some(last_change) = rows.iter().map(|r| r.updated_at).max() {
            debug!("Fetched {} provider rows (last change {last_change})", rows.len());
        }

        Ok(rows.into_iter().filter_map(row_to_mapping).collect())
    }
}

/// Rows naming a vendor we have no adapter for are skipped.
fn row_to_mapping(row: ProviderConfigRow) -> Option<ProviderMapping> {
    let Some(base_provider) = BaseProvider::from_name(&row.base_provider) else {
        warn!(
            "Provider alias '{}' names unsupported base provider '{}'; skipped",
            row.provider_alias, row.base_provider
        );
        return None;
    };

    Some(ProviderMapping {
        alias: row.provider_alias,
        base_provider,
        display_name: row.display_name,
        api_url: row.api_url,
        is_active: row.is_active,
        priority: row.priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(alias: &str, base: &str) -> ProviderConfigRow {
        ProviderConfigRow {
            provider_alias: alias.to_string(),
            base_provider: base.to_string(),
            display_name: "Display".to_string(),
            api_url: None,
            is_active: true,
            priority: 10,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_with_known_base_converts() {
        let mapping = row_to_mapping(row("Anthropic", "Claude")).unwrap();
        assert_eq!(mapping.alias, "Anthropic");
        assert_eq!(mapping.base_provider, BaseProvider::Claude);
    }

    #[test]
    fn test_row_with_unknown_base_is_skipped() {
        assert!(row_to_mapping(row("mistral", "mistral")).is_none());
    }
}
