use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProviderConfigRow {
    pub provider_alias: String,
    pub base_provider: String,
    pub display_name: String,
    pub api_url: Option<String>,
    pub is_active: bool,
    pub priority: i32,
    pub updated_at: DateTime<Utc>,
}
