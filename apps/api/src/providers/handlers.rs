//! Axum route handlers for the provider directory.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::providers::{ProviderMapping, SnapshotSource};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub source: SnapshotSource,
    pub alias_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// GET /api/v1/ai-providers
///
/// Active aliases, highest priority first.
pub async fn handle_list_providers(State(state): State<AppState>) -> Json<Vec<ProviderMapping>> {
    Json(state.directory.list_active())
}

/// GET /api/v1/ai-providers/:alias
///
/// Full configuration of one active alias.
pub async fn handle_get_provider(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<ProviderMapping>, AppError> {
    state
        .directory
        .get(&alias)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Provider alias '{alias}' not found")))
}

/// POST /api/v1/ai-providers/reload
///
/// Re-reads the provider table. A failed reload leaves the current directory in place.
pub async fn handle_reload_providers(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let snapshot = state.directory.reload(state.provider_store.as_ref()).await?;

    Ok(Json(ReloadResponse {
        source: snapshot.source,
        alias_count: snapshot.len(),
        loaded_at: snapshot.loaded_at,
    }))
}
