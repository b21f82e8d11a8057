use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::catalog::errors::CatalogError;
use crate::catalog::models::EntryId;
use crate::catalog::models::EntryKind;
use crate::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_entry(
    State(state): State<AppState>,
    Path((kind, entry_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let kind = EntryKind::from_str(&kind).map_err(CatalogError::from)?;
    let entry_id = EntryId::from_string(&entry_id).map_err(CatalogError::from)?;

    state
        .catalog_service
        .delete_entry(kind, &entry_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
