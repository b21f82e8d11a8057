use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::EntryData;
use crate::catalog::errors::CatalogError;
use crate::catalog::models::EntryId;
use crate::catalog::models::EntryKind;
use crate::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_entry(
    State(state): State<AppState>,
    Path((kind, entry_id)): Path<(String, String)>,
) -> Result<ApiSuccess<EntryData>, ApiError> {
    let kind = EntryKind::from_str(&kind).map_err(CatalogError::from)?;
    let entry_id = EntryId::from_string(&entry_id).map_err(CatalogError::from)?;

    state
        .catalog_service
        .get_entry(kind, &entry_id)
        .await
        .map_err(ApiError::from)
        .map(|ref entry| ApiSuccess::new(StatusCode::OK, entry.into()))
}
