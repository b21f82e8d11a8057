use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::EntryData;
use crate::catalog::errors::CatalogError;
use crate::catalog::models::EntryKind;
use crate::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_entries(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<ApiSuccess<Vec<EntryData>>, ApiError> {
    let kind = EntryKind::from_str(&kind).map_err(CatalogError::from)?;

    let entries = state.catalog_service.list_entries(kind).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        entries.iter().map(EntryData::from).collect(),
    ))
}
