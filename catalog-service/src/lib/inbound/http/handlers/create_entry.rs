use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::EntryData;
use crate::catalog::errors::CatalogError;
use crate::catalog::models::CreateEntryCommand;
use crate::catalog::models::EntryKind;
use crate::catalog::models::EntryName;
use crate::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_entry(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(body): Json<CreateEntryRequest>,
) -> Result<ApiSuccess<EntryData>, ApiError> {
    let kind = EntryKind::from_str(&kind).map_err(CatalogError::from)?;

    let name = body
        .name
        .ok_or_else(|| ApiError::BadRequest("Name is required".to_string()))?;
    let name = EntryName::new(name).map_err(CatalogError::from)?;

    let command = CreateEntryCommand {
        kind,
        name,
        description: body.description.unwrap_or_default(),
        attributes: body.attributes.unwrap_or_else(|| serde_json::json!({})),
    };

    state
        .catalog_service
        .create_entry(command)
        .await
        .map_err(ApiError::from)
        .map(|ref entry| ApiSuccess::new(StatusCode::CREATED, entry.into()))
}

/// HTTP request body for creating an entry (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateEntryRequest {
    name: Option<String>,
    description: Option<String>,
    attributes: Option<serde_json::Value>,
}
