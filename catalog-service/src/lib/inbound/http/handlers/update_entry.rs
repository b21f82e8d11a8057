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
use crate::catalog::models::EntryId;
use crate::catalog::models::EntryKind;
use crate::catalog::models::EntryName;
use crate::catalog::models::UpdateEntryCommand;
use crate::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an entry (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateEntryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub attributes: Option<serde_json::Value>,
}

impl UpdateEntryRequest {
    fn try_into_command(self) -> Result<UpdateEntryCommand, CatalogError> {
        let name = self.name.map(EntryName::new).transpose()?;

        Ok(UpdateEntryCommand {
            name,
            description: self.description,
            attributes: self.attributes,
        })
    }
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path((kind, entry_id)): Path<(String, String)>,
    Json(body): Json<UpdateEntryRequest>,
) -> Result<ApiSuccess<EntryData>, ApiError> {
    let kind = EntryKind::from_str(&kind).map_err(CatalogError::from)?;
    let entry_id = EntryId::from_string(&entry_id).map_err(CatalogError::from)?;
    let command = body.try_into_command()?;

    state
        .catalog_service
        .update_entry(kind, &entry_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref entry| ApiSuccess::new(StatusCode::OK, entry.into()))
}
