use auth::Role;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::Account;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::middleware::Identity;
use crate::inbound::http::router::AppState;

/// Profile of the authenticated account. The stored password hash is not
/// part of this view and never leaves the service.
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    state
        .account_service
        .get_account(&identity.account_id)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}

/// Client-facing view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub id: String,
    pub identifier: String,
    pub role: Role,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Account> for ProfileData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            identifier: account.identifier.as_str().to_string(),
            role: account.role,
            created_at: account.created_at,
        }
    }
}
