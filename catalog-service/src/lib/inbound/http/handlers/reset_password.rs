use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::middleware::Identity;
use crate::inbound::http::router::AppState;

/// Self-service password reset for the authenticated account: rehash and
/// overwrite the stored secret. Outstanding tokens stay valid until expiry;
/// there is no revocation.
pub async fn reset_password(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    let password = body
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Password is required".to_string()))?;

    state
        .account_service
        .update_password(&identity.account_id, &password)
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, ()))
}

/// HTTP request body for password reset (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResetPasswordRequest {
    password: Option<String>,
}
