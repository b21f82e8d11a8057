use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::parse_identifier;
use super::signup::SessionData;
use super::ApiError;
use super::ApiSuccess;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

/// Credential verification: exchange identifier + password for a session
/// token. Unknown identifier, malformed identifier and wrong password all
/// produce the same generic 401 so the endpoint cannot be used to enumerate
/// registered identifiers.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<SessionData>, ApiError> {
    let (raw_identifier, password) = match (body.identifier, body.password) {
        (Some(identifier), Some(password)) if !identifier.is_empty() && !password.is_empty() => {
            (identifier, password)
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Identifier and password are required".to_string(),
            ))
        }
    };

    let identifier = parse_identifier(raw_identifier, state.normalize_identifier_case)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let account = state
        .account_service
        .authenticate(&identifier, &password)
        .await?;

    let token = state
        .token_codec
        .issue(&account.id.to_string(), account.role, state.token_ttl)
        .map_err(|e| ApiError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SessionData {
            token,
            role: account.role,
        },
    ))
}

/// HTTP request body for login (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    identifier: Option<String>,
    password: Option<String>,
}
