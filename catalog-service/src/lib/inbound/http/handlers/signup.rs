use auth::Role;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::parse_identifier;
use super::ApiError;
use super::ApiSuccess;
use crate::account::models::CreateAccountCommand;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

/// Credential submission: register a new account and hand back a session
/// token. A duplicate identifier is a 400; the store's uniqueness constraint
/// decides the winner when two signups race.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<ApiSuccess<SessionData>, ApiError> {
    // Field presence is checked here so absence maps to 400, matching the
    // rest of the validation bucket.
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
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = CreateAccountCommand::new(identifier, password, body.role.unwrap_or_default());

    let account = state.account_service.create_account(command).await?;

    let token = state
        .token_codec
        .issue(&account.id.to_string(), account.role, state.token_ttl)
        .map_err(|e| ApiError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        SessionData {
            token,
            role: account.role,
        },
    ))
}

/// HTTP request body for signup (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    identifier: Option<String>,
    password: Option<String>,
    role: Option<Role>,
}

/// Session response shared by signup and login: the bearer token and the
/// role it was issued for. Nothing else about the credential leaks out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionData {
    pub token: String,
    pub role: Role,
}
