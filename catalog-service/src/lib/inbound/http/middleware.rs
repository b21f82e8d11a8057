use auth::Role;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::account::errors::AccountError;
use crate::account::models::AccountId;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Request-scoped authenticated subject, attached after successful
/// authentication. The role is the one currently stored for the account, not
/// the snapshot embedded in the token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub account_id: AccountId,
    pub role: Role,
}

/// Authentication stage applied to every protected route.
///
/// Ordered contract per request: bearer extraction (no I/O), token
/// verification (no I/O), then exactly one store read to confirm the subject
/// still exists and to re-derive its role. Every failure collapses to a
/// generic 401; the distinct causes are logged only.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).map_err(|e| e.into_response())?;

    let claims = state.token_codec.verify(token).map_err(|e| {
        tracing::warn!(reason = %e, "Token verification failed");
        unauthenticated().into_response()
    })?;

    let account_id = AccountId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(reason = %e, "Token subject is not a valid account ID");
        unauthenticated().into_response()
    })?;

    // Subject may have been deleted after issuance; the token alone proves
    // nothing about current existence.
    let account = state
        .account_service
        .get_account(&account_id)
        .await
        .map_err(|e| match e {
            AccountError::NotFound(_) => {
                tracing::warn!(account_id = %account_id, "Token subject no longer exists");
                unauthenticated().into_response()
            }
            other => {
                tracing::error!(error = %other, "Credential store lookup failed");
                ApiError::InternalServerError("Internal server error".to_string()).into_response()
            }
        })?;

    req.extensions_mut().insert(Identity {
        account_id,
        role: account.role,
    });

    Ok(next.run(req).await)
}

/// Authorization stage for admin-only routes.
///
/// Requires [`authenticate`] to have run first; checks the attached identity
/// and nothing else. Pure, no I/O.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Response> {
    let identity = req.extensions().get::<Identity>().cloned();

    match identity {
        None => {
            // Pipeline mis-composition: the gate ran without the
            // authentication stage in front of it.
            tracing::error!("Admin gate reached without an authenticated identity");
            Err(unauthenticated().into_response())
        }
        Some(identity) if !identity.role.is_admin() => {
            tracing::warn!(
                account_id = %identity.account_id,
                role = %identity.role,
                "Admin access denied"
            );
            Err(ApiError::Forbidden("Admin access only".to_string()).into_response())
        }
        Some(_) => Ok(next.run(req).await),
    }
}

fn unauthenticated() -> ApiError {
    ApiError::Unauthorized("Not authorized".to_string())
}

/// Pull the bearer token out of the Authorization header.
///
/// Fails before any I/O when the header is absent, unreadable, or not using
/// the bearer scheme.
fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
    })
}
