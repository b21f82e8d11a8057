use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::account::errors::AccountError;
use crate::account::errors::IdentifierError;
use crate::account::models::Identifier;
use crate::catalog::errors::CatalogError;
use crate::catalog::models::Entry;

pub mod create_entry;
pub mod delete_entry;
pub mod get_entry;
pub mod get_profile;
pub mod list_entries;
pub mod login;
pub mod reset_password;
pub mod signup;
pub mod update_entry;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Closed set of boundary errors.
///
/// Every domain failure is converted to exactly one of these before a
/// response leaves the HTTP layer; internal detail (store text, codec
/// reasons) never reaches the caller on the 401/403 paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            // Duplicate signup is a client error, same bucket as validation
            AccountError::DuplicateIdentifier(_) => ApiError::BadRequest(err.to_string()),
            AccountError::InvalidIdentifier(_) | AccountError::InvalidAccountId(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AccountError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AccountError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AccountError::Hashing(_)
            | AccountError::DatabaseError(_)
            | AccountError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidEntryId(_)
            | CatalogError::InvalidKind(_)
            | CatalogError::InvalidName(_) => ApiError::BadRequest(err.to_string()),
            CatalogError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CatalogError::DatabaseError(_) | CatalogError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Parse a raw login identifier, applying the configured case normalization
/// before validation so lookups are consistent with what was stored.
pub(crate) fn parse_identifier(
    raw: String,
    normalize_case: bool,
) -> Result<Identifier, IdentifierError> {
    let raw = if normalize_case { raw.to_lowercase() } else { raw };
    Identifier::new(raw)
}

/// Response body for catalog entry operations, shared across handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryData {
    pub id: String,
    pub kind: String,
    pub name: String,
    pub description: String,
    pub attributes: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Entry> for EntryData {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.to_string(),
            kind: entry.kind.as_str().to_string(),
            name: entry.name.as_str().to_string(),
            description: entry.description.clone(),
            attributes: entry.attributes.clone(),
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifier_normalizes_when_configured() {
        let identifier = parse_identifier("A@X.com".to_string(), true).unwrap();
        assert_eq!(identifier.as_str(), "a@x.com");
    }

    #[test]
    fn test_parse_identifier_preserves_case_by_default() {
        let identifier = parse_identifier("A@X.com".to_string(), false).unwrap();
        assert_eq!(identifier.as_str(), "A@X.com");
    }

    #[test]
    fn test_duplicate_identifier_maps_to_bad_request() {
        let err = ApiError::from(AccountError::DuplicateIdentifier("a@x.com".to_string()));
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        let err = ApiError::from(AccountError::InvalidCredentials);
        assert_eq!(
            err,
            ApiError::Unauthorized("Invalid credentials".to_string())
        );
    }
}
