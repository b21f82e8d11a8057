use std::sync::Arc;
use std::time::Duration;

use auth::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_entry::create_entry;
use super::handlers::delete_entry::delete_entry;
use super::handlers::get_entry::get_entry;
use super::handlers::get_profile::get_profile;
use super::handlers::list_entries::list_entries;
use super::handlers::login::login;
use super::handlers::reset_password::reset_password;
use super::handlers::signup::signup;
use super::handlers::update_entry::update_entry;
use super::middleware::authenticate;
use super::middleware::require_admin;
use crate::account::service::AccountService;
use crate::catalog::service::CatalogService;
use crate::outbound::repositories::PostgresAccountRepository;
use crate::outbound::repositories::PostgresEntryRepository;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<PostgresAccountRepository>>,
    pub catalog_service: Arc<CatalogService<PostgresEntryRepository>>,
    pub token_codec: Arc<TokenCodec>,
    pub token_ttl: chrono::Duration,
    pub normalize_identifier_case: bool,
}

/// Build the HTTP application.
///
/// Middleware ordering is explicit here, not ambient: admin routes run the
/// authentication stage first (outermost layer), then the admin gate, then
/// the handler. A request is either handled or rejected at the first failing
/// stage.
pub fn create_router(
    account_service: Arc<AccountService<PostgresAccountRepository>>,
    catalog_service: Arc<CatalogService<PostgresEntryRepository>>,
    token_codec: Arc<TokenCodec>,
    token_ttl_hours: i64,
    normalize_identifier_case: bool,
) -> Router {
    let state = AppState {
        account_service,
        catalog_service,
        token_codec,
        token_ttl: chrono::Duration::hours(token_ttl_hours),
        normalize_identifier_case,
    };

    let public_routes = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/catalog/:kind", get(list_entries))
        .route("/api/catalog/:kind/:entry_id", get(get_entry));

    let account_routes = Router::new()
        .route("/api/auth/profile", get(get_profile))
        .route("/api/auth/password", patch(reset_password))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    // Layers wrap outside-in: authenticate (added last) runs before the
    // admin gate.
    let admin_routes = Router::new()
        .route("/api/catalog/:kind", post(create_entry))
        .route("/api/catalog/:kind/:entry_id", patch(update_entry))
        .route("/api/catalog/:kind/:entry_id", delete(delete_entry))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(account_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
