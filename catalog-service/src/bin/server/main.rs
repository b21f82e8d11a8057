use std::sync::Arc;

use auth::TokenCodec;
use catalog_service::account::service::AccountService;
use catalog_service::catalog::service::CatalogService;
use catalog_service::config::Config;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::repositories::PostgresAccountRepository;
use catalog_service::outbound::repositories::PostgresEntryRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // A missing AUTH__SECRET fails here, before anything binds.
    let config = Config::load()?;
    anyhow::ensure!(
        !config.auth.secret.is_empty(),
        "auth.secret is empty; refusing to start without a signing secret"
    );

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.auth.token_ttl_hours,
        normalize_identifier_case = config.auth.normalize_identifier_case,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_codec = Arc::new(TokenCodec::new(config.auth.secret.as_bytes()));
    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let entry_repository = Arc::new(PostgresEntryRepository::new(pg_pool));

    let account_service = Arc::new(AccountService::new(account_repository));
    let catalog_service = Arc::new(CatalogService::new(entry_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        account_service,
        catalog_service,
        token_codec,
        config.auth.token_ttl_hours,
        config.auth.normalize_identifier_case,
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
