//! Server setup and initialization
//!
//! Wires the database, the notification worker and the router together.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use booking_common::{AppConfig, AppError, JwtService};
use booking_db::{
    create_pool, load_status_catalog, run_migrations, DatabaseConfig, PgUserRepository,
};
use booking_service::{sender_from_config, spawn_worker, NotificationQueue, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Connect to PostgreSQL, start the notification worker and build the state
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig::new(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool, None)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Reservation statuses are resolved once; a missing row stops startup
    let catalog = Arc::new(load_status_catalog(&pool).await?);

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    let (notifications, rx) = NotificationQueue::channel(config.notifications.queue_size);
    let sender = sender_from_config(&config.notifications, None)?;
    spawn_worker(rx, sender, Arc::new(PgUserRepository::new(pool.clone())));
    info!(
        transport = ?config.notifications.transport,
        queue_size = config.notifications.queue_size,
        "Notification worker started"
    );

    let service_context = ServiceContextBuilder::new()
        .postgres(pool, catalog)
        .jwt_service(jwt_service)
        .notifications(notifications)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Bind and serve until the listener fails
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    run_server(create_app(state), addr).await
}
