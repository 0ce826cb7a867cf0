//! Item Catalogue API Server
//!
//! A small catalogue service for creating, reading, updating, deleting and
//! searching items. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{routing::get, Router};
use sea_orm::{ConnectOptions, Database};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, PostgresHealthCheck, PostgresItemRepository};
use app::ItemService;
use config::{Config, LogFormat};
use domain::ports::{HealthCheck, ItemRepository};

/// Application state shared across all handlers
///
/// Generic over the repository so the router can be driven by an in-memory
/// store in tests.
pub struct AppState<R>
where
    R: ItemRepository,
{
    pub item_service: Arc<ItemService<R>>,
    pub health: Arc<dyn HealthCheck>,
    pub config: Arc<Config>,
}

// Manual impl: derive would require `R: Clone`
impl<R> Clone for AppState<R>
where
    R: ItemRepository,
{
    fn clone(&self) -> Self {
        Self {
            item_service: self.item_service.clone(),
            health: self.health.clone(),
            config: self.config.clone(),
        }
    }
}

/// Build the HTTP router with all routes and middleware
pub fn build_router<R>(state: AppState<R>) -> Router
where
    R: ItemRepository + 'static,
{
    Router::new()
        .route("/", get(handlers::root::<R>))
        .route("/health", get(handlers::health_check::<R>))
        .route(
            "/items",
            get(handlers::list_items::<R>).post(handlers::create_item::<R>),
        )
        .route("/items/search/:query", get(handlers::search_items::<R>))
        .route(
            "/items/:id",
            get(handlers::get_item::<R>)
                .put(handlers::update_item::<R>)
                .delete(handlers::delete_item::<R>),
        )
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,item_catalogue_api=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Invalid configuration")?;

    init_tracing(config.log_format);
    tracing::info!(name = %config.app_name, version = %config.app_version, "Starting...");

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(config.database_echo);
    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    ensure_schema(&db)
        .await
        .context("Failed to create database schema")?;

    // Create adapters and services
    let item_repo = Arc::new(PostgresItemRepository::new(db.clone()));
    let item_service = Arc::new(ItemService::new(item_repo));

    if config.seed_sample_data {
        app::seed_if_empty(&*item_service)
            .await
            .context("Failed to seed sample data")?;
    }

    let addr = SocketAddr::new(config.host, config.port);

    let state = AppState {
        item_service,
        health: Arc::new(PostgresHealthCheck::new(db)),
        config: Arc::new(config),
    };
    let app = build_router(state);

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
