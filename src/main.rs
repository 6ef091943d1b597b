use anyhow::Context;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod dto;
mod error;
mod handlers;
mod models;
mod services;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
}

/// All routes, without the CORS policy (added in `main`).
fn app(state: AppState) -> Router {
    use handlers::{charts, classify, entries, health, photos};

    Router::new()
        .route("/health", get(health::health_check))
        .route("/readyz", get(health::readyz))
        // Entries
        .route(
            "/api/entries",
            get(entries::list_entries).post(entries::create_entry),
        )
        .route(
            "/api/entries/:id",
            get(entries::get_entry)
                .put(entries::update_entry)
                .delete(entries::delete_entry),
        )
        // Photos
        .route(
            "/api/entries/:id/photo",
            get(photos::get_photo)
                .put(photos::upload_photo)
                .delete(photos::delete_photo),
        )
        // Charts
        .route("/api/series", get(charts::get_series))
        .route("/api/summary", get(charts::get_summary))
        // Classification
        .route(
            "/api/classify/blood-pressure",
            get(classify::classify_blood_pressure),
        )
        .route("/api/classify/heart-rate", get(classify::classify_heart_rate))
        .layer(DefaultBodyLimit::max(state.config.max_photo_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weight_tracker_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env());

    // Database
    let db = db::create_pool(&config.database_url)
        .await
        .context("Failed to open database")?;

    db::run_migrations(&db)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");

    if config.seed_sample_data {
        db::seed::seed_sample_data(&db, handlers::today()).await?;
    }

    let origin = config
        .frontend_url
        .parse::<axum::http::HeaderValue>()
        .context("FRONTEND_URL is not a valid origin")?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    let state = AppState {
        db,
        config: config.clone(),
    };
    let app = app(state).layer(cors);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
