use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ai_client::Claude;
use pulsecheck_common::Config;
use pulsecheck_triage::{Enricher, FeedbackStore, PgFeedbackStore, Seeder};

mod components;
mod pages;
mod rest;

pub struct AppState {
    pub store: Arc<dyn FeedbackStore>,
    pub enricher: Enricher,
    pub seeder: Seeder,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    let pg_store = PgFeedbackStore::new(pool);
    pg_store.migrate().await?;
    let store: Arc<dyn FeedbackStore> = Arc::new(pg_store);

    let claude = Claude::new(&config.anthropic_api_key, &config.anthropic_model);
    let enricher = Enricher::new(Arc::new(claude), store.clone());
    let seeder = Seeder::new(enricher.clone(), store.clone());

    let state = Arc::new(AppState {
        store,
        enricher,
        seeder,
    });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // REST API
        .route("/api/store", post(rest::api_seed))
        .route("/api/items", get(rest::api_items))
        .route("/api/analyze", get(rest::api_analyze))
        .route("/api/digest", get(rest::api_digest))
        // HTML digest
        .route("/digest", get(pages::digest_page))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // The digest is recomputed per request; never cache it
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path + status + latency
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("PulseCheck API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
