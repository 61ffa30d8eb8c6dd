//! BrandSnap Backend
//!
//! Generates brand identity kits through an AI provider and keeps a bounded,
//! per-business version history of them in the Brand Vault.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod generate;
mod models;
mod vault;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use db::KvStore;
use generate::BrandGenerator;
use vault::Vault;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub vault: Arc<Vault>,
    pub generator: Arc<BrandGenerator>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting BrandSnap Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Model: {}", config.anthropic_model);

    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (BRANDSNAP_API_PSK). Authentication is disabled!");
    }
    if config.anthropic_api_key.is_none() {
        tracing::warn!("No ANTHROPIC_API_KEY configured. Generation requests will fail!");
    }

    let pool = db::init_database(&config.db_path).await?;
    let vault = Arc::new(Vault::new(KvStore::new(pool)));
    let generator = Arc::new(BrandGenerator::new(&config)?);

    let state = AppState {
        vault,
        generator,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let psk = state.config.api_psk.clone();

    let api_routes = Router::new()
        .route("/generate", post(api::generate_brand_kit))
        .route("/track", post(api::track_event))
        // Vault
        .route("/vault", get(api::get_vault))
        .route("/vault/businesses", get(api::list_businesses))
        .route(
            "/vault/businesses/{name}/versions",
            get(api::list_business_versions),
        )
        .route(
            "/vault/businesses/{name}/count",
            get(api::count_business_versions),
        )
        .route("/vault/versions", post(api::create_version))
        .route(
            "/vault/versions/{id}",
            get(api::get_version).delete(api::delete_version),
        )
        .route("/vault/versions/{id}/restore", post(api::restore_version))
        .route(
            "/vault/current",
            get(api::get_current_version).put(api::set_current_version),
        )
        .route("/vault/compare", get(api::compare_versions))
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
