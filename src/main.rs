//! Museo Server - Museum Ticket Booking System

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use museo_server::{
    api, config::AppConfig, services::Services, session::SessionContext, store, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("museo_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Museo Server v{}", env!("CARGO_PKG_VERSION"));

    let store = store::from_config(&config.store)?;
    tracing::info!("Booking store backend: {}", config.store.backend);

    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    let services = Services::new(store, SessionContext::new(), config.booking.clone());

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let app = create_router(state);

    let addr = SocketAddr::new(server_host.parse()?, server_port);
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Museums
        .route("/museums", get(api::museums::list_museums))
        .route("/museums/:id", get(api::museums::get_museum))
        .route("/museums/:id", put(api::museums::update_museum))
        .route("/museums/:id/visitors", put(api::museums::set_visitors))
        .route(
            "/museums/:id/availability",
            get(api::museums::get_availability),
        )
        // Bookings
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings", get(api::bookings::list_bookings))
        .route("/bookings/export", get(api::bookings::export_bookings))
        .route("/bookings/:id", put(api::bookings::update_booking))
        .route("/bookings/:id", delete(api::bookings::delete_booking))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        // Admin session
        .route("/admin/login", post(api::admin::login))
        .route("/admin/logout", post(api::admin::logout))
        // Chat wizard
        .route("/chat/sessions", post(api::chat::create_session))
        .route("/chat/sessions/:id", get(api::chat::get_session))
        .route("/chat/sessions/:id/messages", post(api::chat::post_message))
        .with_state(state);

    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
