//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    /// Which booking store backend is serving requests
    pub store_backend: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint, reporting the configured store backend
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(State(state): State<crate::AppState>) -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store_backend: state.config.store.backend.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, BookingConfig, LoggingConfig, ServerConfig, StoreConfig};
    use crate::services::Services;
    use crate::session::SessionContext;
    use crate::store::memory::MemoryStore;
    use crate::AppState;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let config = AppConfig {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            booking: BookingConfig::default(),
            logging: LoggingConfig::default(),
        };
        AppState {
            services: Arc::new(Services::new(
                Arc::new(MemoryStore::new()),
                SessionContext::new(),
                config.booking.clone(),
            )),
            config: Arc::new(config),
        }
    }

    #[tokio::test]
    async fn readiness_reports_configured_backend() {
        let Json(body) = readiness_check(State(test_state())).await;
        assert_eq!(body.status, "ready");
        assert_eq!(body.store_backend, "memory");
    }
}
