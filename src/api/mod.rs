//! API handlers for the museum booking REST endpoints

pub mod admin;
pub mod bookings;
pub mod chat;
pub mod health;
pub mod museums;
pub mod openapi;
pub mod stats;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{error::AppError, AppState};

/// Extractor guarding administrative endpoints. Admission is the session
/// flag set by the admin login endpoint; there is no credential check
/// beyond it.
pub struct AdminSession;

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.services.session.admin_authenticated() {
            return Err(AppError::Unauthorized(
                "Admin session required".to_string(),
            ));
        }
        Ok(AdminSession)
    }
}
