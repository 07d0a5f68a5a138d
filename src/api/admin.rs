//! Admin session endpoints
//!
//! The dashboard gate is a single session flag. Logging in sets it,
//! logging out clears it; there is no credential store behind it.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct AdminSessionResponse {
    pub authenticated: bool,
}

/// Open an admin session
#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "admin",
    responses(
        (status = 200, description = "Admin session opened", body = AdminSessionResponse)
    )
)]
pub async fn login(State(state): State<crate::AppState>) -> Json<AdminSessionResponse> {
    state.services.session.set_admin_authenticated(true);
    Json(AdminSessionResponse {
        authenticated: true,
    })
}

/// Close the admin session
#[utoipa::path(
    post,
    path = "/admin/logout",
    tag = "admin",
    responses(
        (status = 200, description = "Admin session closed", body = AdminSessionResponse)
    )
)]
pub async fn logout(State(state): State<crate::AppState>) -> Json<AdminSessionResponse> {
    state.services.session.set_admin_authenticated(false);
    Json(AdminSessionResponse {
        authenticated: false,
    })
}
