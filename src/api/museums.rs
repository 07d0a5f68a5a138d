//! Museum catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{
        museum::{Museum, UpdateMuseum},
        TimeSlot,
    },
};

use super::AdminSession;

/// Query parameters for museum listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListMuseumsQuery {
    /// Restrict to museums in this state (case-insensitive)
    pub state: Option<String>,
}

/// Query parameters for slot availability
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    /// Visit date, YYYY-MM-DD
    pub date: String,
}

/// Per-slot availability for one museum and date
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub museum_id: String,
    pub date: String,
    pub slots: Vec<TimeSlot>,
    /// True when computed from cached bookings because the backend was
    /// unreachable
    pub degraded: bool,
}

/// Advisory headcount update
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetVisitorsRequest {
    pub current_visitors: u32,
}

/// List museums
#[utoipa::path(
    get,
    path = "/museums",
    tag = "museums",
    params(ListMuseumsQuery),
    responses(
        (status = 200, description = "Museum catalog", body = Vec<Museum>)
    )
)]
pub async fn list_museums(
    State(state): State<crate::AppState>,
    Query(query): Query<ListMuseumsQuery>,
) -> Json<Vec<Museum>> {
    let museums = match query.state {
        Some(ref s) => state.services.museums.by_state(s),
        None => state.services.museums.list(),
    };
    Json(museums)
}

/// Get one museum
#[utoipa::path(
    get,
    path = "/museums/{id}",
    tag = "museums",
    params(("id" = String, Path, description = "Museum identifier")),
    responses(
        (status = 200, description = "Museum details", body = Museum),
        (status = 404, description = "Museum not found")
    )
)]
pub async fn get_museum(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Museum>> {
    Ok(Json(state.services.museums.get(&id)?))
}

/// Update a museum (admin)
#[utoipa::path(
    put,
    path = "/museums/{id}",
    tag = "museums",
    params(("id" = String, Path, description = "Museum identifier")),
    request_body = UpdateMuseum,
    responses(
        (status = 200, description = "Updated museum", body = Museum),
        (status = 401, description = "Admin session required"),
        (status = 404, description = "Museum not found")
    )
)]
pub async fn update_museum(
    State(state): State<crate::AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
    Json(patch): Json<UpdateMuseum>,
) -> AppResult<Json<Museum>> {
    Ok(Json(state.services.museums.update(&id, &patch)?))
}

/// Set a museum's current visitor headcount (admin)
#[utoipa::path(
    put,
    path = "/museums/{id}/visitors",
    tag = "museums",
    params(("id" = String, Path, description = "Museum identifier")),
    request_body = SetVisitorsRequest,
    responses(
        (status = 200, description = "Updated museum", body = Museum),
        (status = 401, description = "Admin session required"),
        (status = 404, description = "Museum not found")
    )
)]
pub async fn set_visitors(
    State(state): State<crate::AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
    Json(request): Json<SetVisitorsRequest>,
) -> AppResult<Json<Museum>> {
    Ok(Json(
        state
            .services
            .museums
            .set_current_visitors(&id, request.current_visitors)?,
    ))
}

/// Get per-slot availability for a museum on a date
#[utoipa::path(
    get,
    path = "/museums/{id}/availability",
    tag = "museums",
    params(
        ("id" = String, Path, description = "Museum identifier"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "Slot availability", body = AvailabilityResponse),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "Museum not found"),
        (status = 503, description = "Backend unreachable and no cached data")
    )
)]
pub async fn get_availability(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    let (slots, degraded) = state.services.bookings.availability(&id, &query.date).await?;
    Ok(Json(AvailabilityResponse {
        museum_id: id,
        date: query.date,
        slots,
        degraded,
    }))
}
