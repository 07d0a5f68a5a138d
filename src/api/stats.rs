//! Statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AdminSession;

/// Visitor totals over the rolling windows ending today
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorMetrics {
    /// Visitors booked for today
    pub daily: i64,
    /// Visitors in the last 7 days, inclusive of today
    pub weekly: i64,
    /// Visitors in the last calendar month, inclusive of today
    pub monthly: i64,
}

/// One museum in the popularity ranking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MuseumRank {
    pub name: String,
    /// Number of bookings for this museum
    pub count: i64,
}

/// Dashboard statistics response
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    /// All valid bookings ever recorded
    pub total_bookings: i64,
    /// Sum of party sizes over all valid bookings
    pub total_visitors: i64,
    /// Revenue over all valid bookings, in whole rupees
    pub total_revenue: i64,
    /// Bookings whose visit date is today
    pub today_bookings: i64,
    /// Revenue from today's bookings
    pub today_revenue: i64,
    pub visitor_metrics: VisitorMetrics,
    /// Up to five busiest time slots, busiest first
    pub peak_times: Vec<String>,
    /// Up to five most-booked museums, most booked first
    pub popular_museums: Vec<MuseumRank>,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Aggregated booking statistics", body = AdminStats),
        (status = 401, description = "Admin session required"),
        (status = 503, description = "Backend unreachable and no cached data")
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    _admin: AdminSession,
) -> AppResult<Json<AdminStats>> {
    let stats = state.services.stats.admin_stats().await?;
    Ok(Json(stats))
}
