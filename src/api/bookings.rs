//! Booking endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Local;

use crate::{
    error::AppResult,
    models::{Booking, BookingFilter, CreateBooking, UpdateBooking},
    services::{bookings::BookingList, export},
};

use super::AdminSession;

/// Create a booking
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid booking request"),
        (status = 404, description = "Museum not found"),
        (status = 409, description = "Requested slot cannot seat the party"),
        (status = 503, description = "Backend unreachable")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.bookings.create(request).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// List bookings (admin)
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    params(BookingFilter),
    responses(
        (status = 200, description = "Booking list", body = BookingList),
        (status = 401, description = "Admin session required"),
        (status = 503, description = "Backend unreachable and no cached data")
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    _admin: AdminSession,
    Query(query): Query<BookingFilter>,
) -> AppResult<Json<BookingList>> {
    let list = state.services.bookings.list(&query).await?;
    Ok(Json(list))
}

/// Export bookings as CSV (admin)
#[utoipa::path(
    get,
    path = "/bookings/export",
    tag = "bookings",
    params(BookingFilter),
    responses(
        (status = 200, description = "CSV document, served as an attachment", content_type = "text/csv"),
        (status = 401, description = "Admin session required"),
        (status = 503, description = "Backend unreachable and no cached data")
    )
)]
pub async fn export_bookings(
    State(state): State<crate::AppState>,
    _admin: AdminSession,
    Query(query): Query<BookingFilter>,
) -> AppResult<impl IntoResponse> {
    let list = state.services.bookings.list(&query).await?;
    let csv = export::bookings_to_csv(&list.bookings);
    let filename = export::export_filename(Local::now().date_naive());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv,
    ))
}

/// Update a booking (admin)
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = String, Path, description = "Booking identifier")),
    request_body = UpdateBooking,
    responses(
        (status = 200, description = "Updated booking", body = Booking),
        (status = 401, description = "Admin session required"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn update_booking(
    State(state): State<crate::AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
    Json(patch): Json<UpdateBooking>,
) -> AppResult<Json<Booking>> {
    Ok(Json(state.services.bookings.update(&id, &patch).await?))
}

/// Delete a booking (admin)
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = String, Path, description = "Booking identifier")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 401, description = "Admin session required"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.bookings.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
