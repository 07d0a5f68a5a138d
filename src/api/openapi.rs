//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{admin, bookings, chat, health, museums, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Museo API",
        version = "1.0.0",
        description = "Museum ticket booking REST API",
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Museums
        museums::list_museums,
        museums::get_museum,
        museums::update_museum,
        museums::set_visitors,
        museums::get_availability,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::export_bookings,
        bookings::update_booking,
        bookings::delete_booking,
        // Stats
        stats::get_stats,
        // Admin
        admin::login,
        admin::logout,
        // Chat
        chat::create_session,
        chat::get_session,
        chat::post_message,
    ),
    components(
        schemas(
            // Museums
            crate::models::museum::Museum,
            crate::models::museum::UpdateMuseum,
            crate::models::museum::Pricing,
            crate::models::museum::TimeSlot,
            crate::models::museum::VisitorCategory,
            museums::AvailabilityResponse,
            museums::SetVisitorsRequest,
            // Bookings
            crate::models::Booking,
            crate::models::CreateBooking,
            crate::models::UpdateBooking,
            crate::models::VisitorCounts,
            crate::models::PaymentStatus,
            crate::models::booking::MuseumRef,
            crate::services::bookings::BookingList,
            // Stats
            stats::AdminStats,
            stats::VisitorMetrics,
            stats::MuseumRank,
            // Admin
            admin::AdminSessionResponse,
            // Chat
            chat::CreateSessionRequest,
            chat::ChatSessionResponse,
            chat::ChatSessionState,
            crate::wizard::Stage,
            crate::wizard::WizardInput,
            crate::wizard::WizardReply,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "museums", description = "Museum catalog and slot availability"),
        (name = "bookings", description = "Ticket bookings and CSV export"),
        (name = "stats", description = "Dashboard statistics"),
        (name = "admin", description = "Admin session"),
        (name = "chat", description = "Chat booking wizard")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
