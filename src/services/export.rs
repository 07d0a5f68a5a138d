//! CSV export of booking lists

use chrono::NaiveDate;

use crate::models::Booking;

/// Column order is part of the export contract
pub const CSV_HEADER: &str = "Ticket Number,Name,Email,Museum,Date,Time,Amount,Status";

/// Render bookings as CSV: one header row plus one row per booking.
/// Field values are written verbatim, missing fields as empty strings.
pub fn bookings_to_csv(bookings: &[Booking]) -> String {
    let mut lines = Vec::with_capacity(bookings.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for booking in bookings {
        let status = match booking.payment_status {
            crate::models::PaymentStatus::Pending => "pending",
            crate::models::PaymentStatus::Completed => "completed",
        };
        lines.push(
            [
                booking.ticket_number.as_str(),
                booking.name.as_str(),
                booking.email.as_deref().unwrap_or(""),
                booking.museum.name.as_str(),
                booking.date.as_str(),
                booking.time.as_str(),
                &booking.total_amount.to_string(),
                status,
            ]
            .join(","),
        );
    }
    lines.join("\n")
}

/// Download filename, e.g. `bookings-2024-05-01.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("bookings-{}.csv", date.format("%Y-%m-%d"))
}
