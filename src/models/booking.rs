//! Booking model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::museum::{Museum, VisitorCategory};
use crate::error::{AppError, AppResult};

/// Payment status of a booking; once completed it does not regress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

/// Denormalized museum snapshot stored inside each booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MuseumRef {
    pub id: String,
    pub name: String,
    pub location: String,
}

impl From<&Museum> for MuseumRef {
    fn from(m: &Museum) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            location: m.location.clone(),
        }
    }
}

/// Visitor headcount per category; at least one must be > 0 at creation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VisitorCounts {
    #[serde(default)]
    pub adult: u32,
    #[serde(default)]
    pub child: u32,
    #[serde(default)]
    pub senior: u32,
    #[serde(default)]
    pub tourist: u32,
}

impl VisitorCounts {
    /// Party size; saturates rather than overflowing on absurd counts
    pub fn total(&self) -> u32 {
        self.adult
            .saturating_add(self.child)
            .saturating_add(self.senior)
            .saturating_add(self.tourist)
    }

    pub fn count_for(&self, category: VisitorCategory) -> u32 {
        match category {
            VisitorCategory::Adult => self.adult,
            VisitorCategory::Child => self.child,
            VisitorCategory::Senior => self.senior,
            VisitorCategory::Tourist => self.tourist,
        }
    }

    pub fn set(&mut self, category: VisitorCategory, count: u32) {
        match category {
            VisitorCategory::Adult => self.adult = count,
            VisitorCategory::Child => self.child = count,
            VisitorCategory::Senior => self.senior = count,
            VisitorCategory::Tourist => self.tourist = count,
        }
    }
}

/// A reservation for a museum, date and time slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Assigned by the persistence layer
    pub id: String,
    pub ticket_number: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub museum: MuseumRef,
    /// Visit date in canonical YYYY-MM-DD form; compared by string equality
    pub date: String,
    /// One of the museum's fixed slot labels
    pub time: String,
    pub visitors: VisitorCounts,
    pub total_amount: i64,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking creation request; total amount and ticket number are computed server-side
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub museum_id: String,
    /// Visit date (YYYY-MM-DD)
    pub date: String,
    pub time: String,
    pub visitors: VisitorCounts,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
}

/// Partial administrative update of a booking
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitors: Option<VisitorCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
}

impl UpdateBooking {
    /// Merge this patch into an existing booking
    pub fn apply(&self, booking: &mut Booking) {
        if let Some(name) = &self.name {
            booking.name = name.clone();
        }
        if let Some(email) = &self.email {
            booking.email = Some(email.clone());
        }
        if let Some(date) = &self.date {
            booking.date = date.clone();
        }
        if let Some(time) = &self.time {
            booking.time = time.clone();
        }
        if let Some(visitors) = self.visitors {
            booking.visitors = visitors;
        }
        if let Some(total_amount) = self.total_amount {
            booking.total_amount = total_amount;
        }
        if let Some(payment_status) = self.payment_status {
            booking.payment_status = payment_status;
        }
    }
}

/// Equality filter for booking queries
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingFilter {
    /// Visit date (YYYY-MM-DD)
    pub date: Option<String>,
    pub museum_id: Option<String>,
}

impl BookingFilter {
    pub fn matches(&self, booking: &Booking) -> bool {
        self.date.as_deref().map_or(true, |d| booking.date == d)
            && self
                .museum_id
                .as_deref()
                .map_or(true, |m| booking.museum.id == m)
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.museum_id.is_none()
    }
}

/// Parse and canonicalize a visit date
pub fn parse_visit_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_all_categories() {
        let counts = VisitorCounts {
            adult: 1,
            child: 2,
            senior: 3,
            tourist: 4,
        };
        assert_eq!(counts.total(), 10);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let counts = VisitorCounts {
            adult: u32::MAX,
            child: u32::MAX,
            senior: 1,
            tourist: 0,
        };
        assert_eq!(counts.total(), u32::MAX);
    }

    #[test]
    fn malformed_visit_date_is_rejected() {
        assert!(parse_visit_date("2024-05-01").is_ok());
        assert!(parse_visit_date("2024-13-01").is_err());
        assert!(parse_visit_date("01/05/2024").is_err());
    }
}
