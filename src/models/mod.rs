//! Data models for Museo

pub mod booking;
pub mod museum;

// Re-export commonly used types
pub use booking::{Booking, BookingFilter, CreateBooking, PaymentStatus, UpdateBooking, VisitorCounts};
pub use museum::{Museum, Pricing, TimeSlot, VisitorCategory};
