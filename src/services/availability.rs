//! Time-slot availability calculator

use indexmap::IndexMap;

use crate::models::{Booking, Museum, TimeSlot};

/// Hard ceiling on spots offered per slot, regardless of configured
/// museum capacity.
pub const MAX_SLOT_CAPACITY: u32 = 100;

/// Capacity actually offered for booking
pub fn effective_capacity(museum: &Museum) -> u32 {
    museum.capacity.min(MAX_SLOT_CAPACITY)
}

/// Compute per-slot availability for one museum and date.
///
/// `bookings` must already be filtered to that date and museum. Every
/// configured slot is emitted, including slots with zero bookings; slot
/// labels not in the museum's list are never surfaced. `available` is the
/// true remainder and can go negative when concurrent sessions overbook a
/// slot; such slots report `is_available = false`.
pub fn available_slots(museum: &Museum, bookings: &[Booking]) -> Vec<TimeSlot> {
    let mut booked_by_slot: IndexMap<&str, i64> = museum
        .time_slots
        .iter()
        .map(|t| (t.as_str(), 0))
        .collect();

    for booking in bookings {
        if let Some(booked) = booked_by_slot.get_mut(booking.time.as_str()) {
            *booked += i64::from(booking.visitors.total());
        }
    }

    let total = i64::from(effective_capacity(museum));
    museum
        .time_slots
        .iter()
        .map(|time| {
            let booked = booked_by_slot.get(time.as_str()).copied().unwrap_or(0);
            let available = total - booked;
            TimeSlot {
                time: time.clone(),
                available,
                total,
                is_available: available > 0,
            }
        })
        .collect()
}
