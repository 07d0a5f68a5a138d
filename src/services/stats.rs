//! Booking statistics service

use std::sync::Arc;

use chrono::{Duration, Local, Months, NaiveDate};
use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    api::stats::{AdminStats, MuseumRank},
    error::{AppError, AppResult},
    session::SessionContext,
    store::BookingStore,
};

/// How many entries the peak-time and popular-museum rankings keep
const TOP_N: usize = 5;

#[derive(Clone)]
pub struct StatsService {
    store: Arc<dyn BookingStore>,
    session: SessionContext,
}

impl StatsService {
    pub fn new(store: Arc<dyn BookingStore>, session: SessionContext) -> Self {
        Self { store, session }
    }

    /// Aggregate metrics over the current booking collection.
    ///
    /// Falls back to the session's cached booking list when the backend is
    /// unreachable, so a store outage degrades the dashboard instead of
    /// blanking it.
    pub async fn admin_stats(&self) -> AppResult<AdminStats> {
        let raw = match self.store.list_raw().await {
            Ok(raw) => raw,
            Err(AppError::BackendUnavailable(msg)) => {
                let cached = self
                    .session
                    .cached_admin_bookings()
                    .ok_or(AppError::BackendUnavailable(msg.clone()))?;
                tracing::warn!("Stats falling back to cached bookings: {}", msg);
                serde_json::to_value(cached).map_err(|e| AppError::Internal(e.to_string()))?
            }
            Err(e) => return Err(e),
        };
        compute_stats(&raw, Local::now().date_naive())
    }
}

/// Derive `AdminStats` from the raw booking collection.
///
/// A booking element counts only if it carries a string `date`, an object
/// `visitors` and a numeric `totalAmount`; anything else is skipped without
/// failing the batch. A non-array input is an `InvalidInput` error.
pub fn compute_stats(raw: &Value, today: NaiveDate) -> AppResult<AdminStats> {
    let list = raw
        .as_array()
        .ok_or_else(|| AppError::InvalidInput("Booking list is not a sequence".to_string()))?;

    let today_str = today.format("%Y-%m-%d").to_string();
    let week_start = today - Duration::days(7);
    let month_start = today
        .checked_sub_months(Months::new(1))
        .unwrap_or(week_start);

    let mut stats = AdminStats::default();
    let mut slot_tally: IndexMap<String, i64> = IndexMap::new();
    let mut museum_tally: IndexMap<String, i64> = IndexMap::new();

    for entry in list {
        let (Some(date), Some(visitors), Some(amount)) = (
            entry.get("date").and_then(Value::as_str),
            entry.get("visitors").and_then(Value::as_object),
            entry.get("totalAmount").and_then(Value::as_f64),
        ) else {
            continue;
        };

        // Non-numeric category values count as zero visitors
        let visitor_count: i64 = visitors
            .values()
            .filter_map(Value::as_f64)
            .map(|v| v as i64)
            .sum();
        let amount = amount as i64;

        stats.total_bookings += 1;
        stats.total_visitors += visitor_count;
        stats.total_revenue += amount;

        // Today is exact string equality on the canonical form
        if date == today_str {
            stats.today_bookings += 1;
            stats.today_revenue += amount;
            stats.visitor_metrics.daily += visitor_count;
        }

        if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            if parsed >= week_start && parsed <= today {
                stats.visitor_metrics.weekly += visitor_count;
            }
            if parsed >= month_start && parsed <= today {
                stats.visitor_metrics.monthly += visitor_count;
            }
        }

        if let Some(time) = entry.get("time").and_then(Value::as_str) {
            *slot_tally.entry(time.to_string()).or_insert(0) += 1;
        }
        if let Some(name) = entry
            .get("museum")
            .and_then(|m| m.get("name"))
            .and_then(Value::as_str)
        {
            *museum_tally.entry(name.to_string()).or_insert(0) += 1;
        }
    }

    stats.peak_times = top_entries(slot_tally)
        .into_iter()
        .map(|(time, _)| time)
        .collect();
    stats.popular_museums = top_entries(museum_tally)
        .into_iter()
        .map(|(name, count)| MuseumRank { name, count })
        .collect();

    Ok(stats)
}

/// Top-N by descending count; ties keep first-encountered order
fn top_entries(tally: IndexMap<String, i64>) -> Vec<(String, i64)> {
    let mut entries: Vec<(String, i64)> = tally.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(TOP_N);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap() + Duration::days(offset)
    }

    fn booking(date: &str, time: &str, museum: &str, adults: i64, amount: i64) -> Value {
        json!({
            "id": "booking_1",
            "date": date,
            "time": time,
            "museum": { "id": "m", "name": museum, "location": "x" },
            "visitors": { "adult": adults, "child": 0 },
            "totalAmount": amount,
        })
    }

    #[test]
    fn non_sequence_input_is_invalid() {
        let err = compute_stats(&json!({"not": "a list"}), day(0)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn empty_list_yields_zeroed_stats() {
        let stats = compute_stats(&json!([]), day(0)).unwrap();
        assert_eq!(stats, AdminStats::default());
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let list = json!([
            booking("2024-05-15", "10:00", "National Museum", 2, 40),
            { "time": "10:00" },                                   // no date/visitors/amount
            { "date": "2024-05-15", "visitors": {"adult": 1} },    // no totalAmount
            { "date": "2024-05-15", "totalAmount": 99 },           // no visitors
            "not even an object",
        ]);
        let stats = compute_stats(&list, day(0)).unwrap();
        assert_eq!(stats.total_bookings, 1);
        assert_eq!(stats.total_revenue, 40);
    }

    #[test]
    fn revenue_is_order_independent() {
        let a = booking("2024-05-10", "10:00", "A", 1, 100);
        let b = booking("2024-05-11", "12:00", "B", 2, 250);
        let c = booking("2024-05-12", "14:00", "C", 3, 50);
        let forward = compute_stats(&json!([a, b, c]), day(0)).unwrap();
        let a = booking("2024-05-10", "10:00", "A", 1, 100);
        let b = booking("2024-05-11", "12:00", "B", 2, 250);
        let c = booking("2024-05-12", "14:00", "C", 3, 50);
        let reverse = compute_stats(&json!([c, b, a]), day(0)).unwrap();
        assert_eq!(forward.total_revenue, 400);
        assert_eq!(forward.total_revenue, reverse.total_revenue);
    }

    #[test]
    fn today_matches_by_exact_string_equality() {
        let list = json!([
            booking("2024-05-15", "10:00", "A", 2, 40),
            booking("2024-05-14", "10:00", "A", 5, 100),
            // Not canonical form, so never equal to today's string
            booking("2024-5-15", "10:00", "A", 9, 900),
        ]);
        let stats = compute_stats(&list, day(0)).unwrap();
        assert_eq!(stats.today_bookings, 1);
        assert_eq!(stats.today_revenue, 40);
        assert_eq!(stats.visitor_metrics.daily, 2);
    }

    #[test]
    fn visitor_windows_are_inclusive() {
        let list = json!([
            booking("2024-05-15", "10:00", "A", 1, 10), // today
            booking("2024-05-08", "10:00", "A", 2, 10), // exactly 7 days back
            booking("2024-05-07", "10:00", "A", 4, 10), // outside weekly, inside monthly
            booking("2024-04-15", "10:00", "A", 8, 10), // exactly 1 month back
            booking("2024-04-14", "10:00", "A", 16, 10), // outside monthly
            booking("2024-05-16", "10:00", "A", 32, 10), // future, outside all windows
        ]);
        let stats = compute_stats(&list, day(0)).unwrap();
        assert_eq!(stats.visitor_metrics.daily, 1);
        assert_eq!(stats.visitor_metrics.weekly, 3);
        assert_eq!(stats.visitor_metrics.monthly, 15);
    }

    #[test]
    fn non_numeric_visitor_values_count_as_zero() {
        let list = json!([{
            "date": "2024-05-15",
            "time": "10:00",
            "visitors": { "adult": 3, "child": "two", "senior": null },
            "totalAmount": 60,
        }]);
        let stats = compute_stats(&list, day(0)).unwrap();
        assert_eq!(stats.total_visitors, 3);
    }

    #[test]
    fn rankings_cap_at_five_descending_with_stable_ties() {
        let mut entries = Vec::new();
        // Six distinct slots; "14:00" is busiest, then "10:00".
        for _ in 0..3 {
            entries.push(booking("2024-05-01", "14:00", "B", 1, 10));
        }
        for _ in 0..2 {
            entries.push(booking("2024-05-01", "10:00", "A", 1, 10));
        }
        for slot in ["09:00", "11:00", "12:00", "13:00"] {
            entries.push(booking("2024-05-01", slot, "C", 1, 10));
        }
        let stats = compute_stats(&Value::Array(entries), day(0)).unwrap();
        assert_eq!(stats.peak_times.len(), 5);
        assert_eq!(stats.peak_times[0], "14:00");
        assert_eq!(stats.peak_times[1], "10:00");
        // Single-count slots tie; first encountered wins
        assert_eq!(stats.peak_times[2], "09:00");
        assert_eq!(stats.peak_times[3], "11:00");
        assert_eq!(stats.peak_times[4], "12:00");

        assert_eq!(stats.popular_museums[0].name, "B");
        assert_eq!(stats.popular_museums[0].count, 3);
        assert_eq!(stats.popular_museums[1].name, "A");
        assert_eq!(stats.popular_museums[1].count, 2);
    }
}
