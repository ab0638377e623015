use chrono::{Days, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Slot labels offered on every bookable day.
pub const DAILY_SLOT_TEMPLATE: [&str; 7] = [
    "09:00", "10:00", "11:00", "13:00", "14:00", "15:00", "16:00",
];

/// How many days ahead the calendar is seeded when no prior state exists.
pub const DEFAULT_BOOKING_WINDOW_DAYS: u64 = 14;

/// Appointment availability document: ISO date -> ordered open slot labels.
/// A booked slot is removed from its date's list and never re-added; there
/// is no cancellation path.
pub type SlotCalendar = BTreeMap<String, Vec<String>>;

/// Seed a fresh calendar covering `window_days` days starting today, each
/// day carrying the full daily template.
pub fn seed_calendar(window_days: u64) -> SlotCalendar {
    let today = Utc::now().date_naive();
    let mut calendar = SlotCalendar::new();
    for offset in 0..window_days {
        if let Some(date) = today.checked_add_days(Days::new(offset)) {
            calendar.insert(
                date.format("%Y-%m-%d").to_string(),
                DAILY_SLOT_TEMPLATE.iter().map(|s| s.to_string()).collect(),
            );
        }
    }
    calendar
}

/// Contact details collected from a qualified lead at booking time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeadInfo {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_history: Option<String>,
}
