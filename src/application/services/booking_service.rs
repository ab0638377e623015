use crate::application::services::NotificationDispatcher;
use crate::domain::entities::{seed_calendar, LeadInfo, SlotCalendar};
use crate::domain::errors::DomainResult;
use crate::domain::events::LifecycleEvent;
use crate::domain::ports::{DocumentStore, StoreError};
use std::sync::Arc;
use tokio::sync::Mutex;

const APPOINTMENTS_COLLECTION: &str = "appointments";

/// Owns the appointment calendar and is its only writer. The calendar
/// mutex is held across the whole check-then-remove-then-persist sequence,
/// so when concurrent `book` calls race for one slot exactly one of them
/// observes it as available. Booked slots are gone for good; nothing in
/// the calendar ever re-releases a slot.
pub struct BookingService {
    store: Arc<dyn DocumentStore>,
    dispatcher: NotificationDispatcher,
    slots: Mutex<SlotCalendar>,
}

impl BookingService {
    /// Load the calendar from the store. When no backing document exists
    /// the look-ahead window is seeded with the daily template and
    /// persisted immediately.
    pub async fn load(
        store: Arc<dyn DocumentStore>,
        dispatcher: NotificationDispatcher,
        window_days: u64,
    ) -> DomainResult<Self> {
        let slots: SlotCalendar = match store.load(APPOINTMENTS_COLLECTION).await? {
            Some(document) => serde_json::from_value(document).map_err(StoreError::from)?,
            None => {
                let seeded = seed_calendar(window_days);
                let document = serde_json::to_value(&seeded).map_err(StoreError::from)?;
                store.save(APPOINTMENTS_COLLECTION, &document).await?;
                tracing::info!(days = window_days, "appointment calendar seeded");
                seeded
            }
        };
        Ok(Self {
            store,
            dispatcher,
            slots: Mutex::new(slots),
        })
    }

    async fn persist(&self, slots: &SlotCalendar) -> DomainResult<()> {
        let document = serde_json::to_value(slots).map_err(StoreError::from)?;
        self.store.save(APPOINTMENTS_COLLECTION, &document).await?;
        Ok(())
    }

    /// Open slots for a date, in order. Unknown dates yield an empty list.
    pub async fn available_slots(&self, date: &str) -> Vec<String> {
        self.slots.lock().await.get(date).cloned().unwrap_or_default()
    }

    /// Claim a slot. `Ok(false)` means the slot does not exist or was
    /// already taken; nothing is mutated and nobody is notified. On
    /// success the slot is removed and persisted before the confirmations
    /// go out.
    #[tracing::instrument(skip(self, lead))]
    pub async fn book(&self, date: &str, time: &str, lead: LeadInfo) -> DomainResult<bool> {
        let mut slots = self.slots.lock().await;

        let mut next = slots.clone();
        match next.get_mut(date) {
            Some(times) => match times.iter().position(|t| t == time) {
                Some(index) => {
                    times.remove(index);
                }
                None => return Ok(false),
            },
            None => return Ok(false),
        }

        self.persist(&next).await?;
        *slots = next;
        drop(slots);

        tracing::info!(%date, %time, lead_email = %lead.email, "appointment booked");
        self.dispatcher.dispatch(LifecycleEvent::AppointmentBooked {
            date: date.to_string(),
            time: time.to_string(),
            lead,
        });
        Ok(true)
    }
}
