use crate::domain::entities::{LeadInfo, Ticket, TicketUpdate};

/// Lifecycle events handed to the notification dispatcher after a mutation
/// has been durably persisted. Each event carries a snapshot of the state
/// it describes.
#[derive(Debug, Clone)]
pub enum LifecycleEvent {
    TicketCreated {
        ticket: Ticket,
    },
    /// Status or priority change; the update record says which.
    TicketUpdated {
        ticket: Ticket,
        update: TicketUpdate,
    },
    CommentAdded {
        ticket: Ticket,
        update: TicketUpdate,
    },
    AppointmentBooked {
        date: String,
        time: String,
        lead: LeadInfo,
    },
}
