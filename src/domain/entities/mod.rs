pub mod calendar;
pub mod ticket;

pub use calendar::{seed_calendar, LeadInfo, SlotCalendar, DAILY_SLOT_TEMPLATE};
pub use ticket::{ChatTurn, CreateTicket, Ticket, TicketPriority, TicketStatus, TicketUpdate};
