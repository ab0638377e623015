pub mod api;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::services::{
    qualify_lead, BookingService, NotificationDispatcher, TicketService,
};
pub use bootstrap::AppServices;
pub use config::Config;
pub use domain::entities::{
    ChatTurn, CreateTicket, LeadInfo, Ticket, TicketPriority, TicketStatus, TicketUpdate,
};
pub use domain::ports::{DocumentStore, Notifier};
