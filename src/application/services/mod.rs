pub mod booking_service;
pub mod lead_qualifier;
pub mod notification_dispatcher;
pub mod ticket_service;

pub use booking_service::BookingService;
pub use lead_qualifier::qualify_lead;
pub use notification_dispatcher::NotificationDispatcher;
pub use ticket_service::TicketService;
