use crate::application::services::{BookingService, NotificationDispatcher, TicketService};
use crate::config::Config;
use crate::domain::ports::{DocumentStore, Notifier};
use crate::infrastructure::persistence::JsonFileStore;
use crate::infrastructure::providers::SmtpNotifier;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The service objects owned by the process entry point. Request handlers
/// borrow these; nothing in the crate reaches for globals.
pub struct AppServices {
    pub tickets: Arc<TicketService>,
    pub booking: Arc<BookingService>,
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromadesk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wire the store, notifier and both services together. Loads (or seeds)
/// the persisted documents, so this must run before any request is served.
pub async fn build_services(config: &Config) -> anyhow::Result<AppServices> {
    let store: Arc<dyn DocumentStore> = Arc::new(JsonFileStore::new(&config.data_dir));

    let notifier: Arc<dyn Notifier> = Arc::new(SmtpNotifier::new(
        &config.smtp_server,
        config.smtp_port,
        &config.email_address,
        &config.email_password,
    )?);
    let dispatcher = NotificationDispatcher::new(notifier, config.email_address.clone());

    let tickets = Arc::new(TicketService::load(store.clone(), dispatcher.clone()).await?);
    let booking =
        Arc::new(BookingService::load(store, dispatcher, config.booking_window_days).await?);

    tracing::info!(data_dir = %config.data_dir.display(), "services initialized");
    Ok(AppServices { tickets, booking })
}
