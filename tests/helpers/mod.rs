#![allow(dead_code)]

use async_trait::async_trait;
use chromadesk::domain::ports::{DocumentStore, Notifier, StoreError, StoreResult};
use chromadesk::infrastructure::persistence::JsonFileStore;
use chromadesk::{BookingService, LeadInfo, NotificationDispatcher, TicketService};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

pub const BUSINESS_ADDRESS: &str = "team@chromapages.com";

#[derive(Debug, Clone)]
pub struct SentMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Notifier double that records every message instead of delivering it.
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentMessage>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<(), String> {
        self.sent.lock().unwrap().push(SentMessage {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}

/// Store double whose saves always fail. It serves a fixed document on
/// load, so services can start from known state and then hit a
/// persistence fault on their first mutation.
pub struct FailingStore {
    document: Option<serde_json::Value>,
}

impl FailingStore {
    pub fn empty() -> Self {
        Self { document: None }
    }

    pub fn with_document(document: serde_json::Value) -> Self {
        Self {
            document: Some(document),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn load(&self, _collection: &str) -> StoreResult<Option<serde_json::Value>> {
        Ok(self.document.clone())
    }

    async fn save(&self, _collection: &str, _document: &serde_json::Value) -> StoreResult<()> {
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "backing storage unavailable",
        )))
    }
}

/// Notifier double that always fails delivery.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _: &str, _: &str, _: &str) -> Result<(), String> {
        Err("connection refused".to_string())
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }
}

pub fn recording_dispatcher() -> (NotificationDispatcher, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let dispatcher =
        NotificationDispatcher::new(notifier.clone(), BUSINESS_ADDRESS.to_string());
    (dispatcher, notifier)
}

pub fn file_store(dir: &TempDir) -> Arc<dyn DocumentStore> {
    Arc::new(JsonFileStore::new(dir.path()))
}

pub async fn setup_ticket_service() -> (TicketService, Arc<RecordingNotifier>, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let (dispatcher, notifier) = recording_dispatcher();
    let service = TicketService::load(file_store(&dir), dispatcher)
        .await
        .expect("load ticket service");
    (service, notifier, dir)
}

pub async fn setup_booking_service(
    window_days: u64,
) -> (BookingService, Arc<RecordingNotifier>, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let (dispatcher, notifier) = recording_dispatcher();
    let service = BookingService::load(file_store(&dir), dispatcher, window_days)
        .await
        .expect("load booking service");
    (service, notifier, dir)
}

/// Pre-write an appointments document so `BookingService::load` picks it
/// up instead of seeding.
pub async fn seed_appointments(dir: &TempDir, document: serde_json::Value) {
    file_store(dir)
        .save("appointments", &document)
        .await
        .expect("seed appointments");
}

pub fn lead(email: &str) -> LeadInfo {
    LeadInfo {
        email: email.to_string(),
        name: None,
        phone: None,
        requirements: None,
        conversation_history: None,
    }
}

/// Notifications are dispatched on spawned tasks; give them a beat to land.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}
