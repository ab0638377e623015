use chromadesk::domain::DomainError;
use chromadesk::{BookingService, CreateTicket, TicketPriority, TicketService, TicketStatus};
use serde_json::json;
use std::sync::Arc;

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_ticket_document_survives_reload_intact() {
    let dir = tempfile::tempdir().unwrap();

    let (first_id, second_id);
    {
        let (dispatcher, _notifier) = recording_dispatcher();
        let service = TicketService::load(file_store(&dir), dispatcher)
            .await
            .unwrap();

        first_id = service
            .create_ticket(CreateTicket {
                subject: "Site down".to_string(),
                description: "Homepage 500s".to_string(),
                customer_email: "a@b.com".to_string(),
                priority: TicketPriority::High,
                conversation_history: Vec::new(),
            })
            .await
            .unwrap();
        second_id = service
            .create_ticket(CreateTicket {
                subject: "Billing question".to_string(),
                description: "Invoice missing".to_string(),
                customer_email: "c@d.com".to_string(),
                priority: TicketPriority::default(),
                conversation_history: Vec::new(),
            })
            .await
            .unwrap();

        service
            .update_status(&first_id, TicketStatus::Resolved, Some("fixed".to_string()))
            .await
            .unwrap();
        service
            .add_comment(&first_id, "confirmed".to_string(), true)
            .await
            .unwrap();
    }

    // Fresh service over the same directory sees identical state.
    let (dispatcher, _notifier) = recording_dispatcher();
    let reloaded = TicketService::load(file_store(&dir), dispatcher)
        .await
        .unwrap();

    let first = reloaded.get_ticket(&first_id).await.expect("first ticket");
    assert_eq!(first.status, TicketStatus::Resolved);
    assert_eq!(first.priority, TicketPriority::High);
    assert_eq!(first.updates.len(), 3);
    assert_eq!(first.updates[0].kind(), "creation");
    assert_eq!(first.updates[1].kind(), "status_change");
    assert_eq!(first.updates[2].kind(), "comment");

    let second = reloaded.get_ticket(&second_id).await.expect("second ticket");
    assert_eq!(second.status, TicketStatus::Open);
    assert_eq!(second.updates.len(), 1);
}

#[tokio::test]
async fn test_booked_slots_stay_booked_across_reload() {
    let dir = tempfile::tempdir().unwrap();
    seed_appointments(&dir, json!({"2024-06-01": ["09:00", "10:00"]})).await;

    {
        let (dispatcher, _notifier) = recording_dispatcher();
        let service = BookingService::load(file_store(&dir), dispatcher, 14)
            .await
            .unwrap();
        assert!(service
            .book("2024-06-01", "09:00", lead("x@y.com"))
            .await
            .unwrap());
    }

    let (dispatcher, _notifier) = recording_dispatcher();
    let reloaded = BookingService::load(file_store(&dir), dispatcher, 14)
        .await
        .unwrap();
    assert_eq!(reloaded.available_slots("2024-06-01").await, vec!["10:00"]);
}

#[tokio::test]
async fn test_existing_calendar_is_not_reseeded() {
    let dir = tempfile::tempdir().unwrap();
    seed_appointments(&dir, json!({"2024-06-01": []})).await;

    let (dispatcher, _notifier) = recording_dispatcher();
    let service = BookingService::load(file_store(&dir), dispatcher, 14)
        .await
        .unwrap();

    // The stored document wins over the seed template.
    assert!(service.available_slots("2024-06-01").await.is_empty());
    let today = chrono::Utc::now()
        .date_naive()
        .format("%Y-%m-%d")
        .to_string();
    assert!(service.available_slots(&today).await.is_empty());
}

#[tokio::test]
async fn test_failed_save_surfaces_storage_error_and_keeps_memory_unchanged() {
    // Build a durable document with one open ticket first.
    let dir = tempfile::tempdir().unwrap();
    let (dispatcher, _notifier) = recording_dispatcher();
    let service = TicketService::load(file_store(&dir), dispatcher)
        .await
        .unwrap();
    let ticket_id = service
        .create_ticket(CreateTicket {
            subject: "Site down".to_string(),
            description: "Homepage 500s".to_string(),
            customer_email: "a@b.com".to_string(),
            priority: TicketPriority::default(),
            conversation_history: Vec::new(),
        })
        .await
        .unwrap();
    let raw = tokio::fs::read(dir.path().join("tickets.json")).await.unwrap();
    let document: serde_json::Value = serde_json::from_slice(&raw).unwrap();

    // Same state behind a store whose writes fail.
    let (dispatcher, notifier) = recording_dispatcher();
    let service = TicketService::load(Arc::new(FailingStore::with_document(document)), dispatcher)
        .await
        .unwrap();

    let result = service
        .update_status(&ticket_id, TicketStatus::Resolved, None)
        .await;
    assert!(matches!(result, Err(DomainError::Storage(_))));

    // Memory still matches the last durable state and nobody was notified.
    let ticket = service.get_ticket(&ticket_id).await.unwrap();
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.updates.len(), 1);
    settle().await;
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_failed_save_rejects_creation_without_ghost_tickets() {
    let (dispatcher, notifier) = recording_dispatcher();
    let service = TicketService::load(Arc::new(FailingStore::empty()), dispatcher)
        .await
        .unwrap();

    let result = service
        .create_ticket(CreateTicket {
            subject: "Site down".to_string(),
            description: "Homepage 500s".to_string(),
            customer_email: "a@b.com".to_string(),
            priority: TicketPriority::default(),
            conversation_history: Vec::new(),
        })
        .await;
    assert!(matches!(result, Err(DomainError::Storage(_))));

    assert!(service.tickets_by_customer("a@b.com").await.is_empty());
    assert!(service.open_tickets().await.is_empty());
    settle().await;
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_failed_save_blocks_booking_and_keeps_slot_available() {
    let (dispatcher, notifier) = recording_dispatcher();
    let store = Arc::new(FailingStore::with_document(
        json!({"2024-06-01": ["09:00", "10:00"]}),
    ));
    let service = BookingService::load(store, dispatcher, 14).await.unwrap();

    let result = service.book("2024-06-01", "09:00", lead("x@y.com")).await;
    assert!(matches!(result, Err(DomainError::Storage(_))));

    assert_eq!(
        service.available_slots("2024-06-01").await,
        vec!["09:00", "10:00"]
    );
    settle().await;
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_on_disk_ticket_shape_matches_contract() {
    let dir = tempfile::tempdir().unwrap();
    let (dispatcher, _notifier) = recording_dispatcher();
    let service = TicketService::load(file_store(&dir), dispatcher)
        .await
        .unwrap();

    let ticket_id = service
        .create_ticket(CreateTicket {
            subject: "Site down".to_string(),
            description: "Homepage 500s".to_string(),
            customer_email: "a@b.com".to_string(),
            priority: TicketPriority::default(),
            conversation_history: Vec::new(),
        })
        .await
        .unwrap();

    let raw = tokio::fs::read(dir.path().join("tickets.json")).await.unwrap();
    let document: serde_json::Value = serde_json::from_slice(&raw).unwrap();

    let ticket = &document[&ticket_id];
    assert_eq!(ticket["id"], ticket_id.as_str());
    assert_eq!(ticket["status"], "open");
    assert_eq!(ticket["priority"], "medium");
    assert_eq!(ticket["updates"][0]["type"], "creation");
}
