use crate::application::services::NotificationDispatcher;
use crate::domain::entities::{CreateTicket, Ticket, TicketPriority, TicketStatus, TicketUpdate};
use crate::domain::errors::DomainResult;
use crate::domain::events::LifecycleEvent;
use crate::domain::ports::{DocumentStore, StoreError};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

const TICKETS_COLLECTION: &str = "tickets";

type TicketDocument = BTreeMap<String, Ticket>;

/// Owns the ticket collection and is its only writer. Every mutation runs
/// under the document mutex: the updated document is written to the store
/// first and committed to memory only once the write succeeded, so the
/// in-memory view never gets ahead of durable state. The lock also keeps
/// two mutations from interleaving their whole-document saves.
///
/// Unknown ticket ids are reported as `Ok(false)`, not as errors.
pub struct TicketService {
    store: Arc<dyn DocumentStore>,
    dispatcher: NotificationDispatcher,
    tickets: Mutex<TicketDocument>,
}

impl TicketService {
    /// Load the ticket collection from the store, starting empty when no
    /// backing document exists yet.
    pub async fn load(
        store: Arc<dyn DocumentStore>,
        dispatcher: NotificationDispatcher,
    ) -> DomainResult<Self> {
        let tickets: TicketDocument = match store.load(TICKETS_COLLECTION).await? {
            Some(document) => serde_json::from_value(document).map_err(StoreError::from)?,
            None => TicketDocument::new(),
        };
        tracing::debug!(count = tickets.len(), "ticket collection loaded");
        Ok(Self {
            store,
            dispatcher,
            tickets: Mutex::new(tickets),
        })
    }

    async fn persist(&self, tickets: &TicketDocument) -> DomainResult<()> {
        let document = serde_json::to_value(tickets).map_err(StoreError::from)?;
        self.store.save(TICKETS_COLLECTION, &document).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, create))]
    pub async fn create_ticket(&self, create: CreateTicket) -> DomainResult<String> {
        let ticket = Ticket::new(create);
        let ticket_id = ticket.id.clone();

        let mut tickets = self.tickets.lock().await;
        let mut next = tickets.clone();
        next.insert(ticket_id.clone(), ticket.clone());
        self.persist(&next).await?;
        *tickets = next;
        drop(tickets);

        tracing::info!(ticket_id = %ticket_id, subject = %ticket.subject, "ticket created");
        self.dispatcher
            .dispatch(LifecycleEvent::TicketCreated { ticket });
        Ok(ticket_id)
    }

    /// Any status is reachable from any other, including re-transitioning
    /// to the current status; every call appends an audit record.
    #[tracing::instrument(skip(self, note))]
    pub async fn update_status(
        &self,
        ticket_id: &str,
        status: TicketStatus,
        note: Option<String>,
    ) -> DomainResult<bool> {
        let mut tickets = self.tickets.lock().await;
        let Some(current) = tickets.get(ticket_id) else {
            return Ok(false);
        };

        let mut ticket = current.clone();
        let timestamp = Utc::now().to_rfc3339();
        let update = TicketUpdate::StatusChange {
            timestamp: timestamp.clone(),
            from_status: ticket.status,
            to_status: status,
            note,
        };
        ticket.status = status;
        ticket.updated_at = timestamp;
        ticket.updates.push(update.clone());

        let mut next = tickets.clone();
        next.insert(ticket_id.to_string(), ticket.clone());
        self.persist(&next).await?;
        *tickets = next;
        drop(tickets);

        tracing::info!(ticket_id = %ticket_id, status = %status, "ticket status updated");
        self.dispatcher
            .dispatch(LifecycleEvent::TicketUpdated { ticket, update });
        Ok(true)
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_priority(
        &self,
        ticket_id: &str,
        priority: TicketPriority,
    ) -> DomainResult<bool> {
        let mut tickets = self.tickets.lock().await;
        let Some(current) = tickets.get(ticket_id) else {
            return Ok(false);
        };

        let mut ticket = current.clone();
        let timestamp = Utc::now().to_rfc3339();
        let update = TicketUpdate::PriorityChange {
            timestamp: timestamp.clone(),
            from_priority: ticket.priority,
            to_priority: priority,
        };
        ticket.priority = priority;
        ticket.updated_at = timestamp;
        ticket.updates.push(update.clone());

        let mut next = tickets.clone();
        next.insert(ticket_id.to_string(), ticket.clone());
        self.persist(&next).await?;
        *tickets = next;
        drop(tickets);

        tracing::info!(ticket_id = %ticket_id, priority = %priority, "ticket priority updated");
        self.dispatcher
            .dispatch(LifecycleEvent::TicketUpdated { ticket, update });
        Ok(true)
    }

    /// Append a comment to the audit trail; the ticket status is untouched.
    #[tracing::instrument(skip(self, comment))]
    pub async fn add_comment(
        &self,
        ticket_id: &str,
        comment: String,
        is_customer: bool,
    ) -> DomainResult<bool> {
        let mut tickets = self.tickets.lock().await;
        let Some(current) = tickets.get(ticket_id) else {
            return Ok(false);
        };

        let mut ticket = current.clone();
        let timestamp = Utc::now().to_rfc3339();
        let update = TicketUpdate::Comment {
            timestamp: timestamp.clone(),
            comment,
            is_customer,
        };
        ticket.updated_at = timestamp;
        ticket.updates.push(update.clone());

        let mut next = tickets.clone();
        next.insert(ticket_id.to_string(), ticket.clone());
        self.persist(&next).await?;
        *tickets = next;
        drop(tickets);

        tracing::info!(ticket_id = %ticket_id, is_customer, "comment added");
        self.dispatcher
            .dispatch(LifecycleEvent::CommentAdded { ticket, update });
        Ok(true)
    }

    pub async fn get_ticket(&self, ticket_id: &str) -> Option<Ticket> {
        self.tickets.lock().await.get(ticket_id).cloned()
    }

    pub async fn tickets_by_customer(&self, customer_email: &str) -> Vec<Ticket> {
        let tickets = self.tickets.lock().await;
        in_creation_order(tickets.values().filter(|t| t.customer_email == customer_email))
    }

    pub async fn tickets_by_status(&self, status: TicketStatus) -> Vec<Ticket> {
        let tickets = self.tickets.lock().await;
        in_creation_order(tickets.values().filter(|t| t.status == status))
    }

    /// Tickets still in the work queue: open or in progress.
    pub async fn open_tickets(&self) -> Vec<Ticket> {
        let tickets = self.tickets.lock().await;
        in_creation_order(tickets.values().filter(|t| t.is_open()))
    }
}

fn in_creation_order<'a>(tickets: impl Iterator<Item = &'a Ticket>) -> Vec<Ticket> {
    let mut tickets: Vec<Ticket> = tickets.cloned().collect();
    tickets.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    tickets
}
