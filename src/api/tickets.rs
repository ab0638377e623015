//! Ticket boundary operations. These are the functions an HTTP layer wires
//! its routes to; they validate and normalize input, then call into the
//! lifecycle service with pre-validated enums.

use crate::api::error::{ApiError, ApiResult};
use crate::api::validation::{require_field, validate_and_normalize_email};
use crate::application::services::TicketService;
use crate::domain::entities::{ChatTurn, CreateTicket, Ticket, TicketPriority, TicketStatus};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTicketRequest {
    pub subject: String,
    pub description: String,
    pub customer_email: String,
    /// Priority label; defaults to medium when omitted.
    pub priority: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddCommentRequest {
    pub comment: String,
    #[serde(default)]
    pub is_customer: bool,
}

pub async fn create_ticket(
    service: &TicketService,
    request: CreateTicketRequest,
) -> ApiResult<String> {
    let subject = require_field(&request.subject, "subject")?.to_string();
    let description = require_field(&request.description, "description")?.to_string();
    let customer_email = validate_and_normalize_email(&request.customer_email)?;
    let priority = match request.priority.as_deref() {
        Some(label) => label
            .parse::<TicketPriority>()
            .map_err(ApiError::BadRequest)?,
        None => TicketPriority::default(),
    };

    let ticket_id = service
        .create_ticket(CreateTicket {
            subject,
            description,
            customer_email,
            priority,
            conversation_history: request.conversation_history,
        })
        .await?;
    Ok(ticket_id)
}

pub async fn get_ticket(service: &TicketService, ticket_id: &str) -> ApiResult<Ticket> {
    service
        .get_ticket(ticket_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Ticket not found".to_string()))
}

pub async fn update_ticket_status(
    service: &TicketService,
    ticket_id: &str,
    request: UpdateStatusRequest,
) -> ApiResult<()> {
    let status = request
        .status
        .parse::<TicketStatus>()
        .map_err(ApiError::BadRequest)?;

    if service.update_status(ticket_id, status, request.note).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Ticket not found".to_string()))
    }
}

pub async fn update_ticket_priority(
    service: &TicketService,
    ticket_id: &str,
    priority: &str,
) -> ApiResult<()> {
    let priority = priority
        .parse::<TicketPriority>()
        .map_err(ApiError::BadRequest)?;

    if service.update_priority(ticket_id, priority).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Ticket not found".to_string()))
    }
}

pub async fn add_comment(
    service: &TicketService,
    ticket_id: &str,
    request: AddCommentRequest,
) -> ApiResult<()> {
    let comment = require_field(&request.comment, "comment")?.to_string();

    if service
        .add_comment(ticket_id, comment, request.is_customer)
        .await?
    {
        Ok(())
    } else {
        Err(ApiError::NotFound("Ticket not found".to_string()))
    }
}

pub async fn get_tickets_by_customer(
    service: &TicketService,
    customer_email: &str,
) -> ApiResult<Vec<Ticket>> {
    // Query with the same normalization creation applies.
    let email = customer_email.trim().to_lowercase();
    Ok(service.tickets_by_customer(&email).await)
}
