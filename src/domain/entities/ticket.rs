use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    WaitingForCustomer,
    Resolved,
    Closed,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::InProgress => write!(f, "in_progress"),
            TicketStatus::WaitingForCustomer => write!(f, "waiting_for_customer"),
            TicketStatus::Resolved => write!(f, "resolved"),
            TicketStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "waiting_for_customer" => Ok(TicketStatus::WaitingForCustomer),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            other => Err(format!("Unknown ticket status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "low"),
            TicketPriority::Medium => write!(f, "medium"),
            TicketPriority::High => write!(f, "high"),
            TicketPriority::Urgent => write!(f, "urgent"),
        }
    }
}

impl FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            "urgent" => Ok(TicketPriority::Urgent),
            other => Err(format!("Unknown ticket priority: {}", other)),
        }
    }
}

/// One user/assistant exchange captured from the website chat widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub user: String,
    pub assistant: String,
}

/// Append-only audit record attached to a ticket. Entries are never
/// rewritten or deleted once pushed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TicketUpdate {
    Creation {
        timestamp: String,
        message: String,
    },
    StatusChange {
        timestamp: String,
        from_status: TicketStatus,
        to_status: TicketStatus,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    PriorityChange {
        timestamp: String,
        from_priority: TicketPriority,
        to_priority: TicketPriority,
    },
    Comment {
        timestamp: String,
        comment: String,
        is_customer: bool,
    },
}

impl TicketUpdate {
    pub fn timestamp(&self) -> &str {
        match self {
            TicketUpdate::Creation { timestamp, .. }
            | TicketUpdate::StatusChange { timestamp, .. }
            | TicketUpdate::PriorityChange { timestamp, .. }
            | TicketUpdate::Comment { timestamp, .. } => timestamp,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TicketUpdate::Creation { .. } => "creation",
            TicketUpdate::StatusChange { .. } => "status_change",
            TicketUpdate::PriorityChange { .. } => "priority_change",
            TicketUpdate::Comment { .. } => "comment",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub description: String,
    pub customer_email: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_at: String,
    pub updated_at: String,
    pub conversation_history: Vec<ChatTurn>,
    pub updates: Vec<TicketUpdate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTicket {
    pub subject: String,
    pub description: String,
    pub customer_email: String,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

impl Ticket {
    /// Build a fresh ticket in the initial `open` state with its creation
    /// audit record already in place.
    pub fn new(create: CreateTicket) -> Self {
        let timestamp = Utc::now().to_rfc3339();
        Ticket {
            id: uuid::Uuid::new_v4().to_string(),
            subject: create.subject,
            description: create.description,
            customer_email: create.customer_email,
            status: TicketStatus::Open,
            priority: create.priority,
            created_at: timestamp.clone(),
            updated_at: timestamp.clone(),
            conversation_history: create.conversation_history,
            updates: vec![TicketUpdate::Creation {
                timestamp,
                message: "Ticket created".to_string(),
            }],
        }
    }

    /// Open and in-progress tickets both count as "open" for the work queue.
    pub fn is_open(&self) -> bool {
        matches!(self.status, TicketStatus::Open | TicketStatus::InProgress)
    }
}
