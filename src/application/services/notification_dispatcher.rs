use crate::domain::entities::{LeadInfo, Ticket, TicketUpdate};
use crate::domain::events::LifecycleEvent;
use crate::domain::ports::Notifier;
use std::sync::Arc;

/// Formats lifecycle events into notification messages and hands them to
/// the notifier on a spawned task. Dispatch never blocks the caller and a
/// delivery failure never affects the outcome of the mutation that
/// triggered it; by the time an event reaches this component the state
/// change has already been persisted.
#[derive(Clone)]
pub struct NotificationDispatcher {
    notifier: Arc<dyn Notifier>,
    business_address: String,
}

impl NotificationDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>, business_address: String) -> Self {
        Self {
            notifier,
            business_address,
        }
    }

    pub fn dispatch(&self, event: LifecycleEvent) {
        for (recipient, subject, body) in self.format(event) {
            let notifier = self.notifier.clone();
            tokio::spawn(async move {
                if let Err(e) = notifier.notify(&recipient, &subject, &body).await {
                    tracing::warn!(
                        provider = notifier.provider_name(),
                        %recipient,
                        error = %e,
                        "notification delivery failed"
                    );
                }
            });
        }
    }

    fn format(&self, event: LifecycleEvent) -> Vec<(String, String, String)> {
        match event {
            LifecycleEvent::TicketCreated { ticket } => {
                vec![(
                    self.business_address.clone(),
                    format!("New Support Ticket Created - {}", ticket.subject),
                    format_ticket_creation(&ticket),
                )]
            }
            LifecycleEvent::TicketUpdated { ticket, update } => {
                vec![(
                    self.business_address.clone(),
                    format!("Support Ticket Updated - {}", ticket.subject),
                    format_ticket_update(&ticket, &update),
                )]
            }
            LifecycleEvent::CommentAdded { ticket, update } => {
                vec![(
                    self.business_address.clone(),
                    format!("New Comment on Support Ticket - {}", ticket.subject),
                    format_ticket_comment(&ticket, &update),
                )]
            }
            LifecycleEvent::AppointmentBooked { date, time, lead } => {
                // Confirmation to the lead plus an announcement to the business.
                vec![
                    (
                        lead.email.clone(),
                        "Your Chromapages Consultation Appointment Confirmation".to_string(),
                        format_lead_confirmation(&date, &time, &lead, &self.business_address),
                    ),
                    (
                        self.business_address.clone(),
                        "New Consultation Appointment".to_string(),
                        format_booking_announcement(&date, &time, &lead),
                    ),
                ]
            }
        }
    }
}

fn format_ticket_creation(ticket: &Ticket) -> String {
    format!(
        "New support ticket created:\n\n\
         Ticket ID: {}\n\
         Subject: {}\n\
         Priority: {}\n\
         Customer: {}\n\n\
         Description:\n{}\n\n\
         Status: {}\n\
         Created: {}\n",
        ticket.id,
        ticket.subject,
        ticket.priority,
        ticket.customer_email,
        ticket.description,
        ticket.status,
        ticket.created_at,
    )
}

fn format_ticket_update(ticket: &Ticket, update: &TicketUpdate) -> String {
    let mut body = format!(
        "Support ticket updated:\n\n\
         Ticket ID: {}\n\
         Subject: {}\n\
         Customer: {}\n\n\
         Update Type: {}\n\
         Timestamp: {}\n",
        ticket.id,
        ticket.subject,
        ticket.customer_email,
        update.kind(),
        update.timestamp(),
    );

    match update {
        TicketUpdate::StatusChange {
            from_status,
            to_status,
            note,
            ..
        } => {
            body.push_str(&format!(
                "\nStatus changed from {} to {}",
                from_status, to_status
            ));
            if let Some(note) = note {
                body.push_str(&format!("\n\nNote: {}", note));
            }
        }
        TicketUpdate::PriorityChange {
            from_priority,
            to_priority,
            ..
        } => {
            body.push_str(&format!(
                "\nPriority changed from {} to {}",
                from_priority, to_priority
            ));
        }
        _ => {}
    }

    body
}

fn format_ticket_comment(ticket: &Ticket, update: &TicketUpdate) -> String {
    let (comment, is_customer) = match update {
        TicketUpdate::Comment {
            comment,
            is_customer,
            ..
        } => (comment.as_str(), *is_customer),
        _ => ("", false),
    };
    let commenter = if is_customer { "Customer" } else { "Support" };

    format!(
        "New comment added to support ticket:\n\n\
         Ticket ID: {}\n\
         Subject: {}\n\
         Added by: {}\n\
         Timestamp: {}\n\n\
         Comment:\n{}\n",
        ticket.id,
        ticket.subject,
        commenter,
        update.timestamp(),
        comment,
    )
}

fn format_lead_confirmation(date: &str, time: &str, lead: &LeadInfo, contact: &str) -> String {
    format!(
        "Dear {},\n\n\
         Thank you for scheduling a consultation with Chromapages! Your appointment details:\n\n\
         Date: {}\n\
         Time: {}\n\n\
         We'll discuss your web design and development needs and create a plan tailored to \
         your business.\n\n\
         Location: Video call (link will be sent 24 hours before the appointment)\n\n\
         If you need to reschedule, please contact us at {}.\n\n\
         Best regards,\n\
         The Chromapages Team\n",
        lead.name.as_deref().unwrap_or("Valued Customer"),
        date,
        time,
        contact,
    )
}

fn format_booking_announcement(date: &str, time: &str, lead: &LeadInfo) -> String {
    format!(
        "New appointment scheduled:\n\n\
         Date: {}\n\
         Time: {}\n\n\
         Lead Information:\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\n\
         Conversation History:\n{}\n\n\
         Requirements/Notes:\n{}\n",
        date,
        time,
        lead.name.as_deref().unwrap_or("Not provided"),
        lead.email,
        lead.phone.as_deref().unwrap_or("Not provided"),
        lead.conversation_history
            .as_deref()
            .unwrap_or("No conversation history available"),
        lead.requirements
            .as_deref()
            .unwrap_or("No specific requirements noted"),
    )
}
