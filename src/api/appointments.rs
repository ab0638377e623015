//! Appointment boundary operations: availability lookup and slot booking.

use crate::api::error::{ApiError, ApiResult};
use crate::api::validation::{require_field, validate_and_normalize_email};
use crate::application::services::BookingService;
use crate::domain::entities::LeadInfo;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointmentRequest {
    pub date: String,
    pub time: String,
    pub lead_info: LeadInfo,
}

pub async fn get_available_slots(service: &BookingService, date: &str) -> ApiResult<Vec<String>> {
    let date = require_field(date, "date")?;
    // Unknown dates are an empty list, not an error.
    Ok(service.available_slots(date).await)
}

pub async fn book_appointment(
    service: &BookingService,
    request: BookAppointmentRequest,
) -> ApiResult<()> {
    let date = require_field(&request.date, "date")?.to_string();
    let time = require_field(&request.time, "time")?.to_string();
    let mut lead = request.lead_info;
    lead.email = validate_and_normalize_email(&lead.email)?;

    if service.book(&date, &time, lead).await? {
        Ok(())
    } else {
        Err(ApiError::Conflict("Slot no longer available".to_string()))
    }
}
