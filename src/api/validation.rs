use crate::api::error::{ApiError, ApiResult};

pub fn validate_and_normalize_email(email: &str) -> ApiResult<String> {
    let trimmed = email.trim();

    if !email_address::EmailAddress::is_valid(trimmed) {
        return Err(ApiError::BadRequest(format!(
            "'{}' is not a valid email address",
            trimmed
        )));
    }

    // EmailAddress accepts bare hostnames; insist on a dotted domain.
    if let Some((_, domain)) = trimmed.split_once('@') {
        if !domain.contains('.') {
            return Err(ApiError::BadRequest(format!(
                "Email domain '{}' is missing a top-level domain",
                domain
            )));
        }
    }

    // Normalized lowercase form is what gets stored and queried.
    Ok(trimmed.to_lowercase())
}

/// Reject empty or whitespace-only required fields, returning the trimmed
/// value.
pub fn require_field<'a>(value: &'a str, field: &str) -> ApiResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed)
}
