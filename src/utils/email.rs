//! Recipient and send-input validation.
//!
//! The transform itself accepts any strings; these checks belong at the
//! boundary where recipient data enters the system (CLI arguments, upload
//! rows, form submissions).

use crate::error::AppError;
use serde_json::json;
use validator::ValidateEmail;

/// Minimum accepted body length in characters.
const MIN_BODY_LENGTH: usize = 10;

/// Validates a recipient email address.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the address is empty or not a
/// syntactically valid email.
pub fn validate_recipient(email: &str) -> Result<(), AppError> {
    let trimmed = email.trim();

    if trimmed.is_empty() {
        return Err(AppError::bad_request("Recipient email is required", json!({})));
    }

    if !trimmed.validate_email() {
        return Err(AppError::bad_request(
            "Recipient email is not a valid address",
            json!({ "email": trimmed }),
        ));
    }

    Ok(())
}

/// Validates the recipient/body pair of a send request.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the recipient fails
/// [`validate_recipient`], or the body is empty or shorter than 10
/// characters.
pub fn validate_send_input(email: &str, body: &str) -> Result<(), AppError> {
    validate_recipient(email)?;

    let trimmed = body.trim();

    if trimmed.is_empty() {
        return Err(AppError::bad_request("Email body is required", json!({})));
    }

    if trimmed.chars().count() < MIN_BODY_LENGTH {
        return Err(AppError::bad_request(
            "Email body must be at least 10 characters",
            json!({ "provided_length": trimmed.chars().count() }),
        ));
    }

    Ok(())
}
