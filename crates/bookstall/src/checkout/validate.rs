//! # Checkout Field Validation
//!
//! Pure validators, one per field, each returning either `Ok` or a
//! user-facing message. The form-level check runs every validator and
//! collects all failures keyed by field name so a form can annotate every
//! invalid field at once instead of stopping at the first.
//!
//! Nothing here does I/O and nothing here is sent to the server; these gate
//! submission on the client side only.

use crate::model::CustomerInfo;
use serde::Serialize;

/// A single failed field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Name: required, at least 2 characters after trimming.
pub fn validate_name(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Name is required".to_string());
    }
    if trimmed.chars().count() < 2 {
        return Err("Name must be at least 2 characters".to_string());
    }
    Ok(())
}

/// Phone: optional leading `+`, separators (space, dash, dot, parentheses)
/// allowed anywhere, 7 to 16 digits in total, nothing else.
pub fn validate_phone(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Phone number is required".to_string());
    }
    let mut digits = 0usize;
    for (i, c) in trimmed.chars().enumerate() {
        match c {
            '0'..='9' => digits += 1,
            '+' if i == 0 => {}
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return Err("Phone number contains invalid characters".to_string()),
        }
    }
    if !(7..=16).contains(&digits) {
        return Err("Phone number must contain 7 to 16 digits".to_string());
    }
    Ok(())
}

/// Email: `local@domain` with a dot somewhere inside the domain and no
/// whitespace anywhere.
pub fn validate_email(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Email is required".to_string());
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err("Email must not contain whitespace".to_string());
    }
    let Some((local, domain)) = trimmed.rsplit_once('@') else {
        return Err("Email must contain an @ sign".to_string());
    };
    if local.is_empty() || domain.is_empty() {
        return Err("Email is missing its local part or domain".to_string());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err("Email domain must contain a dot".to_string());
    }
    Ok(())
}

/// Address: required, at least 10 characters after trimming.
pub fn validate_address(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Address is required".to_string());
    }
    if trimmed.chars().count() < 10 {
        return Err("Address must be at least 10 characters".to_string());
    }
    Ok(())
}

/// Run every required-field validator and collect all failures.
///
/// Organization and notes are optional with no client-side floor or
/// ceiling; the server enforces a notes ceiling at insert.
pub fn validate_customer(customer: &CustomerInfo) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Err(message) = validate_name(&customer.name) {
        errors.push(FieldError {
            field: "name",
            message,
        });
    }
    if let Err(message) = validate_phone(&customer.phone) {
        errors.push(FieldError {
            field: "phone",
            message,
        });
    }
    if let Err(message) = validate_email(&customer.email) {
        errors.push(FieldError {
            field: "email",
            message,
        });
    }
    if let Err(message) = validate_address(&customer.address) {
        errors.push(FieldError {
            field: "address",
            message,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
