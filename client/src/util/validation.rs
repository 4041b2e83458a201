//! Client-side form validation.
//!
//! Checks run before any request is sent; a non-empty result blocks
//! submission. Messages are user-facing and keyed by form field name.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Field name -> message, for fields that failed validation.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap_or_else(|e| unreachable!("email pattern: {e}")));

/// Loose `local@domain.tld` shape check, matched anywhere in the input.
pub fn is_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_email(email) {
        errors.insert("email", "Invalid email format");
    }
    if password.is_empty() {
        errors.insert("password", "Password is required");
    }
    errors
}

pub fn validate_registration(username: &str, email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if username.trim().is_empty() {
        errors.insert("username", "Username is required");
    }
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_email(email) {
        errors.insert("email", "Email is invalid");
    }
    if password.is_empty() {
        errors.insert("password", "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", "Password must be at least 6 characters");
    }
    errors
}

/// Post/edit form: the first failing check, title before content.
///
/// # Errors
///
/// Returns the banner message for a blank title or blank content.
pub fn validate_post(title: &str, content: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Title is required");
    }
    if content.trim().is_empty() {
        return Err("Content is required");
    }
    Ok(())
}
