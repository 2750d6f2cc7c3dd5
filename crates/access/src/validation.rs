//! Validation rules for registration input

use crate::error::{AccessError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Email pattern: non-whitespace local part, non-whitespace domain with at
/// least one dot-separated label after the `@`.
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// Require name, email, and password to be present and non-blank.
pub fn validate_presence(name: &str, email: &str, password: &str) -> Result<()> {
    if name.trim().is_empty() || email.trim().is_empty() || password.trim().is_empty() {
        return Err(AccessError::Validation(
            "Name, email, and password are required".to_string(),
        ));
    }
    Ok(())
}

/// Validate email address format
pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(AccessError::Validation("Invalid email format".to_string()))
    }
}
