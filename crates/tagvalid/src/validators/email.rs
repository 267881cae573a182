//! Email format validator

use crate::codes::ViolationCode;
use crate::traits::ValidationRule;
use crate::value::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;

/// Conservative `user@domain.tld` shape with a TLD of two letters or more
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Validator for email address format
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check a raw string against the email pattern
    pub fn is_valid(&self, text: &str) -> bool {
        EMAIL_REGEX.is_match(text)
    }
}

impl ValidationRule for EmailValidator {
    fn check(&self, value: &FieldValue<'_>) -> ViolationCode {
        match value {
            FieldValue::String(text) if self.is_valid(text) => ViolationCode::NONE,
            FieldValue::String(_) => ViolationCode::EMAIL,
            _ => ViolationCode::TYPE,
        }
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }
}
