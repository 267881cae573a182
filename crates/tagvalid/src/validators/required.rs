//! Required field validator

use crate::codes::ViolationCode;
use crate::resolve::resolve;
use crate::traits::ValidationRule;
use crate::value::FieldValue;

/// Fails a field whose optional chain ends unset.
///
/// Present values always pass, including empty strings and zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationRule for RequiredValidator {
    fn check(&self, value: &FieldValue<'_>) -> ViolationCode {
        if resolve(value).is_absent() {
            ViolationCode::REQ
        } else {
            ViolationCode::NONE
        }
    }

    fn rule_name(&self) -> &'static str {
        "req"
    }
}
