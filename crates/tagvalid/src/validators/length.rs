//! String length validator

use super::Bound;
use crate::codes::ViolationCode;
use crate::traits::ValidationRule;
use crate::value::FieldValue;

/// Validator for one side of a string length range (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthValidator {
    pub bound: Bound,
    pub limit: usize,
}

impl LengthValidator {
    /// Minimum length constraint
    pub fn min(limit: usize) -> Self {
        Self {
            bound: Bound::Min,
            limit,
        }
    }

    /// Maximum length constraint
    pub fn max(limit: usize) -> Self {
        Self {
            bound: Bound::Max,
            limit,
        }
    }

    /// Build from a tag argument; a malformed argument is a limit of zero
    pub fn from_argument(bound: Bound, argument: &str) -> Self {
        Self {
            bound,
            limit: argument.trim().parse().unwrap_or(0),
        }
    }
}

impl ValidationRule for LengthValidator {
    fn check(&self, value: &FieldValue<'_>) -> ViolationCode {
        let text = match value {
            FieldValue::String(text) => text,
            _ => return ViolationCode::TYPE,
        };

        // Unicode-aware length
        let length = text.chars().count();
        match self.bound {
            Bound::Min if length < self.limit => ViolationCode::LEN_MIN,
            Bound::Max if length > self.limit => ViolationCode::LEN_MAX,
            _ => ViolationCode::NONE,
        }
    }

    fn rule_name(&self) -> &'static str {
        match self.bound {
            Bound::Min => "lenmin",
            Bound::Max => "lenmax",
        }
    }
}
