//! Pattern tag validator

use crate::cache::PatternCache;
use crate::codes::ViolationCode;
use crate::traits::ValidationRule;
use crate::value::FieldValue;
use tracing::warn;

/// Validator for the regular expression held in a field's pattern tag.
///
/// Only string values are checked; other kinds pass untouched. A pattern
/// that does not compile fails every value it is applied to.
#[derive(Debug, Clone, Copy)]
pub struct PatternValidator<'a> {
    pattern: &'a str,
    cache: &'a PatternCache,
}

impl<'a> PatternValidator<'a> {
    pub fn new(pattern: &'a str, cache: &'a PatternCache) -> Self {
        Self { pattern, cache }
    }

    /// Get the pattern string
    pub fn pattern_string(&self) -> &str {
        self.pattern
    }
}

impl ValidationRule for PatternValidator<'_> {
    fn check(&self, value: &FieldValue<'_>) -> ViolationCode {
        let text = match value {
            FieldValue::String(text) => text,
            _ => return ViolationCode::NONE,
        };

        match self.cache.get_or_compile(self.pattern) {
            Ok(regex) if regex.is_match(text) => ViolationCode::NONE,
            Ok(_) => ViolationCode::REGEXP,
            Err(error) => {
                warn!(pattern = self.pattern, %error, "pattern tag does not compile");
                ViolationCode::REGEXP
            }
        }
    }

    fn rule_name(&self) -> &'static str {
        "regexp"
    }
}
