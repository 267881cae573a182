//! Outcome of validating a record

use crate::codes::ViolationCode;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Per-field violation codes of one record.
///
/// Only fields that failed are present, so a report passes exactly when it
/// holds no entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Type name of the validated record
    pub record: &'static str,
    violations: HashMap<String, ViolationCode>,
}

impl ValidationReport {
    pub fn new(record: &'static str) -> Self {
        Self {
            record,
            violations: HashMap::new(),
        }
    }

    /// Record a field's code; passing codes are dropped
    pub fn record_field(&mut self, field: impl Into<String>, code: ViolationCode) {
        if !code.is_ok() {
            self.violations.insert(field.into(), code);
        }
    }

    /// True when no field failed
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Code recorded for a field, if it failed
    pub fn violation(&self, field: &str) -> Option<ViolationCode> {
        self.violations.get(field).copied()
    }

    /// Get the number of fields with violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ViolationCode)> {
        self.violations.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn violations(&self) -> &HashMap<String, ViolationCode> {
        &self.violations
    }

    pub fn into_violations(self) -> HashMap<String, ViolationCode> {
        self.violations
    }

    /// Convert to a JSON-serializable format for API responses
    pub fn to_json(&self) -> serde_json::Value {
        if self.passed() {
            return serde_json::json!({ "record": self.record, "passed": true });
        }
        serde_json::json!({
            "record": self.record,
            "passed": false,
            "error": {
                "code": "validation_failed",
                "message": "Validation failed",
                "fields": self.violations
            }
        })
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "{} passed validation", self.record);
        }
        write!(
            f,
            "{} failed validation for {} field(s):",
            self.record,
            self.violations.len()
        )?;
        let mut fields: Vec<_> = self.violations.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        for (field, code) in fields {
            write!(f, "\n  {}: {} ({})", field, code, code.bits())?;
        }
        Ok(())
    }
}
