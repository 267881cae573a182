//! Field validation and record orchestration

use crate::cache::PatternCache;
use crate::codes::ViolationCode;
use crate::descriptor::FieldDescriptor;
use crate::error::{ValidateError, ValidateResult};
use crate::options::ValidationOptions;
use crate::report::ValidationReport;
use crate::resolve::{resolve, Resolved};
use crate::rules::{pattern_tag_name, tokenize, Rule, SKIP_MARKER};
use crate::traits::{Record, ValidationRule};
use crate::validators::{
    Bound, EmailValidator, LengthValidator, NumericValidator, PatternValidator, RequiredValidator,
};
use crate::value::{FieldValue, ToFieldValue};
use std::sync::Arc;
use tracing::{debug, trace};

/// Validation engine.
///
/// Holds the compiled pattern cache; clones share it. Build separate
/// validators with [`Validator::new`] when isolation is wanted.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    patterns: Arc<PatternCache>,
}

impl Validator {
    /// Create a validator with its own, empty pattern cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator that uses an existing pattern cache
    pub fn with_pattern_cache(patterns: Arc<PatternCache>) -> Self {
        Self { patterns }
    }

    pub fn pattern_cache(&self) -> &Arc<PatternCache> {
        &self.patterns
    }

    /// Validate a record with default options
    pub fn validate_default<T>(&self, subject: &T) -> ValidateResult<ValidationReport>
    where
        T: ToFieldValue + ?Sized,
    {
        self.validate(subject, &ValidationOptions::default())
    }

    /// Validate every exported field of `subject`.
    ///
    /// `subject` may be the record itself or any chain of references and
    /// options leading to it. An unset option in that chain, or a value that
    /// is not a record, is an error; field failures are reported in the
    /// returned report.
    pub fn validate<T>(
        &self,
        subject: &T,
        options: &ValidationOptions,
    ) -> ValidateResult<ValidationReport>
    where
        T: ToFieldValue + ?Sized,
    {
        let record = resolve_record(subject)?;
        let tag_name = options.effective_tag_name();
        let mut report = ValidationReport::new(record.record_name());

        for field in record.fields() {
            let descriptor = field.descriptor;
            let name = descriptor.name();

            if !descriptor.is_exported() || !options.includes(name) {
                trace!(field = name, "skipping field");
                continue;
            }

            let code = match options.override_for(name) {
                Some(substitute) if !substitute.is_assignable_to(descriptor) => {
                    debug!(
                        field = name,
                        expected = descriptor.type_name(),
                        got = substitute.type_name(),
                        "override value has incompatible type"
                    );
                    ViolationCode::TYPE
                }
                Some(substitute) => self.validate_field(descriptor, substitute.value(), tag_name),
                None => self.validate_field(descriptor, &field.value, tag_name),
            };

            if !code.is_ok() {
                debug!(record = report.record, field = name, %code, "field failed validation");
            }
            report.record_field(name, code);
        }

        Ok(report)
    }

    /// Evaluate the tags of one field against `value`.
    ///
    /// Rules are read from `tag_name` and the pattern from its `_regexp`
    /// companion. Returns the union of every flag triggered.
    pub fn validate_field(
        &self,
        descriptor: &FieldDescriptor,
        value: &FieldValue<'_>,
        tag_name: &str,
    ) -> ViolationCode {
        let rule_tag = descriptor.tag_value(tag_name).unwrap_or_default().trim();
        if rule_tag == SKIP_MARKER {
            return ViolationCode::NONE;
        }

        let tokens = tokenize(rule_tag);
        let mut code = ViolationCode::NONE;

        let concrete = match resolve(value) {
            Resolved::Absent(_) => {
                // absence short-circuits every value rule, required or not
                if tokens.iter().any(|t| t.rule() == Rule::Required) {
                    code |= RequiredValidator.check(value);
                }
                return code;
            }
            Resolved::Present(_, concrete) => concrete,
        };

        for token in &tokens {
            code |= match token.rule() {
                Rule::Email => EmailValidator.check(concrete),
                Rule::LenMin(arg) => LengthValidator::from_argument(Bound::Min, arg).check(concrete),
                Rule::LenMax(arg) => LengthValidator::from_argument(Bound::Max, arg).check(concrete),
                Rule::ValMin(arg) => NumericValidator::min(arg).check(concrete),
                Rule::ValMax(arg) => NumericValidator::max(arg).check(concrete),
                Rule::Required | Rule::Unknown(_) => ViolationCode::NONE,
            };
        }

        let pattern_key = pattern_tag_name(tag_name);
        if let Some(pattern) = descriptor.tag_value(&pattern_key).filter(|p| !p.is_empty()) {
            code |= PatternValidator::new(pattern, &self.patterns).check(concrete);
        }

        code
    }
}

/// Follow references and options from `subject` down to a record
fn resolve_record<T>(subject: &T) -> ValidateResult<&dyn Record>
where
    T: ToFieldValue + ?Sized,
{
    if let Some(record) = subject.as_record() {
        return Ok(record);
    }
    match resolve(&subject.to_field_value()) {
        Resolved::Absent(_) => Err(ValidateError::AbsentRecord),
        Resolved::Present(kind, _) => Err(ValidateError::NotARecord { kind }),
    }
}
