//! Core traits: records that can be validated and the rules applied to them

use crate::codes::ViolationCode;
use crate::descriptor::FieldDescriptor;
use crate::value::FieldValue;

/// One field of a record together with its current value
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    pub descriptor: &'a FieldDescriptor,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn new(descriptor: &'a FieldDescriptor, value: FieldValue<'a>) -> Self {
        Self { descriptor, value }
    }
}

/// A record-shaped value whose fields can be enumerated.
///
/// Usually derived with `#[derive(Record)]`, which builds the descriptor
/// table once per type; implementing it by hand is the registration path for
/// types the derive cannot see. `descriptors` and `field_values` must list
/// the same fields in the same (declaration) order.
pub trait Record {
    /// Type name used in reports
    fn record_name(&self) -> &'static str;

    /// Static description of every field
    fn descriptors(&self) -> &[FieldDescriptor];

    /// Current value of every field, borrowed from the record
    fn field_values(&self) -> Vec<FieldValue<'_>>;

    /// Descriptors paired with their current values
    fn fields(&self) -> Vec<Field<'_>> {
        self.descriptors()
            .iter()
            .zip(self.field_values())
            .map(|(descriptor, value)| Field::new(descriptor, value))
            .collect()
    }
}

/// Core trait implemented by every built-in rule check
pub trait ValidationRule {
    /// Check a resolved value, returning the flags this rule triggers
    fn check(&self, value: &FieldValue<'_>) -> ViolationCode;

    /// Get the validation rule name
    fn rule_name(&self) -> &'static str;
}
