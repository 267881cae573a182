//! Per-call validation options and builder

use crate::descriptor::FieldDescriptor;
use crate::rules::DEFAULT_TAG_NAME;
use crate::value::{FieldValue, ToFieldValue};
use service_builder::builder;
use std::any::TypeId;
use std::collections::{HashMap, HashSet};

/// Substitute value for a field, remembering the type it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideValue {
    type_id: TypeId,
    type_name: &'static str,
    value: FieldValue<'static>,
}

impl OverrideValue {
    pub fn new<T>(value: T) -> Self
    where
        T: ToFieldValue + 'static,
    {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            value: value.to_field_value().into_owned(),
        }
    }

    pub fn value(&self) -> &FieldValue<'static> {
        &self.value
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The substitute can stand in for the field only if both have the same type
    pub fn is_assignable_to(&self, descriptor: &FieldDescriptor) -> bool {
        self.type_id == descriptor.type_id()
    }
}

/// Options for a single validation call
#[derive(Debug, Clone)]
#[builder]
pub struct ValidationOptions {
    /// When non-empty, only these fields are validated
    #[builder(default)]
    pub restrict_fields: HashSet<String>,

    /// Tag key holding the rules; `None` or empty means `"validation"`
    #[builder(default)]
    pub tag_name: Option<String>,

    /// Values validated in place of the record's current field values
    #[builder(default)]
    pub overwrite_values: HashMap<String, OverrideValue>,
}

impl ValidationOptions {
    /// Tag key in effect for this call
    pub fn effective_tag_name(&self) -> &str {
        match self.tag_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_TAG_NAME,
        }
    }

    /// Whether the field restriction lets `field` through
    pub fn includes(&self, field: &str) -> bool {
        self.restrict_fields.is_empty() || self.restrict_fields.contains(field)
    }

    pub fn override_for(&self, field: &str) -> Option<&OverrideValue> {
        self.overwrite_values.get(field)
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            restrict_fields: HashSet::new(),
            tag_name: None,
            overwrite_values: HashMap::new(),
        }
    }
}

// Add convenience methods to the generated builder
impl ValidationOptionsBuilder {
    /// Validate `field` (adds to any fields already listed)
    pub fn restrict_field(self, field: impl Into<String>) -> Self {
        let mut fields = self.restrict_fields.clone().unwrap_or_default();
        fields.insert(field.into());
        self.restrict_fields(fields)
    }

    /// Validate only the listed fields
    pub fn restrict_to<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        fields
            .into_iter()
            .fold(self, |builder, field| builder.restrict_field(field))
    }

    /// Read rules from `name` instead of `"validation"`
    pub fn tag(self, name: impl Into<String>) -> Self {
        self.tag_name(Some(name.into()))
    }

    /// Validate `value` in place of the field's current value
    pub fn overwrite_value<T>(self, field: impl Into<String>, value: T) -> Self
    where
        T: ToFieldValue + 'static,
    {
        let mut values = self.overwrite_values.clone().unwrap_or_default();
        values.insert(field.into(), OverrideValue::new(value));
        self.overwrite_values(values)
    }

    pub fn build_options(self) -> ValidationOptions {
        self.build_with_defaults().unwrap_or_default()
    }
}
