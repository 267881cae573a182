//! Static description of a record field

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::TypeId;

static SHARED_TABLES: Lazy<DashMap<TypeId, &'static [FieldDescriptor]>> = Lazy::new(DashMap::new);

/// Descriptor table for the record type `K`, built on first use.
///
/// Used for generic records, which cannot hold their own `static`. `K` is
/// the record type with every lifetime replaced by `'static`. Each table is
/// allocated once and lives for the rest of the program.
pub fn shared_table<K>(build: impl FnOnce() -> Vec<FieldDescriptor>) -> &'static [FieldDescriptor]
where
    K: ?Sized + 'static,
{
    let key = TypeId::of::<K>();
    if let Some(table) = SHARED_TABLES.get(&key) {
        return *table;
    }

    let table = build();
    *SHARED_TABLES
        .entry(key)
        .or_insert_with(|| &*Box::leak(table.into_boxed_slice()))
}

/// Name, declared type, visibility and tags of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    type_id: TypeId,
    type_name: &'static str,
    exported: bool,
    tags: Vec<(String, String)>,
}

impl FieldDescriptor {
    /// Describe an exported field of declared type `T` with no tags.
    ///
    /// Fields of borrowed types are described with their lifetimes erased to
    /// `'static` (`&'a str` as `&'static str`).
    pub fn new<T>(name: impl Into<String>) -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: name.into(),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            exported: true,
            tags: Vec::new(),
        }
    }

    /// Set whether the field is visible outside its defining module
    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Attach a tag; earlier tags win on duplicate keys
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    /// Value of the first tag under `key`
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let descriptor = FieldDescriptor::new::<Option<String>>("nickname")
            .tag("validation", "req lenmin:2")
            .tag("validation_regexp", "^[a-z]+$");

        assert_eq!(descriptor.name(), "nickname");
        assert!(descriptor.is_exported());
        assert_eq!(descriptor.type_id(), TypeId::of::<Option<String>>());
        assert!(descriptor.type_name().contains("Option"));
        assert_eq!(descriptor.tag_value("validation"), Some("req lenmin:2"));
        assert_eq!(descriptor.tag_value("validation_regexp"), Some("^[a-z]+$"));
        assert_eq!(descriptor.tag_value("mytag"), None);
        assert_eq!(descriptor.tags().count(), 2);
    }

    #[test]
    fn test_first_tag_wins() {
        let descriptor = FieldDescriptor::new::<i32>("age")
            .exported(false)
            .tag("validation", "valmin:1")
            .tag("validation", "valmin:99");

        assert!(!descriptor.is_exported());
        assert_eq!(descriptor.tag_value("validation"), Some("valmin:1"));
    }

    #[test]
    fn test_shared_table_built_once_per_type() {
        struct First;
        struct Second;

        let build = || vec![FieldDescriptor::new::<String>("name")];
        let first = shared_table::<First>(build);
        let again = shared_table::<First>(|| panic!("table must be reused"));
        let second = shared_table::<Second>(|| vec![]);

        assert!(std::ptr::eq(first, again));
        assert_eq!(first[0].name(), "name");
        assert!(second.is_empty());
    }
}
