//! Optional field resolution

use crate::value::{FieldValue, Kind};

/// Outcome of unwrapping a field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// Some optional wrapper in the chain is unset
    Absent(Kind),
    /// The concrete value at the end of the chain
    Present(Kind, &'a FieldValue<'a>),
}

impl<'a> Resolved<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Resolved::Absent(_))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Resolved::Absent(kind) | Resolved::Present(kind, _) => *kind,
        }
    }

    /// The concrete value, if there is one
    pub fn value(&self) -> Option<&'a FieldValue<'a>> {
        match self {
            Resolved::Absent(_) => None,
            Resolved::Present(_, value) => Some(value),
        }
    }
}

/// Follow optional wrappers until a concrete value or an unset wrapper
pub fn resolve<'a>(value: &'a FieldValue<'a>) -> Resolved<'a> {
    let mut current = value;
    loop {
        match current {
            FieldValue::Present(inner) => current = inner.as_ref(),
            FieldValue::Absent(kind) => return Resolved::Absent(*kind),
            concrete => return Resolved::Present(concrete.kind(), concrete),
        }
    }
}
