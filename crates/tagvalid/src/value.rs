//! Field values as seen by the validator

use crate::traits::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Primitive kind of a field's underlying value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    String,
    Int,
    Uint,
    Float,
    Bool,
    Sequence,
    Map,
    Record,
    Other,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Sequence => "sequence",
            Kind::Map => "map",
            Kind::Record => "record",
            Kind::Other => "other",
        }
    }

    /// Signed, unsigned or floating point
    pub fn is_numeric(&self) -> bool {
        matches!(self, Kind::Int | Kind::Uint | Kind::Float)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of a field.
///
/// Strings borrow from the record they were read from. `Present` and
/// `Absent` model optional fields; they nest, so an optional of an optional
/// is `Present(Present(..))` when fully set. `Absent` carries the kind the
/// field would have had once unwrapped.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    String(Cow<'a, str>),
    Int(i128),
    Uint(u128),
    Float(f64),
    Bool(bool),
    /// A value the rules cannot look inside (collections, nested records, ...)
    Opaque(Kind),
    Present(Box<FieldValue<'a>>),
    Absent(Kind),
}

impl<'a> FieldValue<'a> {
    /// Kind of this value, looking through optional wrappers
    pub fn kind(&self) -> Kind {
        match self {
            FieldValue::String(_) => Kind::String,
            FieldValue::Int(_) => Kind::Int,
            FieldValue::Uint(_) => Kind::Uint,
            FieldValue::Float(_) => Kind::Float,
            FieldValue::Bool(_) => Kind::Bool,
            FieldValue::Opaque(kind) | FieldValue::Absent(kind) => *kind,
            FieldValue::Present(inner) => inner.kind(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Detach from the record the value was read from
    pub fn into_owned(self) -> FieldValue<'static> {
        match self {
            FieldValue::String(s) => FieldValue::String(Cow::Owned(s.into_owned())),
            FieldValue::Int(n) => FieldValue::Int(n),
            FieldValue::Uint(n) => FieldValue::Uint(n),
            FieldValue::Float(n) => FieldValue::Float(n),
            FieldValue::Bool(b) => FieldValue::Bool(b),
            FieldValue::Opaque(kind) => FieldValue::Opaque(kind),
            FieldValue::Present(inner) => FieldValue::Present(Box::new(inner.into_owned())),
            FieldValue::Absent(kind) => FieldValue::Absent(kind),
        }
    }
}

/// Conversion of a Rust value into the validator's view of it.
///
/// `Box`, `Arc`, `Rc` and references are transparent; `Option` is the only
/// wrapper that can be absent. Types without an impl can still sit in a
/// derived record by marking the field `#[tag(opaque)]`.
pub trait ToFieldValue {
    /// Kind of the fully unwrapped type
    fn field_kind() -> Kind;

    fn to_field_value(&self) -> FieldValue<'_>;

    /// Access the value as a record, following wrappers
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }
}

macro_rules! impl_to_field_value {
    ($kind:ident, $variant:ident as $target:ty => $($t:ty),+) => {
        $(
            impl ToFieldValue for $t {
                fn field_kind() -> Kind {
                    Kind::$kind
                }

                fn to_field_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(*self as $target)
                }
            }
        )+
    };
}

impl_to_field_value!(Int, Int as i128 => i8, i16, i32, i64, i128, isize);
impl_to_field_value!(Uint, Uint as u128 => u8, u16, u32, u64, u128, usize);
impl_to_field_value!(Float, Float as f64 => f32, f64);

/// Types the rules only see as a kind
macro_rules! impl_opaque {
    ($kind:ident => $($t:ty),+ $(,)?) => {
        $(
            impl ToFieldValue for $t {
                fn field_kind() -> Kind {
                    Kind::$kind
                }

                fn to_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Opaque(Kind::$kind)
                }
            }
        )+
    };
}

impl_opaque!(Other => char, ());

impl ToFieldValue for bool {
    fn field_kind() -> Kind {
        Kind::Bool
    }

    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl ToFieldValue for String {
    fn field_kind() -> Kind {
        Kind::String
    }

    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::String(Cow::Borrowed(self.as_str()))
    }
}

impl ToFieldValue for str {
    fn field_kind() -> Kind {
        Kind::String
    }

    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::String(Cow::Borrowed(self))
    }
}

impl ToFieldValue for Cow<'_, str> {
    fn field_kind() -> Kind {
        Kind::String
    }

    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::String(Cow::Borrowed(self.as_ref()))
    }
}

impl<T> ToFieldValue for Option<T>
where
    T: ToFieldValue,
{
    fn field_kind() -> Kind {
        T::field_kind()
    }

    fn to_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => FieldValue::Present(Box::new(value.to_field_value())),
            None => FieldValue::Absent(T::field_kind()),
        }
    }

    fn as_record(&self) -> Option<&dyn Record> {
        self.as_ref().and_then(|value| value.as_record())
    }
}

macro_rules! impl_transparent {
    ($($wrapper:ident),+) => {
        $(
            impl<T> ToFieldValue for $wrapper<T>
            where
                T: ToFieldValue + ?Sized,
            {
                fn field_kind() -> Kind {
                    T::field_kind()
                }

                fn to_field_value(&self) -> FieldValue<'_> {
                    (**self).to_field_value()
                }

                fn as_record(&self) -> Option<&dyn Record> {
                    (**self).as_record()
                }
            }
        )+
    };
}

impl_transparent!(Box, Arc, Rc);

impl<T> ToFieldValue for &T
where
    T: ToFieldValue + ?Sized,
{
    fn field_kind() -> Kind {
        T::field_kind()
    }

    fn to_field_value(&self) -> FieldValue<'_> {
        (**self).to_field_value()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }
}

impl<T> ToFieldValue for &mut T
where
    T: ToFieldValue + ?Sized,
{
    fn field_kind() -> Kind {
        T::field_kind()
    }

    fn to_field_value(&self) -> FieldValue<'_> {
        (**self).to_field_value()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }
}

/// Collections are opaque: rules see their kind, never their contents
macro_rules! impl_collection {
    ($kind:ident => $(impl<$($param:ident),+> $t:ty),+ $(,)?) => {
        $(
            impl<$($param),+> ToFieldValue for $t {
                fn field_kind() -> Kind {
                    Kind::$kind
                }

                fn to_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Opaque(Kind::$kind)
                }
            }
        )+
    };
}

impl_collection!(Sequence =>
    impl<T> Vec<T>,
    impl<T> [T],
    impl<T> VecDeque<T>,
    impl<T> LinkedList<T>,
    impl<T, S> HashSet<T, S>,
    impl<T> BTreeSet<T>,
);

impl_collection!(Map =>
    impl<K, V, S> HashMap<K, V, S>,
    impl<K, V> BTreeMap<K, V>,
);

impl<T, const N: usize> ToFieldValue for [T; N] {
    fn field_kind() -> Kind {
        Kind::Sequence
    }

    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Opaque(Kind::Sequence)
    }
}

macro_rules! impl_tuple {
    ($(($($param:ident),+)),+ $(,)?) => {
        $(
            impl<$($param),+> ToFieldValue for ($($param,)+) {
                fn field_kind() -> Kind {
                    Kind::Other
                }

                fn to_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Opaque(Kind::Other)
                }
            }
        )+
    };
}

impl_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
);
