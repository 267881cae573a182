//! Built-in rule checks, one per rule name

pub mod email;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod required;

pub use email::EmailValidator;
pub use length::LengthValidator;
pub use numeric::NumericValidator;
pub use pattern::PatternValidator;
pub use required::RequiredValidator;

/// Which side of a range a bound closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}
