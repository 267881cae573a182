//! # tagvalid
//!
//! Declarative struct field validation driven by per-field tags.
//!
//! Each field carries a rule tag (`"req lenmin:2 lenmax:50"`, `"email"`,
//! `"valmin:0 valmax:100"`) and optionally a pattern tag holding a regular
//! expression. Validating a record checks every exported field and reports a
//! [`ViolationCode`] for each one that failed.
//!
//! ```rust
//! use tagvalid::{Record, ValidationOptions, Validator, ViolationCode};
//!
//! #[derive(Record)]
//! pub struct Signup {
//!     #[tag(validation = "lenmin:5 lenmax:25")]
//!     pub name: String,
//!     #[tag(validation = "req email")]
//!     pub email: Option<String>,
//!     #[tag(validation_regexp = "^[A-Z]{2}$")]
//!     pub country: String,
//! }
//!
//! let signup = Signup {
//!     name: "abc".to_string(),
//!     email: None,
//!     country: "GB".to_string(),
//! };
//!
//! let report = Validator::new()
//!     .validate(&signup, &ValidationOptions::default())
//!     .unwrap();
//!
//! assert!(!report.passed());
//! assert_eq!(report.violation("name"), Some(ViolationCode::LEN_MIN));
//! assert_eq!(report.violation("email"), Some(ViolationCode::REQ));
//! assert_eq!(report.violation("country"), None);
//! ```

// Lets the derive's `::tagvalid::` paths resolve inside this crate too
extern crate self as tagvalid;

pub mod cache;
pub mod codes;
pub mod descriptor;
pub mod error;
pub mod options;
pub mod report;
pub mod resolve;
pub mod rules;
pub mod traits;
pub mod validator;
pub mod validators;
pub mod value;

// Re-exports for easy access
pub use cache::{PatternCache, PatternCacheStats};
pub use codes::{Violation, ViolationCode};
pub use descriptor::FieldDescriptor;
pub use error::{ValidateError, ValidateResult};
pub use options::{OverrideValue, ValidationOptions, ValidationOptionsBuilder};
pub use report::ValidationReport;
pub use resolve::{resolve, Resolved};
pub use rules::{parse_rule, tokenize, Rule, RuleToken, DEFAULT_TAG_NAME, SKIP_MARKER};
pub use traits::{Field, Record, ValidationRule};
pub use validator::Validator;
pub use value::{FieldValue, Kind, ToFieldValue};

// Built-in validators
pub use validators::{
    EmailValidator, LengthValidator, NumericValidator, PatternValidator, RequiredValidator,
};

#[cfg(feature = "derive")]
pub use tagvalid_derive::Record;

// Paths used by code generated from `#[derive(Record)]`
#[doc(hidden)]
pub mod __private {
    pub use crate::descriptor::shared_table;
    pub use once_cell::sync::Lazy;
}
