//! Validation error types

use crate::value::Kind;
use thiserror::Error;

pub type ValidateResult<T> = Result<T, ValidateError>;

/// Structural problems with the input that abort a whole validation call.
///
/// Individual field failures are never errors; they are reported as
/// violation codes in a [`ValidationReport`](crate::ValidationReport).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    #[error("absent reference supplied where a record was expected")]
    AbsentRecord,

    #[error("input is not a record or a reference to a record, got {kind}")]
    NotARecord { kind: Kind },
}
