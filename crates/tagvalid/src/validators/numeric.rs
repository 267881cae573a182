//! Numeric range validator

use super::Bound;
use crate::codes::ViolationCode;
use crate::traits::ValidationRule;
use crate::value::FieldValue;
use std::str::FromStr;

/// Validator for one side of a numeric range (inclusive).
///
/// The limit is kept as written in the tag and parsed in the domain of the
/// value being checked, so `valmin:-6` works for signed fields and reads as
/// zero for unsigned ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericValidator<'a> {
    pub bound: Bound,
    pub limit: &'a str,
}

impl<'a> NumericValidator<'a> {
    pub fn min(limit: &'a str) -> Self {
        Self {
            bound: Bound::Min,
            limit,
        }
    }

    pub fn max(limit: &'a str) -> Self {
        Self {
            bound: Bound::Max,
            limit,
        }
    }

    fn compare<T>(&self, value: T) -> ViolationCode
    where
        T: FromStr + PartialOrd + Default,
    {
        let limit: T = self.limit.trim().parse().unwrap_or_default();
        match self.bound {
            Bound::Min if value < limit => ViolationCode::VAL_MIN,
            Bound::Max if value > limit => ViolationCode::VAL_MAX,
            _ => ViolationCode::NONE,
        }
    }
}

impl ValidationRule for NumericValidator<'_> {
    fn check(&self, value: &FieldValue<'_>) -> ViolationCode {
        match value {
            FieldValue::Int(n) => self.compare(*n),
            FieldValue::Uint(n) => self.compare(*n),
            FieldValue::Float(n) => self.compare(*n),
            _ => ViolationCode::TYPE,
        }
    }

    fn rule_name(&self) -> &'static str {
        match self.bound {
            Bound::Min => "valmin",
            Bound::Max => "valmax",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_validator_signed_bounds() {
        let min = NumericValidator::min("18");
        let max = NumericValidator::max("150");

        assert!(min.check(&FieldValue::Int(18)).is_ok());
        assert_eq!(min.check(&FieldValue::Int(17)), ViolationCode::VAL_MIN);
        assert!(max.check(&FieldValue::Int(150)).is_ok());
        assert_eq!(max.check(&FieldValue::Int(151)), ViolationCode::VAL_MAX);
    }

    #[test]
    fn test_numeric_validator_negative_range() {
        let min = NumericValidator::min("-6");
        let max = NumericValidator::max("-2");

        assert!(min.check(&FieldValue::Int(-4)).is_ok());
        assert!(max.check(&FieldValue::Int(-4)).is_ok());
        assert_eq!(max.check(&FieldValue::Int(0)), ViolationCode::VAL_MAX);
        assert_eq!(min.check(&FieldValue::Int(-7)), ViolationCode::VAL_MIN);
    }

    #[test]
    fn test_numeric_validator_unsigned_and_float() {
        assert_eq!(
            NumericValidator::min("10").check(&FieldValue::Uint(9)),
            ViolationCode::VAL_MIN
        );
        assert!(NumericValidator::max("10").check(&FieldValue::Uint(10)).is_ok());
        assert_eq!(
            NumericValidator::max("2.5").check(&FieldValue::Float(2.51)),
            ViolationCode::VAL_MAX
        );
        assert!(NumericValidator::min("2.5").check(&FieldValue::Float(2.5)).is_ok());
    }

    #[test]
    fn test_numeric_validator_malformed_limit_is_zero() {
        // unsigned domain cannot hold -1, so the limit falls back to zero
        assert!(NumericValidator::min("-1").check(&FieldValue::Uint(0)).is_ok());
        assert_eq!(
            NumericValidator::max("lots").check(&FieldValue::Int(1)),
            ViolationCode::VAL_MAX
        );
        // a fractional limit is malformed in the integer domain
        assert!(NumericValidator::max("1.5").check(&FieldValue::Int(0)).is_ok());
    }

    #[test]
    fn test_numeric_validator_invalid_type() {
        let validator = NumericValidator::min("0");
        assert_eq!(
            validator.check(&FieldValue::String("12".into())),
            ViolationCode::TYPE
        );
        assert_eq!(validator.check(&FieldValue::Bool(false)), ViolationCode::TYPE);
        assert_eq!(validator.rule_name(), "valmin");
    }
}
