//! Violation codes reported per field
//!
//! Every failure kind owns one bit, starting at `2`. A field's code is the
//! union of every flag its rules triggered, so callers test individual kinds
//! with [`ViolationCode::contains`] rather than comparing against a flag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A single kind of rule failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// String shorter than its `lenmin` bound
    LenMin,
    /// String longer than its `lenmax` bound
    LenMax,
    /// Number below its `valmin` bound
    ValMin,
    /// Number above its `valmax` bound
    ValMax,
    /// String not matching the pattern tag (or the pattern does not compile)
    Pattern,
    /// String that is not an e-mail address
    Email,
    /// Absent optional field marked `req`
    Required,
    /// Rule applied to a value of the wrong kind, or incompatible override
    TypeMismatch,
}

impl Violation {
    /// All kinds, in bit order
    pub const ALL: [Violation; 8] = [
        Violation::LenMin,
        Violation::LenMax,
        Violation::ValMin,
        Violation::ValMax,
        Violation::Pattern,
        Violation::Email,
        Violation::Required,
        Violation::TypeMismatch,
    ];

    /// The bit this kind occupies in a [`ViolationCode`]
    pub const fn bit(self) -> u32 {
        match self {
            Violation::LenMin => 2,
            Violation::LenMax => 4,
            Violation::ValMin => 8,
            Violation::ValMax => 16,
            Violation::Pattern => 32,
            Violation::Email => 64,
            Violation::Required => 128,
            Violation::TypeMismatch => 256,
        }
    }

    /// Short machine-friendly name, matching the rule vocabulary where one exists
    pub const fn name(self) -> &'static str {
        match self {
            Violation::LenMin => "lenmin",
            Violation::LenMax => "lenmax",
            Violation::ValMin => "valmin",
            Violation::ValMax => "valmax",
            Violation::Pattern => "regexp",
            Violation::Email => "email",
            Violation::Required => "req",
            Violation::TypeMismatch => "type",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregated violations of one field; `0` means the field passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationCode(u32);

impl ViolationCode {
    pub const NONE: ViolationCode = ViolationCode(0);
    pub const LEN_MIN: ViolationCode = ViolationCode(Violation::LenMin.bit());
    pub const LEN_MAX: ViolationCode = ViolationCode(Violation::LenMax.bit());
    pub const VAL_MIN: ViolationCode = ViolationCode(Violation::ValMin.bit());
    pub const VAL_MAX: ViolationCode = ViolationCode(Violation::ValMax.bit());
    pub const REGEXP: ViolationCode = ViolationCode(Violation::Pattern.bit());
    pub const EMAIL: ViolationCode = ViolationCode(Violation::Email.bit());
    pub const REQ: ViolationCode = ViolationCode(Violation::Required.bit());
    pub const TYPE: ViolationCode = ViolationCode(Violation::TypeMismatch.bit());

    const KNOWN_BITS: u32 = {
        let mut bits = 0;
        let mut i = 0;
        while i < Violation::ALL.len() {
            bits |= Violation::ALL[i].bit();
            i += 1;
        }
        bits
    };

    /// Raw integer value
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Wrap a raw integer, e.g. one read back from storage
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// True when no rule failed
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Check whether a given kind is set
    pub const fn contains(self, violation: Violation) -> bool {
        self.0 & violation.bit() != 0
    }

    /// Set a kind; setting it twice has no further effect
    pub fn insert(&mut self, violation: Violation) {
        self.0 |= violation.bit();
    }

    /// Iterate over the kinds that are set, in bit order
    pub fn iter(self) -> impl Iterator<Item = Violation> {
        Violation::ALL.into_iter().filter(move |v| self.contains(*v))
    }
}

impl From<Violation> for ViolationCode {
    fn from(violation: Violation) -> Self {
        Self(violation.bit())
    }
}

impl BitOr for ViolationCode {
    type Output = ViolationCode;

    fn bitor(self, rhs: Self) -> Self::Output {
        ViolationCode(self.0 | rhs.0)
    }
}

impl BitOrAssign for ViolationCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return f.write_str("ok");
        }
        let mut parts: Vec<String> = self.iter().map(|v| v.name().to_string()).collect();
        let unknown = self.0 & !Self::KNOWN_BITS;
        if unknown != 0 {
            parts.push(unknown.to_string());
        }
        write!(f, "{}", parts.join("|"))
    }
}
