//! Error type for text conversion.

use std::fmt;

/// Numeral radix for text conversion.
///
/// Only [`Radix::Decimal`] is implemented; the others are reserved and
/// report [`BigIntError::UnsupportedRadix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radix {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
        };
        f.write_str(name)
    }
}

/// Error type for parsing and formatting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    /// No decimal digit followed the optional sign.
    #[error("no digits found")]
    NoDigits,

    /// The numeral was followed by unexpected input.
    #[error("unexpected trailing input at byte {offset}")]
    TrailingInput { offset: usize },

    /// The requested radix is reserved but not implemented.
    #[error("unsupported radix: {0}")]
    UnsupportedRadix(Radix),
}
