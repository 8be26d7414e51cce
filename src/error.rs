//! Reason codes for rejected card numbers.
//!
//! The boolean [`validate`](crate::validate) collapses every variant here into
//! `false`. [`check`](crate::check) hands them back to callers that want to
//! know which gate rejected the input.

use crate::CardBrand;
use std::fmt;

/// The validation gate that rejected a candidate.
///
/// Gates run in declaration order and the first failure stops the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Presence and all-ASCII-digit check.
    WellFormed,
    /// Issuer prefix range and required length.
    Issuer,
    /// Luhn checksum.
    Checksum,
}

impl Gate {
    /// Short lowercase label, used as a structured log field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WellFormed => "well_formed",
            Self::Issuer => "issuer",
            Self::Checksum => "checksum",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a card number can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No candidate was supplied.
    Missing,

    /// The candidate was the empty string.
    Empty,

    /// The candidate contained something other than an ASCII digit.
    ///
    /// Separators are not stripped, so spaces and hyphens land here too.
    InvalidCharacter {
        /// Character index of the first offending character (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// A pre-split digit slice held a value above 9.
    InvalidDigit {
        /// Index of the offending value.
        position: usize,
        /// The offending value.
        value: u8,
    },

    /// The leading digits match none of the supported issuers.
    UnknownIssuer,

    /// The prefix matched an issuer but the digit count is wrong for it.
    InvalidLengthForBrand {
        /// The issuer selected by prefix.
        brand: CardBrand,
        /// The actual number of digits.
        length: usize,
        /// The only length the issuer accepts.
        required: usize,
    },

    /// The Luhn checksum failed.
    InvalidChecksum,
}

impl ValidationError {
    /// Returns the gate that produced this error.
    pub const fn gate(&self) -> Gate {
        match self {
            Self::Missing
            | Self::Empty
            | Self::InvalidCharacter { .. }
            | Self::InvalidDigit { .. } => Gate::WellFormed,
            Self::UnknownIssuer | Self::InvalidLengthForBrand { .. } => Gate::Issuer,
            Self::InvalidChecksum => Gate::Checksum,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no card number provided"),

            Self::Empty => write!(f, "card number is empty"),

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits 0-9 allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::InvalidDigit { position, value } => {
                write!(f, "digit value {} at position {} is out of range", value, position)
            }

            Self::UnknownIssuer => {
                write!(f, "unsupported issuer - only Visa, Mastercard and American Express are accepted")
            }

            Self::InvalidLengthForBrand {
                brand,
                length,
                required,
            } => {
                write!(
                    f,
                    "{} cards must have {} digits, got {}",
                    brand, required, length
                )
            }

            Self::InvalidChecksum => {
                write!(f, "Luhn checksum does not match the final digit")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
