//! Well-formedness gate.
//!
//! Turns a raw candidate into [`NormalizedDigits`]. The candidate must be
//! present, non-empty, and made only of ASCII digits `0`-`9`. Nothing is
//! stripped: a space or hyphen anywhere rejects the whole input.

use crate::error::ValidationError;
use std::ops::Deref;
use zeroize::Zeroizing;

/// Digit values (0-9) of a well-formed candidate, most significant first.
///
/// The buffer is zeroed when dropped. There is no mutable access, so every
/// later gate reads exactly what the well-formedness gate produced.
#[derive(Clone, PartialEq, Eq)]
pub struct NormalizedDigits {
    digits: Zeroizing<Vec<u8>>,
}

impl NormalizedDigits {
    /// Runs the well-formedness gate over `candidate`.
    ///
    /// # Example
    ///
    /// ```
    /// use card_gate::digits::NormalizedDigits;
    /// use card_gate::ValidationError;
    ///
    /// let digits = NormalizedDigits::parse(Some("4111")).unwrap();
    /// assert_eq!(digits.as_slice(), &[4, 1, 1, 1]);
    ///
    /// assert_eq!(NormalizedDigits::parse(None).unwrap_err(), ValidationError::Missing);
    /// assert!(NormalizedDigits::parse(Some("4111-1111")).is_err());
    /// ```
    pub fn parse(candidate: Option<&str>) -> Result<Self, ValidationError> {
        let input = candidate.ok_or(ValidationError::Missing)?;
        if input.is_empty() {
            return Err(ValidationError::Empty);
        }

        // Every accepted char is one ASCII byte, so len() is the char count.
        let mut digits = Zeroizing::new(Vec::with_capacity(input.len()));
        for (position, c) in input.chars().enumerate() {
            match c {
                '0'..='9' => digits.push(c as u8 - b'0'),
                _ => {
                    return Err(ValidationError::InvalidCharacter {
                        position,
                        character: c,
                    })
                }
            }
        }

        Ok(Self { digits })
    }

    /// Wraps already-split digit values, rejecting any value above 9.
    pub fn from_values(values: &[u8]) -> Result<Self, ValidationError> {
        if values.is_empty() {
            return Err(ValidationError::Empty);
        }
        if let Some((position, &value)) = values.iter().enumerate().find(|&(_, &v)| v > 9) {
            return Err(ValidationError::InvalidDigit { position, value });
        }
        Ok(Self {
            digits: Zeroizing::new(values.to_vec()),
        })
    }

    /// Returns the digit values.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }
}

impl Deref for NormalizedDigits {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for NormalizedDigits {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

// Masked: these buffers hold raw card numbers.
impl std::fmt::Debug for NormalizedDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalizedDigits")
            .field("len", &self.digits.len())
            .finish_non_exhaustive()
    }
}
