//! Issuer table and the validated card type.
//!
//! The rule set is closed: three issuers, each with a fixed set of inclusive
//! prefix ranges and exactly one accepted length. [`ISSUER_TABLE`] holds the
//! rows in precedence order.

use std::fmt;
use zeroize::Zeroize;

/// Supported card issuers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardBrand {
    /// Visa - Prefix 4, length 16
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, length 16
    Mastercard,
    /// American Express - Prefix 34, 37, length 15
    Amex,
}

impl CardBrand {
    /// All supported brands, in table order.
    pub const ALL: [CardBrand; 3] = [Self::Visa, Self::Mastercard, Self::Amex];

    /// Returns the issuer table row for this brand.
    #[inline]
    pub fn rule(&self) -> &'static IssuerRule {
        match self {
            Self::Visa => &ISSUER_TABLE[0],
            Self::Mastercard => &ISSUER_TABLE[1],
            Self::Amex => &ISSUER_TABLE[2],
        }
    }

    /// Returns the only digit count this brand accepts.
    #[inline]
    pub fn required_length(&self) -> usize {
        self.rule().length
    }

    /// Returns true if the given length is valid for this brand.
    #[inline]
    pub fn is_valid_length(&self, length: usize) -> bool {
        self.required_length() == length
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An inclusive range over the integer value of the first `width` digits.
///
/// `PrefixRange::new(4, 2221, 2720)` matches numbers whose first four digits,
/// read as an integer, lie in `2221..=2720`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRange {
    width: usize,
    low: u16,
    high: u16,
}

impl PrefixRange {
    /// Creates a range over the leading `width` digits (1 to 4).
    pub const fn new(width: usize, low: u16, high: u16) -> Self {
        Self { width, low, high }
    }

    /// Number of leading digits this range inspects.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Inclusive bounds of the range.
    #[inline]
    pub const fn bounds(&self) -> (u16, u16) {
        (self.low, self.high)
    }

    /// Returns true if the leading digits of `digits` fall in this range.
    ///
    /// Inputs shorter than `width` never match.
    #[inline]
    pub fn matches(&self, digits: &[u8]) -> bool {
        if digits.len() < self.width {
            return false;
        }
        let prefix = digits[..self.width]
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + d as u32);
        (self.low as u32..=self.high as u32).contains(&prefix)
    }
}

/// One row of the issuer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuerRule {
    /// Issuer this row classifies into.
    pub brand: CardBrand,
    /// Prefix ranges; any one matching selects the issuer.
    pub prefixes: &'static [PrefixRange],
    /// Exact digit count required for the issuer.
    pub length: usize,
}

impl IssuerRule {
    /// Returns true if any of this row's prefix ranges match.
    #[inline]
    pub fn matches_prefix(&self, digits: &[u8]) -> bool {
        self.prefixes.iter().any(|range| range.matches(digits))
    }
}

/// Issuer rows in precedence order. The first row whose prefix matches wins.
pub static ISSUER_TABLE: [IssuerRule; 3] = [
    IssuerRule {
        brand: CardBrand::Visa,
        prefixes: &[PrefixRange::new(1, 4, 4)],
        length: 16,
    },
    IssuerRule {
        brand: CardBrand::Mastercard,
        prefixes: &[PrefixRange::new(2, 51, 55), PrefixRange::new(4, 2221, 2720)],
        length: 16,
    },
    IssuerRule {
        brand: CardBrand::Amex,
        prefixes: &[PrefixRange::new(2, 34, 34), PrefixRange::new(2, 37, 37)],
        length: 15,
    },
];

/// Longest digit count any supported issuer accepts.
pub const MAX_CARD_DIGITS: usize = 16;

/// Shortest digit count any supported issuer accepts.
pub const MIN_CARD_DIGITS: usize = 15;

/// A card number that passed every gate.
///
/// The digits live in a fixed-size array that is zeroed on drop. `Debug` and
/// `Display` only ever show the masked number.
#[derive(Clone)]
pub struct ValidatedCard {
    brand: CardBrand,
    digits: [u8; MAX_CARD_DIGITS],
    digit_count: u8,
}

impl ValidatedCard {
    /// Internal constructor; `digits` has already passed the length gate.
    #[inline]
    pub(crate) fn new(brand: CardBrand, digits: &[u8]) -> Self {
        let count = digits.len().min(MAX_CARD_DIGITS);
        let mut fixed = [0u8; MAX_CARD_DIGITS];
        fixed[..count].copy_from_slice(&digits[..count]);
        Self {
            brand,
            digits: fixed,
            digit_count: count as u8,
        }
    }

    /// Returns the issuer.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Returns the number of digits in the card number.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the last four digits as a string.
    #[inline]
    pub fn last_four(&self) -> String {
        let digits = self.digits();
        to_ascii(&digits[digits.len().saturating_sub(4)..])
    }

    /// Returns the first six digits (the traditional BIN).
    #[inline]
    pub fn bin6(&self) -> String {
        let digits = self.digits();
        to_ascii(&digits[..digits.len().min(6)])
    }

    /// Returns the full card number.
    ///
    /// # Security Warning
    ///
    /// Never log the result. Use `masked()` for display.
    #[inline]
    pub fn number(&self) -> String {
        to_ascii(self.digits())
    }

    /// Returns the number masked down to its last four digits.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_card(self)
    }

    /// Returns the number with the BIN and last four digits visible.
    #[inline]
    pub fn masked_with_bin(&self) -> String {
        crate::mask::mask_with_bin(self)
    }

    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits[..self.digit_count as usize]
    }
}

fn to_ascii(digits: &[u8]) -> String {
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

impl fmt::Debug for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCard")
            .field("brand", &self.brand)
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.masked())
    }
}

impl Drop for ValidatedCard {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}
