//! Issuer classification and the length gate.
//!
//! Classification walks [`ISSUER_TABLE`] once, in order, and stops at the
//! first row whose prefix ranges match. The length check then uses that row's
//! required length only; a number is never re-tried against another issuer.

use crate::card::{IssuerRule, ISSUER_TABLE};
use crate::error::ValidationError;
use crate::CardBrand;

/// Finds the issuer table row whose prefix ranges match `digits`.
#[inline]
pub fn classify(digits: &[u8]) -> Option<&'static IssuerRule> {
    ISSUER_TABLE.iter().find(|rule| rule.matches_prefix(digits))
}

/// Detects the card brand from a sequence of digits.
///
/// Looks at the prefix only; the length is not checked.
///
/// # Example
///
/// ```
/// use card_gate::detect::detect_brand;
/// use card_gate::CardBrand;
///
/// let visa = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(detect_brand(&visa), Some(CardBrand::Visa));
///
/// let discover = [6, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 7];
/// assert_eq!(detect_brand(&discover), None);
/// ```
#[inline]
pub fn detect_brand(digits: &[u8]) -> Option<CardBrand> {
    classify(digits).map(|rule| rule.brand)
}

/// Runs the issuer gate: prefix classification followed by the exact length
/// check for the selected issuer.
pub fn check_issuer(digits: &[u8]) -> Result<CardBrand, ValidationError> {
    let rule = classify(digits).ok_or(ValidationError::UnknownIssuer)?;

    if digits.len() != rule.length {
        return Err(ValidationError::InvalidLengthForBrand {
            brand: rule.brand,
            length: digits.len(),
            required: rule.length,
        });
    }

    Ok(rule.brand)
}

/// Returns true if `length` is the required length for `brand`.
#[inline]
pub fn is_valid_length_for_brand(brand: CardBrand, length: usize) -> bool {
    brand.is_valid_length(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pads `prefix` with zeros up to `len` digits.
    fn padded(prefix: &[u8], len: usize) -> Vec<u8> {
        let mut digits = prefix.to_vec();
        digits.resize(len, 0);
        digits
    }

    #[test]
    fn test_visa_detection() {
        assert_eq!(detect_brand(&padded(&[4], 16)), Some(CardBrand::Visa));
        assert_eq!(detect_brand(&[4]), Some(CardBrand::Visa));
    }

    #[test]
    fn test_mastercard_two_digit_range() {
        for second in 1..=5 {
            assert_eq!(
                detect_brand(&padded(&[5, second], 16)),
                Some(CardBrand::Mastercard)
            );
        }
        assert_eq!(detect_brand(&padded(&[5, 0], 16)), None);
        assert_eq!(detect_brand(&padded(&[5, 6], 16)), None);
    }

    #[test]
    fn test_mastercard_four_digit_range() {
        assert_eq!(detect_brand(&padded(&[2, 2, 2, 1], 16)), Some(CardBrand::Mastercard));
        assert_eq!(detect_brand(&padded(&[2, 5, 0, 0], 16)), Some(CardBrand::Mastercard));
        assert_eq!(detect_brand(&padded(&[2, 7, 2, 0], 16)), Some(CardBrand::Mastercard));

        assert_eq!(detect_brand(&padded(&[2, 2, 2, 0], 16)), None);
        assert_eq!(detect_brand(&padded(&[2, 7, 2, 1], 16)), None);
        // Mir territory is not ours.
        assert_eq!(detect_brand(&padded(&[2, 2, 0, 0], 16)), None);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(detect_brand(&padded(&[3, 4], 15)), Some(CardBrand::Amex));
        assert_eq!(detect_brand(&padded(&[3, 7], 15)), Some(CardBrand::Amex));
        for second in [0, 3, 5, 6, 8] {
            assert_eq!(detect_brand(&padded(&[3, second], 15)), None);
        }
    }

    #[test]
    fn test_other_issuers_rejected() {
        // Discover, JCB, Diners, UnionPay, Maestro
        for prefix in [
            &[6, 0, 1, 1][..],
            &[3, 5, 2, 8],
            &[3, 0, 0],
            &[3, 6],
            &[6, 2],
            &[5, 0],
        ] {
            assert_eq!(detect_brand(&padded(prefix, 16)), None, "prefix {:?}", prefix);
        }
        assert_eq!(detect_brand(&padded(&[0], 16)), None);
        assert_eq!(detect_brand(&padded(&[9], 16)), None);
    }

    #[test]
    fn test_short_inputs() {
        assert_eq!(detect_brand(&[]), None);
        assert_eq!(detect_brand(&[5]), None);
        assert_eq!(detect_brand(&[3]), None);
        // Three digits cannot reach the 4-digit Mastercard range.
        assert_eq!(detect_brand(&[2, 5, 0]), None);
    }

    #[test]
    fn test_check_issuer_lengths() {
        assert_eq!(check_issuer(&padded(&[4], 16)), Ok(CardBrand::Visa));
        assert_eq!(check_issuer(&padded(&[3, 7], 15)), Ok(CardBrand::Amex));

        assert_eq!(
            check_issuer(&padded(&[4], 15)),
            Err(ValidationError::InvalidLengthForBrand {
                brand: CardBrand::Visa,
                length: 15,
                required: 16
            })
        );
        assert_eq!(
            check_issuer(&padded(&[5, 5], 17)),
            Err(ValidationError::InvalidLengthForBrand {
                brand: CardBrand::Mastercard,
                length: 17,
                required: 16
            })
        );
        assert_eq!(
            check_issuer(&padded(&[3, 4], 16)),
            Err(ValidationError::InvalidLengthForBrand {
                brand: CardBrand::Amex,
                length: 16,
                required: 15
            })
        );
        assert_eq!(check_issuer(&padded(&[6], 16)), Err(ValidationError::UnknownIssuer));
    }

    #[test]
    fn test_length_validation() {
        assert!(is_valid_length_for_brand(CardBrand::Visa, 16));
        assert!(!is_valid_length_for_brand(CardBrand::Visa, 13));
        assert!(is_valid_length_for_brand(CardBrand::Amex, 15));
        assert!(!is_valid_length_for_brand(CardBrand::Mastercard, 15));
    }
}
