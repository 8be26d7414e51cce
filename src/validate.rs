//! Top-level validation: three gates run in order.
//!
//! 1. Well-formedness ([`NormalizedDigits::parse`])
//! 2. Issuer prefix and exact length ([`detect::check_issuer`])
//! 3. Luhn checksum ([`luhn::validate`])
//!
//! The first failing gate ends the run. Every input, including `None`, gets an
//! answer; malformed input is an ordinary `false`, never a panic.

use crate::card::{CardBrand, ValidatedCard};
use crate::detect;
use crate::digits::NormalizedDigits;
use crate::error::ValidationError;
use crate::luhn;

/// Returns true iff `candidate` is a well-formed Visa, Mastercard or American
/// Express number with the issuer's exact length and a passing Luhn checksum.
///
/// No trimming or separator stripping is done.
///
/// # Example
///
/// ```
/// use card_gate::validate;
///
/// assert!(validate(Some("4111111111111111")));
/// assert!(validate(Some("378282246310005")));
///
/// assert!(!validate(Some("4111111111111121"))); // bad checksum
/// assert!(!validate(Some("4111-1111-1111-1111"))); // separators
/// assert!(!validate(Some("")));
/// assert!(!validate(None));
/// ```
#[inline]
pub fn validate(candidate: Option<&str>) -> bool {
    check(candidate).is_ok()
}

/// Like [`validate`], but reports which gate rejected the input.
///
/// # Example
///
/// ```
/// use card_gate::{check, CardBrand, ValidationError};
///
/// let card = check(Some("5105105105105100")).unwrap();
/// assert_eq!(card.brand(), CardBrand::Mastercard);
///
/// assert_eq!(check(Some("6011111111111117")).unwrap_err(), ValidationError::UnknownIssuer);
/// ```
pub fn check(candidate: Option<&str>) -> Result<ValidatedCard, ValidationError> {
    let result = NormalizedDigits::parse(candidate).and_then(|digits| run_gates(&digits));
    trace_outcome(&result);
    result
}

/// Quick boolean check for input that is known to be present.
///
/// # Example
///
/// ```
/// use card_gate::is_valid;
///
/// assert!(is_valid("5500000000000004"));
/// assert!(!is_valid("4111111"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(Some(input))
}

/// Validates pre-split digit values (0-9, not ASCII).
///
/// Skips string parsing but still rejects values above 9.
///
/// # Example
///
/// ```
/// use card_gate::validate_digits;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// let card = validate_digits(&digits).unwrap();
/// assert_eq!(card.brand().name(), "Visa");
/// ```
pub fn validate_digits(digits: &[u8]) -> Result<ValidatedCard, ValidationError> {
    let result = NormalizedDigits::from_values(digits).and_then(|digits| run_gates(&digits));
    trace_outcome(&result);
    result
}

/// Issuer/length gate followed by the checksum gate.
fn run_gates(digits: &NormalizedDigits) -> Result<ValidatedCard, ValidationError> {
    let brand: CardBrand = detect::check_issuer(digits)?;

    if !luhn::validate(digits) {
        return Err(ValidationError::InvalidChecksum);
    }

    Ok(ValidatedCard::new(brand, digits))
}

fn trace_outcome(result: &Result<ValidatedCard, ValidationError>) {
    match result {
        Ok(card) => {
            tracing::trace!(brand = %card.brand(), number = %card.masked(), "card number accepted");
        }
        Err(err) => {
            tracing::debug!(gate = err.gate().as_str(), reason = %err, "card number rejected");
        }
    }
}
