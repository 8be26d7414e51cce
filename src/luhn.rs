//! Luhn (mod 10) checksum.
//!
//! Positions are counted from the right, starting at 1 for the check digit.
//! Digits at even positions are doubled, and a doubled value above 9 has 9
//! subtracted. The number passes when the total is a multiple of 10.

/// Doubled digit with 9 subtracted when it exceeds 9, indexed by digit.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a digit sequence using the Luhn algorithm.
///
/// `digits` holds values 0-9, most significant first; the last one is the
/// check digit. An empty slice never passes.
///
/// # Example
///
/// ```
/// use card_gate::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let typo = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 1];
/// assert!(!validate(&typo));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced mod 10).
///
/// Walks the slice from the right without modifying it.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            // i is 0-based, so odd i is an even 1-based position
            if i % 2 == 1 {
                doubled(d)
            } else {
                d as u32
            }
        })
        .sum()
}

/// Computes the check digit to append to `payload` so the result passes.
///
/// # Example
///
/// ```
/// use card_gate::luhn::generate_check_digit;
///
/// let partial = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
/// assert_eq!(generate_check_digit(&partial), 5);
/// ```
#[inline]
pub fn generate_check_digit(payload: &[u8]) -> u8 {
    // Each payload digit moves one position left once the check digit lands.
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { doubled(d) } else { d as u32 })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

#[inline]
fn doubled(digit: u8) -> u32 {
    match DOUBLE_TABLE.get(digit as usize) {
        Some(&v) => v as u32,
        // Out-of-range values only reach here through the raw-slice API.
        None => {
            let d = digit as u32 * 2;
            d / 10 + d % 10
        }
    }
}
