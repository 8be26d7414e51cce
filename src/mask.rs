//! Masked rendering of accepted card numbers.
//!
//! PCI-DSS allows showing at most the first six and the last four digits.
//! [`mask_card`] shows only the last four, grouped the way the issuer prints
//! them; [`mask_with_bin`] also shows the BIN.

use crate::{CardBrand, ValidatedCard};

/// Digit groups as printed on the card face.
const fn groups(brand: CardBrand) -> &'static [usize] {
    match brand {
        CardBrand::Visa | CardBrand::Mastercard => &[4, 4, 4, 4],
        CardBrand::Amex => &[4, 6, 5],
    }
}

/// Masks everything but the last four digits, keeping the issuer's grouping.
///
/// # Example
///
/// ```
/// let visa = card_gate::check(Some("4111111111111111")).unwrap();
/// assert_eq!(visa.masked(), "****-****-****-1111");
///
/// let amex = card_gate::check(Some("378282246310005")).unwrap();
/// assert_eq!(amex.masked(), "****-******-*0005");
/// ```
pub fn mask_card(card: &ValidatedCard) -> String {
    let digits = card.digits();
    let len = digits.len();
    let visible_from = len.saturating_sub(4);

    let mut result = String::with_capacity(len + 4);
    let mut boundaries = groups(card.brand())
        .iter()
        .scan(0, |end, &size| {
            *end += size;
            Some(*end)
        })
        .peekable();

    for (i, &d) in digits.iter().enumerate() {
        if boundaries.next_if_eq(&i).is_some() {
            result.push('-');
        }
        if i < visible_from {
            result.push('*');
        } else {
            result.push((b'0' + d) as char);
        }
    }

    result
}

/// Shows the first six and last four digits, masking the middle.
///
/// # Example
///
/// ```
/// let card = card_gate::check(Some("4111111111111111")).unwrap();
/// assert_eq!(card.masked_with_bin(), "411111******1111");
/// ```
pub fn mask_with_bin(card: &ValidatedCard) -> String {
    let digits = card.digits();
    let len = digits.len();

    if len <= 10 {
        return mask_card(card);
    }

    digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if i < 6 || i >= len - 4 {
                (b'0' + d) as char
            } else {
                '*'
            }
        })
        .collect()
}
