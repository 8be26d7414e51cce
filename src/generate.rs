//! Test card numbers for the supported issuers.
//!
//! Every number produced here passes [`validate`](crate::validate): the
//! prefix comes from the issuer table, the length is the issuer's required
//! length, and the last digit is a Luhn check digit. The numbers are not
//! connected to real accounts.
//!
//! # Example
//!
//! ```
//! use card_gate::generate::{generate_card_deterministic, CardGenerator};
//! use card_gate::CardBrand;
//!
//! let visa = generate_card_deterministic(CardBrand::Visa);
//! assert_eq!(visa, "4000000000000002");
//!
//! let mc = CardGenerator::new(CardBrand::Mastercard).prefix("2720").generate_deterministic();
//! assert!(card_gate::validate(Some(mc.as_str())));
//! ```

use crate::luhn;
use crate::CardBrand;

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns the lowest prefix of the brand's first range, zero-padded to the
/// range width.
pub fn prefix_for_brand(brand: CardBrand) -> String {
    let range = brand.rule().prefixes[0];
    let (low, _) = range.bounds();
    format!("{:0width$}", low, width = range.width())
}

/// Generates the lowest valid number for `brand`: its first prefix, zeros,
/// then the check digit.
///
/// # Example
///
/// ```
/// use card_gate::generate::generate_card_deterministic;
/// use card_gate::CardBrand;
///
/// let amex = generate_card_deterministic(CardBrand::Amex);
/// assert!(amex.starts_with("34"));
/// assert_eq!(amex.len(), 15);
/// assert_eq!(amex, generate_card_deterministic(CardBrand::Amex));
/// ```
pub fn generate_card_deterministic(brand: CardBrand) -> String {
    generate_card_deterministic_with_prefix(&prefix_for_brand(brand), brand.required_length())
}

/// Zero-fills after `prefix` up to `length` and appends the check digit.
///
/// Non-digit characters in `prefix` are ignored.
///
/// # Panics
///
/// Panics if the prefix has as many digits as `length` or more.
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    complete(prefix_digits(prefix, length), length, || 0)
}

/// Generates a random valid number for `brand`.
///
/// The prefix is drawn uniformly from one of the brand's ranges, so both
/// Mastercard series and both Amex prefixes show up.
///
/// # Example
///
/// ```
/// use card_gate::generate::generate_card;
/// use card_gate::CardBrand;
///
/// let card = generate_card(CardBrand::Mastercard);
/// assert!(card_gate::is_valid(&card));
/// ```
#[cfg(feature = "generate")]
pub fn generate_card(brand: CardBrand) -> String {
    generate_card_with_rng(brand, &mut rand::thread_rng())
}

/// Generates a random valid number for `brand` from a caller-supplied RNG.
///
/// Use a seeded RNG for reproducible fixtures.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(brand: CardBrand, rng: &mut R) -> String {
    let rule = brand.rule();
    let range = rule.prefixes[rng.gen_range(0..rule.prefixes.len())];
    let (low, high) = range.bounds();
    let prefix = format!("{:0width$}", rng.gen_range(low..=high), width = range.width());
    generate_with_prefix_rng(&prefix, rule.length, rng)
}

/// Generates a random valid number starting with `prefix`.
///
/// # Panics
///
/// Panics if the prefix has as many digits as `length` or more.
#[cfg(feature = "generate")]
pub fn generate_with_prefix_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    complete(prefix_digits(prefix, length), length, || rng.gen_range(0..10))
}

/// Generates `count` random valid numbers for `brand`.
#[cfg(feature = "generate")]
pub fn generate_cards(brand: CardBrand, count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| generate_card_with_rng(brand, &mut rng)).collect()
}

fn prefix_digits(prefix: &str, length: usize) -> Vec<u8> {
    let digits: Vec<u8> = prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    assert!(
        digits.len() < length,
        "Prefix length must be less than total length"
    );
    digits
}

fn complete(mut digits: Vec<u8>, length: usize, mut fill: impl FnMut() -> u8) -> String {
    while digits.len() < length - 1 {
        digits.push(fill());
    }
    digits.push(luhn::generate_check_digit(&digits));
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Builder for test numbers with a custom prefix or length.
#[derive(Debug, Clone)]
pub struct CardGenerator {
    prefix: String,
    length: usize,
}

impl CardGenerator {
    /// Starts from the brand's default prefix and required length.
    pub fn new(brand: CardBrand) -> Self {
        Self {
            prefix: prefix_for_brand(brand),
            length: brand.required_length(),
        }
    }

    /// Sets the card length.
    ///
    /// Lengths other than the issuer's required length produce numbers that
    /// pass Luhn but fail validation, which is handy for negative fixtures.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Generates a number with zero fill.
    pub fn generate_deterministic(&self) -> String {
        generate_card_deterministic_with_prefix(&self.prefix, self.length)
    }

    /// Generates a number with random fill.
    #[cfg(feature = "generate")]
    pub fn generate(&self) -> String {
        generate_with_prefix_rng(&self.prefix, self.length, &mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_valid;

    fn passes_luhn(number: &str) -> bool {
        let digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        luhn::validate(&digits)
    }

    #[test]
    fn test_prefix_for_brand() {
        assert_eq!(prefix_for_brand(CardBrand::Visa), "4");
        assert_eq!(prefix_for_brand(CardBrand::Mastercard), "51");
        assert_eq!(prefix_for_brand(CardBrand::Amex), "34");
    }

    #[test]
    fn test_deterministic_cards_validate() {
        for brand in CardBrand::ALL {
            let card = generate_card_deterministic(brand);
            assert_eq!(card.len(), brand.required_length());
            assert!(is_valid(&card), "{:?} fixture {} should validate", brand, card);
        }
    }

    #[test]
    fn test_deterministic_values() {
        assert_eq!(generate_card_deterministic(CardBrand::Visa), "4000000000000002");
        assert_eq!(generate_card_deterministic(CardBrand::Mastercard), "5100000000000008");
        assert_eq!(generate_card_deterministic(CardBrand::Amex), "340000000000009");
    }

    #[test]
    fn test_builder_boundaries() {
        for prefix in ["2221", "2720", "55", "37"] {
            let card = CardGenerator::new(CardBrand::Mastercard)
                .prefix(prefix)
                .length(if prefix == "37" { 15 } else { 16 })
                .generate_deterministic();
            assert!(is_valid(&card), "{} should validate", card);
        }
        for prefix in ["2220", "2721", "50", "56"] {
            let card = CardGenerator::new(CardBrand::Mastercard)
                .prefix(prefix)
                .generate_deterministic();
            assert!(passes_luhn(&card));
            assert!(!is_valid(&card), "{} should not validate", card);
        }
    }

    #[test]
    fn test_builder_wrong_length_is_negative_fixture() {
        let card = CardGenerator::new(CardBrand::Visa).length(15).generate_deterministic();
        assert!(passes_luhn(&card));
        assert!(!is_valid(&card));
    }

    #[test]
    #[should_panic(expected = "Prefix length must be less than total length")]
    fn test_prefix_too_long_panics() {
        generate_card_deterministic_with_prefix("4111111111111111", 16);
    }

    #[cfg(feature = "generate")]
    mod random_tests {
        use super::*;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        #[test]
        fn test_generate_card_all_brands() {
            for brand in CardBrand::ALL {
                for _ in 0..50 {
                    let card = generate_card(brand);
                    assert!(is_valid(&card), "{:?} card {} should validate", brand, card);
                    assert_eq!(crate::check(Some(card.as_str())).map(|c| c.brand()), Ok(brand));
                }
            }
        }

        #[test]
        fn test_seeded_generation_is_reproducible() {
            let a = generate_card_with_rng(CardBrand::Amex, &mut StdRng::seed_from_u64(7));
            let b = generate_card_with_rng(CardBrand::Amex, &mut StdRng::seed_from_u64(7));
            assert_eq!(a, b);
        }

        #[test]
        fn test_generate_cards_are_unique() {
            let cards = generate_cards(CardBrand::Visa, 100);
            let unique: std::collections::HashSet<_> = cards.iter().collect();
            assert!(unique.len() >= 90);
        }
    }
}
