//! # card_gate
//!
//! Offline format validation for Visa, Mastercard and American Express card
//! numbers. Says nothing about whether a card exists or can be charged.
//!
//! A candidate passes three gates, in order:
//!
//! 1. **Well-formed**: present, non-empty, ASCII digits only. Separators are
//!    not stripped.
//! 2. **Issuer**: the leading digits fall in an issuer's prefix range and the
//!    digit count is exactly that issuer's length.
//! 3. **Checksum**: the Luhn sum is a multiple of 10.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_gate::{check, validate, CardBrand, ValidationError};
//!
//! // The boolean contract
//! assert!(validate(Some("4111111111111111")));
//! assert!(!validate(Some("4111 1111 1111 1111")));
//! assert!(!validate(None));
//!
//! // Reason codes when you need them
//! let card = check(Some("378282246310005")).unwrap();
//! assert_eq!(card.brand(), CardBrand::Amex);
//! println!("Card: {}", card); // "American Express ****-******-*0005"
//!
//! assert_eq!(
//!     check(Some("6011111111111117")).unwrap_err(),
//!     ValidationError::UnknownIssuer
//! );
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix | Length |
//! |-------|--------|--------|
//! | Visa | 4 | 16 |
//! | Mastercard | 51-55, 2221-2720 | 16 |
//! | American Express | 34, 37 | 15 |
//!
//! Everything else (Discover, JCB, Diners Club, ...) is rejected.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `parallel` | Rayon-backed batch validation |
//! | `generate` | Random test card generation |
//!
//! ## Logging
//!
//! Rejections are reported as `tracing` debug events carrying the failing
//! gate and reason. Card digits never appear in log output.
//!
//! ## Security
//!
//! - Digit buffers are zeroized on drop
//! - `Debug` and `Display` show masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod detect;
pub mod digits;
pub mod error;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod validate;

// Re-export main types at crate root
pub use batch::{BatchSummary, BatchValidator};
pub use card::{CardBrand, IssuerRule, PrefixRange, ValidatedCard, ISSUER_TABLE};
pub use digits::NormalizedDigits;
pub use error::{Gate, ValidationError};
pub use validate::{check, is_valid, validate, validate_digits};
