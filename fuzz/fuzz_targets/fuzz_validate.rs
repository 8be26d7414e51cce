//! Fuzz target for card validation.
//!
//! validate() must answer every input, present or not, without panicking,
//! and the boolean and reason-code entry points must agree.

#![no_main]

use arbitrary::Arbitrary;
use card_gate::{check, validate, validate_digits};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    candidate: Option<&'a str>,
    values: Vec<u8>,
}

fuzz_target!(|input: Input<'_>| {
    let accepted = validate(input.candidate);
    assert_eq!(accepted, check(input.candidate).is_ok());

    if let Some(data) = input.candidate.filter(|_| accepted) {
        assert!(data.len() == 15 || data.len() == 16);
        assert!(data.bytes().all(|b| b.is_ascii_digit()));
    }

    // Digit values, including out-of-range ones
    let _ = validate_digits(&input.values);
});
