//! Fuzz target for the Luhn gate.
//!
//! Raw bytes go straight in (values above 9 included); reduced to digits they
//! must round-trip through check-digit generation.

#![no_main]

use card_gate::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = luhn::validate(data);
    let _ = luhn::compute_checksum(data);

    let mut payload: Vec<u8> = data.iter().map(|&b| b % 10).collect();
    if payload.is_empty() {
        return;
    }

    let check_digit = luhn::generate_check_digit(&payload);
    assert!(check_digit <= 9);

    payload.push(check_digit);
    assert!(luhn::validate(&payload));

    // Exactly one final digit passes.
    let last = payload.len() - 1;
    for wrong in (0..10).filter(|&d| d != check_digit) {
        payload[last] = wrong;
        assert!(!luhn::validate(&payload), "check digit {} also passed", wrong);
    }
});
