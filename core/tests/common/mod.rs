//! Shared test fixtures and strategies.

#![allow(dead_code)]

use proptest::array::uniform9;
use proptest::prelude::Strategy;
use proptest::string::string_regex;

use cpf_core::{BASE_LEN, CpfDigits, compute_check_digits};

/// Satisfies the checksum; the usual published example.
pub const KNOWN_VALID: &str = "11144477735";
/// `KNOWN_VALID` with the last digit altered.
pub const LAST_DIGIT_ALTERED: &str = "11144477736";
/// Another well-known valid number, different base digits.
pub const SECOND_VALID: &str = "52998224725";

/// Append the correct check digits to `base`.
pub fn valid_from_base(base: [u8; BASE_LEN]) -> CpfDigits {
    CpfDigits::from_parts(base, compute_check_digits(&base)).unwrap()
}

/// Any nine digits.
pub fn base_strategy() -> impl Strategy<Value = [u8; BASE_LEN]> {
    uniform9(0u8..=9)
}

/// Any string of exactly eleven ASCII digits.
pub fn eleven_digits() -> impl Strategy<Value = String> {
    "[0-9]{11}"
}

/// Digit strings of any length except eleven.
pub fn wrong_length_digits() -> impl Strategy<Value = String> {
    string_regex("[0-9]{0,10}|[0-9]{12,24}").unwrap()
}
