//! Check-digit arithmetic.
//!
//! Two derivations of the same modulo-11 check are provided. They agree on
//! every input; having both lets callers cross-check one against the other.
//!
//! # Weighted sum
//!
//! The first check digit weights base digits 1..=8 by their position plus one,
//! seeded with digit 0 at weight 1. The second weights digits 2..=9 by their
//! position, seeded with digit 1. Each sum is reduced `% 11 % 10`.
//!
//! # Running sum
//!
//! Walking the base right to left, a running total of digits is accumulated
//! into a second total. That second total equals the first weighted sum, and
//! the second check digit follows from the difference of the two plus nine
//! times the first check digit.

use cpf_types::{BASE_LEN, CheckDigits, CpfDigits};

fn reduce(sum: u32) -> u8 {
    (sum % 11 % 10) as u8
}

/// First weighted sum over `d[0..9]`.
fn first_weighted_sum(d: &[u8]) -> u32 {
    (1..BASE_LEN).fold(u32::from(d[0]), |acc, i| {
        acc + u32::from(d[i]) * (i as u32 + 1)
    })
}

/// Second weighted sum over `d[1..10]`.
fn second_weighted_sum(d: &[u8]) -> u32 {
    (2..=BASE_LEN).fold(u32::from(d[1]), |acc, i| acc + u32::from(d[i]) * i as u32)
}

/// Check digits expected for `cpf`, by direct weighted sums.
///
/// The second digit is derived from the first check digit as written in the
/// input, not from the recomputed one.
#[must_use]
pub fn weighted_sum_check_digits(cpf: &CpfDigits) -> CheckDigits {
    let d = cpf.as_array();
    CheckDigits::new(
        reduce(first_weighted_sum(d)),
        reduce(second_weighted_sum(d)),
    )
}

/// Check digits expected for `cpf`, by cumulative running sums.
#[must_use]
pub fn running_sum_check_digits(cpf: &CpfDigits) -> CheckDigits {
    let d = cpf.as_array();
    let mut acc11 = u32::from(d[8]);
    let mut acc10 = acc11;

    for &digit in d[..8].iter().rev() {
        acc11 += u32::from(digit);
        acc10 += acc11;
    }

    // acc10 is a sum of acc11 snapshots ending with the final acc11, so it never
    // falls below acc11.
    let first = reduce(acc10);
    let second = reduce(acc10 - acc11 + 9 * u32::from(d[BASE_LEN]));
    CheckDigits::new(first, second)
}

/// The correct check digits for a nine-digit base.
///
/// The second digit's sum includes the freshly derived first digit, so appending
/// the result to `base` yields a sequence both algorithms accept.
///
/// Base values are expected in `0..=9`.
#[must_use]
pub fn compute_check_digits(base: &[u8; BASE_LEN]) -> CheckDigits {
    let first = reduce(first_weighted_sum(base));

    let mut extended = [0u8; BASE_LEN + 1];
    extended[..BASE_LEN].copy_from_slice(base);
    extended[BASE_LEN] = first;

    CheckDigits::new(first, reduce(second_weighted_sum(&extended)))
}
