//! Digit extraction and the parsed CPF digit sequence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{BASE_LEN, CPF_LEN, CpfError};

fn digit_value(position: usize, found: char) -> Result<u8, CpfError> {
    found
        .to_digit(10)
        .map(|value| value as u8)
        .ok_or(CpfError::InvalidDigit { position, found })
}

/// Convert every character of `s` into its decimal value.
///
/// The output has one entry per character, in the same order. Length is not
/// constrained here; the first character outside `0`-`9` fails the whole call.
///
/// # Examples
///
/// ```
/// use cpf_types::{CpfError, digits_of};
///
/// assert_eq!(digits_of("0429").unwrap(), vec![0, 4, 2, 9]);
/// assert_eq!(
///     digits_of("12a").unwrap_err(),
///     CpfError::InvalidDigit { position: 2, found: 'a' }
/// );
/// ```
pub fn digits_of(s: &str) -> Result<Vec<u8>, CpfError> {
    s.chars()
        .enumerate()
        .map(|(position, found)| digit_value(position, found))
        .collect()
}

/// The two trailing check digits of a CPF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckDigits {
    pub first: u8,
    pub second: u8,
}

impl CheckDigits {
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for CheckDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Eleven decimal digits: nine base digits followed by two check digits.
///
/// Only constructible from well-formed input, so every value holds digits in `0..=9`.
/// Whether the check digits are *correct* is a separate question answered by
/// `cpf-core`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CpfDigits([u8; CPF_LEN]);

impl CpfDigits {
    /// Parse an 11-character string of decimal digits.
    ///
    /// Length is checked before content, so `"123"` is an `InvalidLength` even
    /// though it is all digits, and `"1234567890x"` is an `InvalidDigit`.
    pub fn parse(s: &str) -> Result<Self, CpfError> {
        let len = s.chars().count();
        if len != CPF_LEN {
            return Err(CpfError::InvalidLength { len });
        }

        let mut digits = [0u8; CPF_LEN];
        for (position, found) in s.chars().enumerate() {
            digits[position] = digit_value(position, found)?;
        }
        Ok(Self(digits))
    }

    /// Assemble a sequence from a base and its check digits.
    ///
    /// Returns `InvalidDigit` if any supplied value is above 9.
    pub fn from_parts(base: [u8; BASE_LEN], check: CheckDigits) -> Result<Self, CpfError> {
        let mut digits = [0u8; CPF_LEN];
        digits[..BASE_LEN].copy_from_slice(&base);
        digits[BASE_LEN] = check.first;
        digits[BASE_LEN + 1] = check.second;

        if let Some(position) = digits.iter().position(|&d| d > 9) {
            // Report the offending value as the character it would print as.
            let found = char::from_digit(u32::from(digits[position]), 36).unwrap_or('?');
            return Err(CpfError::InvalidDigit { position, found });
        }
        Ok(Self(digits))
    }

    #[must_use]
    pub const fn as_array(&self) -> &[u8; CPF_LEN] {
        &self.0
    }

    /// The digit at `index`, or `None` past the end.
    #[must_use]
    pub fn digit(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Positions 0 through 8.
    #[must_use]
    pub fn base(&self) -> [u8; BASE_LEN] {
        let mut base = [0u8; BASE_LEN];
        base.copy_from_slice(&self.0[..BASE_LEN]);
        base
    }

    /// Positions 9 and 10, as written in the input.
    #[must_use]
    pub const fn check_digits(&self) -> CheckDigits {
        CheckDigits::new(self.0[BASE_LEN], self.0[BASE_LEN + 1])
    }
}

impl fmt::Display for CpfDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

// Debug stays opaque about the middle digits; CPFs end up in logs via `{:?}` too easily.
impl fmt::Debug for CpfDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CpfDigits(***.***.***-{})", self.check_digits())
    }
}

impl FromStr for CpfDigits {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for CpfDigits {
    type Error = CpfError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for CpfDigits {
    type Error = CpfError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CpfDigits> for String {
    fn from(value: CpfDigits) -> Self {
        value.to_string()
    }
}

impl AsRef<[u8]> for CpfDigits {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
