//! Core domain types for CPF validation.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Checksum arithmetic lives in `cpf-core`; everything here is about turning caller
//! input into a well-formed sequence of digits, or a typed reason why it is not one.

mod digits;
pub use digits::{CheckDigits, CpfDigits, digits_of};

use thiserror::Error;

/// Number of characters in a CPF.
pub const CPF_LEN: usize = 11;

/// Number of base digits preceding the two check digits.
pub const BASE_LEN: usize = 9;

// ============================================================================
// Errors
// ============================================================================

/// Why a CPF could not be validated.
///
/// Messages report lengths and positions, never the input itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpfError {
    /// No input was supplied where one was required.
    #[error("CPF argument is missing")]
    InvalidArgument,
    /// Input is present but is not exactly [`CPF_LEN`] characters long.
    #[error("CPF must have 11 digits (got {len} characters)")]
    InvalidLength { len: usize },
    /// A character is not an ASCII decimal digit.
    #[error("CPF must contain only digits 0-9 (found {found:?} at position {position})")]
    InvalidDigit { position: usize, found: char },
    /// The two checksum algorithms disagreed on the same input.
    #[error(
        "checksum algorithms disagree (weighted sum: {weighted}, running sum: {running})"
    )]
    ChecksumDisagreement { weighted: bool, running: bool },
}

impl CpfError {
    /// Whether the error is caused by the caller's input rather than the library.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, CpfError::ChecksumDisagreement { .. })
    }
}
