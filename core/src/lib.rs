//! CPF check-digit validation.
//!
//! A CPF is eleven decimal digits: nine base digits and two check digits derived
//! from them modulo 11. This crate verifies the check digits. It does not strip
//! punctuation, format, or reject numbers for reasons other than arithmetic
//! (e.g. all-repeated digits); callers own those rules.
//!
//! - **`checksum`**: the two equivalent check-digit derivations
//! - **`validator`**: `validate_cpf_v1`/`validate_cpf_v2`, the algorithm selector
//!   and the configurable [`Validator`]
//! - **`config`**: [`ValidatorConfig`] and its TOML loader

pub mod checksum;
pub mod config;
pub mod validator;

pub use checksum::{compute_check_digits, running_sum_check_digits, weighted_sum_check_digits};
pub use config::{ConfigError, ValidatorConfig};
pub use validator::{Algorithm, Validator, validate_cpf, validate_cpf_v1, validate_cpf_v2};

pub use cpf_types::{BASE_LEN, CPF_LEN, CheckDigits, CpfDigits, CpfError, digits_of};
