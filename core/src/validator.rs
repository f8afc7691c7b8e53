//! Validation entry points.
//!
//! All entry points share a single guard path ([`CpfDigits::parse`]) and differ
//! only in which checksum derivation they compare against.

use std::fmt;

use serde::{Deserialize, Serialize};

use cpf_types::{CheckDigits, CpfDigits, CpfError};

use crate::checksum::{running_sum_check_digits, weighted_sum_check_digits};
use crate::config::ValidatorConfig;

/// Which checksum derivation to compare the written check digits against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Direct weighted sums (`validate_cpf_v1`).
    #[default]
    WeightedSum,
    /// Cumulative running sums (`validate_cpf_v2`).
    RunningSum,
}

impl Algorithm {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::WeightedSum => "weighted-sum",
            Algorithm::RunningSum => "running-sum",
        }
    }

    /// Parse an algorithm name, including the `v1`/`v2` aliases.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weighted-sum" | "weighted_sum" | "v1" | "a" => Some(Algorithm::WeightedSum),
            "running-sum" | "running_sum" | "v2" | "b" => Some(Algorithm::RunningSum),
            _ => None,
        }
    }

    #[must_use]
    pub fn all() -> &'static [Algorithm] {
        &[Algorithm::WeightedSum, Algorithm::RunningSum]
    }

    /// Expected check digits for `cpf` under this derivation.
    #[must_use]
    pub fn check_digits(self, cpf: &CpfDigits) -> CheckDigits {
        match self {
            Algorithm::WeightedSum => weighted_sum_check_digits(cpf),
            Algorithm::RunningSum => running_sum_check_digits(cpf),
        }
    }

    /// Whether the written check digits of `cpf` match this derivation.
    #[must_use]
    pub fn verify(self, cpf: &CpfDigits) -> bool {
        self.check_digits(cpf) == cpf.check_digits()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_logged(cpf: Option<&str>) -> Result<CpfDigits, CpfError> {
    let result = cpf
        .ok_or(CpfError::InvalidArgument)
        .and_then(CpfDigits::parse);
    if let Err(err) = &result {
        tracing::debug!(%err, "Rejected CPF input");
    }
    result
}

/// Validate `cpf` with the chosen derivation.
///
/// `None` stands for an absent input and fails with [`CpfError::InvalidArgument`].
/// Malformed input fails with `InvalidLength` or `InvalidDigit` before any
/// checksum is computed.
pub fn validate_cpf(cpf: Option<&str>, algorithm: Algorithm) -> Result<bool, CpfError> {
    let digits = parse_logged(cpf)?;
    let valid = algorithm.verify(&digits);
    tracing::trace!(algorithm = algorithm.as_str(), valid, "Checked CPF check digits");
    Ok(valid)
}

/// Validate `cpf` by direct weighted sums.
///
/// # Examples
///
/// ```
/// use cpf_core::validate_cpf_v1;
///
/// assert_eq!(validate_cpf_v1("11144477735"), Ok(true));
/// assert_eq!(validate_cpf_v1("11144477736"), Ok(false));
/// ```
pub fn validate_cpf_v1(cpf: &str) -> Result<bool, CpfError> {
    validate_cpf(Some(cpf), Algorithm::WeightedSum)
}

/// Validate `cpf` by cumulative running sums. Same contract as [`validate_cpf_v1`].
pub fn validate_cpf_v2(cpf: &str) -> Result<bool, CpfError> {
    validate_cpf(Some(cpf), Algorithm::RunningSum)
}

/// Stateless validator carrying a [`ValidatorConfig`].
///
/// With `cross_check` enabled both derivations run on every input and any
/// disagreement surfaces as [`CpfError::ChecksumDisagreement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    #[must_use]
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> ValidatorConfig {
        self.config
    }

    pub fn validate(&self, cpf: Option<&str>) -> Result<bool, CpfError> {
        let digits = parse_logged(cpf)?;
        self.validate_digits(&digits)
    }

    /// Validate an already parsed sequence; only cross-checking can fail here.
    pub fn validate_digits(&self, digits: &CpfDigits) -> Result<bool, CpfError> {
        if !self.config.cross_check {
            let valid = self.config.algorithm.verify(digits);
            tracing::trace!(
                algorithm = self.config.algorithm.as_str(),
                valid,
                "Checked CPF check digits"
            );
            return Ok(valid);
        }

        let weighted = Algorithm::WeightedSum.verify(digits);
        let running = Algorithm::RunningSum.verify(digits);
        if weighted != running {
            tracing::error!(weighted, running, "CPF checksum algorithms disagree");
            return Err(CpfError::ChecksumDisagreement { weighted, running });
        }
        tracing::trace!(algorithm = "cross-check", valid = weighted, "Checked CPF check digits");
        Ok(weighted)
    }
}

impl From<ValidatorConfig> for Validator {
    fn from(config: ValidatorConfig) -> Self {
        Self::new(config)
    }
}
