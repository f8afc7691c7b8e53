//! Properties that must hold for every input.

use proptest::prelude::{
    ProptestConfig, any, prop_assert, prop_assert_eq, prop_assume, proptest,
};

use cpf_core::{
    Algorithm, CpfDigits, CpfError, Validator, ValidatorConfig, compute_check_digits,
    running_sum_check_digits, validate_cpf, validate_cpf_v1, validate_cpf_v2,
    weighted_sum_check_digits,
};

use crate::common::{base_strategy, eleven_digits, valid_from_base, wrong_length_digits};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn algorithms_agree_on_any_eleven_digits(cpf in eleven_digits()) {
        let v1 = validate_cpf_v1(&cpf);
        prop_assert!(v1.is_ok());
        prop_assert_eq!(v1, validate_cpf_v2(&cpf));

        let digits = CpfDigits::parse(&cpf).unwrap();
        prop_assert_eq!(
            weighted_sum_check_digits(&digits),
            running_sum_check_digits(&digits)
        );
    }

    #[test]
    fn cross_check_never_disagrees(cpf in eleven_digits()) {
        let validator = Validator::new(ValidatorConfig {
            algorithm: Algorithm::WeightedSum,
            cross_check: true,
        });
        prop_assert!(validator.validate(Some(cpf.as_str())).is_ok());
    }

    #[test]
    fn computed_check_digits_are_accepted(base in base_strategy()) {
        let cpf = valid_from_base(base).to_string();
        prop_assert_eq!(validate_cpf_v1(&cpf), Ok(true));
        prop_assert_eq!(validate_cpf_v2(&cpf), Ok(true));
    }

    #[test]
    fn altering_either_check_digit_is_rejected(
        base in base_strategy(),
        which in 0usize..2,
        delta in 1u8..10,
    ) {
        let valid = valid_from_base(base);
        let mut check = compute_check_digits(&base);
        if which == 0 {
            check.first = (check.first + delta) % 10;
        } else {
            check.second = (check.second + delta) % 10;
        }
        let altered = CpfDigits::from_parts(base, check).unwrap().to_string();
        prop_assert!(altered != valid.to_string());

        prop_assert_eq!(validate_cpf_v1(&altered), Ok(false));
        prop_assert_eq!(validate_cpf_v2(&altered), Ok(false));
    }

    #[test]
    fn wrong_length_fails_with_invalid_length(cpf in wrong_length_digits()) {
        let expected = Err(CpfError::InvalidLength { len: cpf.len() });
        prop_assert_eq!(validate_cpf_v1(&cpf), expected);
        prop_assert_eq!(validate_cpf_v2(&cpf), expected);
    }

    #[test]
    fn any_non_digit_fails_with_invalid_digit(
        cpf in eleven_digits(),
        position in 0usize..11,
        found in any::<char>(),
    ) {
        prop_assume!(!found.is_ascii_digit());
        let tampered: String = cpf
            .chars()
            .enumerate()
            .map(|(i, c)| if i == position { found } else { c })
            .collect();

        let expected = Err(CpfError::InvalidDigit { position, found });
        for &algorithm in Algorithm::all() {
            prop_assert_eq!(validate_cpf(Some(tampered.as_str()), algorithm), expected);
        }
    }
}
