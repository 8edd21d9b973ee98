use crate::config::SynthConfig;
use crate::pattern::classes::{all_digits, has_digit};
use crate::samples::Samples;

/// One or more non-digit characters.
pub const NON_DIGIT_RUN: &str = r"^\D+$";

/// Letters-versus-digits split: propose [`NON_DIGIT_RUN`] when no valid
/// string contains a digit and every invalid string is a non-empty run of
/// digits.
pub fn non_digit(samples: &Samples<'_>, _config: &SynthConfig) -> Vec<String> {
    let valid_non_digit = samples.all_valid(|s| !has_digit(s));
    let invalid_digits = samples.invalid.iter().all(|s| all_digits(s));
    if valid_non_digit && invalid_digits {
        vec![NON_DIGIT_RUN.to_string()]
    } else {
        vec![]
    }
}
