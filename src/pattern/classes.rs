//! Digit tests that agree with the `\d` the candidates are compiled with.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit regex"));
static RE_ALL_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("valid digit run regex"));

/// True if `s` contains a `\d` character.
pub fn has_digit(s: &str) -> bool {
    RE_DIGIT.is_match(s)
}

/// True if `s` is non-empty and made only of `\d` characters.
pub fn all_digits(s: &str) -> bool {
    RE_ALL_DIGITS.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_digits() {
        assert!(has_digit("ab1"));
        assert!(!has_digit("abc"));
        assert!(all_digits("123"));
        assert!(!all_digits("12a"));
    }

    #[test]
    fn empty_is_not_all_digits() {
        assert!(!all_digits(""));
        assert!(!has_digit(""));
    }

    #[test]
    fn decimal_digits_only() {
        // Arabic-Indic three is a decimal digit; vulgar half and Roman eight are not
        assert!(all_digits("٣"));
        assert!(!has_digit("½"));
        assert!(!has_digit("Ⅷ"));
    }
}
