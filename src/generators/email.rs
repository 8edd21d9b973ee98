use crate::config::SynthConfig;
use crate::pattern::classes::has_digit;
use crate::samples::Samples;

/// True if `s` has an `@` and the part after the last `@` contains a `.`.
pub fn looks_like_email(s: &str) -> bool {
    s.rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}

/// Propose an email shape when every valid string looks like an email and
/// no invalid string does.
///
/// The local part is `\D+` unless some valid local part holds a digit, in
/// which case it widens to `.+`.
pub fn email(samples: &Samples<'_>, _config: &SynthConfig) -> Vec<String> {
    if !samples.all_valid(looks_like_email) || samples.any_invalid(looks_like_email) {
        return vec![];
    }
    let digit_in_local = samples
        .valid
        .iter()
        .filter_map(|s| s.rsplit_once('@'))
        .any(|(local, _)| has_digit(local));
    let local = if digit_in_local { ".+" } else { r"\D+" };
    vec![format!(r"^{local}@\w+\.\w+$")]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(valid: &[&str], invalid: &[&str]) -> Vec<String> {
        email(&Samples::new(valid, invalid), &SynthConfig::default())
    }

    #[test]
    fn email_detection() {
        assert!(looks_like_email("user@domain.com"));
        assert!(looks_like_email("a@b@c.d"));
        assert!(!looks_like_email("a.b@c"));
        assert!(!looks_like_email("invalid@domain"));
        assert!(!looks_like_email("test.com"));
    }

    #[test]
    fn non_digit_local_part() {
        assert_eq!(
            run(&["user@domain.com", "test@site.net"], &["invalid@domain", "test.com"]),
            [r"^\D+@\w+\.\w+$"]
        );
    }

    #[test]
    fn digit_local_part_widens() {
        assert_eq!(
            run(&["user1@domain.com", "test@site.net"], &["nope"]),
            [r"^.+@\w+\.\w+$"]
        );
    }

    #[test]
    fn fraction_in_local_part_is_not_a_digit() {
        assert_eq!(run(&["½@a.b"], &["x"]), [r"^\D+@\w+\.\w+$"]);
    }

    #[test]
    fn invalid_email_blocks() {
        assert!(run(&["a@b.c"], &["x@y.z"]).is_empty());
    }

    #[test]
    fn non_email_valid_blocks() {
        assert!(run(&["a@b.c", "plain"], &["x"]).is_empty());
    }
}
