use std::collections::BTreeSet;

use crate::config::SynthConfig;
use crate::pattern::escape;
use crate::samples::Samples;

use super::intersect_all;

/// Propose `^.*<sub>.*$` for each substring shared by every valid string and
/// found in no invalid string.
///
/// Lengths run from 1 up to the configured maximum (capped by the shortest
/// valid string); shorter substrings come first, then sorted order.
pub fn common_substring(samples: &Samples<'_>, config: &SynthConfig) -> Vec<String> {
    let Some(shortest) = samples.shortest_valid() else {
        return vec![];
    };
    let longest = config.max_substring_len.min(shortest);
    (1..=longest)
        .flat_map(|len| common_substrings(&samples.valid, len))
        .filter(|sub| !samples.any_invalid(|s| s.contains(sub.as_str())))
        .map(|sub| format!("^.*{}.*$", escape(&sub)))
        .collect()
}

/// Substrings of `len` characters that occur in every string. Empty for a
/// zero `len`.
pub(crate) fn common_substrings(strings: &[&str], len: usize) -> BTreeSet<String> {
    if len == 0 {
        return BTreeSet::new();
    }
    intersect_all(strings.iter().map(|s| substrings(s, len)))
}

fn substrings(s: &str, len: usize) -> BTreeSet<String> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(len).map(|w| w.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(valid: &[&str], invalid: &[&str]) -> Vec<String> {
        common_substring(&Samples::new(valid, invalid), &SynthConfig::default())
    }

    #[test]
    fn common_substrings_by_length() {
        let strings = ["xabcx", "abcy", "zzabc"];
        assert_eq!(
            common_substrings(&strings, 1),
            BTreeSet::from(["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(
            common_substrings(&strings, 2),
            BTreeSet::from(["ab".to_string(), "bc".to_string()])
        );
        assert_eq!(common_substrings(&strings, 3), BTreeSet::from(["abc".to_string()]));
    }

    #[test]
    fn zero_length_is_empty() {
        assert!(common_substrings(&["abc", "abd"], 0).is_empty());
    }

    #[test]
    fn shorter_first_and_filtered_by_invalid() {
        assert_eq!(
            run(&["xaby", "abz"], &["a", "b", "xyz"]),
            ["^.*ab.*$"]
        );
    }

    #[test]
    fn lengths_bounded_by_shortest_valid() {
        // "ab" is only two chars, so no length-3 candidate appears
        let got = run(&["ab", "abab"], &["x"]);
        assert_eq!(got, ["^.*a.*$", "^.*b.*$", "^.*ab.*$"]);
    }

    #[test]
    fn metachar_substring_escaped() {
        assert_eq!(run(&["a.b", "c.d"], &["ab"]), [r"^.*\..*$"]);
    }

    #[test]
    fn configured_max_len() {
        let config = SynthConfig {
            max_substring_len: 1,
            ..SynthConfig::default()
        };
        let samples = Samples::new(&["abc", "abc"], &["x"]);
        assert_eq!(
            common_substring(&samples, &config),
            ["^.*a.*$", "^.*b.*$", "^.*c.*$"]
        );
    }

    #[test]
    fn empty_valid_string_yields_nothing() {
        assert!(run(&["", "abc"], &["x"]).is_empty());
    }
}
