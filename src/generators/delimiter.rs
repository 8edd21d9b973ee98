use std::collections::BTreeSet;

use crate::config::SynthConfig;
use crate::pattern::escape;
use crate::samples::Samples;

use super::intersect_all;

/// Propose `^.+<c>.+$` for each character `c` present in every valid string,
/// absent from every invalid string, and never the first or last character
/// of a valid string.
///
/// Candidates come out in character order.
pub fn delimiter(samples: &Samples<'_>, _config: &SynthConfig) -> Vec<String> {
    let common = intersect_all(
        samples
            .valid
            .iter()
            .map(|s| s.chars().collect::<BTreeSet<_>>()),
    );
    common
        .into_iter()
        .filter(|&c| !samples.any_invalid(|s| s.contains(c)))
        .filter(|&c| samples.all_valid(|s| is_interior(s, c)))
        .map(|c| format!("^.+{}.+$", escape(c.encode_utf8(&mut [0; 4]))))
        .collect()
}

fn is_interior(s: &str, c: char) -> bool {
    s.chars().next() != Some(c) && s.chars().next_back() != Some(c)
}
