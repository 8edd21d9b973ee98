use itertools::Itertools;

use crate::config::SynthConfig;
use crate::pattern::escape_class;
use crate::samples::Samples;

/// Propose one class of every character seen in a valid string, repeated.
pub fn fallback(samples: &Samples<'_>, _config: &SynthConfig) -> Vec<String> {
    let members: String = samples
        .valid
        .iter()
        .flat_map(|s| s.chars())
        .sorted()
        .dedup()
        .collect();
    if members.is_empty() {
        return vec![];
    }
    vec![format!("^[{}]+$", escape_class(&members))]
}
