use itertools::Itertools;

use crate::config::SynthConfig;
use crate::pattern::escape_class;
use crate::samples::Samples;

#[derive(Debug, Clone, Copy)]
enum Boundary {
    Start,
    End,
}

impl Boundary {
    fn char_of(self, s: &str) -> Option<char> {
        match self {
            Boundary::Start => s.chars().next(),
            Boundary::End => s.chars().next_back(),
        }
    }

    fn format(self, class: &str) -> String {
        match self {
            Boundary::Start => format!("^[{class}].+$"),
            Boundary::End => format!("^.+[{class}]$"),
        }
    }
}

/// Propose `^[c].+$` when every non-empty valid string starts with `c` and no
/// invalid string does.
pub fn prefix(samples: &Samples<'_>, _config: &SynthConfig) -> Vec<String> {
    boundary(samples, Boundary::Start)
}

/// Propose `^.+[c]$` when every non-empty valid string ends with `c` and no
/// invalid string does.
pub fn suffix(samples: &Samples<'_>, _config: &SynthConfig) -> Vec<String> {
    boundary(samples, Boundary::End)
}

fn boundary(samples: &Samples<'_>, side: Boundary) -> Vec<String> {
    let Ok(c) = samples
        .valid
        .iter()
        .filter_map(|s| side.char_of(s))
        .unique()
        .exactly_one()
    else {
        return vec![];
    };
    if samples.any_invalid(|s| side.char_of(s) == Some(c)) {
        return vec![];
    }
    vec![side.format(&escape_class(c.encode_utf8(&mut [0; 4])))]
}
