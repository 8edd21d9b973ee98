//! Candidate generators.
//!
//! Each strategy inspects the samples and proposes zero or more anchored
//! patterns. None of them validate; the pipeline runs every proposal through
//! the validator. [`GENERATORS`] fixes the order they are tried in, which is
//! also the order [`Selection::FirstMatch`](crate::Selection::FirstMatch)
//! honours.

mod boundary;
mod class;
mod delimiter;
mod email;
mod fallback;
mod substring;

use std::collections::BTreeSet;

use crate::config::SynthConfig;
use crate::samples::Samples;

pub use boundary::{prefix, suffix};
pub use class::{NON_DIGIT_RUN, non_digit};
pub use delimiter::delimiter;
pub use email::{email, looks_like_email};
pub use fallback::fallback;
pub use substring::common_substring;

/// Which strategy proposed a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    CharacterClass,
    Email,
    Delimiter,
    Prefix,
    Suffix,
    CommonSubstring,
    Fallback,
}

impl GeneratorKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::CharacterClass => "character-class",
            Self::Email => "email",
            Self::Delimiter => "delimiter",
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
            Self::CommonSubstring => "common-substring",
            Self::Fallback => "fallback",
        }
    }

    /// The catch-all strategy, only used when nothing specific validates.
    pub fn is_fallback(self) -> bool {
        self == Self::Fallback
    }
}

impl std::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub type GenerateFn = fn(&Samples<'_>, &SynthConfig) -> Vec<String>;

pub const GENERATORS: [(GeneratorKind, GenerateFn); 7] = [
    (GeneratorKind::CharacterClass, non_digit),
    (GeneratorKind::Email, email),
    (GeneratorKind::Delimiter, delimiter),
    (GeneratorKind::Prefix, prefix),
    (GeneratorKind::Suffix, suffix),
    (GeneratorKind::CommonSubstring, common_substring),
    (GeneratorKind::Fallback, fallback),
];

/// Members common to every set, in sorted order. Empty when there are no sets.
fn intersect_all<T: Ord>(sets: impl IntoIterator<Item = BTreeSet<T>>) -> BTreeSet<T> {
    sets.into_iter()
        .reduce(|mut acc, set| {
            acc.retain(|member| set.contains(member));
            acc
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order() {
        let kinds: Vec<_> = GENERATORS.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            [
                GeneratorKind::CharacterClass,
                GeneratorKind::Email,
                GeneratorKind::Delimiter,
                GeneratorKind::Prefix,
                GeneratorKind::Suffix,
                GeneratorKind::CommonSubstring,
                GeneratorKind::Fallback,
            ]
        );
        assert!(GeneratorKind::Fallback.is_fallback());
        assert!(!GeneratorKind::Prefix.is_fallback());
    }

    #[test]
    fn intersect_all_keeps_common_members() {
        let sets = [
            BTreeSet::from(['a', 'b', 'c']),
            BTreeSet::from(['b', 'c', 'd']),
            BTreeSet::from(['c', 'b']),
        ];
        assert_eq!(intersect_all(sets), BTreeSet::from(['b', 'c']));
    }

    #[test]
    fn intersect_all_of_nothing_is_empty() {
        assert!(intersect_all(Vec::<BTreeSet<char>>::new()).is_empty());
    }
}
