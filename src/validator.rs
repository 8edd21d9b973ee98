//! The single gate every candidate must pass.

use crate::pattern::CompiledPattern;
use crate::samples::Samples;

/// Longest candidate, in characters, the default validator accepts.
pub const MAX_PATTERN_LEN: usize = 20;

/// Why a candidate was accepted or rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    TooLong,
    /// The pattern does not compile; holds the compiler's message.
    Malformed(String),
    /// The named valid sample does not fully match.
    RejectsValid(String),
    /// The named invalid sample fully matches.
    AcceptsInvalid(String),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::TooLong => write!(f, "too long"),
            Self::Malformed(err) => write!(f, "malformed: {err}"),
            Self::RejectsValid(s) => write!(f, "rejects valid {s:?}"),
            Self::AcceptsInvalid(s) => write!(f, "accepts invalid {s:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_len: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(MAX_PATTERN_LEN)
    }
}

impl Validator {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    /// Check `pattern` against the length cap and full-match semantics over
    /// both sample sets.
    pub fn check(&self, pattern: &str, samples: &Samples<'_>) -> Verdict {
        if pattern.chars().count() > self.max_len {
            return Verdict::TooLong;
        }
        let compiled = match CompiledPattern::new(pattern) {
            Ok(compiled) => compiled,
            Err(err) => return Verdict::Malformed(err.to_string()),
        };
        if let Some(s) = samples.valid.iter().find(|s| !compiled.is_full_match(s)) {
            return Verdict::RejectsValid(s.to_string());
        }
        if let Some(s) = samples.invalid.iter().find(|s| compiled.is_full_match(s)) {
            return Verdict::AcceptsInvalid(s.to_string());
        }
        Verdict::Accepted
    }

    pub fn accepts(&self, pattern: &str, samples: &Samples<'_>) -> bool {
        self.check(pattern, samples).is_accepted()
    }
}

/// True iff `pattern` is at most [`MAX_PATTERN_LEN`] characters, compiles,
/// fully matches every `valid` string and no `invalid` string.
pub fn validate<V: AsRef<str>, I: AsRef<str>>(pattern: &str, valid: &[V], invalid: &[I]) -> bool {
    Validator::default().accepts(pattern, &Samples::new(valid, invalid))
}
