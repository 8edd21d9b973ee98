//! The candidate-generation-and-validation pipeline.

use tracing::{debug, trace};

use crate::config::{Selection, SynthConfig};
use crate::generators::{GENERATORS, GeneratorKind};
use crate::samples::Samples;
use crate::selector::{self, Priority};
use crate::validator::{Validator, Verdict};

/// Result when there is nothing to accept.
pub const EMPTY_ONLY: &str = "^$";
/// Result when there is nothing to reject, or nothing better validates.
pub const UNIVERSAL: &str = "^.*$";

/// How the returned pattern was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No valid samples; the pipeline was skipped.
    EmptyValid,
    /// No invalid samples; the pipeline was skipped.
    EmptyInvalid,
    /// A specific candidate validated.
    Selected,
    /// Only the fallback class validated.
    Fallback,
    /// Nothing validated.
    Universal,
}

/// One proposal and what the validator made of it.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub pattern: String,
    pub source: GeneratorKind,
    pub verdict: Verdict,
    pub priority: Priority,
}

/// Everything one run considered, and what it returned.
#[derive(Debug, Clone)]
pub struct Report {
    pub pattern: String,
    pub outcome: Outcome,
    /// In generation order.
    pub candidates: Vec<Candidate>,
}

impl Report {
    fn skipped(pattern: &str, outcome: Outcome) -> Self {
        Self {
            pattern: pattern.to_string(),
            outcome,
            candidates: vec![],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: SynthConfig,
    validator: Validator,
}

impl Synthesizer {
    pub fn new(config: SynthConfig) -> Self {
        let validator = Validator::new(config.max_pattern_len);
        Self { config, validator }
    }

    /// Infer a pattern accepting every `valid` string and no `invalid` one.
    pub fn generate<V: AsRef<str>, I: AsRef<str>>(&self, valid: &[V], invalid: &[I]) -> String {
        self.explain(valid, invalid).pattern
    }

    /// Like [`generate`](Self::generate), keeping every candidate and verdict.
    pub fn explain<V: AsRef<str>, I: AsRef<str>>(&self, valid: &[V], invalid: &[I]) -> Report {
        let samples = Samples::new(valid, invalid);
        if samples.valid.is_empty() {
            debug!("no valid samples, returning {EMPTY_ONLY}");
            return Report::skipped(EMPTY_ONLY, Outcome::EmptyValid);
        }
        if samples.invalid.is_empty() {
            debug!("no invalid samples, returning {UNIVERSAL}");
            return Report::skipped(UNIVERSAL, Outcome::EmptyInvalid);
        }

        let candidates = self.candidates(&samples);
        let (pattern, outcome) = match self.config.selection {
            Selection::Ranked => select_ranked(&candidates),
            Selection::FirstMatch => select_first(&candidates),
        };
        debug!(
            pattern = %pattern,
            ?outcome,
            considered = candidates.len(),
            "pattern selected"
        );
        Report {
            pattern,
            outcome,
            candidates,
        }
    }

    fn candidates(&self, samples: &Samples<'_>) -> Vec<Candidate> {
        GENERATORS
            .iter()
            .flat_map(|&(source, generate)| {
                generate(samples, &self.config)
                    .into_iter()
                    .map(move |pattern| (source, pattern))
            })
            .map(|(source, pattern)| {
                let verdict = self.validator.check(&pattern, samples);
                trace!(%source, pattern = %pattern, %verdict, "candidate");
                Candidate {
                    priority: Priority::of(&pattern),
                    pattern,
                    source,
                    verdict,
                }
            })
            .collect()
    }
}

/// Best specific candidate by priority; the fallback only when none validated.
fn select_ranked(candidates: &[Candidate]) -> (String, Outcome) {
    let (fallback, specific): (Vec<&Candidate>, Vec<&Candidate>) = candidates
        .iter()
        .filter(|c| c.verdict.is_accepted())
        .partition(|c| c.source.is_fallback());

    if let Some(best) = selector::select(specific.iter().map(|c| c.pattern.as_str())) {
        (best.to_string(), Outcome::Selected)
    } else if let Some(c) = fallback.first() {
        (c.pattern.clone(), Outcome::Fallback)
    } else {
        (UNIVERSAL.to_string(), Outcome::Universal)
    }
}

fn select_first(candidates: &[Candidate]) -> (String, Outcome) {
    match candidates.iter().find(|c| c.verdict.is_accepted()) {
        Some(c) if c.source.is_fallback() => (c.pattern.clone(), Outcome::Fallback),
        Some(c) => (c.pattern.clone(), Outcome::Selected),
        None => (UNIVERSAL.to_string(), Outcome::Universal),
    }
}

/// Infer a pattern with the default configuration.
///
/// ```
/// assert_eq!(greex::generate_expression(&["abc", "def"], &["123", "456"]), r"^\D+$");
/// ```
pub fn generate_expression<V: AsRef<str>, I: AsRef<str>>(valid: &[V], invalid: &[I]) -> String {
    Synthesizer::default().generate(valid, invalid)
}
