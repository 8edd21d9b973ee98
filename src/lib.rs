//! Infer a small anchored pattern from examples.
//!
//! Given strings a pattern must accept and strings it must reject, a fixed
//! list of heuristic generators proposes candidates (non-digit run, email
//! shape, delimiter, prefix, suffix, common substring, and a catch-all class
//! of seen characters). Each candidate is validated by full-string matching
//! against both sets and a 20 character cap; the most specific survivor wins.
//!
//! # Example
//!
//! ```rust
//! use greex::{SynthConfig, Synthesizer, generate_expression, validate};
//!
//! let valid = ["abc-1", "bbb-1", "cde-1"];
//! let invalid = ["abc1", "bbb1", "cde1"];
//!
//! let pattern = generate_expression(&valid, &invalid);
//! assert_eq!(pattern, "^.+-.+$");
//! assert!(validate(&pattern, &valid, &invalid));
//!
//! // Nothing to accept, or nothing to reject
//! assert_eq!(generate_expression(&[] as &[&str], &["x"]), "^$");
//! assert_eq!(generate_expression(&["x"], &[] as &[&str]), "^.*$");
//!
//! // Every candidate and its verdict
//! let report = Synthesizer::new(SynthConfig::default()).explain(&valid, &invalid);
//! assert!(report.candidates.iter().any(|c| c.pattern == "^.*-.*$"));
//! ```

mod config;
pub mod generators;
pub mod logging;
pub mod pattern;
mod samples;
pub mod selector;
mod synth;
mod validator;

pub use config::{DEFAULT_MAX_SUBSTRING_LEN, Selection, SynthConfig};
pub use generators::GeneratorKind;
pub use pattern::CompiledPattern;
pub use samples::Samples;
pub use selector::Priority;
pub use synth::{
    Candidate, EMPTY_ONLY, Outcome, Report, Synthesizer, UNIVERSAL, generate_expression,
};
pub use validator::{MAX_PATTERN_LEN, Validator, Verdict, validate};
