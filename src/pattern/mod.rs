//! Compiling and matching candidate patterns.
//!
//! Candidates are ordinary regular expressions in a small anchored shape
//! (`^\D+$`, `^.+-.+$`, `^[a].+$`, ...). They are compiled with the `regex`
//! crate and only ever tested in full-string mode.

pub mod classes;
pub mod escape;

use regex::Regex;

pub use escape::{escape, escape_class};

/// A candidate compiled for full-string matching.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Compile `source` wrapped as `^(?:source)$`, so a match always spans
    /// the whole input whether or not `source` carries its own anchors.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{source})$"))?,
        })
    }

    /// Test whether the pattern consumes the whole of `text`.
    pub fn is_full_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
