//! The two sample sets a pattern is inferred from.

/// Borrowed `valid` / `invalid` sample sets for one synthesis run.
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    pub valid: Vec<&'a str>,
    pub invalid: Vec<&'a str>,
}

impl<'a> Samples<'a> {
    pub fn new<V: AsRef<str>, I: AsRef<str>>(valid: &'a [V], invalid: &'a [I]) -> Self {
        Self {
            valid: valid.iter().map(AsRef::as_ref).collect(),
            invalid: invalid.iter().map(AsRef::as_ref).collect(),
        }
    }

    /// Length in characters of the shortest valid string, if any.
    pub fn shortest_valid(&self) -> Option<usize> {
        self.valid.iter().map(|s| s.chars().count()).min()
    }

    pub fn all_valid(&self, pred: impl Fn(&str) -> bool) -> bool {
        self.valid.iter().all(|&s| pred(s))
    }

    pub fn any_invalid(&self, pred: impl Fn(&str) -> bool) -> bool {
        self.invalid.iter().any(|&s| pred(s))
    }
}
