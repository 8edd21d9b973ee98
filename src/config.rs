//! Synthesis configuration.

use anyhow::{Result, bail};

use crate::validator::MAX_PATTERN_LEN;

/// Longest common substring the substring generator looks for.
pub const DEFAULT_MAX_SUBSTRING_LEN: usize = 3;

/// Shortest cap that still admits every generated shape (`^.+$` and friends).
const MIN_PATTERN_LEN: usize = 4;

/// How the pipeline picks among validated candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Most specific validated candidate by priority rank.
    #[default]
    Ranked,
    /// First validated candidate in generator order.
    FirstMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthConfig {
    /// Candidates longer than this (in characters) are rejected.
    pub max_pattern_len: usize,
    pub max_substring_len: usize,
    pub selection: Selection,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            max_pattern_len: MAX_PATTERN_LEN,
            max_substring_len: DEFAULT_MAX_SUBSTRING_LEN,
            selection: Selection::Ranked,
        }
    }
}

impl SynthConfig {
    /// Reject settings under which no generator could ever succeed.
    pub fn check(&self) -> Result<()> {
        if self.max_substring_len == 0 {
            bail!("Maximum substring length must be at least 1.");
        }
        if self.max_pattern_len < MIN_PATTERN_LEN {
            bail!(
                "Maximum pattern length must be at least {}, got {}.",
                MIN_PATTERN_LEN,
                self.max_pattern_len
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ranked_with_cap_20() {
        let config = SynthConfig::default();
        assert_eq!(config.max_pattern_len, 20);
        assert_eq!(config.max_substring_len, 3);
        assert_eq!(config.selection, Selection::Ranked);
        assert!(config.check().is_ok());
    }

    #[test]
    fn zero_substring_len_rejected() {
        let config = SynthConfig {
            max_substring_len: 0,
            ..SynthConfig::default()
        };
        let err = config.check().unwrap_err();
        assert!(err.to_string().contains("substring"));
    }

    #[test]
    fn tiny_pattern_cap_rejected() {
        let config = SynthConfig {
            max_pattern_len: 3,
            ..SynthConfig::default()
        };
        assert!(config.check().is_err());
    }
}
