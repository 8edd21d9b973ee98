//! Ranking of validated candidates.
//!
//! Lower sorts first:
//!
//! | Rank | Shape                                              |
//! |------|----------------------------------------------------|
//! | 0    | contains `@` and an escaped dot (email)            |
//! | 1    | contains `\D` or `\w`                              |
//! | 2    | bracket class at the start or end (prefix/suffix)  |
//! | 3    | anything else (delimiter, ...)                     |
//! | 4    | contains a `.*` span (substring)                   |
//!
//! Within a rank, fewer `.*` spans (rank 4 only) and then shorter patterns
//! win. Equal keys fall back to the pattern text so the choice never depends
//! on generation order.

/// Sort key for a candidate pattern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority {
    pub rank: u8,
    pub wildcards: usize,
    pub len: usize,
    pub pattern: String,
}

impl Priority {
    pub fn of(pattern: &str) -> Self {
        let rank = rank(pattern);
        Self {
            rank,
            wildcards: if rank == WILDCARD_RANK {
                wildcard_spans(pattern)
            } else {
                0
            },
            len: pattern.chars().count(),
            pattern: pattern.to_string(),
        }
    }
}

const WILDCARD_RANK: u8 = 4;

/// Specificity category of `pattern`, 0 (most specific) to 4.
pub fn rank(pattern: &str) -> u8 {
    if pattern.contains('@') && pattern.contains(r"\.") {
        0
    } else if pattern.contains(r"\D") || pattern.contains(r"\w") {
        1
    } else if pattern.starts_with("^[") || pattern.ends_with("]$") {
        2
    } else if pattern.contains(".*") {
        WILDCARD_RANK
    } else {
        3
    }
}

/// Number of `.*` spans in `pattern`.
pub fn wildcard_spans(pattern: &str) -> usize {
    pattern.matches(".*").count()
}

/// The highest-priority pattern, if any.
pub fn select<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    patterns.into_iter().min_by_key(|p| Priority::of(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_shape() {
        assert_eq!(rank(r"^\D+@\w+\.\w+$"), 0);
        assert_eq!(rank(r"^.+@\w+\.\w+$"), 0);
        assert_eq!(rank(r"^\D+$"), 1);
        assert_eq!(rank("^[a].+$"), 2);
        assert_eq!(rank("^.+[1]$"), 2);
        assert_eq!(rank("^.+-.+$"), 3);
        assert_eq!(rank(r"^.+\..+$"), 3);
        assert_eq!(rank("^.*ab.*$"), 4);
    }

    #[test]
    fn wildcards_only_count_in_rank_four() {
        assert_eq!(Priority::of("^.*a.*$").wildcards, 2);
        assert_eq!(Priority::of("^.+-.+$").wildcards, 0);
    }

    #[test]
    fn most_specific_wins() {
        let picked = select(["^.*-.*$", "^.+-.+$", "^[a].+$", r"^\D+$"]);
        assert_eq!(picked, Some(r"^\D+$"));
    }

    #[test]
    fn shorter_wins_within_rank() {
        assert_eq!(select(["^.*ab.*$", "^.*a.*$"]), Some("^.*a.*$"));
        assert_eq!(select(["^[ab].+$", "^[a].+$"]), Some("^[a].+$"));
    }

    #[test]
    fn ties_broken_by_text_not_order() {
        assert_eq!(select(["^.+_.+$", "^.+-.+$"]), Some("^.+-.+$"));
        assert_eq!(select(["^.+-.+$", "^.+_.+$"]), Some("^.+-.+$"));
    }

    #[test]
    fn nothing_to_select() {
        assert_eq!(select(std::iter::empty()), None);
    }
}
