//! Case-insensitive editor-id matching

use serde::{Deserialize, Serialize};

/// Matches editor ids against configured substring patterns and exact ids.
///
/// All comparison is case-insensitive. An empty matcher matches nothing;
/// default-accept semantics, where wanted, are the caller's decision via
/// [`IdMatcher::is_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdMatcher {
    /// Substring patterns; any occurrence anywhere in the id matches
    pub substrings: Vec<String>,
    /// Exact editor ids
    pub ids: Vec<String>,
}

impl IdMatcher {
    /// Create a matcher from substring patterns only
    pub fn from_substrings<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            substrings: patterns.into_iter().map(Into::into).collect(),
            ids: Vec::new(),
        }
    }

    /// Create a matcher from exact ids only
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            substrings: Vec::new(),
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the matcher has no patterns at all
    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty() && self.ids.is_empty()
    }

    /// Whether the editor id satisfies any configured pattern
    pub fn is_match(&self, editor_id: &str) -> bool {
        let id = editor_id.to_ascii_lowercase();
        self.substrings
            .iter()
            .any(|p| !p.is_empty() && id.contains(&p.to_ascii_lowercase()))
            || self.ids.iter().any(|i| i.eq_ignore_ascii_case(editor_id))
    }
}

/// Case-insensitive substring containment, for single ad-hoc patterns
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("TrapDweBallista01", &["trap"], true; "substring lowercase pattern")]
    #[test_case("IronArrowProjectile", &["ARROW"], true; "substring uppercase pattern")]
    #[test_case("IronArrowProjectile", &["bolt"], false; "no occurrence")]
    #[test_case("anything", &[], false; "empty matcher matches nothing")]
    fn substring_matching(id: &str, patterns: &[&str], expected: bool) {
        let matcher = IdMatcher::from_substrings(patterns.iter().copied());
        assert_eq!(matcher.is_match(id), expected);
    }

    #[test]
    fn exact_ids_ignore_case_but_not_substrings() {
        let matcher = IdMatcher::from_ids(["DLC1ElvenArrowBloodProjectile"]);
        assert!(matcher.is_match("dlc1elvenarrowbloodprojectile"));
        assert!(!matcher.is_match("DLC1ElvenArrowBloodProjectile02"));
    }

    #[test]
    fn empty_pattern_strings_never_match() {
        let matcher = IdMatcher::from_substrings([""]);
        assert!(!matcher.is_match("IronArrowProjectile"));
    }

    #[test]
    fn contains_ignore_case_helper() {
        assert!(contains_ignore_case("TrapDweBallista01", "TRAPDWEBALLISTA"));
        assert!(!contains_ignore_case("FireballProjectile", "trap"));
    }
}
