//! Skill similarity hook.
//!
//! The engine asks a `SkillMatcher` whether a candidate's skill satisfies a
//! wanted name. The default is exact, case-insensitive comparison; an
//! approximate matcher (synonyms, embeddings) can be swapped in through
//! `Engine::with_matcher` without touching the scoring rules.

pub trait SkillMatcher: Send + Sync {
    fn matches(&self, candidate_skill: &str, wanted: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveMatcher;

impl SkillMatcher for CaseInsensitiveMatcher {
    fn matches(&self, candidate_skill: &str, wanted: &str) -> bool {
        normalize(candidate_skill) == normalize(wanted)
    }
}

pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignoring_case_and_surrounding_space() {
        let matcher = CaseInsensitiveMatcher;
        for variant in ["python", "Python", "PYTHON", " Python "] {
            assert!(matcher.matches(variant, "Python"));
        }
    }

    #[test]
    fn does_not_match_substrings() {
        let matcher = CaseInsensitiveMatcher;
        assert!(!matcher.matches("Java", "JavaScript"));
        assert!(!matcher.matches("", "SQL"));
    }
}
