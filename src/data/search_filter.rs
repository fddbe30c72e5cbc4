use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

use crate::data::schema::Extractor;

/// How the free-text search term is matched against searchable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring match
    #[default]
    Substring,
    /// Skim-style fuzzy match (characters in order, gaps allowed)
    Fuzzy,
}

/// Predicate over records built from a search term and the searchable fields
pub struct SearchPredicate<T> {
    /// Trimmed term, lowercased for substring mode
    term: String,
    mode: SearchMode,
    extractors: Vec<Extractor<T>>,
    matcher: Option<SkimMatcherV2>,
}

impl<T> SearchPredicate<T> {
    pub fn build(term: &str, extractors: Vec<Extractor<T>>, mode: SearchMode) -> Self {
        let trimmed = term.trim();
        let (term, matcher) = match mode {
            SearchMode::Substring => (trimmed.to_lowercase(), None),
            SearchMode::Fuzzy => (
                trimmed.to_string(),
                Some(SkimMatcherV2::default().ignore_case()),
            ),
        };

        Self {
            term,
            mode,
            extractors,
            matcher,
        }
    }

    /// True when the term is blank and every record passes
    pub fn matches_everything(&self) -> bool {
        self.term.is_empty()
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// A record passes if any searchable field matches the term
    pub fn matches(&self, record: &T) -> bool {
        if self.term.is_empty() {
            return true;
        }

        self.extractors.iter().any(|extract| {
            let value = extract(record).as_text();
            match &self.matcher {
                Some(matcher) => matcher.fuzzy_match(&value, &self.term).is_some(),
                None => contains_lowercase(&value, &self.term),
            }
        })
    }
}

/// `needle` must already be lowercased
fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    if haystack.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::field_value::FieldValue;
    use std::sync::Arc;

    struct Rx {
        diagnosis: String,
        doctor: Option<String>,
    }

    fn rx(diagnosis: &str, doctor: Option<&str>) -> Rx {
        Rx {
            diagnosis: diagnosis.to_string(),
            doctor: doctor.map(str::to_string),
        }
    }

    fn extractors() -> Vec<Extractor<Rx>> {
        vec![
            Arc::new(|r: &Rx| FieldValue::from(&r.diagnosis)),
            Arc::new(|r: &Rx| FieldValue::from(r.doctor.clone())),
        ]
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let predicate = SearchPredicate::build("   ", extractors(), SearchMode::Substring);
        assert!(predicate.matches_everything());
        assert!(predicate.matches(&rx("", None)));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let predicate = SearchPredicate::build("  VIÊM ", extractors(), SearchMode::Substring);
        assert!(predicate.matches(&rx("Viêm phổi", None)));
        assert!(predicate.matches(&rx("Sốt", Some("viêm khoa"))));
        assert!(!predicate.matches(&rx("Sốt xuất huyết", Some("Dr. Lan"))));
    }

    #[test]
    fn test_missing_value_never_matches_non_empty_term() {
        let predicate = SearchPredicate::build("lan", extractors(), SearchMode::Substring);
        assert!(!predicate.matches(&rx("", None)));
        assert!(predicate.matches(&rx("", Some("Dr. Lan"))));
    }

    #[test]
    fn test_no_extractors_matches_nothing() {
        let predicate: SearchPredicate<Rx> = SearchPredicate::build("a", Vec::new(), SearchMode::Substring);
        assert!(!predicate.matches(&rx("a", Some("a"))));
    }

    #[test]
    fn test_fuzzy_mode() {
        let predicate = SearchPredicate::build("hypt", extractors(), SearchMode::Fuzzy);
        assert_eq!(predicate.mode(), SearchMode::Fuzzy);
        assert!(predicate.matches(&rx("Hypertension", None)));
        assert!(!predicate.matches(&rx("Asthma", None)));
    }
}
