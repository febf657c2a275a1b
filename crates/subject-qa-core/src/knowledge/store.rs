//! Immutable question/answer map plus an ordered paragraph list for one subject.

use super::fixtures;
use std::collections::HashMap;

/// Trims surrounding whitespace and lowercases the whole string.
///
/// Both the exact-match key lookup and the keyword split operate on this form.
pub fn normalize_question(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A free-text paragraph used as a keyword-search target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
    folded: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let folded = text.to_lowercase();
        Self { text, folded }
    }

    /// Original text, as returned to callers.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when every keyword occurs as a substring of the lowercased text.
    /// Zero keywords always match.
    pub fn contains_all<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        keywords.iter().all(|k| self.folded.contains(k.as_ref()))
    }
}

/// Read-only knowledge for one subject. Built once, never mutated afterward.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    qa_pairs: HashMap<String, String>,
    paragraphs: Vec<Paragraph>,
}

impl KnowledgeBase {
    /// Loads the built-in dataset for `subject`. Unknown labels yield an empty base.
    pub fn for_subject(subject: &str) -> Self {
        match fixtures::dataset(subject) {
            Some(data) => Self::from_parts(
                data.qa_pairs.iter().copied(),
                data.paragraphs.iter().copied(),
            ),
            None => Self::default(),
        }
    }

    /// Builds a base from arbitrary data. Keys are normalized on insert; on duplicate
    /// keys the last pair wins.
    pub fn from_parts<Q, A, P>(
        qa_pairs: impl IntoIterator<Item = (Q, A)>,
        paragraphs: impl IntoIterator<Item = P>,
    ) -> Self
    where
        Q: AsRef<str>,
        A: Into<String>,
        P: Into<String>,
    {
        let qa_pairs = qa_pairs
            .into_iter()
            .map(|(q, a)| (normalize_question(q.as_ref()), a.into()))
            .collect();
        let paragraphs = paragraphs.into_iter().map(Paragraph::new).collect();
        Self {
            qa_pairs,
            paragraphs,
        }
    }

    /// Answer stored under an already-normalized question.
    pub fn exact_answer(&self, normalized: &str) -> Option<&str> {
        self.qa_pairs.get(normalized).map(String::as_str)
    }

    /// Paragraphs in their original order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn question_count(&self) -> usize {
        self.qa_pairs.len()
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qa_pairs.is_empty() && self.paragraphs.is_empty()
    }

    /// Stored question keys, sorted for stable display.
    pub fn known_questions(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.qa_pairs.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_question("  What IS GDP?\t\n"), "what is gdp?");
        assert_eq!(normalize_question(" \t "), "");
    }

    #[test]
    fn builtin_subjects_have_expected_sizes() {
        let polity = KnowledgeBase::for_subject("Polity");
        assert_eq!(polity.question_count(), 9);
        assert_eq!(polity.paragraph_count(), 4);

        let history = KnowledgeBase::for_subject("History");
        assert_eq!(history.question_count(), 5);
        assert_eq!(history.paragraph_count(), 4);

        let economics = KnowledgeBase::for_subject("Economics");
        assert_eq!(economics.question_count(), 6);
        assert_eq!(economics.paragraph_count(), 3);
    }

    #[test]
    fn unknown_subject_is_empty_not_an_error() {
        let kb = KnowledgeBase::for_subject("Geography");
        assert!(kb.is_empty());
        assert!(kb.paragraphs().is_empty());
        assert_eq!(kb.exact_answer("what is the capital of india?"), None);
    }

    #[test]
    fn subject_labels_are_case_sensitive() {
        assert!(KnowledgeBase::for_subject("polity").is_empty());
        assert!(!KnowledgeBase::for_subject("Polity").is_empty());
    }

    #[test]
    fn from_parts_normalizes_keys_and_last_duplicate_wins() {
        let kb = KnowledgeBase::from_parts(
            [("  Who Are You? ", "first"), ("who are you?", "second")],
            Vec::<String>::new(),
        );
        assert_eq!(kb.question_count(), 1);
        assert_eq!(kb.exact_answer("who are you?"), Some("second"));
    }

    #[test]
    fn paragraph_match_is_substring_and_case_insensitive() {
        let p = Paragraph::new("The Cabinets met in New Delhi.");
        assert!(p.contains_all(&["cabinet", "delhi"]));
        assert!(!p.contains_all(&["cabinet", "mumbai"]));
        assert!(p.contains_all::<&str>(&[]));
        assert_eq!(p.text(), "The Cabinets met in New Delhi.");
    }

    #[test]
    fn known_questions_are_sorted() {
        let kb = KnowledgeBase::for_subject("Economics");
        let questions = kb.known_questions();
        assert_eq!(questions.first(), Some(&"what is a budget deficit?"));
        assert!(questions.windows(2).all(|w| w[0] <= w[1]));
    }
}
