//! Subject agents: two-tier lookup over one knowledge base.
//!
//! 1. Exact match on the normalized question.
//! 2. Conjunctive keyword search over the paragraphs, capped at [`MAX_PASSAGES`].
//!
//! Every question maps to some display-ready string; "nothing found" is a normal answer.

mod registry;

pub use registry::AgentRegistry;

use crate::knowledge::{normalize_question, KnowledgeBase};
use serde::Serialize;

/// Prefix of a passage answer.
pub const PASSAGE_LEAD_IN: &str = "Based on my knowledge:\n\n";
/// Placed between two returned paragraphs.
pub const PASSAGE_SEPARATOR: &str = "\n\n";
/// Suffix of a passage answer.
pub const PASSAGE_DISCLAIMER: &str =
    "\n\n(This answer is derived from relevant sections of my knowledge base.)";
/// Upper bound on paragraphs included in one passage answer.
pub const MAX_PASSAGES: usize = 2;

/// The fixed reply when neither tier finds anything.
pub fn not_found_message(subject: &str) -> String {
    format!(
        "I'm sorry, I don't have enough information in my {} knowledge base to answer that \
         specific question precisely, nor could I find directly relevant text for keywords. \
         Please try rephrasing, or asking one of my known questions.",
        subject
    )
}

/// Which tier produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerKind {
    Exact,
    /// `matched` paragraphs satisfied every keyword; the first `shown` were returned.
    Passages { matched: usize, shown: usize },
    NotFound,
}

/// A resolved answer plus the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub kind: AnswerKind,
    pub text: String,
}

/// Answers questions for one subject. Owns its knowledge base exclusively.
#[derive(Debug, Clone)]
pub struct SubjectAgent {
    subject: String,
    knowledge: KnowledgeBase,
}

impl SubjectAgent {
    /// Builds an agent over the built-in dataset for `subject` (empty if unknown).
    pub fn new(subject: impl Into<String>) -> Self {
        let subject = subject.into();
        let knowledge = KnowledgeBase::for_subject(&subject);
        Self::with_knowledge(subject, knowledge)
    }

    pub fn with_knowledge(subject: impl Into<String>, knowledge: KnowledgeBase) -> Self {
        let subject = subject.into();
        tracing::info!(
            subject = %subject,
            questions = knowledge.question_count(),
            paragraphs = knowledge.paragraph_count(),
            "[{} Agent]: Initialized with internal knowledge base",
            subject
        );
        Self { subject, knowledge }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Display-ready answer text for a raw question.
    pub fn answer(&self, question: &str) -> String {
        self.resolve(question).text
    }

    /// Runs the lookup and reports which tier answered.
    pub fn resolve(&self, question: &str) -> Answer {
        tracing::debug!(subject = %self.subject, question, "Attempting to answer question");
        let normalized = normalize_question(question);

        if let Some(exact) = self.knowledge.exact_answer(&normalized) {
            tracing::debug!(subject = %self.subject, "Exact match");
            return Answer {
                kind: AnswerKind::Exact,
                text: exact.to_string(),
            };
        }

        // Tokens are not deduplicated; an empty question has none and matches every paragraph.
        let keywords: Vec<&str> = normalized.split_whitespace().collect();
        let matched: Vec<&str> = self
            .knowledge
            .paragraphs()
            .iter()
            .filter(|p| p.contains_all(&keywords))
            .map(|p| p.text())
            .collect();

        if matched.is_empty() {
            tracing::debug!(subject = %self.subject, keywords = keywords.len(), "No match");
            return Answer {
                kind: AnswerKind::NotFound,
                text: not_found_message(&self.subject),
            };
        }

        let shown = matched.len().min(MAX_PASSAGES);
        tracing::debug!(
            subject = %self.subject,
            matched = matched.len(),
            shown,
            "Keyword fallback"
        );
        let text = format!(
            "{}{}{}",
            PASSAGE_LEAD_IN,
            matched[..shown].join(PASSAGE_SEPARATOR),
            PASSAGE_DISCLAIMER
        );
        Answer {
            kind: AnswerKind::Passages {
                matched: matched.len(),
                shown,
            },
            text,
        }
    }
}
