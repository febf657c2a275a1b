//! subject-qa-core: per-subject knowledge bases and the agents that answer from them.
//!
//! An agent first looks for an exact (trimmed, case-insensitive) question match and
//! falls back to a conjunctive keyword search over the subject's paragraphs.

mod agent;
mod knowledge;
mod shared;

pub use shared::CoreConfig;

pub use knowledge::{normalize_question, KnowledgeBase, Paragraph, KNOWN_SUBJECTS};

pub use agent::{
    not_found_message, AgentRegistry, Answer, AnswerKind, SubjectAgent, MAX_PASSAGES,
    PASSAGE_DISCLAIMER, PASSAGE_LEAD_IN, PASSAGE_SEPARATOR,
};
