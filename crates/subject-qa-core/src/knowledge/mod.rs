//! Per-subject knowledge bases.
//!
//! ## Built-in subjects
//!
//! | Subject   | Exact Q&A pairs | Paragraphs |
//! |-----------|-----------------|------------|
//! | Polity    | 9               | 4          |
//! | History   | 5               | 4          |
//! | Economics | 6               | 3          |
//!
//! Any other label yields an empty knowledge base rather than an error.

mod fixtures;
mod store;

pub use store::{normalize_question, KnowledgeBase, Paragraph};

/// Subject labels with a built-in dataset, in the order the UI lists them.
pub const KNOWN_SUBJECTS: [&str; 3] = ["Polity", "History", "Economics"];
