//! Ask handler helpers: turns a `{subject, question}` request into the JSON the UI renders.
//!
//! A blank question is answered with the UI warning and never reaches an agent.
//! Unregistered subjects are answered by an empty-knowledge agent.

use subject_qa_core::AgentRegistry;

/// Shown when the question box is empty.
pub const EMPTY_QUESTION_WARNING: &str = "Please enter a question to get an answer.";

#[derive(Debug, serde::Deserialize)]
pub struct AskRequest {
    pub subject: String,
    #[serde(default)]
    pub question: String,
}

pub fn answer_request(registry: &AgentRegistry, req: &AskRequest) -> serde_json::Value {
    if req.question.trim().is_empty() {
        return serde_json::json!({
            "status": "warning",
            "subject": req.subject,
            "message": EMPTY_QUESTION_WARNING,
        });
    }

    let agent = registry.agent_for(&req.subject);
    let answer = agent.resolve(&req.question);
    tracing::info!(subject = %req.subject, kind = ?answer.kind, "Question answered");
    serde_json::json!({
        "status": "ok",
        "subject": agent.subject(),
        "kind": answer.kind,
        "answer": answer.text,
    })
}

/// Per-subject summary for `GET /v1/subjects`.
pub fn subject_summaries(registry: &AgentRegistry) -> serde_json::Value {
    let subjects: Vec<serde_json::Value> = registry
        .agents()
        .map(|agent| {
            let kb = agent.knowledge();
            serde_json::json!({
                "name": agent.subject(),
                "question_count": kb.question_count(),
                "paragraph_count": kb.paragraph_count(),
                "known_questions": kb.known_questions(),
            })
        })
        .collect();
    serde_json::json!({ "subjects": subjects })
}
