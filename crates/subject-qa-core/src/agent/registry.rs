use super::SubjectAgent;
use crate::knowledge::KNOWN_SUBJECTS;
use std::sync::Arc;

/// One shared agent per subject, built once and handed out behind `Arc`.
///
/// Agents never mutate after construction, so callers share them without locking.
pub struct AgentRegistry {
    agents: Vec<Arc<SubjectAgent>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self { agents: Vec::new() }
    }

    /// Builds an agent per label, keeping the given order. A repeated label is built once.
    pub fn from_subjects<I, S>(subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for subject in subjects {
            registry.register(Arc::new(SubjectAgent::new(subject)));
        }
        registry
    }

    pub fn with_known_subjects() -> Self {
        Self::from_subjects(KNOWN_SUBJECTS)
    }

    /// Adds an agent; replaces any agent already registered for the same subject.
    pub fn register(&mut self, agent: Arc<SubjectAgent>) {
        match self
            .agents
            .iter_mut()
            .find(|a| a.subject() == agent.subject())
        {
            Some(slot) => *slot = agent,
            None => self.agents.push(agent),
        }
    }

    pub fn get(&self, subject: &str) -> Option<Arc<SubjectAgent>> {
        self.agents.iter().find(|a| a.subject() == subject).cloned()
    }

    /// Registered agent for `subject`, or a fresh agent with an empty knowledge base.
    pub fn agent_for(&self, subject: &str) -> Arc<SubjectAgent> {
        self.get(subject).unwrap_or_else(|| {
            tracing::warn!(subject, "Unregistered subject; answering from an empty knowledge base");
            Arc::new(SubjectAgent::new(subject))
        })
    }

    /// Subject names in registration order (for the UI's subject list).
    pub fn subject_names(&self) -> Vec<String> {
        self.agents.iter().map(|a| a.subject().to_string()).collect()
    }

    pub fn agents(&self) -> impl Iterator<Item = &Arc<SubjectAgent>> {
        self.agents.iter()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
