use chrono::{DateTime, Local};

use crate::core::agents::AgentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptRole {
    User,
    Assistant,
}

impl TranscriptRole {
    /// Role name the Gemini API expects in `contents`.
    pub fn to_api_role(self) -> &'static str {
        match self {
            TranscriptRole::User => "user",
            TranscriptRole::Assistant => "model",
        }
    }

    pub fn is_user(self) -> bool {
        self == TranscriptRole::User
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u64,
    pub role: TranscriptRole,
    pub text: String,
    /// Agent that authored an assistant reply, when the reply named a known one.
    pub agent_id: Option<AgentId>,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(id: u64, role: TranscriptRole, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            agent_id: None,
            timestamp: Local::now(),
        }
    }

    pub fn with_agent(mut self, agent_id: Option<AgentId>) -> Self {
        self.agent_id = agent_id;
        self
    }

    pub fn is_user(&self) -> bool {
        self.role.is_user()
    }
}
