//! Append-only transcript for the running session.
//!
//! Insertion order is both the display order and the history replayed to the
//! model on the next turn. Entries are never removed, edited, or reordered.

use crate::api::Content;
use crate::core::agents::AgentId;
use crate::core::message::{Message, TranscriptRole};

#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &Message {
        self.push(TranscriptRole::User, text.into(), None)
    }

    pub fn push_assistant(&mut self, text: impl Into<String>, agent: Option<AgentId>) -> &Message {
        self.push(TranscriptRole::Assistant, text.into(), agent)
    }

    fn push(&mut self, role: TranscriptRole, text: String, agent: Option<AgentId>) -> &Message {
        self.next_id += 1;
        let message = Message::new(self.next_id, role, text).with_agent(agent);
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Every message, in order, in the `{role, parts:[{text}]}` shape the API expects.
    pub fn api_history(&self) -> Vec<Content> {
        self.messages
            .iter()
            .map(|message| Content::text(message.role.to_api_role(), message.text.clone()))
            .collect()
    }
}
