//! Per-turn orchestration between the input box, the transcript, and the model.
//!
//! A turn moves `Idle -> Sending -> Idle`. [`ChatSession::begin_turn`] records
//! the user message and hands back what the caller must send;
//! [`ChatSession::complete_turn`] records whatever came back. Every accepted
//! turn therefore adds exactly two messages, whichever way the call ends.

use tracing::{debug, error, info};

use crate::api::{AgentReply, Content};
use crate::core::agents::AgentId;
use crate::core::constants::CONNECTIVITY_APOLOGY_TEXT;
use crate::core::conversation::Conversation;
use crate::core::message::Message;
use crate::core::model_client::{ModelClient, ModelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    Sending,
}

/// Work handed to the caller when a submission is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTurn {
    pub utterance: String,
    /// The whole conversation, including the user message just recorded.
    pub history: Vec<Content>,
}

#[derive(Debug, Default)]
pub struct ChatSession {
    conversation: Conversation,
    active_agent: AgentId,
    input: String,
    state: TurnState,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn active_agent(&self) -> AgentId {
        self.active_agent
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == TurnState::Sending
    }

    /// Accepts the pending input as a new turn.
    ///
    /// Returns `None` without touching any state when the trimmed input is
    /// empty or a turn is already in flight.
    pub fn begin_turn(&mut self) -> Option<PendingTurn> {
        if self.is_sending() {
            debug!("submission ignored while a turn is in flight");
            return None;
        }

        let utterance = self.input.trim().to_string();
        if utterance.is_empty() {
            return None;
        }

        self.input.clear();
        self.conversation.push_user(utterance.clone());
        self.state = TurnState::Sending;
        debug!(messages = self.conversation.len(), "turn started");

        Some(PendingTurn {
            utterance,
            history: self.conversation.api_history(),
        })
    }

    /// Records the outcome of the in-flight turn and returns to idle.
    ///
    /// Ignored when no turn is in flight.
    pub fn complete_turn(&mut self, result: Result<AgentReply, ModelError>) -> Option<&Message> {
        if !self.is_sending() {
            debug!("completion ignored while idle");
            return None;
        }
        self.state = TurnState::Idle;

        match result {
            Ok(reply) => {
                let agent = AgentId::parse(&reply.active_agent_id);
                match agent {
                    Some(agent) => {
                        if agent != self.active_agent {
                            info!(from = %self.active_agent, to = %agent, "active agent changed");
                        }
                        self.active_agent = agent;
                    }
                    None => debug!(
                        agent = %reply.active_agent_id,
                        "reply named an unknown agent; keeping active agent"
                    ),
                }
                Some(self.conversation.push_assistant(reply.response_text, agent))
            }
            Err(err) => {
                error!(error = %err, "chat turn failed");
                self.active_agent = AgentId::Navigator;
                Some(
                    self.conversation
                        .push_assistant(CONNECTIVITY_APOLOGY_TEXT, Some(AgentId::Navigator)),
                )
            }
        }
    }

    /// Runs a whole turn against `client`: record, call, record.
    pub async fn submit(&mut self, client: &dyn ModelClient) -> Option<&Message> {
        let pending = self.begin_turn()?;
        let result = client
            .send_message(&pending.utterance, &pending.history)
            .await;
        self.complete_turn(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MALFORMED_REPLY_TEXT;
    use crate::core::message::TranscriptRole;
    use crate::utils::test_utils::ScriptedClient;

    fn session_with_input(text: &str) -> ChatSession {
        let mut session = ChatSession::new();
        session.set_input(text);
        session
    }

    #[tokio::test]
    async fn accepted_turn_adds_user_and_assistant_messages() {
        let client = ScriptedClient::new()
            .reply("APPOINTMENT", "Jadwal tersedia Kamis")
            .fail();
        let mut session = session_with_input("  Saya ingin janji temu  ");

        session.submit(&client).await.expect("turn accepted");
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].role, TranscriptRole::User);
        assert_eq!(session.messages()[0].text, "Saya ingin janji temu");
        assert_eq!(session.messages()[1].role, TranscriptRole::Assistant);
        assert_eq!(session.input(), "");
        assert!(!session.is_sending());

        session.set_input("Lagi");
        session.submit(&client).await.expect("turn accepted");
        assert_eq!(session.messages().len(), 4);
        assert!(!session.is_sending());
    }

    #[tokio::test]
    async fn blank_input_is_a_no_op() {
        let client = ScriptedClient::new().reply("BILLING", "x");
        for input in ["", "   ", "\n\t "] {
            let mut session = session_with_input(input);
            assert!(session.submit(&client).await.is_none());
            assert!(session.messages().is_empty());
            assert_eq!(session.state(), TurnState::Idle);
        }
        assert!(client.calls().is_empty());
    }

    #[test]
    fn submission_while_sending_is_a_no_op() {
        let mut session = session_with_input("Pertama");
        let pending = session.begin_turn().expect("first turn accepted");
        assert_eq!(pending.utterance, "Pertama");
        assert!(session.is_sending());

        session.set_input("Kedua");
        assert!(session.begin_turn().is_none());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.active_agent(), AgentId::Navigator);
        assert_eq!(session.input(), "Kedua");
    }

    #[tokio::test]
    async fn recognised_agent_becomes_active() {
        let client = ScriptedClient::new().reply("BILLING", "Faktur Anda...");
        let mut session = session_with_input("Berapa tagihan saya?");

        let reply = session.submit(&client).await.expect("turn accepted").clone();
        assert_eq!(reply.agent_id, Some(AgentId::Billing));
        assert_eq!(reply.text, "Faktur Anda...");
        assert_eq!(session.active_agent(), AgentId::Billing);
    }

    #[tokio::test]
    async fn failure_appends_connectivity_apology_from_navigator() {
        let client = ScriptedClient::new()
            .reply("MEDICAL_RECORDS", "Hasil lab Anda normal")
            .fail();
        let mut session = session_with_input("Hasil lab?");
        session.submit(&client).await;
        assert_eq!(session.active_agent(), AgentId::MedicalRecords);

        session.set_input("Dan rontgen?");
        let reply = session.submit(&client).await.expect("turn accepted").clone();
        assert_eq!(reply.agent_id, Some(AgentId::Navigator));
        assert_eq!(reply.text, CONNECTIVITY_APOLOGY_TEXT);
        assert_eq!(session.active_agent(), AgentId::Navigator);
        assert_eq!(session.state(), TurnState::Idle);
    }

    #[tokio::test]
    async fn unknown_agent_keeps_message_but_not_active_agent() {
        let client = ScriptedClient::new()
            .reply("PATIENT_INFO", "Data diperbarui")
            .reply("PHARMACY", "Resep siap diambil");
        let mut session = session_with_input("Ubah alamat");
        session.submit(&client).await;

        session.set_input("Resep saya?");
        let reply = session.submit(&client).await.expect("turn accepted").clone();
        assert_eq!(reply.agent_id, None);
        assert_eq!(reply.text, "Resep siap diambil");
        assert_eq!(session.active_agent(), AgentId::PatientInfo);
        assert_eq!(session.messages().len(), 4);
    }

    #[test]
    fn malformed_reply_fallback_is_distinct_from_connectivity_apology() {
        let mut session = session_with_input("Halo");
        session.begin_turn();
        let reply = session
            .complete_turn(Ok(crate::core::model_client::fallback_reply()))
            .expect("completion recorded")
            .clone();
        assert_eq!(reply.text, MALFORMED_REPLY_TEXT);
        assert_ne!(reply.text, CONNECTIVITY_APOLOGY_TEXT);
        assert_eq!(reply.agent_id, Some(AgentId::Navigator));
    }

    #[tokio::test]
    async fn history_passed_to_client_is_full_conversation() {
        let client = ScriptedClient::new()
            .reply("NAVIGATOR", "Bisa diperjelas?")
            .reply("APPOINTMENT", "Baik, hari Kamis");
        let mut session = session_with_input("Saya butuh bantuan");
        session.submit(&client).await;
        session.set_input("Janji dengan Dokter Budi");
        session.submit(&client).await;

        let calls = client.calls();
        assert_eq!(calls.len(), 2);

        let (utterance, history) = &calls[1];
        assert_eq!(utterance, "Janji dengan Dokter Budi");
        let expected: Vec<Content> = session.messages()[..3]
            .iter()
            .map(|m| Content::text(m.role.to_api_role(), m.text.clone()))
            .collect();
        assert_eq!(history, &expected);
        assert_eq!(calls[0].1, vec![Content::text("user", "Saya butuh bantuan")]);
    }

    #[test]
    fn stray_completion_while_idle_is_ignored() {
        let mut session = ChatSession::new();
        assert!(session.complete_turn(Err(ModelError::EmptyResponse)).is_none());
        assert!(session.messages().is_empty());
    }
}
