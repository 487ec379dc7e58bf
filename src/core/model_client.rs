//! The single outbound call to the hosted model.
//!
//! Each user turn issues exactly one `generateContent` request carrying the
//! fixed system instruction and the response schema. Transport and HTTP
//! failures are returned to the caller untouched; a reply that arrives but is
//! not the agreed JSON is replaced by a navigator apology instead.

use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::api::{
    agent_reply_schema, AgentReply, ApiErrorEnvelope, Content, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, Part, SystemInstruction,
};
use crate::core::agents::AgentId;
use crate::core::constants::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, MALFORMED_REPLY_TEXT,
    RESPONSE_MIME_TYPE, SYSTEM_INSTRUCTION,
};
use crate::core::message::TranscriptRole;
use crate::utils::url::construct_api_url;

#[derive(Debug)]
pub enum ModelError {
    /// The request never produced an HTTP response (DNS, TLS, connection, body read).
    Transport(reqwest::Error),

    /// The service answered with a non-success status.
    Status { status: u16, message: String },

    /// A success status whose body is not a `generateContent` response.
    Decode(serde_json::Error),

    /// A success status with no candidate text.
    EmptyResponse,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Transport(err) => write!(f, "Request to model failed: {err}"),
            ModelError::Status { status, message } => {
                write!(f, "Model API returned status {status}: {message}")
            }
            ModelError::Decode(err) => write!(f, "Unexpected model API response: {err}"),
            ModelError::EmptyResponse => write!(f, "Empty response from AI"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ModelError::Transport(err) => Some(err),
            ModelError::Decode(err) => Some(err),
            ModelError::Status { .. } | ModelError::EmptyResponse => None,
        }
    }
}

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        ModelError::Transport(err)
    }
}

#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends `message` after `history` and returns the structured reply.
    async fn send_message(
        &self,
        message: &str,
        history: &[Content],
    ) -> Result<AgentReply, ModelError>;
}

#[derive(Clone)]
pub struct ClientSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
}

impl ClientSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    settings: ClientSettings,
}

impl GeminiClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    fn endpoint(&self) -> String {
        construct_api_url(
            &self.settings.base_url,
            &format!("models/{}:generateContent", self.settings.model),
        )
    }

    pub fn build_request(&self, message: &str, history: &[Content]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: build_contents(message, history),
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                response_mime_type: RESPONSE_MIME_TYPE.to_string(),
                response_schema: agent_reply_schema(),
            },
        }
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn send_message(
        &self,
        message: &str,
        history: &[Content],
    ) -> Result<AgentReply, ModelError> {
        let request = self.build_request(message, history);
        debug!(
            model = %self.settings.model,
            contents = request.contents.len(),
            "sending generateContent request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ModelError::Status {
                status: status.as_u16(),
                message: format_api_error(&body),
            });
        }

        if body.trim().is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(ModelError::Decode)?;
        let text = parsed.text().ok_or(ModelError::EmptyResponse)?;
        debug!(bytes = text.len(), "received model reply");

        Ok(parse_agent_reply(&text))
    }
}

/// Request contents: the history followed by `message` as a new user turn.
///
/// History handed over by the session already ends with this turn's user
/// message. The utterance then goes on the wire exactly once: it is never
/// repeated as a second trailing user turn, so the model sees the same
/// contents the transcript shows.
pub fn build_contents(message: &str, history: &[Content]) -> Vec<Content> {
    let user_role = TranscriptRole::User.to_api_role();
    let mut contents = history.to_vec();
    let already_present = history
        .last()
        .is_some_and(|last| last.role == user_role && last.joined_text() == message);
    if !already_present {
        contents.push(Content::text(user_role, message));
    }
    contents
}

/// Parses the model's JSON reply, substituting the navigator apology when it is malformed.
pub fn parse_agent_reply(text: &str) -> AgentReply {
    match serde_json::from_str::<AgentReply>(text) {
        Ok(reply) => reply,
        Err(err) => {
            warn!(error = %err, raw = %text, "failed to parse JSON response");
            fallback_reply()
        }
    }
}

pub fn fallback_reply() -> AgentReply {
    AgentReply::new(AgentId::Navigator, MALFORMED_REPLY_TEXT)
}

fn format_api_error(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty>".to_string();
    }

    match serde_json::from_str::<ApiErrorEnvelope>(trimmed) {
        Ok(envelope) => {
            let message = envelope
                .error
                .message
                .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
                .unwrap_or_else(|| trimmed.to_string());
            match envelope.error.status {
                Some(status) if !status.is_empty() => format!("{status}: {message}"),
                _ => message,
            }
        }
        Err(_) => trimmed.to_string(),
    }
}
