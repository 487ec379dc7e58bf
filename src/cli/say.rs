//! TUI-less "say" command

use std::error::Error;

use crate::cli::resolve_client_settings;
use crate::core::agents::author_profile;
use crate::core::config::Config;
use crate::core::credentials::{resolve_api_key, SystemKeySource};
use crate::core::message::Message;
use crate::core::model_client::{GeminiClient, ModelClient};
use crate::core::session::ChatSession;

/// Renders an assistant reply as `[Agent name] text`.
pub fn format_reply(message: &Message) -> String {
    let agent = author_profile(message.agent_id);
    format!("[{}] {}", agent.name, message.text)
}

/// Runs one turn and returns the printable reply, or `None` for a blank prompt.
pub async fn say_once(client: &dyn ModelClient, prompt: &str) -> Option<String> {
    let mut session = ChatSession::new();
    session.set_input(prompt);
    session.submit(client).await.map(format_reply)
}

pub async fn run_say(
    prompt: Vec<String>,
    model: Option<String>,
    base_url: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: carenav say <prompt>");
        std::process::exit(1);
    }

    let config = Config::load()?;
    let api_key = match resolve_api_key(&SystemKeySource) {
        Ok(key) => key,
        Err(err) => {
            eprintln!("{err}");
            let fixes = err.quick_fixes();
            if !fixes.is_empty() {
                eprintln!();
                eprintln!("💡 Quick fixes:");
                for fix in fixes {
                    eprintln!("  • {fix}");
                }
            }
            std::process::exit(err.exit_code());
        }
    };

    let settings =
        resolve_client_settings(api_key, &config, model.as_deref(), base_url.as_deref());
    let client = GeminiClient::new(settings);

    if let Some(reply) = say_once(&client, &prompt).await {
        println!("{reply}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::agents::AgentId;
    use crate::core::constants::CONNECTIVITY_APOLOGY_TEXT;
    use crate::utils::test_utils::ScriptedClient;

    #[tokio::test]
    async fn reply_is_prefixed_with_agent_name() {
        let client = ScriptedClient::new().reply("APPOINTMENT", "Jadwal Dr. Budi: Kamis 10.00");
        let reply = say_once(&client, "Kapan Dr. Budi praktik?")
            .await
            .expect("turn accepted");
        assert_eq!(
            reply,
            format!(
                "[{}] Jadwal Dr. Budi: Kamis 10.00",
                AgentId::Appointment.profile().name
            )
        );
    }

    #[tokio::test]
    async fn failure_prints_navigator_apology() {
        let client = ScriptedClient::new().fail();
        let reply = say_once(&client, "Halo").await.expect("turn accepted");
        assert!(reply.starts_with(&format!("[{}]", AgentId::Navigator.profile().name)));
        assert!(reply.ends_with(CONNECTIVITY_APOLOGY_TEXT));
    }

    #[tokio::test]
    async fn unknown_agent_is_shown_as_navigator() {
        let client = ScriptedClient::new().reply("PHARMACY", "Obat siap");
        let reply = say_once(&client, "Resep?").await.expect("turn accepted");
        assert_eq!(
            reply,
            format!("[{}] Obat siap", AgentId::Navigator.profile().name)
        );
    }

    #[tokio::test]
    async fn blank_prompt_sends_nothing() {
        let client = ScriptedClient::new();
        assert!(say_once(&client, "   ").await.is_none());
        assert!(client.calls().is_empty());
    }
}
