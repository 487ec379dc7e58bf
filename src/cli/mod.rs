//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod agent_list;
pub mod auth;
pub mod say;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cli::agent_list::list_agents;
use crate::cli::auth::{interactive_auth, interactive_deauth};
use crate::cli::say::run_say;
use crate::core::config::{Config, ConfigKey};
use crate::core::model_client::ClientSettings;
use crate::ui::chat_loop::{run_chat, ChatOptions};
use crate::utils::logging::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(name = "carenav")]
#[command(about = "A terminal front desk that routes patients to hospital service agents")]
#[command(
    long_about = "Carenav is a full-screen terminal chat that acts as a hospital front desk. \
Every message is routed by Google Gemini to one of five specialist agents (navigator, \
appointments, patient information, billing, medical records), and the chosen agent answers \
in the same turn.\n\n\
Authentication:\n\
  Use 'carenav auth' to store a Gemini API key in your system keyring.\n\n\
Environment Variables (checked before the keyring):\n\
  API_KEY           Your Gemini API key\n\
  GEMINI_API_KEY    Alternative variable name\n\
  RUST_LOG          Log filter for --log-file (default: carenav=info)\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  Alt+Enter         Insert a new line\n\
  Up/Down/PgUp/PgDn Scroll through the conversation\n\
  Ctrl+B            Show or hide the agent sidebar\n\
  Esc               Quit when the input is empty\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Gemini model to use (overrides the configured model)
    #[arg(short = 'm', long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// API base URL (overrides the configured base URL)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write diagnostic logs to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Send a single message and print the routed reply
    Say {
        /// The message to send (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true)]
        prompt: Vec<String>,
    },
    /// List the hospital service agents
    Agents,
    /// Store a Gemini API key in the system keyring
    Auth,
    /// Remove the stored Gemini API key
    Deauth,
    /// Set configuration values
    Set {
        /// Configuration key to set (model, base-url, temperature, sidebar)
        key: Option<String>,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Option<Vec<String>>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

/// Layers command-line overrides on top of the stored configuration.
pub fn resolve_client_settings(
    api_key: String,
    config: &Config,
    model: Option<&str>,
    base_url: Option<&str>,
) -> ClientSettings {
    let non_empty = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let mut settings = ClientSettings::new(api_key);
    settings.model = non_empty(model).unwrap_or_else(|| config.model_or_default());
    settings.base_url = non_empty(base_url).unwrap_or_else(|| config.base_url_or_default());
    settings.temperature = config.temperature_or_default();
    settings
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let mut args = Args::parse();
    let command = args.command.take().unwrap_or(Commands::Chat);

    let target = match command {
        Commands::Chat => LogTarget::FileOnly,
        _ => LogTarget::StderrFallback,
    };
    let status = init_tracing(args.log_file.as_deref(), target)?;
    debug!(%status, "tracing initialised");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_main(args, command))
}

async fn async_main(args: Args, command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Chat => {
            run_chat(ChatOptions {
                model: args.model,
                base_url: args.base_url,
            })
            .await
        }
        Commands::Say { prompt } => run_say(prompt, args.model, args.base_url).await,
        Commands::Agents => {
            list_agents();
            Ok(())
        }
        Commands::Auth => {
            if let Err(e) = interactive_auth() {
                eprintln!("❌ Authentication failed: {e}");
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Deauth => {
            if let Err(e) = interactive_deauth() {
                eprintln!("❌ Deauthentication failed: {e}");
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            let (Some(key), Some(value)) = (key, value.filter(|v| !v.is_empty())) else {
                config.print_all();
                return Ok(());
            };

            let value = value.join(" ");
            let applied = ConfigKey::parse(&key).and_then(|key| {
                config.set_value(key, &value)?;
                Ok(key)
            });
            match applied {
                Ok(key) => {
                    config.save()?;
                    println!("✅ Set {} to: {}", key.as_str(), value);
                }
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            match ConfigKey::parse(&key) {
                Ok(key) => {
                    config.unset_value(key);
                    config.save()?;
                    println!("✅ Unset {}", key.as_str());
                }
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
