//! Main chat event loop
//!
//! The loop owns the [`App`] and is the only place that mutates it. Each
//! accepted turn runs the model call on its own task and reports back over an
//! unbounded channel, so drawing and key handling never wait on the network.

mod keybindings;
mod lifecycle;

use std::{error::Error, sync::Arc, time::Duration};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info};

use self::keybindings::{handle_key, handle_paste, KeyLoopAction};
use self::lifecycle::{restore_terminal, setup_terminal, ChatTerminal};
use crate::api::AgentReply;
use crate::cli::resolve_client_settings;
use crate::core::app::App;
use crate::core::config::Config;
use crate::core::credentials::{resolve_api_key, CredentialError, SystemKeySource};
use crate::core::model_client::{GeminiClient, ModelClient, ModelError};
use crate::core::session::PendingTurn;
use crate::ui::notice::render_config_notice;
use crate::ui::renderer::ui;
use crate::ui::theme::Theme;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

type TurnOutcome = Result<AgentReply, ModelError>;

#[derive(Debug, Default, Clone)]
pub struct ChatOptions {
    pub model: Option<String>,
    pub base_url: Option<String>,
}

fn terminal_area(terminal: &ChatTerminal) -> Result<Rect, Box<dyn Error>> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}

/// Runs the model call for one turn and sends the outcome to the loop.
fn spawn_turn(
    client: Arc<dyn ModelClient>,
    pending: PendingTurn,
    tx: mpsc::UnboundedSender<TurnOutcome>,
) {
    tokio::spawn(async move {
        let result = client
            .send_message(&pending.utterance, &pending.history)
            .await;
        if tx.send(result).is_err() {
            debug!("chat loop closed before the turn finished");
        }
    });
}

async fn chat_event_loop(
    terminal: &mut ChatTerminal,
    app: &mut App,
    client: Arc<dyn ModelClient>,
) -> Result<(), Box<dyn Error>> {
    let (tx, mut rx) = mpsc::unbounded_channel::<TurnOutcome>();

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let area = terminal_area(terminal)?;
                    match handle_key(app, key, area) {
                        KeyLoopAction::Quit => break,
                        KeyLoopAction::Submit => {
                            if let Some(pending) = app.submit_input() {
                                spawn_turn(Arc::clone(&client), pending, tx.clone());
                            }
                        }
                        KeyLoopAction::Continue => {}
                    }
                }
                Event::Paste(text) => handle_paste(app, &text),
                _ => {}
            }
        }

        while let Ok(result) = rx.try_recv() {
            app.finish_turn(result);
        }
    }

    Ok(())
}

fn notice_loop(
    terminal: &mut ChatTerminal,
    err: &CredentialError,
    theme: &Theme,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| render_config_notice(f, err, theme))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let ctrl_c =
                key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                return Ok(());
            }
        }
    }
}

pub async fn run_chat(options: ChatOptions) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let theme = Theme::dark_default();
    let api_key = resolve_api_key(&SystemKeySource);

    let mut terminal = setup_terminal()?;
    let (result, exit_code) = match api_key {
        Ok(key) => {
            let settings = resolve_client_settings(
                key,
                &config,
                options.model.as_deref(),
                options.base_url.as_deref(),
            );
            info!(model = %settings.model, base_url = %settings.base_url, "starting chat");
            let mut app = App::new(settings.model.clone(), theme, config.sidebar);
            let client: Arc<dyn ModelClient> = Arc::new(GeminiClient::new(settings));
            (chat_event_loop(&mut terminal, &mut app, client).await, None)
        }
        Err(err) => {
            info!("no API key available; showing configuration notice");
            (
                notice_loop(&mut terminal, &err, &theme),
                Some(err.exit_code()),
            )
        }
    };
    restore_terminal(&mut terminal)?;

    result?;
    if let Some(code) = exit_code {
        std::process::exit(code);
    }
    Ok(())
}
