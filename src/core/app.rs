use ratatui::text::Line;

use crate::api::AgentReply;
use crate::core::model_client::ModelError;
use crate::core::session::{ChatSession, PendingTurn};
use crate::ui::renderer::build_display_lines;
use crate::ui::theme::Theme;
use crate::ui::view_state::{PrewrapCache, ViewState};

/// Everything the interactive loop renders: the session plus its view.
pub struct App {
    pub session: ChatSession,
    pub ui: ViewState,
    pub theme: Theme,
    /// Shown in the transcript title.
    pub model: String,
}

impl App {
    pub fn new(model: impl Into<String>, theme: Theme, sidebar: Option<bool>) -> Self {
        let ui = ViewState::new(&theme, sidebar);
        Self {
            session: ChatSession::new(),
            ui,
            theme,
            model: model.into(),
        }
    }

    /// Moves the editor contents into the session and starts a turn.
    ///
    /// The editor keeps its text when the session refuses the submission.
    pub fn submit_input(&mut self) -> Option<PendingTurn> {
        if self.session.is_sending() {
            return None;
        }
        self.session.set_input(self.ui.input_text());
        let pending = self.session.begin_turn()?;
        self.ui.clear_input();
        self.ui.scroll_to_bottom();
        self.ui.restart_pulse();
        Some(pending)
    }

    pub fn finish_turn(&mut self, result: Result<AgentReply, ModelError>) {
        self.session.complete_turn(result);
    }

    /// Transcript rows wrapped to `width`, rebuilt only when the width or the
    /// message count changed since the last call.
    pub fn get_prewrapped_lines_cached(&mut self, width: u16) -> &[Line<'static>] {
        let messages = self.session.messages();
        let stale = !self
            .ui
            .prewrap_cache
            .as_ref()
            .is_some_and(|cache| cache.matches(width, messages.len()));
        if stale {
            self.ui.prewrap_cache = Some(PrewrapCache {
                width,
                message_count: messages.len(),
                lines: build_display_lines(messages, &self.theme, width),
            });
        }
        match &self.ui.prewrap_cache {
            Some(cache) => &cache.lines,
            None => &[],
        }
    }
}
