//! Presentation-only state: the input editor, transcript scroll, and sidebar.
//!
//! Nothing here affects what is sent to the model; [`crate::core::session`]
//! owns the conversation and the turn state.

use std::time::Instant;

use ratatui::text::Line;
use tui_textarea::TextArea;

use crate::core::constants::INPUT_PLACEHOLDER;
use crate::ui::theme::Theme;

/// Terminals at least this wide show the sidebar unless the user hid it.
pub const SIDEBAR_MIN_TERMINAL_WIDTH: u16 = 80;
pub const SIDEBAR_WIDTH: u16 = 34;
const MAX_INPUT_LINES: u16 = 6;

pub struct ViewState {
    pub textarea: TextArea<'static>,
    /// Rows scrolled up from the bottom of the transcript; 0 follows new messages.
    pub scroll_from_bottom: u16,
    /// Explicit user choice; `None` follows the terminal width.
    sidebar_override: Option<bool>,
    pub pulse_start: Instant,
    pub(crate) prewrap_cache: Option<PrewrapCache>,
}

/// Wrapped transcript rows for one width. Messages are append-only, so the
/// width plus the message count identifies the content.
pub(crate) struct PrewrapCache {
    pub(crate) width: u16,
    pub(crate) message_count: usize,
    pub(crate) lines: Vec<Line<'static>>,
}

impl PrewrapCache {
    pub(crate) fn matches(&self, width: u16, message_count: usize) -> bool {
        self.width == width && self.message_count == message_count
    }
}

impl ViewState {
    pub fn new(theme: &Theme, sidebar: Option<bool>) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_style(theme.input_text_style);
        textarea.set_cursor_style(theme.input_cursor_style);
        textarea.set_cursor_line_style(theme.input_cursor_line_style);
        textarea.set_placeholder_text(INPUT_PLACEHOLDER);
        textarea.set_placeholder_style(theme.input_placeholder_style);
        Self {
            textarea,
            scroll_from_bottom: 0,
            sidebar_override: sidebar,
            pulse_start: Instant::now(),
            prewrap_cache: None,
        }
    }

    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn input_is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.is_empty())
    }

    pub fn clear_input(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    /// Rows of the input editor, not counting borders.
    pub fn input_height(&self) -> u16 {
        (self.textarea.lines().len() as u16).clamp(1, MAX_INPUT_LINES)
    }

    pub fn sidebar_visible(&self, terminal_width: u16) -> bool {
        self.sidebar_override
            .unwrap_or(terminal_width >= SIDEBAR_MIN_TERMINAL_WIDTH)
    }

    pub fn toggle_sidebar(&mut self, terminal_width: u16) {
        self.sidebar_override = Some(!self.sidebar_visible(terminal_width));
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(rows);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }

    pub fn restart_pulse(&mut self) {
        self.pulse_start = Instant::now();
    }
}
