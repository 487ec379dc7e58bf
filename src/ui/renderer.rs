use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::agents::author_profile;
use crate::core::app::App;
use crate::core::constants::{DISCLAIMER_TEXT, SENDING_TEXT, WELCOME_TEXT, WELCOME_TITLE};
use crate::core::message::Message;
use crate::ui::layout::wrap_text;
use crate::ui::sidebar::render_sidebar;
use crate::ui::theme::{agent_glyph, Theme};
use crate::ui::view_state::SIDEBAR_WIDTH;

const USER_LABEL: &str = "Anda";
const BODY_INDENT: &str = "  ";

/// Screen regions for one frame.
pub struct FrameAreas {
    pub sidebar: Option<Rect>,
    pub transcript: Rect,
    pub input: Rect,
    pub disclaimer: Rect,
}

pub fn frame_areas(app: &App, area: Rect) -> FrameAreas {
    let (sidebar, main) = if app.ui.sidebar_visible(area.width) {
        let width = SIDEBAR_WIDTH.min(area.width / 2);
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(area);
        (Some(sidebar), main)
    } else {
        (None, area)
    };

    let [transcript, input, disclaimer] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(app.ui.input_height() + 2), // +2 for borders
        Constraint::Length(1),
    ])
    .areas(main);

    FrameAreas {
        sidebar,
        transcript,
        input,
        disclaimer,
    }
}

/// Pulse glyph for the sending indicator, two cycles per second.
pub fn pulse_symbol(elapsed: Duration) -> &'static str {
    let elapsed = elapsed.as_millis() as f32 / 1000.0;
    let pulse_phase = (elapsed * 2.0) % 2.0;
    let pulse_intensity = if pulse_phase < 1.0 {
        pulse_phase
    } else {
        2.0 - pulse_phase
    };

    if pulse_intensity < 0.33 {
        "○"
    } else if pulse_intensity < 0.66 {
        "◐"
    } else {
        "●"
    }
}

fn message_header(message: &Message, theme: &Theme) -> Line<'static> {
    let time = Span::styled(
        format!(" · {}", message.timestamp.format("%H:%M")),
        theme.timestamp_style,
    );

    if message.is_user() {
        return Line::from(vec![
            Span::styled(format!("{USER_LABEL}:"), theme.user_prefix_style),
            time,
        ]);
    }

    let agent = author_profile(message.agent_id);
    let style = theme.agent_style(agent.color);
    Line::from(vec![
        Span::styled(format!("{} ", agent_glyph(agent.icon)), style),
        Span::styled(agent.name, style),
        time,
    ])
}

/// Flattens the transcript into pre-wrapped rows for a transcript of `width` columns.
pub fn build_display_lines(messages: &[Message], theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let body_width = (width as usize).saturating_sub(BODY_INDENT.len());
    let mut lines = Vec::new();

    for message in messages {
        lines.push(message_header(message, theme));
        let body_style = if message.is_user() {
            theme.user_text_style
        } else {
            theme.assistant_text_style
        };
        for row in wrap_text(&message.text, body_width) {
            lines.push(Line::from(Span::styled(
                format!("{BODY_INDENT}{row}"),
                body_style,
            )));
        }
        lines.push(Line::from(""));
    }

    lines
}

fn sending_line(symbol: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{symbol} "), theme.sending_indicator_style),
        Span::styled(SENDING_TEXT, theme.welcome_text_style),
    ])
}

fn welcome_lines(theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(WELCOME_TITLE, theme.welcome_title_style)),
        Line::from(""),
    ];
    for row in wrap_text(WELCOME_TEXT, width.saturating_sub(4) as usize) {
        lines.push(Line::from(Span::styled(row, theme.welcome_text_style)));
    }
    lines
}

/// Top row of the transcript to show so the view sits `scroll_from_bottom`
/// rows above the end.
pub fn scroll_offset(total_lines: usize, visible: usize, scroll_from_bottom: u16) -> usize {
    let max_offset = total_lines.saturating_sub(visible);
    max_offset - usize::from(scroll_from_bottom).min(max_offset)
}

/// Largest useful `scroll_from_bottom` for the current terminal size.
pub fn max_scroll(app: &mut App, area: Rect) -> u16 {
    let transcript = frame_areas(app, area).transcript;
    let visible = usize::from(transcript.height.saturating_sub(1)); // Account for title
    let sending_rows = usize::from(app.session.is_sending());
    let total = app.get_prewrapped_lines_cached(transcript.width).len() + sending_rows;
    u16::try_from(total.saturating_sub(visible)).unwrap_or(u16::MAX)
}

/// Rows of the transcript that fit in `area`, cut from the cached wrap.
fn visible_transcript(app: &mut App, area: Rect, sending: Option<&str>) -> Vec<Line<'static>> {
    let indicator = sending.map(|symbol| sending_line(symbol, &app.theme));
    let scroll_from_bottom = app.ui.scroll_from_bottom;
    let lines = app.get_prewrapped_lines_cached(area.width);
    let total = lines.len() + usize::from(indicator.is_some());
    let visible = usize::from(area.height);
    let offset = scroll_offset(total, visible, scroll_from_bottom);

    lines
        .iter()
        .cloned()
        .chain(indicator)
        .skip(offset)
        .take(visible)
        .collect()
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let areas = frame_areas(app, f.area());

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_color)),
        f.area(),
    );

    let title = Span::styled(
        format!("Carenav v{} - {}", env!("CARGO_PKG_VERSION"), app.model),
        app.theme.title_style,
    );
    let transcript_block = Block::default().title(title);
    let inner = transcript_block.inner(areas.transcript);
    let sending = app
        .session
        .is_sending()
        .then(|| pulse_symbol(app.ui.pulse_start.elapsed()));
    let transcript_rows = if app.session.messages().is_empty() && sending.is_none() {
        None
    } else {
        Some(visible_transcript(app, inner, sending))
    };

    let theme = &app.theme;
    if let Some(sidebar) = areas.sidebar {
        render_sidebar(f, sidebar, app.session.active_agent(), theme);
    }

    if let Some(lines) = transcript_rows {
        f.render_widget(Paragraph::new(lines).block(transcript_block), areas.transcript);
    } else {
        let welcome = welcome_lines(theme, inner.width);
        let top_padding = inner.height.saturating_sub(welcome.len() as u16) / 2;
        let [_, body] =
            Layout::vertical([Constraint::Length(top_padding), Constraint::Min(0)]).areas(inner);
        f.render_widget(transcript_block, areas.transcript);
        f.render_widget(Paragraph::new(welcome).alignment(Alignment::Center), body);
    }

    let input_title = if app.session.is_sending() {
        "Menunggu balasan agen... (Ctrl+C keluar)"
    } else {
        "Ketik pesan (Enter kirim, Alt+Enter baris baru, Ctrl+B sidebar, Ctrl+C keluar)"
    };
    let mut input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.input_border_style)
        .title(Span::styled(input_title, theme.input_title_style));
    if let Some(symbol) = sending {
        input_block = input_block.title(
            Line::from(Span::styled(
                format!(" {symbol} "),
                theme.sending_indicator_style,
            ))
            .right_aligned(),
        );
    }
    let input_inner = input_block.inner(areas.input);
    f.render_widget(input_block, areas.input);
    f.render_widget(&app.ui.textarea, input_inner);

    f.render_widget(
        Paragraph::new(Span::styled(DISCLAIMER_TEXT, theme.disclaimer_style))
            .alignment(Alignment::Center),
        areas.disclaimer,
    );
}
