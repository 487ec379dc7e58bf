//! Full-screen notice shown instead of the chat when no API key is available.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::core::credentials::CredentialError;
use crate::ui::theme::Theme;

const QUIT_HINT: &str = "Press Esc or Ctrl+C to quit.";

pub fn notice_lines(err: &CredentialError, theme: &Theme) -> Vec<Line<'static>> {
    let message = err.to_string();
    let mut lines = Vec::new();

    for (idx, text) in message.lines().enumerate() {
        let style = if idx == 0 {
            theme.notice_title_style
        } else if text.contains(err.key_url()) {
            theme.notice_link_style
        } else {
            theme.notice_text_style
        };
        lines.push(Line::from(Span::styled(text.to_string(), style)));
    }

    if !err.quick_fixes().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "💡 Quick fixes:",
            theme.notice_text_style,
        )));
        for fix in err.quick_fixes() {
            lines.push(Line::from(Span::styled(
                format!("  • {fix}"),
                theme.notice_text_style,
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(QUIT_HINT, theme.timestamp_style)));
    lines
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

pub fn render_config_notice(f: &mut Frame, err: &CredentialError, theme: &Theme) {
    let lines = notice_lines(err, theme);
    let area = f.area();
    let width = area.width.saturating_sub(4).min(76);
    let height = (lines.len() as u16 + 4).min(area.height);
    let popup = centered(area, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.notice_border_style)
        .title(Span::styled(" Configuration Error ", theme.notice_title_style));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false }),
        popup,
    );
}
