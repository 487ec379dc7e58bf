use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::agents::{all_profiles, AgentId};
use crate::core::constants::{SIDEBAR_FOOTER, SIDEBAR_HEADING, SIDEBAR_SUBTITLE, SIDEBAR_TITLE};
use crate::ui::layout::wrap_text;
use crate::ui::theme::{agent_glyph, Theme};

const ACTIVE_MARKER: &str = "▌";
const ACTIVE_DOT: &str = " ●";
const DESCRIPTION_INDENT: &str = "   ";

/// Header plus one entry per agent; the active agent gets a marker and its color.
pub fn sidebar_lines(active: AgentId, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(SIDEBAR_TITLE, theme.sidebar_title_style)),
        Line::from(Span::styled(SIDEBAR_SUBTITLE, theme.sidebar_subtitle_style)),
        Line::from(""),
        Line::from(Span::styled(
            SIDEBAR_HEADING.to_uppercase(),
            theme.sidebar_heading_style,
        )),
        Line::from(""),
    ];

    let description_width = (width as usize).saturating_sub(DESCRIPTION_INDENT.len());
    for profile in all_profiles() {
        let is_active = profile.id == active;
        let accent = theme.agent_style(profile.color);
        let name_style = if is_active {
            accent
        } else {
            theme.assistant_text_style
        };

        let mut header = vec![
            Span::styled(if is_active { ACTIVE_MARKER } else { " " }, accent),
            Span::styled(format!("{} ", agent_glyph(profile.icon)), accent),
            Span::styled(profile.name, name_style),
        ];
        if is_active {
            header.push(Span::styled(
                ACTIVE_DOT,
                accent.add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        lines.push(Line::from(header));

        for row in wrap_text(profile.description, description_width) {
            lines.push(Line::from(Span::styled(
                format!("{DESCRIPTION_INDENT}{row}"),
                theme.sidebar_description_style,
            )));
        }
        lines.push(Line::from(""));
    }

    lines
}

pub fn render_sidebar(f: &mut Frame, area: Rect, active: AgentId, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.sidebar_border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [body, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    f.render_widget(
        Paragraph::new(sidebar_lines(active, theme, body.width)),
        body,
    );
    f.render_widget(
        Paragraph::new(Span::styled(SIDEBAR_FOOTER, theme.sidebar_footer_style)),
        footer,
    );
}
