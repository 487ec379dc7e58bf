use ratatui::style::{Color, Modifier, Style};

use crate::core::agents::{AgentColor, AgentIcon};

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,
    // Chat message styles
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_text_style: Style,
    pub timestamp_style: Style,

    // Chrome
    pub title_style: Style,
    pub welcome_title_style: Style,
    pub welcome_text_style: Style,
    pub sending_indicator_style: Style,
    pub disclaimer_style: Style,
    pub input_border_style: Style,
    pub input_title_style: Style,

    // Input area
    pub input_text_style: Style,
    pub input_placeholder_style: Style,
    pub input_cursor_style: Style,
    pub input_cursor_line_style: Style,

    // Sidebar
    pub sidebar_border_style: Style,
    pub sidebar_title_style: Style,
    pub sidebar_subtitle_style: Style,
    pub sidebar_heading_style: Style,
    pub sidebar_description_style: Style,
    pub sidebar_footer_style: Style,

    // Configuration notice
    pub notice_border_style: Style,
    pub notice_title_style: Style,
    pub notice_text_style: Style,
    pub notice_link_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_default()
    }
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Reset,
            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            assistant_text_style: Style::default().fg(Color::White),
            timestamp_style: Style::default().fg(Color::DarkGray),

            title_style: Style::default().fg(Color::Gray),
            welcome_title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            welcome_text_style: Style::default().fg(Color::Gray),
            sending_indicator_style: Style::default().fg(agent_color(AgentColor::Indigo)),
            disclaimer_style: Style::default().fg(Color::DarkGray),
            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),

            input_text_style: Style::default().fg(Color::White),
            input_placeholder_style: Style::default().fg(Color::DarkGray),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            input_cursor_line_style: Style::default(),

            sidebar_border_style: Style::default().fg(Color::DarkGray),
            sidebar_title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            sidebar_subtitle_style: Style::default().fg(Color::Gray),
            sidebar_heading_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            sidebar_description_style: Style::default().fg(Color::DarkGray),
            sidebar_footer_style: Style::default().fg(Color::DarkGray),

            notice_border_style: Style::default().fg(Color::Red),
            notice_title_style: Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            notice_text_style: Style::default().fg(Color::White),
            notice_link_style: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
        }
    }

    /// Name and accent style for an agent.
    pub fn agent_style(&self, color: AgentColor) -> Style {
        Style::default()
            .fg(agent_color(color))
            .add_modifier(Modifier::BOLD)
    }
}

/// Terminal color for an agent's accent.
pub fn agent_color(color: AgentColor) -> Color {
    match color {
        AgentColor::Indigo => Color::Rgb(129, 140, 248),
        AgentColor::Emerald => Color::Rgb(52, 211, 153),
        AgentColor::Blue => Color::Rgb(96, 165, 250),
        AgentColor::Amber => Color::Rgb(251, 191, 36),
        AgentColor::Rose => Color::Rgb(251, 113, 133),
    }
}

/// Single-column glyph standing in for an agent's icon.
pub fn agent_glyph(icon: AgentIcon) -> &'static str {
    match icon {
        AgentIcon::Compass => "◈",
        AgentIcon::Calendar => "▦",
        AgentIcon::User => "◉",
        AgentIcon::CreditCard => "▭",
        AgentIcon::FileText => "≡",
    }
}
