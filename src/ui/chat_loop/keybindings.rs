//! Key handling for the chat screen.
//!
//! Scrolling and sidebar keys always work. Text editing keys are ignored while
//! a turn is in flight so the input stays as it was when the turn began.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use tui_textarea::{CursorMove, Input as TAInput};

use crate::core::app::App;
use crate::ui::renderer::{frame_areas, max_scroll};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLoopAction {
    Continue,
    Submit,
    Quit,
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL))
}

fn scroll_up(app: &mut App, rows: u16, area: Rect) {
    app.ui.scroll_up(rows);
    app.ui.scroll_from_bottom = app.ui.scroll_from_bottom.min(max_scroll(app, area));
}

fn page_rows(app: &App, area: Rect) -> u16 {
    frame_areas(app, area)
        .transcript
        .height
        .saturating_sub(2)
        .max(1)
}

/// Handles Up/Down/PageUp/PageDown/Home/End transcript navigation.
fn handle_navigation_keys(app: &mut App, key: &KeyEvent, area: Rect) -> bool {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Up if shift => {
            app.ui.textarea.move_cursor(CursorMove::Up);
            true
        }
        KeyCode::Down if shift => {
            app.ui.textarea.move_cursor(CursorMove::Down);
            true
        }
        KeyCode::Up => {
            scroll_up(app, 1, area);
            true
        }
        KeyCode::Down => {
            app.ui.scroll_down(1);
            true
        }
        KeyCode::PageUp => {
            let rows = page_rows(app, area);
            scroll_up(app, rows, area);
            true
        }
        KeyCode::PageDown => {
            let rows = page_rows(app, area);
            app.ui.scroll_down(rows);
            true
        }
        KeyCode::Home if key.modifiers.contains(KeyModifiers::CONTROL) => {
            scroll_up(app, u16::MAX, area);
            true
        }
        KeyCode::End if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.scroll_to_bottom();
            true
        }
        _ => false,
    }
}

/// Maps one key press to an action. `area` is the full terminal area.
pub fn handle_key(app: &mut App, key: KeyEvent, area: Rect) -> KeyLoopAction {
    if is_quit(&key) {
        return KeyLoopAction::Quit;
    }

    match key.code {
        KeyCode::Esc if app.ui.input_is_empty() => return KeyLoopAction::Quit,
        KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.toggle_sidebar(area.width);
            return KeyLoopAction::Continue;
        }
        _ => {}
    }

    if handle_navigation_keys(app, &key, area) {
        return KeyLoopAction::Continue;
    }

    if app.session.is_sending() {
        return KeyLoopAction::Continue;
    }

    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            app.ui.textarea.insert_newline();
            KeyLoopAction::Continue
        }
        KeyCode::Enter => KeyLoopAction::Submit,
        KeyCode::Esc => KeyLoopAction::Continue,
        _ => {
            app.ui.textarea.input(TAInput::from(key));
            KeyLoopAction::Continue
        }
    }
}

/// Inserts pasted text unless a turn is in flight. Line breaks are kept.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.session.is_sending() {
        return;
    }
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    app.ui.textarea.insert_str(normalized);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AgentReply;
    use crate::core::agents::AgentId;
    use crate::ui::theme::Theme;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 20,
    };

    fn app() -> App {
        App::new("gemini-2.5-flash", Theme::dark_default(), None)
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> KeyLoopAction {
        handle_key(app, KeyEvent::new(code, modifiers), AREA)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_and_enter_submits() {
        let mut app = app();
        type_text(&mut app, "Halo");
        assert_eq!(app.ui.input_text(), "Halo");
        assert_eq!(
            press(&mut app, KeyCode::Enter, KeyModifiers::NONE),
            KeyLoopAction::Submit
        );
    }

    #[test]
    fn alt_enter_inserts_newline() {
        let mut app = app();
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter, KeyModifiers::ALT);
        type_text(&mut app, "b");
        assert_eq!(app.ui.input_text(), "a\nb");
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert_eq!(
            press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyLoopAction::Quit
        );
        assert_eq!(
            press(&mut app, KeyCode::Esc, KeyModifiers::NONE),
            KeyLoopAction::Quit
        );

        type_text(&mut app, "x");
        assert_eq!(
            press(&mut app, KeyCode::Esc, KeyModifiers::NONE),
            KeyLoopAction::Continue
        );
    }

    #[test]
    fn ctrl_b_toggles_sidebar() {
        let mut app = app();
        assert!(app.ui.sidebar_visible(AREA.width));
        press(&mut app, KeyCode::Char('b'), KeyModifiers::CONTROL);
        assert!(!app.ui.sidebar_visible(AREA.width));
        assert!(app.ui.input_is_empty());
    }

    #[test]
    fn editing_is_ignored_while_sending() {
        let mut app = app();
        type_text(&mut app, "Halo");
        app.submit_input().expect("turn accepted");

        type_text(&mut app, "lagi");
        assert!(app.ui.input_is_empty());
        assert_eq!(
            press(&mut app, KeyCode::Enter, KeyModifiers::NONE),
            KeyLoopAction::Continue
        );
        handle_paste(&mut app, "tempel");
        assert!(app.ui.input_is_empty());

        app.finish_turn(Ok(AgentReply::new(AgentId::Navigator, "Ada yang bisa dibantu?")));
        handle_paste(&mut app, "baris\r\nkedua");
        assert_eq!(app.ui.input_text(), "baris\nkedua");
    }

    #[test]
    fn scrolling_is_clamped_to_transcript() {
        let mut app = app();
        press(&mut app, KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(app.ui.scroll_from_bottom, 0);

        for idx in 0..6 {
            type_text(&mut app, &format!("Pertanyaan {idx}"));
            app.submit_input().expect("turn accepted");
            app.finish_turn(Ok(AgentReply::new(AgentId::Billing, "Jawaban")));
        }
        press(&mut app, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.ui.scroll_from_bottom, 1);
        press(&mut app, KeyCode::Home, KeyModifiers::CONTROL);
        let max = max_scroll(&mut app, AREA);
        assert_eq!(app.ui.scroll_from_bottom, max);
        press(&mut app, KeyCode::End, KeyModifiers::CONTROL);
        assert_eq!(app.ui.scroll_from_bottom, 0);
    }
}
