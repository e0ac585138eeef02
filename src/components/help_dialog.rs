//! Help dialog listing every keyboard shortcut

use crate::action::Action;
use crate::component::{Component, ViewContext};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollable shortcut reference opened with `?`
#[derive(Default)]
pub struct HelpDialog {
    /// First visible line; reset whenever the dialog closes
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent, _ctx: &ViewContext) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.scroll_offset = 0;
                Some(Action::CloseModal)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _ctx: &ViewContext) -> Result<()> {
        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin.min(area.width / 2),
            area.y + margin.min(area.height / 2),
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Shortcut sections, one styled line per binding
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Navigation");
    add_shortcut(&mut lines, "Tab", "Next navbar page");
    add_shortcut(&mut lines, "Shift+Tab", "Previous navbar page");
    add_shortcut(&mut lines, "1-9", "Follow a numbered link");
    add_shortcut(&mut lines, "g", "Pick any page from a list");
    add_shortcut(&mut lines, ":", "Open a page by its id");

    add_section(&mut lines, "Scrolling");
    add_shortcut(&mut lines, "j / ↓", "Scroll down");
    add_shortcut(&mut lines, "k / ↑", "Scroll up");
    add_shortcut(&mut lines, "PgDn / PgUp", "Scroll by ten lines");
    add_shortcut(&mut lines, "Home", "Back to the top");

    add_section(&mut lines, "Session");
    add_shortcut(&mut lines, "L", "Login, or logout when signed in");
    add_shortcut(&mut lines, "S", "Sign up");

    add_section(&mut lines, "Forms and Chat");
    add_shortcut(&mut lines, "Enter / i", "Start typing");
    add_shortcut(&mut lines, "Tab / ↑↓", "Move between fields");
    add_shortcut(&mut lines, "← / →", "Switch tab or option");
    add_shortcut(&mut lines, "Enter", "Submit");
    add_shortcut(&mut lines, "Esc", "Stop typing");
    add_shortcut(&mut lines, "a-d", "Prefill a quick question (AI Insights)");

    add_section(&mut lines, "App");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit (asks first)");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageId, Session};
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_scroll_and_close_resets() {
        let ctx = ViewContext {
            page: PageId::Home,
            session: Session::default(),
        };
        let mut dialog = HelpDialog::default();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        dialog.handle_key_event(key(KeyCode::PageDown), &ctx).unwrap();
        assert_eq!(dialog.scroll_offset, 10);
        let action = dialog.handle_key_event(key(KeyCode::Esc), &ctx).unwrap();
        assert_eq!(action, Some(Action::CloseModal));
        assert_eq!(dialog.scroll_offset, 0);
    }
}
