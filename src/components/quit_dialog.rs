//! Quit confirmation dialog

use crate::action::Action;
use crate::component::{Component, ViewContext};
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct QuitDialog;

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent, _ctx: &ViewContext) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) -> Result<()> {
        let popup_area = centered_popup(area, 44, 8);
        frame.render_widget(Clear, popup_area);

        let farewell = if ctx.session.is_authenticated() {
            "Leave Investyc? Your session ends with it."
        } else {
            "Leave Investyc?"
        };

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                farewell,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("Quit  "),
                Span::styled(" n/Esc ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw("Stay"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Quit? ")
                    .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageId, Session};
    use crossterm::event::KeyModifiers;

    fn press(dialog: &mut QuitDialog, code: KeyCode) -> Option<Action> {
        let ctx = ViewContext {
            page: PageId::Home,
            session: Session::default(),
        };
        dialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), &ctx)
            .unwrap()
    }

    #[test]
    fn test_confirm_and_cancel() {
        let mut dialog = QuitDialog;
        assert_eq!(press(&mut dialog, KeyCode::Char('y')), Some(Action::ForceQuit));
        assert_eq!(press(&mut dialog, KeyCode::Esc), Some(Action::CloseModal));
        assert_eq!(press(&mut dialog, KeyCode::Char('x')), None);
    }
}
