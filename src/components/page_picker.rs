//! Page picker dialog
//!
//! Lists all pages, including the ones without a navbar entry (legal pages,
//! login, register). Enter confirms; the root reads `selected_page`.

use crate::action::Action;
use crate::component::{Component, ViewContext};
use crate::components::centered_popup;
use crate::model::PageId;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub struct PagePicker {
    pub selected_index: usize,
    list_state: ListState,
}

impl Default for PagePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl PagePicker {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    /// Preselect the page currently shown
    pub fn open_at(&mut self, page: PageId) {
        self.selected_index = PageId::ALL.iter().position(|p| *p == page).unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }

    pub fn selected_page(&self) -> PageId {
        PageId::ALL.get(self.selected_index).copied().unwrap_or_default()
    }

    fn select_next(&mut self) {
        if self.selected_index < PageId::ALL.len() - 1 {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for PagePicker {
    fn handle_key_event(&mut self, key: KeyEvent, _ctx: &ViewContext) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('g') | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Home => {
                self.selected_index = 0;
                self.list_state.select(Some(0));
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected_index = PageId::ALL.len() - 1;
                self.list_state.select(Some(self.selected_index));
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) -> Result<()> {
        let popup_area = centered_popup(area, 44, PageId::ALL.len() as u16 + 4);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = PageId::ALL
            .iter()
            .map(|page| {
                let current = if *page == ctx.page { " ●" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<18}", page.title()), Style::default().fg(Color::White)),
                    Span::styled(page.as_str(), Style::default().fg(Color::DarkGray)),
                    Span::styled(current, Style::default().fg(Color::Green)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta))
                    .title(" Go to page ")
                    .title_bottom(" Enter open  Esc close ")
                    .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, popup_area, &mut self.list_state);
        Ok(())
    }
}
