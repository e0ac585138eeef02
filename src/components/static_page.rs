//! Read-only page: copy plus numbered links

use crate::action::Action;
use crate::component::{Component, ViewContext};
use crate::components::content::{draw_page, handle_page_key, PageContent};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub struct StaticPage {
    content: PageContent,
    scroll: usize,
}

impl StaticPage {
    pub fn new(content: PageContent) -> Self {
        Self { content, scroll: 0 }
    }
}

impl Component for StaticPage {
    fn handle_key_event(&mut self, key: KeyEvent, _ctx: &ViewContext) -> Result<Option<Action>> {
        Ok(handle_page_key(&key, &self.content, &mut self.scroll))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _ctx: &ViewContext) -> Result<()> {
        let body = self.content.body_lines();
        draw_page(frame, area, &self.content, body, &mut self.scroll)
    }
}
