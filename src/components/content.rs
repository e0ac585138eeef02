//! Page content model and the shared page frame
//!
//! Pages describe their copy as a `PageContent` (title, items, numbered
//! links) and draw it through `draw_page`, which keeps every page's header,
//! scrolling body and link bar consistent.

use crate::action::Action;
use crate::model::PageId;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::rc::Rc;

/// One piece of page copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Heading(&'static str),
    Text(&'static str),
    Bullet(&'static str),
    Card {
        title: &'static str,
        body: &'static str,
        meta: Option<&'static str>,
    },
    Stat {
        label: &'static str,
        value: &'static str,
        note: Option<&'static str>,
    },
    Quote {
        text: &'static str,
        author: &'static str,
    },
}

/// A numbered call-to-action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: Vec<Item>,
    pub links: Vec<Link>,
}

impl PageContent {
    pub fn new(title: &'static str, subtitle: &'static str) -> Self {
        Self {
            title,
            subtitle,
            items: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn heading(mut self, text: &'static str) -> Self {
        self.items.push(Item::Heading(text));
        self
    }

    pub fn text(mut self, text: &'static str) -> Self {
        self.items.push(Item::Text(text));
        self
    }

    pub fn bullet(mut self, text: &'static str) -> Self {
        self.items.push(Item::Bullet(text));
        self
    }

    pub fn card(mut self, title: &'static str, body: &'static str) -> Self {
        self.items.push(Item::Card {
            title,
            body,
            meta: None,
        });
        self
    }

    pub fn card_with(mut self, title: &'static str, body: &'static str, meta: &'static str) -> Self {
        self.items.push(Item::Card {
            title,
            body,
            meta: Some(meta),
        });
        self
    }

    pub fn stat(mut self, label: &'static str, value: &'static str, note: Option<&'static str>) -> Self {
        self.items.push(Item::Stat { label, value, note });
        self
    }

    pub fn quote(mut self, text: &'static str, author: &'static str) -> Self {
        self.items.push(Item::Quote { text, author });
        self
    }

    /// Link to a known page
    pub fn link(mut self, label: &'static str, page: PageId) -> Self {
        self.links.push(Link {
            label,
            action: Action::Navigate(page),
        });
        self
    }

    /// Link by raw page identifier, resolved like any other `ChangePage`
    pub fn link_id(mut self, label: &'static str, id: &'static str) -> Self {
        self.links.push(Link {
            label,
            action: Action::ChangePage(id.to_string()),
        });
        self
    }

    /// Link bound to a digit key (`'1'` is the first link)
    pub fn link_for_key(&self, c: char) -> Option<&Link> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| self.links.get(i))
    }

    pub fn stat_labels(&self) -> Vec<&'static str> {
        self.items
            .iter()
            .filter_map(|b| match b {
                Item::Stat { label, .. } => Some(*label),
                _ => None,
            })
            .collect()
    }

    /// Render the items as styled lines
    pub fn body_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for item in &self.items {
            match item {
                Item::Heading(text) => {
                    if !lines.is_empty() {
                        lines.push(Line::from(""));
                    }
                    lines.push(Line::from(Span::styled(
                        *text,
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::from(Span::styled(
                        "─".repeat(text.chars().count()),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                Item::Text(text) => lines.push(Line::from(*text)),
                Item::Bullet(text) => lines.push(Line::from(vec![
                    Span::styled("  • ", Style::default().fg(Color::Cyan)),
                    Span::raw(*text),
                ])),
                Item::Card { title, body, meta } => {
                    let mut head = vec![
                        Span::styled("▸ ", Style::default().fg(Color::Green)),
                        Span::styled(*title, Style::default().add_modifier(Modifier::BOLD)),
                    ];
                    if let Some(meta) = meta {
                        head.push(Span::styled(
                            format!("  [{}]", meta),
                            Style::default().fg(Color::Magenta),
                        ));
                    }
                    lines.push(Line::from(head));
                    lines.push(Line::from(Span::styled(
                        format!("    {}", body),
                        Style::default().fg(Color::Gray),
                    )));
                }
                Item::Stat { label, value, note } => {
                    let mut spans = vec![
                        Span::styled(format!("  {:<22}", label), Style::default().fg(Color::Gray)),
                        Span::styled(
                            format!("{:>8}", value),
                            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                        ),
                    ];
                    if let Some(note) = note {
                        spans.push(Span::styled(
                            format!("   {}", note),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    lines.push(Line::from(spans));
                }
                Item::Quote { text, author } => {
                    lines.push(Line::from(Span::styled(
                        format!("  “{}”", text),
                        Style::default().add_modifier(Modifier::ITALIC),
                    )));
                    lines.push(Line::from(Span::styled(
                        format!("      — {}", author),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        }
        lines
    }
}

/// Scroll keys shared by all pages; returns true when the key was used
pub fn handle_scroll_key(key: &KeyEvent, scroll: &mut usize) -> bool {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => *scroll = scroll.saturating_add(1),
        KeyCode::Char('k') | KeyCode::Up => *scroll = scroll.saturating_sub(1),
        KeyCode::PageDown => *scroll = scroll.saturating_add(10),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
        KeyCode::Home => *scroll = 0,
        _ => return false,
    }
    true
}

/// Digit links and scrolling for a page built from `content`
pub fn handle_page_key(key: &KeyEvent, content: &PageContent, scroll: &mut usize) -> Option<Action> {
    if let KeyCode::Char(c) = key.code {
        if let Some(link) = content.link_for_key(c) {
            return Some(link.action.clone());
        }
    }
    handle_scroll_key(key, scroll);
    None
}

/// Rows `lines` occupy once wrapped to `width` columns
pub fn wrapped_rows(lines: &[Line<'static>], width: u16) -> usize {
    Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width)
}

/// Largest scroll offset that still leaves the last row on screen
pub fn max_scroll(lines: &[Line<'static>], width: u16, height: u16) -> usize {
    wrapped_rows(lines, width).saturating_sub(height.max(1) as usize)
}

fn body_block() -> Block<'static> {
    Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn page_chunks(area: Rect, content: &PageContent) -> Rc<[Rect]> {
    let link_height = if content.links.is_empty() { 0 } else { 3 };
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(link_height),
        ])
        .split(area)
}

/// Inner area of the scrolling body `draw_page` uses for `area`
pub fn body_area(area: Rect, content: &PageContent) -> Rect {
    body_block().inner(page_chunks(area, content)[1])
}

/// Draw the standard page frame: header, scrolling body, link bar
pub fn draw_page(
    frame: &mut Frame,
    area: Rect,
    content: &PageContent,
    body: Vec<Line<'static>>,
    scroll: &mut usize,
) -> Result<()> {
    let chunks = page_chunks(area, content);
    frame.render_widget(header(content), chunks[0]);

    // Scroll counts wrapped rows, not logical lines
    let inner = body_block().inner(chunks[1]);
    let max = max_scroll(&body, inner.width, inner.height);
    if *scroll > max {
        *scroll = max;
    }

    let paragraph = Paragraph::new(body)
        .block(body_block())
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, chunks[1]);

    if !content.links.is_empty() {
        frame.render_widget(link_bar(&content.links), chunks[2]);
    }

    Ok(())
}

/// Two-line title and subtitle
pub fn header(content: &PageContent) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", content.title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", content.subtitle),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

pub fn link_bar(links: &[Link]) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, link) in links.iter().enumerate().take(9) {
        spans.push(Span::styled(
            format!(" {} ", i + 1),
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}  ", link.label)));
    }
    Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Links "),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample() -> PageContent {
        PageContent::new("Sample", "A page")
            .heading("Section")
            .text("Body")
            .stat("Total Invested", "$485K", None)
            .link("Register", PageId::Register)
            .link_id("Forgot password?", "forgot-password")
    }

    #[test]
    fn test_digit_keys_map_to_links() {
        let content = sample();
        let mut scroll = 0;
        assert_eq!(
            handle_page_key(&key(KeyCode::Char('1')), &content, &mut scroll),
            Some(Action::Navigate(PageId::Register))
        );
        assert_eq!(
            handle_page_key(&key(KeyCode::Char('2')), &content, &mut scroll),
            Some(Action::ChangePage("forgot-password".to_string()))
        );
        assert_eq!(handle_page_key(&key(KeyCode::Char('3')), &content, &mut scroll), None);
        assert_eq!(handle_page_key(&key(KeyCode::Char('0')), &content, &mut scroll), None);
    }

    #[test]
    fn test_scroll_keys_saturate() {
        let content = sample();
        let mut scroll = 0;
        handle_page_key(&key(KeyCode::Up), &content, &mut scroll);
        assert_eq!(scroll, 0);
        handle_page_key(&key(KeyCode::PageDown), &content, &mut scroll);
        assert_eq!(scroll, 10);
        handle_page_key(&key(KeyCode::Char('k')), &content, &mut scroll);
        assert_eq!(scroll, 9);
        handle_page_key(&key(KeyCode::Home), &content, &mut scroll);
        assert_eq!(scroll, 0);
    }

    #[test]
    fn test_stat_labels() {
        assert_eq!(sample().stat_labels(), vec!["Total Invested"]);
    }

    #[test]
    fn test_heading_adds_separator_lines() {
        let lines = PageContent::new("t", "s").text("a").heading("Next").body_lines();
        // text, blank, heading, underline
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_max_scroll_counts_wrapped_rows() {
        let lines = PageContent::new("t", "s")
            .text("one two three four five six seven eight nine ten")
            .body_lines();
        assert_eq!(lines.len(), 1);
        // 10 words at width 10 take several rows
        assert!(wrapped_rows(&lines, 10) > 3);
        assert_eq!(max_scroll(&lines, 10, 2), wrapped_rows(&lines, 10) - 2);
        assert_eq!(max_scroll(&lines, 200, 5), 0);
    }
}
