//! AI Insights page: scripted chat assistant plus static insight cards

use crate::action::Action;
use crate::component::{Component, ViewContext};
use crate::components::content::{handle_scroll_key, header, link_bar, max_scroll, PageContent};
use crate::model::{ChatMessage, ChatRole, PageId};
use crate::services::ChatSimulator;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;
use tracing::debug;

pub const QUICK_QUESTIONS: [&str; 4] = [
    "What are the current funding trends?",
    "Analyze EcoTech Solutions performance",
    "Best sectors for investment this quarter",
    "Risk assessment for my portfolio",
];

/// Keys that send the quick questions, in order
const QUICK_KEYS: [char; 4] = ['a', 'b', 'c', 'd'];

fn side_content() -> PageContent {
    PageContent::new("AI Insights", "Intelligent analysis and recommendations powered by AI")
        .heading("Real-time Insights")
        .card_with(
            "Market Trend Alert",
            "FinTech sector showing 31% growth this quarter",
            "+31% vs last quarter",
        )
        .card("Portfolio Recommendation", "Consider rebalancing towards AI/ML startups")
        .card("Risk Warning", "EcoTech Solutions approaching funding deadline")
        .card_with(
            "Investment Success",
            "HealthAI Inc exceeded growth projections",
            "+45% returns",
        )
        .heading("Market Analytics")
        .stat("Funding Volume", "$2.4B", Some("+15% this quarter"))
        .stat("Success Rate", "68%", Some("Above industry average"))
        .stat("Avg. Valuation", "$12M", Some("Seed to Series A"))
        .heading("Recommended Actions")
        .bullet("Review new opportunities")
        .bullet("Optimize TrustSPV allocation")
        .bullet("Update portfolio strategy")
        .link("Browse startups", PageId::Startups)
        .link("TrustSPV deals", PageId::TrustSpv)
        .link("Dashboard", PageId::Dashboard)
}

pub struct AiInsightsPage {
    chat: ChatSimulator,
    content: PageContent,
    input: String,
    editing: bool,
    side_scroll: usize,
}

impl AiInsightsPage {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            chat: ChatSimulator::new(reply_delay),
            content: side_content(),
            input: String::new(),
            editing: false,
            side_scroll: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.chat.messages()
    }

    pub fn is_thinking(&self) -> bool {
        self.chat.is_thinking()
    }

    fn send(&mut self, text: &str) {
        if let Some(id) = self.chat.send(text) {
            debug!(id, "chat message sent");
        }
    }

    fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        self.send(&text);
    }

    fn transcript(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for message in self.chat.messages() {
            let (who, color) = match message.role {
                ChatRole::User => ("You", Color::Green),
                ChatRole::Assistant => ("Assistant", Color::Cyan),
            };
            lines.push(Line::from(vec![
                Span::styled(who, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {}", message.formatted_time()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(message.content.clone()));
            lines.push(Line::from(""));
        }
        if self.chat.is_thinking() {
            lines.push(Line::from(Span::styled(
                "Assistant is typing…",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }
        lines
    }

    fn draw_chat(&self, frame: &mut Frame, area: Rect) {
        let lines = self.transcript();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" AI Investment Assistant ");

        // Follow the newest message
        let inner = block.inner(area);
        let scroll = max_scroll(&lines, inner.width, inner.height) as u16;

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let line = if self.editing {
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::raw(format!("{}_", self.input)),
            ])
        } else {
            let mut spans = vec![Span::styled(
                "Enter/i to type  ",
                Style::default().fg(Color::DarkGray),
            )];
            for (key, question) in QUICK_KEYS.iter().zip(QUICK_QUESTIONS) {
                spans.push(Span::styled(
                    format!(" {} ", key),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ));
                spans.push(Span::raw(format!(" {}  ", question)));
            }
            Line::from(spans)
        };

        let border = if self.editing { Color::Cyan } else { Color::DarkGray };
        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Ask about startups, trends or your portfolio "),
        );
        frame.render_widget(paragraph, area);
    }
}

impl Component for AiInsightsPage {
    fn handle_key_event(&mut self, key: KeyEvent, _ctx: &ViewContext) -> Result<Option<Action>> {
        if self.editing {
            match key.code {
                KeyCode::Esc => self.editing = false,
                KeyCode::Enter => self.submit_input(),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) => self.input.push(c),
                _ => {}
            }
            return Ok(None);
        }

        let action = match key.code {
            KeyCode::Enter | KeyCode::Char('i') => {
                self.editing = true;
                None
            }
            // Quick questions prefill the input so they can be edited first
            KeyCode::Char(c) if QUICK_KEYS.contains(&c) => {
                if let Some(i) = QUICK_KEYS.iter().position(|k| *k == c) {
                    self.input = QUICK_QUESTIONS[i].to_string();
                    self.editing = true;
                }
                None
            }
            KeyCode::Char(c) if self.content.link_for_key(c).is_some() => {
                self.content.link_for_key(c).map(|l| l.action.clone())
            }
            _ => {
                handle_scroll_key(&key, &mut self.side_scroll);
                None
            }
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            let arrived = self.chat.poll();
            if arrived > 0 {
                debug!(arrived, "chat replies delivered");
            }
        }
        Ok(None)
    }

    fn captures_input(&self) -> bool {
        self.editing
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _ctx: &ViewContext) -> Result<()> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        frame.render_widget(header(&self.content), rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(rows[1]);

        self.draw_chat(frame, columns[0]);

        let side = self.content.body_lines();
        let side_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = side_block.inner(columns[1]);
        self.side_scroll = self
            .side_scroll
            .min(max_scroll(&side, inner.width, inner.height));
        let side = Paragraph::new(side)
            .wrap(Wrap { trim: false })
            .scroll((self.side_scroll as u16, 0))
            .block(side_block);
        frame.render_widget(side, columns[1]);

        self.draw_input(frame, rows[2]);
        frame.render_widget(link_bar(&self.content.links), rows[3]);
        Ok(())
    }
}
