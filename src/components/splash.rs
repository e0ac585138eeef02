//! Splash screen component
//!
//! Shows the Investyc logotype, then hands over to the pages after a
//! configurable delay or on the first key press.

use crate::action::Action;
use crate::component::{Component, ViewContext};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const LOGO_HEIGHT: usize = 5;

const LETTERS: [[&str; LOGO_HEIGHT]; 8] = [
    // I
    ["███", " █ ", " █ ", " █ ", "███"],
    // N
    ["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
    // V
    ["█   █", "█   █", "█   █", " █ █ ", "  █  "],
    // E
    ["████", "█   ", "███ ", "█   ", "████"],
    // S
    [" ████", "█    ", " ███ ", "    █", "████ "],
    // T
    ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
    // Y
    ["█   █", " █ █ ", "  █  ", "  █  ", "  █  "],
    // C
    [" ████", "█    ", "█    ", "█    ", " ████"],
];

const TAGLINE: &str = "Where startups meet smart capital";

pub struct SplashComponent {
    start_time: Option<Instant>,
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl SplashComponent {
    pub fn new(duration: Duration) -> Self {
        Self {
            start_time: None,
            duration,
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    /// Logotype rows, letters separated by two columns
    fn logo() -> Vec<String> {
        (0..LOGO_HEIGHT)
            .map(|row| {
                LETTERS
                    .iter()
                    .map(|letter| letter[row])
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect()
    }
}

/// Rect of `width` columns centered horizontally on row `y`
fn centered_row(area: Rect, y: u16, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, y, width, 1)
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent, _ctx: &ViewContext) -> Result<Option<Action>> {
        // Any key skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _ctx: &ViewContext) -> Result<()> {
        let bg = Color::Rgb(0, 0, 0);
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

        let logo = Self::logo();
        let logo_height = logo.len() as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(logo_height + 3) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        for (i, row) in logo.iter().enumerate() {
            let y = chunks[1].y + i as u16;
            if y >= area.y + area.height {
                break;
            }
            let line = Line::from(Span::styled(
                row.clone(),
                Style::default().fg(Color::Cyan).bg(bg).add_modifier(Modifier::BOLD),
            ));
            let rect = centered_row(area, y, row.width() as u16);
            frame.render_widget(Paragraph::new(line), rect);
        }

        if chunks[3].height > 0 {
            let tagline = Line::from(Span::styled(TAGLINE, Style::default().fg(Color::DarkGray).bg(bg)));
            let rect = centered_row(area, chunks[3].y, TAGLINE.width() as u16);
            frame.render_widget(Paragraph::new(tagline), rect);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageId, Session};
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn ctx() -> ViewContext {
        ViewContext {
            page: PageId::Home,
            session: Session::default(),
        }
    }

    #[test]
    fn test_logo_rows_have_equal_width() {
        let logo = SplashComponent::logo();
        assert_eq!(logo.len(), LOGO_HEIGHT);
        let width = logo[0].width();
        assert!(logo.iter().all(|row| row.width() == width));
    }

    #[test]
    fn test_not_complete_before_init() {
        let splash = SplashComponent::new(Duration::ZERO);
        assert!(!splash.is_complete());
    }

    #[test]
    fn test_tick_completes_after_duration() {
        let mut splash = SplashComponent::new(Duration::ZERO);
        splash.init().unwrap();
        assert_eq!(splash.update(Action::Tick).unwrap(), Some(Action::SplashComplete));

        let mut slow = SplashComponent::new(Duration::from_secs(60));
        slow.init().unwrap();
        assert_eq!(slow.update(Action::Tick).unwrap(), None);
    }

    #[test]
    fn test_keys_skip_or_quit() {
        let mut splash = SplashComponent::default();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            splash.handle_key_event(enter, &ctx()).unwrap(),
            Some(Action::SplashComplete)
        );
        assert_eq!(splash.handle_key_event(q, &ctx()).unwrap(), Some(Action::ForceQuit));
    }

    #[test]
    fn test_draws_on_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        let mut splash = SplashComponent::default();
        terminal
            .draw(|f| splash.draw(f, f.area(), &ctx()).unwrap())
            .unwrap();
    }
}
