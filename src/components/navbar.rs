//! Navbar, status line and help bar drawn around every page

use crate::component::ViewContext;
use crate::model::{PageId, Session};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Entries shown in the navbar; the dashboard only appears once signed in
pub fn nav_items(session: &Session) -> Vec<PageId> {
    let mut items = vec![
        PageId::Home,
        PageId::AiInsights,
        PageId::About,
        PageId::Startups,
        PageId::Investors,
        PageId::Education,
        PageId::Contact,
    ];
    if session.is_authenticated() {
        items.push(PageId::Dashboard);
    }
    items
}

/// Page reached by moving one entry along the navbar
///
/// From a page that is not in the navbar, moving forward starts at the first
/// entry and moving back starts at the last.
pub fn step(session: &Session, current: PageId, forward: bool) -> PageId {
    let items = nav_items(session);
    let len = items.len();
    match items.iter().position(|p| *p == current) {
        Some(i) if forward => items[(i + 1) % len],
        Some(i) => items[(i + len - 1) % len],
        None if forward => items[0],
        None => items[len - 1],
    }
}

pub fn draw_navbar(frame: &mut Frame, area: Rect, ctx: &ViewContext) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(10),
            Constraint::Length(24),
        ])
        .split(area);

    let brand = Paragraph::new(Line::from(Span::styled(
        " Investyc",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(brand, chunks[0]);

    let items = nav_items(&ctx.session);
    let titles: Vec<&str> = items.iter().map(|p| p.title()).collect();
    let mut tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    // Pages outside the navbar highlight nothing
    tabs = tabs.select(items.iter().position(|p| *p == ctx.page).unwrap_or(usize::MAX));
    frame.render_widget(tabs, chunks[1]);

    let session = match ctx.session.role() {
        Some(role) => Line::from(vec![
            Span::styled(
                format!(" {} ", role.label()),
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" L", Style::default().fg(Color::Yellow)),
            Span::raw(" logout"),
        ]),
        None => Line::from(vec![
            Span::styled("L", Style::default().fg(Color::Yellow)),
            Span::raw(" login  "),
            Span::styled("S", Style::default().fg(Color::Yellow)),
            Span::raw(" sign up"),
        ]),
    };
    let session = Paragraph::new(session)
        .alignment(ratatui::layout::Alignment::Right)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(session, chunks[2]);
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(Color::Yellow),
    )));
    frame.render_widget(paragraph, area);
}

/// Bottom bar: key hints, or the form hints while a page captures input
pub fn draw_help_bar(frame: &mut Frame, area: Rect, capturing: bool) {
    let key = |k: &'static str| {
        Span::styled(
            format!(" {} ", k),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };

    let spans = if capturing {
        vec![
            key("Esc"),
            Span::raw("Leave input  "),
            key("Enter"),
            Span::raw("Submit  "),
            key("Tab"),
            Span::raw("Next field"),
        ]
    } else {
        vec![
            key("Tab"),
            Span::raw("Next  "),
            key("1-9"),
            Span::raw("Links  "),
            key("g"),
            Span::raw("Pages  "),
            key(":"),
            Span::raw("Open id  "),
            key("?"),
            Span::raw("Help  "),
            key("q"),
            Span::raw("Quit"),
            Span::styled(
                "   © Investyc · Terms · Privacy · KYC Policy",
                Style::default().fg(Color::DarkGray),
            ),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    #[test]
    fn test_dashboard_only_when_signed_in() {
        assert!(!nav_items(&Session::default()).contains(&PageId::Dashboard));
        assert_eq!(nav_items(&Session::default()).len(), 7);
        let items = nav_items(&Session::signed_in(Role::Student));
        assert_eq!(items.last(), Some(&PageId::Dashboard));
    }

    #[test]
    fn test_step_wraps_around() {
        let guest = Session::default();
        assert_eq!(step(&guest, PageId::Home, true), PageId::AiInsights);
        assert_eq!(step(&guest, PageId::Home, false), PageId::Contact);
        assert_eq!(step(&guest, PageId::Contact, true), PageId::Home);

        let investor = Session::signed_in(Role::Investor);
        assert_eq!(step(&investor, PageId::Contact, true), PageId::Dashboard);
    }

    #[test]
    fn test_step_from_page_outside_navbar() {
        let guest = Session::default();
        assert_eq!(step(&guest, PageId::Terms, true), PageId::Home);
        assert_eq!(step(&guest, PageId::Terms, false), PageId::Contact);
    }
}
