//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas around the current page
pub struct MainLayout {
    pub navbar: Rect,
    pub content: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Navbar on top, help bar at the bottom, optional status line above it
pub fn calculate_main_layout(area: Rect, has_status: bool) -> MainLayout {
    let status_height = if has_status { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(status_height),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        navbar: chunks[0],
        content: chunks[1],
        status: has_status.then_some(chunks[2]),
        help: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_status() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.navbar.height, 3);
        assert_eq!(layout.help.height, 1);
        assert!(layout.status.is_none());
        assert_eq!(layout.content.height, 20);
    }

    #[test]
    fn test_layout_with_status() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.status.map(|r| r.height), Some(1));
        assert_eq!(layout.content.height, 19);
    }

    #[test]
    fn test_popup_clamped_to_area() {
        let popup = centered_popup(Rect::new(0, 0, 30, 10), 60, 20);
        assert_eq!(popup, Rect::new(0, 0, 30, 10));

        let popup = centered_popup(Rect::new(0, 0, 80, 24), 40, 10);
        assert_eq!(popup, Rect::new(20, 7, 40, 10));
    }
}
