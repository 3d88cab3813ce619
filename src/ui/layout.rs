//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::navbar::NAV_ROWS;

/// Rows consumed by fixed chrome (nav bar + status bar); the rest is page.
pub const CHROME_ROWS: u16 = NAV_ROWS + 1;

/// Primary screen layout: fixed nav on top, page viewport, status bar.
pub struct AppLayout {
    pub nav_area: Rect,
    pub page_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NAV_ROWS), // fixed nav
                Constraint::Min(3),           // page viewport
                Constraint::Length(1),        // status bar
            ])
            .split(area);

        Self {
            nav_area: chunks[0],
            page_area: chunks[1],
            status_area: chunks[2],
        }
    }
}
