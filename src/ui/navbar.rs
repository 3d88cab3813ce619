//! Fixed navigation bar — brand, section links, active highlight.
//!
//! Link positions are deterministic functions of the section labels, so the
//! mouse hit test and the renderer can't drift apart.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::page::sample::NAV_SECTIONS;
use crate::ui::theme::Theme;

/// Rows the nav bar occupies.
pub const NAV_ROWS: u16 = 2;

const BRAND: &str = " ◆ northlight ";
/// Columns of padding after each link label.
const LINK_GAP: u16 = 2;

/// Column span of each nav link: `(start, end_exclusive, section id)`.
fn link_spans() -> Vec<(u16, u16, &'static str)> {
    let mut spans = Vec::with_capacity(NAV_SECTIONS.len());
    let mut col = BRAND.chars().count() as u16 + LINK_GAP;
    for &(id, label) in NAV_SECTIONS {
        let width = label.chars().count() as u16;
        spans.push((col, col + width, id));
        col += width + LINK_GAP;
    }
    spans
}

/// Which section link, if any, sits under the given column.
pub fn hit_link(col: u16) -> Option<&'static str> {
    link_spans()
        .into_iter()
        .find(|&(start, end, _)| col >= start && col < end)
        .map(|(_, _, id)| id)
}

/// The nav bar widget.
pub struct NavBar {
    pub scrolled: bool,
    pub active: Option<&'static str>,
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Background treatment switches once scrolled.
        let base = Theme::nav_style(self.scrolled);
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), base);

        let mut spans = vec![Span::styled(BRAND, Theme::nav_brand_style())];
        for &(id, label) in NAV_SECTIONS {
            spans.push(Span::styled("  ", base));
            spans.push(Span::styled(
                label,
                Theme::nav_link_style(self.active == Some(id)),
            ));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);

        // Divider row.
        if area.height > 1 {
            let divider = "─".repeat(area.width as usize);
            buf.set_string(area.x, area.y + 1, divider, Style::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_matches_rendered_spans() {
        let spans = link_spans();
        // First link starts right after the brand.
        let (start, _, first) = spans[0];
        assert_eq!(hit_link(start), Some(first));
        assert_eq!(hit_link(start.saturating_sub(1)), None);
        // Last column of the last link still hits.
        let &(_, end, last) = spans.last().unwrap();
        assert_eq!(hit_link(end - 1), Some(last));
        assert_eq!(hit_link(end), None);
    }

    #[test]
    fn spans_cover_every_section() {
        assert_eq!(link_spans().len(), NAV_SECTIONS.len());
    }
}
