//! Page renderer — maps document elements to terminal rows.
//!
//! One terminal row is 20 page px. Rendering is driven entirely by element
//! classes and text: the widget never decides what is revealed, it only
//! shows what the dispatcher has already committed to the document.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::core::document::{Document, Element};
use crate::core::trigger::{CLASS_ANIMATE, CLASS_VISIBLE};
use crate::page::form::BookingForm;
use crate::page::ROW_PX;
use crate::ui::theme::Theme;

/// Track width cap for chart bars.
const CHART_TRACK_COLS: usize = 40;

pub struct PageWidget<'a> {
    pub doc: &'a Document,
    pub form: &'a BookingForm,
    pub form_focused: bool,
}

impl<'a> PageWidget<'a> {
    /// Terminal row (relative to the page area) for a page-space offset.
    fn row_for(&self, top_px: f64, area: Rect) -> Option<u16> {
        let row = ((top_px - self.doc.scroll_top) / ROW_PX).floor() as i32;
        if row < 0 || row >= area.height as i32 {
            return None;
        }
        Some(area.y + row as u16)
    }

    fn draw(&self, buf: &mut Buffer, area: Rect, y: u16, x_off: u16, text: &str, style: Style) {
        if x_off >= area.width {
            return;
        }
        let max = (area.width - x_off) as usize;
        buf.set_stringn(area.x + x_off, y, text, max, style);
    }

    fn draw_centered(&self, buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
        let width = text.chars().count() as u16;
        let x_off = area.width.saturating_sub(width) / 2;
        self.draw(buf, area, y, x_off, text, style);
    }

    fn render_hero_background(&self, el: &Element, area: Rect, buf: &mut Buffer) {
        // The translate offset is what makes the parallax visible: the
        // pattern lags behind (scroll) or drifts with (pointer) the page.
        let (tx, ty) = el.translate;
        let x_shift = (tx / 4.0).round() as i32;
        let top = el.top + ty;
        let rows = (el.height / ROW_PX) as i32;

        for r in 0..rows {
            let Some(y) = self.row_for(top + r as f64 * ROW_PX, area) else {
                continue;
            };
            // Sparse dot field, offset per row so drift reads as motion.
            let phase = (r * 3 + x_shift).rem_euclid(7);
            let mut x = phase as u16;
            while x < area.width {
                self.draw(buf, area, y, x, "·", Theme::hero_background_style());
                x += 7;
            }
        }
    }

    fn render_chart_line(&self, el: &Element, area: Rect, buf: &mut Buffer) {
        let Some(y) = self.row_for(el.top, area) else {
            return;
        };
        let label = el.label.unwrap_or("");
        self.draw(buf, area, y, 4, label, Theme::copy_style());

        let track = CHART_TRACK_COLS.min(area.width.saturating_sub(14) as usize);
        let pct = el.count_target.unwrap_or(0).min(100) as usize;
        let filled = if el.has_class(CLASS_ANIMATE) {
            track * pct / 100
        } else {
            0
        };
        let bar: String = "█".repeat(filled) + &"─".repeat(track - filled);
        self.draw(buf, area, y, 12, &bar, Theme::chart_bar_style());
        if el.has_class(CLASS_ANIMATE) {
            let pct_text = format!(" {pct}%");
            self.draw(buf, area, y, 12 + track as u16, &pct_text, Theme::revealed_style());
        }
    }

    fn render_timeline_line(&self, el: &Element, area: Rect, buf: &mut Buffer) {
        let animated = el.has_class(CLASS_ANIMATE);
        let (glyph, style) = if animated {
            ("│", Theme::timeline_line_style())
        } else {
            ("┆", Theme::unrevealed_style())
        };
        let rows = (el.height / ROW_PX) as i32;
        for r in 0..rows {
            if let Some(y) = self.row_for(el.top + r as f64 * ROW_PX, area) {
                self.draw(buf, area, y, 3, glyph, style);
            }
        }
    }

    fn render_form(&self, el: &Element, area: Rect, buf: &mut Buffer) {
        let mut line = 0u16;
        for (i, field) in self.form.fields.iter().enumerate() {
            let top = el.top + line as f64 * 2.0 * ROW_PX;
            if let Some(y) = self.row_for(top, area) {
                let focused = self.form_focused && i == self.form.focused;
                let style = if focused {
                    Theme::form_focused_style()
                } else {
                    Theme::revealed_style()
                };
                let cursor = if focused { "▏" } else { "" };
                let text = format!("{:<8} {}{}", field.label, field.value, cursor);
                self.draw(buf, area, y, 6, &text, style);
            }
            line += 1;
        }
        // Submit button under the fields.
        let button_top = el.top + line as f64 * 2.0 * ROW_PX;
        if let Some(y) = self.row_for(button_top, area) {
            let label = format!("  {}  ", self.form.button_label());
            self.draw(buf, area, y, 6, &label, Theme::form_button_style(self.form.is_busy()));
        }
    }

    fn render_floating_cta(&self, area: Rect, buf: &mut Buffer) {
        let Some(cta) = self.doc.query("#floating-cta") else {
            return;
        };
        let el = self.doc.get(cta);
        if !el.has_class(CLASS_VISIBLE) || area.height < 2 {
            return;
        }
        let label = format!(" {} ", el.text);
        let width = label.chars().count() as u16;
        let x_off = area.width.saturating_sub(width + 2);
        let y = area.y + area.height - 2;
        self.draw(buf, area, y, x_off, &label, Theme::cta_style());
    }
}

impl<'a> Widget for PageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for (_, el) in self.doc.iter() {
            if el.id == Some("floating-cta") {
                continue; // overlay, drawn last
            }
            if el.has_class("hero-background") {
                self.render_hero_background(el, area, buf);
            } else if el.has_class("hero-title") {
                if let Some(y) = self.row_for(el.top, area) {
                    self.draw_centered(buf, area, y, &el.text, Theme::hero_title_style());
                }
            } else if el.has_class("copy") {
                if let Some(y) = self.row_for(el.top, area) {
                    self.draw_centered(buf, area, y, &el.text, Theme::copy_style());
                }
            } else if el.has_class("heading") {
                if let Some(y) = self.row_for(el.top, area) {
                    let text = format!("▍ {}", el.text);
                    self.draw(buf, area, y, 2, &text, Theme::heading_style());
                }
            } else if el.has_class("solution-card") {
                if let Some(y) = self.row_for(el.top, area) {
                    self.draw(buf, area, y, 4, &el.text, Theme::copy_style());
                }
            } else if el.has_class("stat-item") {
                if let Some(y) = self.row_for(el.top, area) {
                    if el.has_class(CLASS_VISIBLE) {
                        let number = format!("{:>5}", el.text);
                        self.draw(buf, area, y, 4, &number, Theme::stat_number_style());
                        let label = format!("  {}", el.label.unwrap_or(""));
                        self.draw(buf, area, y, 9, &label, Theme::revealed_style());
                    } else {
                        let text = format!("    …  {}", el.label.unwrap_or(""));
                        self.draw(buf, area, y, 4, &text, Theme::unrevealed_style());
                    }
                }
            } else if el.has_class("chart-line") {
                self.render_chart_line(el, area, buf);
            } else if el.has_class("timeline-line") {
                self.render_timeline_line(el, area, buf);
            } else if el.has_class("timeline-step") {
                if let Some(y) = self.row_for(el.top, area) {
                    let revealed = el.has_class(CLASS_VISIBLE);
                    let (glyph, style) = if revealed {
                        ("●", Theme::revealed_style())
                    } else {
                        ("○", Theme::unrevealed_style())
                    };
                    let text = format!("{glyph} {}", el.text);
                    self.draw(buf, area, y, 6, &text, style);
                }
            } else if el.has_class("credential-item") {
                if let Some(y) = self.row_for(el.top, area) {
                    let style = if el.has_class(CLASS_VISIBLE) {
                        Theme::revealed_style()
                    } else {
                        Theme::unrevealed_style()
                    };
                    self.draw(buf, area, y, 4, &el.text, style);
                }
            } else if el.has_class("booking-form") {
                self.render_form(el, area, buf);
            }
            // Section / container elements have no visual of their own.
        }

        self.render_floating_cta(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::sample;

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn hero_renders_at_top_of_page() {
        let doc = sample::build(800.0);
        let form = BookingForm::new();
        let widget = PageWidget { doc: &doc, form: &form, form_focused: false };

        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("N O R T H L I G H T"));
    }

    #[test]
    fn scrolled_view_shows_later_sections() {
        let mut doc = sample::build(800.0);
        doc.scroll_top = 3700.0;
        let form = BookingForm::new();
        let widget = PageWidget { doc: &doc, form: &form, form_focused: false };

        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Book a free session"));
        assert!(text.contains("Book a Session"));
        assert!(!text.contains("N O R T H L I G H T"));
    }

    #[test]
    fn cta_overlay_appears_only_when_visible() {
        let mut doc = sample::build(800.0);
        let form = BookingForm::new();
        let area = Rect::new(0, 0, 100, 40);

        let mut buf = Buffer::empty(area);
        PageWidget { doc: &doc, form: &form, form_focused: false }.render(area, &mut buf);
        assert!(!buffer_text(&buf).contains("↗"));

        let cta = doc.query("#floating-cta").unwrap();
        doc.add_class(cta, CLASS_VISIBLE);
        let mut buf = Buffer::empty(area);
        PageWidget { doc: &doc, form: &form, form_focused: false }.render(area, &mut buf);
        assert!(buffer_text(&buf).contains("↗"));
    }
}
